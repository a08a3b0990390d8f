mod display;

use display::{Display, DisplayError};
use log::{debug, error, warn};
use mandelbrot_explorer::{
    config::Config,
    screen,
    session::Session,
    viewport::Command,
};
use winit::{
    dpi::PhysicalPosition,
    event::{ElementState, Event, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

const TITLE: &str = "mandelbrot-explorer";

/// Pixel scroll distance treated as one wheel tick.
const PIXELS_PER_LINE: f64 = 40.0;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DisplayError> {
    let config = Config::from_env();

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new().with_title(TITLE).build(&event_loop)?;

    let size = window.inner_size();
    let raster = screen::Size::new(size.width, size.height);
    let mut display = Display::new(&window, raster)?;
    let mut session = Session::start(&config, raster)?;
    show_frame(&window, &display, &session);

    let mut cursor = PhysicalPosition::new(0.0, 0.0);

    event_loop.run(move |event, _, control_flow| {
        control_flow.set_wait();
        match event {
            Event::WindowEvent { window_id, event } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    control_flow.set_exit();
                }
                WindowEvent::Resized(size) => {
                    display.resize(size);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = position;
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button: MouseButton::Left,
                    ..
                } => {
                    let size = window.inner_size();
                    let command = Command::Pan {
                        x: cursor.x,
                        y: size.height as f64 - cursor.y,
                        screen: screen::Size::new(size.width, size.height),
                    };
                    if session.handle(command) {
                        show_frame(&window, &display, &session);
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let delta = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y as f64,
                        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
                    };
                    if delta != 0.0 && session.handle(Command::Zoom { delta }) {
                        show_frame(&window, &display, &session);
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(window_id) if window_id == window.id() => {
                if let Err(err) = display.present() {
                    warn!("failed to present frame: {}", err);
                }
            }
            _ => {}
        }
    })
}

fn show_frame(window: &Window, display: &Display, session: &Session) {
    if let Some(frame) = session.frame() {
        debug!("presenting {:?}", session.viewport());
        display.upload(frame);
        window.set_title(&format!("{} | {:.4}s", TITLE, frame.elapsed_secs()));
        window.request_redraw();
    }
}
