//! The visible region of the complex plane and the commands that move it.

use log::debug;

use crate::{config::Config, screen};

/// Change to `max_iterations` for each zoom tick.
pub const ITERATION_STEP: i32 = 3;

/// Complex-plane rectangle mapped onto the raster, plus the iteration budget.
///
/// `origin_real`/`origin_imag` is the corner sampled by pixel `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub origin_real: f64,
    pub origin_imag: f64,
    pub width: f64,
    pub height: f64,
    pub max_iterations: i32,
    pub zoom_step: i32,
}

/// Input delivered by the host between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    /// Primary pointer press at `(x, y)` on a surface of `screen` pixels,
    /// with `y` measured from the bottom edge.
    Pan { x: f64, y: f64, screen: screen::Size },
    /// Scroll by `delta` ticks; positive zooms in.
    Zoom { delta: f64 },
}

impl Viewport {
    /// Startup viewport: `config.initial_width` wide, with the height chosen
    /// so the rectangle has the raster's aspect ratio.
    pub fn initial(config: &Config, screen_size: screen::Size) -> Self {
        let width = config.initial_width;
        let height = if screen_size.width == 0 {
            width
        } else {
            width * screen_size.height as f64 / screen_size.width as f64
        };
        Self {
            origin_real: config.origin_real,
            origin_imag: config.origin_imag,
            width,
            height,
            max_iterations: config.max_iterations,
            zoom_step: config.zoom_step,
        }
    }

    /// Shifts the origin so the clicked point moves toward the centre of the
    /// view. A click at the exact centre changes nothing.
    pub fn pan(&mut self, x: f64, y: f64, screen_size: screen::Size) {
        let screen_width = screen_size.width as f64;
        let screen_height = screen_size.height as f64;
        if screen_width > 0.0 {
            self.origin_real += (x - screen_width / 2.0) / screen_width * self.width;
        }
        if screen_height > 0.0 {
            self.origin_imag += (y - screen_height / 2.0) / screen_height * self.height;
        }
        debug!("pan to origin ({}, {})", self.origin_real, self.origin_imag);
    }

    /// Scales the rectangle by `delta / zoom_step` about its centre and moves
    /// the iteration budget by [`ITERATION_STEP`] in the direction of the zoom.
    /// A zero `delta` is ignored.
    pub fn zoom(&mut self, delta: f64) {
        if delta == 0.0 || self.zoom_step == 0 {
            return;
        }
        let width_factor = self.width * delta / self.zoom_step as f64;
        let height_factor = self.height * delta / self.zoom_step as f64;
        self.width -= width_factor;
        self.height -= height_factor;
        self.origin_real += width_factor / 2.0;
        self.origin_imag += height_factor / 2.0;

        if delta > 0.0 {
            self.max_iterations = self.max_iterations.saturating_add(ITERATION_STEP);
        } else {
            self.max_iterations = self.max_iterations.saturating_sub(ITERATION_STEP);
        }
        debug!(
            "zoom by {}: {}x{} at ({}, {}), {} iterations",
            delta, self.width, self.height, self.origin_real, self.origin_imag, self.max_iterations
        );
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Pan { x, y, screen } => self.pan(x, y, screen),
            Command::Zoom { delta } => self.zoom(delta),
        }
    }
}
