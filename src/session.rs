//! Command handling between frames.

use log::{info, warn};

use crate::{
    config::Config,
    error::RenderError,
    frame::{Frame, Renderer},
    screen,
    viewport::{Command, Viewport},
};

/// Owns the viewport and the most recent frame. Commands mutate the viewport
/// and then re-render; a failed render leaves the previous frame in place.
pub struct Session {
    viewport: Viewport,
    size: screen::Size,
    renderer: Renderer,
    frame: Option<Frame>,
}

impl Session {
    /// Creates a session for a `size` raster and renders the first frame.
    pub fn start(config: &Config, size: screen::Size) -> Result<Self, RenderError> {
        let mut session = Self {
            viewport: Viewport::initial(config, size),
            size,
            renderer: Renderer::new(config)?,
            frame: None,
        };
        info!(
            "rendering {}x{} on {} threads",
            size.width,
            size.height,
            session.renderer.threads()
        );
        session.rerender();
        Ok(session)
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn size(&self) -> screen::Size {
        self.size
    }

    /// The most recently completed frame, if any frame has succeeded.
    pub fn frame(&self) -> Option<&Frame> {
        self.frame.as_ref()
    }

    /// Applies `command` and re-renders. Returns whether a new frame was
    /// produced.
    pub fn handle(&mut self, command: Command) -> bool {
        self.viewport.apply(command);
        self.rerender()
    }

    fn rerender(&mut self) -> bool {
        match self.renderer.render_frame(&self.viewport, self.size) {
            Ok(frame) => {
                info!("frame time: {:.4}s", frame.elapsed_secs());
                self.frame = Some(frame);
                true
            }
            Err(err) => {
                warn!("skipping frame: {}", err);
                false
            }
        }
    }
}
