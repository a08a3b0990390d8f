//! Frame orchestration: grid, escape times, colours.

use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::{
    colour, compute,
    config::Config,
    error::{try_filled, RenderError},
    escape,
    grid::SampleGrid,
    pixel::Rgba,
    screen,
    viewport::Viewport,
};

/// A finished colour buffer and how long it took to compute.
#[derive(Clone, Debug)]
pub struct Frame {
    pub size: screen::Size,
    /// Row-major RGBA8, `size.width * size.height` entries.
    pub colours: Vec<Rgba>,
    pub elapsed: Duration,
}

impl Frame {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        self.colours
            .get(x as usize + y as usize * self.size.width as usize)
            .copied()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colours)
    }
}

/// Runs the per-frame pipeline on a dedicated worker pool.
pub struct Renderer {
    pool: rayon::ThreadPool,
    chunk_len: usize,
}

impl Renderer {
    pub fn new(config: &Config) -> Result<Self, RenderError> {
        Ok(Self {
            pool: compute::build_pool(config.threads)?,
            chunk_len: compute::chunk_len(config.chunk_len),
        })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Renders `viewport` at `size`. The viewport is copied on entry, so the
    /// whole frame sees one consistent set of parameters.
    pub fn render_frame(
        &self,
        viewport: &Viewport,
        size: screen::Size,
    ) -> Result<Frame, RenderError> {
        let viewport = *viewport;
        let start = Instant::now();
        trace!("begin render_frame {}x{}", size.width, size.height);

        let grid = SampleGrid::generate(&viewport, size)?;
        let mut counts = try_filled(grid.len(), 0i32)?;
        let mut colours = try_filled(grid.len(), Rgba::default())?;

        let chunk_len = self.chunk_len;
        self.pool.install(|| {
            escape::evaluate(&grid, viewport.max_iterations, chunk_len, &mut counts);
            colour::colour_counts(&counts, viewport.max_iterations, chunk_len, &mut colours);
        });

        let elapsed = start.elapsed();
        debug!(
            "rendered {}x{} at {} iterations in {:?}",
            size.width, size.height, viewport.max_iterations, elapsed
        );

        Ok(Frame {
            size,
            colours,
            elapsed,
        })
    }
}
