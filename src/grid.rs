//! Pixel to complex-plane sample mapping.

use log::trace;

use crate::{
    error::{try_filled, RenderError},
    screen,
    viewport::Viewport,
};

/// One complex-plane sample per pixel, stored as two parallel arrays in
/// row-major order (`index = x + y * width`).
#[derive(Clone, Debug, PartialEq)]
pub struct SampleGrid {
    pub real: Vec<f64>,
    pub imag: Vec<f64>,
}

impl SampleGrid {
    /// Samples `viewport` at every pixel of a `size` raster.
    ///
    /// Every coordinate is computed directly from its pixel index, so there
    /// is no drift across a row.
    pub fn generate(viewport: &Viewport, size: screen::Size) -> Result<Self, RenderError> {
        trace!("begin generate grid");

        let len = size.pixel_count().ok_or(RenderError::RasterTooLarge {
            width: size.width,
            height: size.height,
        })?;
        let mut real = try_filled(len, 0.0)?;
        let mut imag = try_filled(len, 0.0)?;

        let width = size.width as usize;
        if width > 0 {
            for (y, (real_row, imag_row)) in real
                .chunks_exact_mut(width)
                .zip(imag.chunks_exact_mut(width))
                .enumerate()
            {
                let sample_imag =
                    viewport.origin_imag + viewport.height * y as f64 / size.height as f64;
                for (x, (re, im)) in real_row.iter_mut().zip(imag_row.iter_mut()).enumerate() {
                    *re = viewport.origin_real + viewport.width * x as f64 / size.width as f64;
                    *im = sample_imag;
                }
            }
        }

        trace!("end generate grid");
        Ok(Self { real, imag })
    }

    pub fn len(&self) -> usize {
        self.real.len()
    }

    pub fn is_empty(&self) -> bool {
        self.real.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(origin_real: f64, origin_imag: f64, width: f64, height: f64) -> Viewport {
        Viewport {
            origin_real,
            origin_imag,
            width,
            height,
            max_iterations: 500,
            zoom_step: 10,
        }
    }

    #[test]
    fn small_grid_matches_linear_formula() {
        let grid =
            SampleGrid::generate(&viewport(-1.0, -1.0, 2.0, 1.0), screen::Size::new(4, 2)).unwrap();

        assert_eq!(grid.real, vec![-1.0, -0.5, 0.0, 0.5, -1.0, -0.5, 0.0, 0.5]);
        assert_eq!(grid.imag, vec![-1.0, -1.0, -1.0, -1.0, -0.5, -0.5, -0.5, -0.5]);
    }

    #[test]
    fn every_index_uses_the_direct_formula() {
        let view = viewport(-0.7436, 0.1318, 0.0123, 0.0077);
        let size = screen::Size::new(37, 23);
        let grid = SampleGrid::generate(&view, size).unwrap();

        assert_eq!(grid.len(), 37 * 23);
        for y in 0..size.height {
            for x in 0..size.width {
                let index = (x + y * size.width) as usize;
                assert_eq!(
                    grid.real[index],
                    view.origin_real + view.width * x as f64 / size.width as f64
                );
                assert_eq!(
                    grid.imag[index],
                    view.origin_imag + view.height * y as f64 / size.height as f64
                );
            }
        }
    }

    #[test]
    fn zero_area_raster_gives_empty_grid() {
        let view = viewport(-2.0, -1.25, 4.5, 2.5);
        assert!(SampleGrid::generate(&view, screen::Size::new(0, 10))
            .unwrap()
            .is_empty());
        assert!(SampleGrid::generate(&view, screen::Size::new(10, 0))
            .unwrap()
            .is_empty());
    }
}
