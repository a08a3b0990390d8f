//! Escape-time iteration for `z -> z^2 + c`.

use log::trace;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSlice, ParallelSliceMut};

use crate::{compute, grid::SampleGrid, pixel::Complex};

/// Squared escape radius; `|z| > 2` is tested as `|z|^2 > 4`.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Whether `c` satisfies the closed-form main cardioid test.
#[inline]
pub fn in_main_cardioid(c: Complex) -> bool {
    let shifted = c.real - 0.25;
    let imag_sq = c.imaginary * c.imaginary;
    let q = shifted * shifted + imag_sq;
    q * (q + shifted) < 0.25 * imag_sq
}

/// Number of iterations before the orbit of `0` under `z -> z^2 + c` leaves
/// the radius-2 disc, or `max_iterations` if it never does within budget.
///
/// The count is the index of the step on which divergence was seen, so a
/// point whose first iterate `z_1 = c` already lies outside the disc gives 0.
/// Points inside the main cardioid return `max_iterations` without
/// iterating. A non-positive budget always gives 0.
#[inline]
pub fn escape_time(c: Complex, max_iterations: i32) -> i32 {
    if max_iterations <= 0 {
        return 0;
    }
    if in_main_cardioid(c) {
        return max_iterations;
    }

    let mut z = Complex::ZERO;
    for count in 0..max_iterations {
        z = z.square_plus(c);
        if z.norm_sqr() > ESCAPE_RADIUS_SQ {
            return count;
        }
    }
    max_iterations
}

/// Evaluates [`escape_time`] for every sample of `grid`, writing into
/// `counts` (which must be the same length). Runs on the current rayon pool.
pub fn evaluate(grid: &SampleGrid, max_iterations: i32, chunk_len: usize, counts: &mut [i32]) {
    trace!("begin evaluate");
    debug_assert_eq!(grid.real.len(), counts.len());
    debug_assert_eq!(grid.imag.len(), counts.len());

    let chunk_len = compute::chunk_len(chunk_len);
    counts
        .par_chunks_mut(chunk_len)
        .zip(grid.real.par_chunks(chunk_len))
        .zip(grid.imag.par_chunks(chunk_len))
        .for_each(|((counts, real), imag)| {
            for ((count, re), im) in counts.iter_mut().zip(real).zip(imag) {
                *count = escape_time(Complex::new(*re, *im), max_iterations);
            }
        });

    trace!("end evaluate");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{screen, viewport::Viewport};

    const MAX: i32 = 500;

    #[test]
    fn origin_is_interior() {
        assert_eq!(escape_time(Complex::ZERO, MAX), MAX);
    }

    #[test]
    fn cardioid_points_return_budget() {
        let points = [
            Complex::new(0.0, 0.0),
            Complex::new(-0.5, 0.3),
            Complex::new(0.2, 0.1),
            Complex::new(-0.1, 0.6),
            Complex::new(0.25, 0.015625),
        ];
        for c in points {
            assert!(in_main_cardioid(c), "{:?} should be in the cardioid", c);
            assert_eq!(escape_time(c, MAX), MAX);
            assert_eq!(escape_time(c, 1), 1);
        }
    }

    #[test]
    fn period_two_bulb_iterates_to_the_cap() {
        // Not covered by the cardioid test, but the orbit cycles 0, -1.
        let c = Complex::new(-1.0, 0.0);
        assert!(!in_main_cardioid(c));
        assert_eq!(escape_time(c, MAX), MAX);
    }

    #[test]
    fn points_outside_radius_two_escape_immediately() {
        for c in [
            Complex::new(2.5, 0.0),
            Complex::new(-2.0, -1.25),
            Complex::new(0.0, 3.0),
            Complex::new(10.0, 10.0),
        ] {
            assert_eq!(escape_time(c, MAX), 0, "{:?}", c);
        }
    }

    #[test]
    fn divergent_step_is_not_counted() {
        // z1 = 1, z2 = 2, z3 = 5: escapes on the third step.
        assert_eq!(escape_time(Complex::new(1.0, 0.0), MAX), 2);
        // z1 = 2 sits on the boundary and does not count as escaped.
        assert_eq!(escape_time(Complex::new(2.0, 0.0), MAX), 1);
    }

    #[test]
    fn non_positive_budget_gives_zero() {
        assert_eq!(escape_time(Complex::ZERO, 0), 0);
        assert_eq!(escape_time(Complex::new(-1.0, 0.0), -6), 0);
        assert_eq!(escape_time(Complex::new(3.0, 0.0), -6), 0);
    }

    #[test]
    fn parallel_evaluation_matches_scalar_reference() {
        let viewport = Viewport {
            origin_real: -2.0,
            origin_imag: -1.25,
            width: 2.5,
            height: 2.5,
            max_iterations: 200,
            zoom_step: 10,
        };
        let grid = SampleGrid::generate(&viewport, screen::Size::new(97, 61)).unwrap();
        let reference: Vec<i32> = grid
            .real
            .iter()
            .zip(&grid.imag)
            .map(|(re, im)| escape_time(Complex::new(*re, *im), 200))
            .collect();

        for chunk_len in [1, 7, 10, 16, 1000, 100_000] {
            let mut counts = vec![-1; grid.len()];
            evaluate(&grid, 200, chunk_len, &mut counts);
            assert_eq!(counts, reference, "chunk_len {}", chunk_len);
        }
    }

    #[test]
    fn evaluate_handles_empty_grid() {
        let grid = SampleGrid {
            real: Vec::new(),
            imag: Vec::new(),
        };
        let mut counts: Vec<i32> = Vec::new();
        evaluate(&grid, MAX, 10, &mut counts);
        assert!(counts.is_empty());
    }
}
