//! Colouring of iteration counts.

use log::trace;
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSlice, ParallelSliceMut};

use crate::{compute, pixel::Rgba};

/// Cyclic palette indexed by `iteration_count % 16`.
pub const PALETTE: [Rgba; 16] = [
    Rgba::opaque(66, 30, 15),
    Rgba::opaque(25, 7, 26),
    Rgba::opaque(9, 1, 47),
    Rgba::opaque(4, 4, 73),
    Rgba::opaque(0, 7, 100),
    Rgba::opaque(12, 44, 138),
    Rgba::opaque(24, 82, 177),
    Rgba::opaque(57, 125, 209),
    Rgba::opaque(134, 181, 229),
    Rgba::opaque(211, 236, 248),
    Rgba::opaque(241, 233, 191),
    Rgba::opaque(248, 201, 95),
    Rgba::opaque(255, 170, 0),
    Rgba::opaque(204, 128, 0),
    Rgba::opaque(153, 87, 0),
    Rgba::opaque(106, 52, 3),
];

/// Colour used for samples that reached the iteration budget.
pub const INTERIOR: Rgba = Rgba::BLACK;

#[inline]
pub fn colour_for(iteration_count: i32, max_iterations: i32) -> Rgba {
    if iteration_count == max_iterations {
        INTERIOR
    } else {
        PALETTE[iteration_count.rem_euclid(PALETTE.len() as i32) as usize]
    }
}

/// Maps every count in `counts` to its colour in `colours` (same length).
/// Runs on the current rayon pool.
pub fn colour_counts(counts: &[i32], max_iterations: i32, chunk_len: usize, colours: &mut [Rgba]) {
    trace!("begin colour_counts");
    debug_assert_eq!(counts.len(), colours.len());

    let chunk_len = compute::chunk_len(chunk_len);
    colours
        .par_chunks_mut(chunk_len)
        .zip(counts.par_chunks(chunk_len))
        .for_each(|(colours, counts)| {
            for (colour, count) in colours.iter_mut().zip(counts) {
                *colour = colour_for(*count, max_iterations);
            }
        });

    trace!("end colour_counts");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_maps_to_interior_black() {
        assert_eq!(colour_for(500, 500), Rgba::opaque(0, 0, 0));
        // 496 % 16 == 0, but the budget check wins.
        assert_eq!(colour_for(496, 496), INTERIOR);
    }

    #[test]
    fn escaped_counts_cycle_through_the_palette() {
        assert_eq!(colour_for(0, 500), Rgba::opaque(66, 30, 15));
        assert_eq!(colour_for(9, 500), Rgba::opaque(211, 236, 248));
        assert_eq!(colour_for(15, 500), Rgba::opaque(106, 52, 3));
        assert_eq!(colour_for(16, 500), Rgba::opaque(66, 30, 15));
        assert_eq!(colour_for(16 * 7 + 12, 500), Rgba::opaque(255, 170, 0));
        for k in 0..500 {
            let colour = colour_for(k, 500);
            assert_eq!(colour, PALETTE[(k % 16) as usize]);
            assert_eq!(colour.a, 255);
        }
    }

    #[test]
    fn degenerate_budgets_are_well_defined() {
        assert_eq!(colour_for(0, 0), INTERIOR);
        assert_eq!(colour_for(0, -3), PALETTE[0]);
    }

    #[test]
    fn colour_counts_preserves_order() {
        let counts: Vec<i32> = (0..=40).collect();
        let mut colours = vec![Rgba::default(); counts.len()];
        colour_counts(&counts, 40, 3, &mut colours);
        for (index, colour) in colours.iter().enumerate() {
            assert_eq!(*colour, colour_for(index as i32, 40));
        }
        assert_eq!(colours[40], INTERIOR);
    }
}
