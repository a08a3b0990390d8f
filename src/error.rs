//! Error types for frame rendering.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("raster of {width}x{height} pixels is too large to address")]
    RasterTooLarge { width: u32, height: u32 },

    #[error("could not allocate a per-frame array of {len} elements: {source}")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Allocates a vector of `len` copies of `value`, reporting exhaustion as a
/// [`RenderError`] instead of aborting.
pub(crate) fn try_filled<A: Clone>(len: usize, value: A) -> Result<Vec<A>, RenderError> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(len)
        .map_err(|source| RenderError::Allocation { len, source })?;
    vec.resize(len, value);
    Ok(vec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_filled_allocates_requested_length() {
        let vec = try_filled(7, 3u8).unwrap();
        assert_eq!(vec, vec![3u8; 7]);
    }

    #[test]
    fn try_filled_reports_impossible_allocation() {
        let result = try_filled::<u64>(usize::MAX, 0);
        assert!(matches!(
            result,
            Err(RenderError::Allocation { len: usize::MAX, .. })
        ));
    }
}
