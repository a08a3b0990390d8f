/*!
Worker pool and work partitioning for the parallel stages.

Each parallel stage is a map from an input slice to an output slice of the
same length. The output is split into contiguous chunks of at least
`chunk_len` samples with `par_chunks_mut`, and each chunk is zipped with the
input chunks covering the same index range. A chunk only ever writes its own
output slots, so the only synchronisation needed is the join at the end of
the stage, which rayon provides.

Escape-time work is very uneven: a chunk of interior points costs
`max_iterations` steps per sample while a chunk at the edge of the view
escapes immediately. Small chunks let rayon's work stealing even that out.
*/

use log::debug;

use crate::error::RenderError;

/// Samples per scheduling unit.
pub const DEFAULT_CHUNK_LEN: usize = 10;

/// Builds the pool that runs the parallel stages. `threads == 0` lets rayon
/// pick, which is one thread per logical CPU.
pub fn build_pool(threads: usize) -> Result<rayon::ThreadPool, RenderError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("mandelbrot-worker-{}", index))
        .build()?;
    debug!("worker pool started with {} threads", pool.current_num_threads());
    Ok(pool)
}

/// Chunk length actually used for a stage; never zero.
pub fn chunk_len(requested: usize) -> usize {
    requested.max(1)
}
