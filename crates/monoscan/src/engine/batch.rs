//! Batch dispatch over independent inputs.
//!
//! Scans share no state, so a batch of inputs can be processed in any order.
//! With the `parallel` feature the batch is spread over the `rayon` global
//! pool; otherwise (or when parallelism is switched off on the scanner) it
//! runs sequentially. Output order always matches input order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Apply `op` to every input, in parallel when requested and available.
pub fn run_batch<I, R, F>(inputs: &[I], parallel: bool, op: F) -> Vec<R>
where
    I: Sync,
    R: Send,
    F: Fn(&I) -> R + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        if parallel && inputs.len() > 1 {
            return inputs.par_iter().map(&op).collect();
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    inputs.iter().map(op).collect()
}
