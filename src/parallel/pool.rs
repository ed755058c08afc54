// Per-call worker pool with a full fork-join barrier.

use super::Partition;
use crate::error::MatrixError;
use log::{debug, trace};
use std::any::Any;

/// Run every partition on its own worker and wait for all of them.
///
/// Returns each partition's `(item, result)` pairs in partition order. If any worker
/// returns an error or panics, the whole call fails; partial results are discarded.
pub fn run_on_pool<I, R, F>(
    partitions: Vec<Partition<I>>,
    worker_count: usize,
    f: F,
) -> Result<Vec<Vec<(I, R)>>, MatrixError>
where
    I: Copy + Send + Sync,
    R: Send,
    F: Fn(I) -> Result<R, MatrixError> + Sync,
{
    if worker_count == 0 {
        return Err(MatrixError::InvalidWorkerCount);
    }
    for p in &partitions {
        trace!("worker {}: {} items", p.worker, p.items.len());
    }
    fork_join(&partitions, worker_count, &f)
}

#[cfg(feature = "rayon")]
fn fork_join<I, R, F>(
    partitions: &[Partition<I>],
    worker_count: usize,
    f: &F,
) -> Result<Vec<Vec<(I, R)>>, MatrixError>
where
    I: Copy + Send + Sync,
    R: Send,
    F: Fn(I) -> Result<R, MatrixError> + Sync,
{
    use rayon::prelude::*;
    use std::panic::{self, AssertUnwindSafe};

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count)
        .thread_name(|i| format!("duomat-worker-{i}"))
        .build()?;
    debug!("built worker pool with {} threads", pool.current_num_threads());

    let joined = panic::catch_unwind(AssertUnwindSafe(|| {
        pool.install(|| {
            partitions
                .par_iter()
                .map(|p| p.evaluate(f))
                .collect::<Result<Vec<_>, _>>()
        })
    }));
    joined.map_err(|payload| MatrixError::WorkerPanicked(panic_message(payload)))?
}

#[cfg(not(feature = "rayon"))]
fn fork_join<I, R, F>(
    partitions: &[Partition<I>],
    worker_count: usize,
    f: &F,
) -> Result<Vec<Vec<(I, R)>>, MatrixError>
where
    I: Copy + Send + Sync,
    R: Send,
    F: Fn(I) -> Result<R, MatrixError> + Sync,
{
    debug!("spawning {} scoped workers (pool size {worker_count})", partitions.len());
    std::thread::scope(|s| {
        let handles: Vec<_> = partitions.iter().map(|p| s.spawn(move || p.evaluate(f))).collect();
        // join every handle before reporting, so no worker outlives the call
        let outcomes: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
        outcomes
            .into_iter()
            .map(|joined| joined.map_err(|payload| MatrixError::WorkerPanicked(panic_message(payload)))?)
            .collect()
    })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
