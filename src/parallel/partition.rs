//! Static work partitioning for the parallel multiply.

use crate::error::MatrixError;

/// The work items owned by one worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<I> {
    pub worker: usize,
    pub items: Vec<I>,
}

impl<I: Copy> Partition<I> {
    /// A single partition covering every item; sequential execution.
    pub fn whole(items: Vec<I>) -> Self {
        Self { worker: 0, items }
    }

    /// Deal `items` round-robin into `workers` disjoint partitions.
    ///
    /// Item `t` goes to worker `t % workers`. Every partition is returned, including
    /// empty ones, so the result always has exactly `workers` entries. Zero workers
    /// is `InvalidWorkerCount`.
    pub fn round_robin(items: Vec<I>, workers: usize) -> Result<Vec<Self>, MatrixError> {
        if workers == 0 {
            return Err(MatrixError::InvalidWorkerCount);
        }
        let mut parts: Vec<Self> = (0..workers)
            .map(|worker| Self { worker, items: Vec::with_capacity(items.len() / workers + 1) })
            .collect();
        for (t, item) in items.into_iter().enumerate() {
            parts[t % workers].items.push(item);
        }
        Ok(parts)
    }

    /// Apply `f` to every owned item, stopping at the first error.
    pub fn evaluate<R, F>(&self, f: &F) -> Result<Vec<(I, R)>, MatrixError>
    where
        F: Fn(I) -> Result<R, MatrixError>,
    {
        self.items.iter().map(|&item| Ok((item, f(item)?))).collect()
    }
}
