//! API options for parallel multiplication.
//!
//! This module provides the `MulOptions` struct, which is passed into every
//! parallel multiply. The worker count is a fixed configuration value: it is
//! not derived from the problem size or from the available hardware.

use crate::error::MatrixError;

/// Worker count used when none is configured.
pub const DEFAULT_WORKER_COUNT: usize = 4;

/// Parallel multiplication parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulOptions {
    /// Number of workers spawned for each parallel multiply call
    pub worker_count: usize,
}

impl Default for MulOptions {
    fn default() -> Self {
        Self { worker_count: DEFAULT_WORKER_COUNT }
    }
}

impl MulOptions {
    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    /// Reject configurations that cannot run.
    pub fn validate(&self) -> Result<(), MatrixError> {
        if self.worker_count == 0 {
            return Err(MatrixError::InvalidWorkerCount);
        }
        Ok(())
    }
}
