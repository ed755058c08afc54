use crate::core::Shape;
use thiserror::Error;

// Unified error type for duomat

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("cannot multiply {left} matrix by {right} matrix")]
    DimensionMismatch { left: Shape, right: Shape },
    #[error("index ({row}, {col}) out of bounds for {shape} matrix")]
    OutOfBounds { row: usize, col: usize, shape: Shape },
    #[error("dense matrix with {rows} rows exceeds capacity of {capacity} rows")]
    CapacityExceeded { rows: usize, capacity: usize },
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,
    #[cfg(feature = "rayon")]
    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
    #[error("worker panicked: {0}")]
    WorkerPanicked(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: cannot parse {token:?} as a number")]
    Parse { line: usize, token: String },
    #[error("line {line}: expected {expected} values, found {found}")]
    RaggedRow { line: usize, expected: usize, found: usize },
}
