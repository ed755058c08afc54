//! Configuration for matrix operations.

pub mod options;
pub use options::{MulOptions, DEFAULT_WORKER_COUNT};
