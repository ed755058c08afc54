//! duomat: dense and sparse matrices with interchangeable multiplication
//!
//! This crate provides a small linear-algebra kernel with two storage representations
//! ([`DenseMatrix`] over Faer, [`SparseMatrix`] over ordered maps) behind one tagged
//! [`Matrix`] type, and two multiplication strategies (sequential and partitioned-parallel)
//! that produce identical results for every combination of operand storage kinds.

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod multiply;
pub mod utils;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::*;
pub use crate::utils::*;
