//! Utilities: loading matrices from row-major text.

pub mod loader;
pub use loader::{load_matrix, read_matrix};
