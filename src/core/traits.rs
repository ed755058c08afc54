//! Core matrix capability traits for duomat.

use super::Shape;
use crate::error::MatrixError;

/// Dimensions of a matrix.
pub trait MatShape {
    /// Number of rows.
    fn rows(&self) -> usize;
    /// Number of columns.
    fn cols(&self) -> usize;

    fn shape(&self) -> Shape {
        Shape::new(self.rows(), self.cols())
    }

    /// True when the matrix has zero rows or zero columns.
    fn is_degenerate(&self) -> bool {
        self.shape().is_degenerate()
    }

    /// Fails with `OutOfBounds` unless `(i, j)` lies inside the shape.
    fn check_bounds(&self, i: usize, j: usize) -> Result<(), MatrixError> {
        let shape = self.shape();
        if shape.contains(i, j) {
            Ok(())
        } else {
            Err(MatrixError::OutOfBounds { row: i, col: j, shape })
        }
    }
}

/// Uniform entry access, independent of the storage representation.
pub trait EntryStore: MatShape {
    /// Read A[i, j].
    fn entry(&self, i: usize, j: usize) -> Result<f64, MatrixError>;
    /// Overwrite A[i, j] with `v`.
    fn set_entry(&mut self, i: usize, j: usize, v: f64) -> Result<(), MatrixError>;
    /// A[i, j] += v.
    fn accumulate_entry(&mut self, i: usize, j: usize, v: f64) -> Result<(), MatrixError>;
}
