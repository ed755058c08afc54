//! Dense-matrix storage on top of Faer.
//!
//! This module provides the `DenseMatrix` type, a fixed-shape `faer::Mat<f64>` in which every
//! position is logically present (default 0.0). Zero is stored explicitly like any other value.

use crate::core::traits::{EntryStore, MatShape};
use crate::error::MatrixError;
use faer::Mat;

/// Maximum number of rows a dense matrix may hold.
pub const DENSE_ROW_CAPACITY: usize = 3000;

#[derive(Debug, Clone)]
pub struct DenseMatrix {
    inner: Mat<f64>,
}

impl DenseMatrix {
    /// Zero-initialized `nrows × ncols` matrix.
    ///
    /// Fails with `CapacityExceeded` if `nrows > DENSE_ROW_CAPACITY`.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        check_capacity(nrows)?;
        Ok(Self { inner: Mat::zeros(nrows, ncols) })
    }

    /// Build from row-major rows. Every row must have `ncols` values.
    pub fn from_rows(ncols: usize, rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        check_capacity(rows.len())?;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != ncols {
                return Err(MatrixError::RaggedRow { line: i + 1, expected: ncols, found: row.len() });
            }
        }
        Ok(Self { inner: Mat::from_fn(rows.len(), ncols, |i, j| rows[i][j]) })
    }

    /// Wrap an existing Faer matrix.
    pub fn from_faer(inner: Mat<f64>) -> Result<Self, MatrixError> {
        check_capacity(inner.nrows())?;
        Ok(Self { inner })
    }

    pub fn as_faer(&self) -> &Mat<f64> {
        &self.inner
    }

    /// Unchecked read for kernels that have already validated shapes.
    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> f64 {
        self.inner[(i, j)]
    }

    #[inline]
    pub(crate) fn put(&mut self, i: usize, j: usize, v: f64) {
        self.inner[(i, j)] = v;
    }
}

fn check_capacity(nrows: usize) -> Result<(), MatrixError> {
    if nrows > DENSE_ROW_CAPACITY {
        return Err(MatrixError::CapacityExceeded { rows: nrows, capacity: DENSE_ROW_CAPACITY });
    }
    Ok(())
}

impl MatShape for DenseMatrix {
    fn rows(&self) -> usize {
        self.inner.nrows()
    }
    fn cols(&self) -> usize {
        self.inner.ncols()
    }
}

impl EntryStore for DenseMatrix {
    fn entry(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        self.check_bounds(i, j)?;
        Ok(self.at(i, j))
    }

    fn set_entry(&mut self, i: usize, j: usize, v: f64) -> Result<(), MatrixError> {
        self.check_bounds(i, j)?;
        self.put(i, j, v);
        Ok(())
    }

    fn accumulate_entry(&mut self, i: usize, j: usize, v: f64) -> Result<(), MatrixError> {
        self.check_bounds(i, j)?;
        self.inner[(i, j)] += v;
        Ok(())
    }
}
