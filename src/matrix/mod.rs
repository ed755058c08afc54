//! Matrix module: dense and sparse storage behind one tagged `Matrix` type.

pub mod compare;
pub mod dense;
pub use dense::{DenseMatrix, DENSE_ROW_CAPACITY};
pub mod sparse;
pub use sparse::{SparseMatrix, SparseRow};

use crate::config::MulOptions;
use crate::core::traits::{EntryStore, MatShape};
use crate::error::MatrixError;
use crate::multiply::{self, Execution};

/// Storage representation of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKind {
    Dense,
    Sparse,
}

/// A matrix in one of the two storage representations.
///
/// Each instance exclusively owns its storage. Multiplication never mutates
/// its operands; it allocates and returns a new `Matrix`.
#[derive(Debug, Clone)]
pub enum Matrix {
    Dense(DenseMatrix),
    Sparse(SparseMatrix),
}

impl Matrix {
    /// Zero-initialized matrix of the requested kind.
    pub fn zeros(kind: StorageKind, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        Ok(match kind {
            StorageKind::Dense => Matrix::Dense(DenseMatrix::zeros(rows, cols)?),
            StorageKind::Sparse => Matrix::Sparse(SparseMatrix::zeros(rows, cols)),
        })
    }

    /// `n × n` identity.
    pub fn identity(kind: StorageKind, n: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(kind, n, n)?;
        for i in 0..n {
            m.set_entry(i, i, 1.0)?;
        }
        Ok(m)
    }

    /// Build from row-major data; the column count is fixed by the first row.
    pub fn from_rows(kind: StorageKind, rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let ncols = rows.first().map_or(0, Vec::len);
        match kind {
            StorageKind::Dense => Ok(Matrix::Dense(DenseMatrix::from_rows(ncols, rows)?)),
            StorageKind::Sparse => {
                let mut m = SparseMatrix::zeros(rows.len(), ncols);
                for (i, row) in rows.iter().enumerate() {
                    if row.len() != ncols {
                        return Err(MatrixError::RaggedRow { line: i + 1, expected: ncols, found: row.len() });
                    }
                    for (j, &v) in row.iter().enumerate() {
                        m.set_entry(i, j, v)?;
                    }
                }
                Ok(Matrix::Sparse(m))
            }
        }
    }

    pub fn kind(&self) -> StorageKind {
        match self {
            Matrix::Dense(_) => StorageKind::Dense,
            Matrix::Sparse(_) => StorageKind::Sparse,
        }
    }

    /// Copy into dense storage.
    pub fn to_dense(&self) -> Result<Matrix, MatrixError> {
        match self {
            Matrix::Dense(d) => Ok(Matrix::Dense(d.clone())),
            Matrix::Sparse(s) => {
                let mut d = DenseMatrix::zeros(s.rows(), s.cols())?;
                for (i, j, v) in s.triplets() {
                    d.put(i, j, v);
                }
                Ok(Matrix::Dense(d))
            }
        }
    }

    /// Copy into sparse storage, dropping explicit zeros.
    pub fn to_sparse(&self) -> Matrix {
        match self {
            Matrix::Sparse(s) => Matrix::Sparse(s.clone()),
            Matrix::Dense(d) => {
                let mut s = SparseMatrix::zeros(d.rows(), d.cols());
                for i in 0..d.rows() {
                    let row: SparseRow = (0..d.cols())
                        .map(|j| (j, d.at(i, j)))
                        .filter(|&(_, v)| v != 0.0)
                        .collect();
                    s.put_row(i, row);
                }
                Matrix::Sparse(s)
            }
        }
    }

    /// Single-threaded product `self · other`.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        multiply::product(self, other, Execution::Sequential)
    }

    /// Product `self · other` computed by `opts.worker_count` workers.
    ///
    /// Produces exactly the same result as [`Matrix::multiply`].
    pub fn multiply_parallel(&self, other: &Matrix, opts: &MulOptions) -> Result<Matrix, MatrixError> {
        multiply::product(self, other, Execution::Parallel(opts))
    }

    /// Structural equality over logical entry values.
    pub fn equals(&self, other: &Matrix) -> bool {
        compare::structurally_equal(self, other)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl From<DenseMatrix> for Matrix {
    fn from(m: DenseMatrix) -> Self {
        Matrix::Dense(m)
    }
}

impl From<SparseMatrix> for Matrix {
    fn from(m: SparseMatrix) -> Self {
        Matrix::Sparse(m)
    }
}

impl MatShape for Matrix {
    fn rows(&self) -> usize {
        match self {
            Matrix::Dense(m) => m.rows(),
            Matrix::Sparse(m) => m.rows(),
        }
    }
    fn cols(&self) -> usize {
        match self {
            Matrix::Dense(m) => m.cols(),
            Matrix::Sparse(m) => m.cols(),
        }
    }
}

impl EntryStore for Matrix {
    fn entry(&self, i: usize, j: usize) -> Result<f64, MatrixError> {
        match self {
            Matrix::Dense(m) => m.entry(i, j),
            Matrix::Sparse(m) => m.entry(i, j),
        }
    }
    fn set_entry(&mut self, i: usize, j: usize, v: f64) -> Result<(), MatrixError> {
        match self {
            Matrix::Dense(m) => m.set_entry(i, j, v),
            Matrix::Sparse(m) => m.set_entry(i, j, v),
        }
    }
    fn accumulate_entry(&mut self, i: usize, j: usize, v: f64) -> Result<(), MatrixError> {
        match self {
            Matrix::Dense(m) => m.accumulate_entry(i, j, v),
            Matrix::Sparse(m) => m.accumulate_entry(i, j, v),
        }
    }
}
