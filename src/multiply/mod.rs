//! Multiplication engine.
//!
//! Both strategies share one dispatch table keyed by the pair of operand storage kinds
//! and one per-cell formula per combination ([`kernels`]). Work is split by output row.
//! Sequential execution writes every row straight into the result; parallel execution
//! deals the rows round-robin across a fresh worker pool, each worker producing only the
//! rows it owns, and the rows are placed after the join.
//!
//! | left   | right  | result | work rows              |
//! |--------|--------|--------|------------------------|
//! | Dense  | Dense  | Dense  | every output row       |
//! | Dense  | Sparse | Dense  | every output row       |
//! | Sparse | Dense  | Dense  | nonzero rows of left   |
//! | Sparse | Sparse | Sparse | nonzero rows of left   |

pub mod kernels;

use crate::config::MulOptions;
use crate::core::Shape;
use crate::core::traits::MatShape;
use crate::error::MatrixError;
use crate::matrix::{DenseMatrix, Matrix, SparseMatrix};
use crate::parallel::{Partition, run_on_pool};
use log::debug;

/// How a product is evaluated.
#[derive(Debug, Clone, Copy)]
pub enum Execution<'a> {
    Sequential,
    Parallel(&'a MulOptions),
}

/// Dimension-checked product `left · right`.
pub fn product(left: &Matrix, right: &Matrix, exec: Execution<'_>) -> Result<Matrix, MatrixError> {
    if left.cols() != right.rows() {
        return Err(MatrixError::DimensionMismatch { left: left.shape(), right: right.shape() });
    }
    if let Execution::Parallel(opts) = exec {
        opts.validate()?;
    }
    let shape = Shape::new(left.rows(), right.cols());
    debug!(
        "multiply {} {:?} by {} {:?} ({:?})",
        left.shape(),
        left.kind(),
        right.shape(),
        right.kind(),
        exec
    );

    let rows = work_rows(left);
    match (left, right) {
        (Matrix::Dense(a), Matrix::Dense(b)) => {
            dense_result(shape, rows, exec, |i, j| kernels::dense_row_cell(a, b, i, j))
        }
        (Matrix::Dense(a), Matrix::Sparse(b)) => {
            dense_result(shape, rows, exec, |i, j| kernels::dense_row_cell(a, b, i, j))
        }
        (Matrix::Sparse(a), Matrix::Dense(b)) => {
            dense_result(shape, rows, exec, |i, j| kernels::sparse_row_cell(a, b, i, j))
        }
        (Matrix::Sparse(a), Matrix::Sparse(b)) => sparse_result(shape, rows, a, b, exec),
    }
}

/// Output rows that can hold a nonzero.
///
/// A sparse left operand contributes nothing to rows it does not store, so those
/// rows are left at zero without being visited.
fn work_rows(left: &Matrix) -> Vec<usize> {
    match left {
        Matrix::Dense(a) => (0..a.rows()).collect(),
        Matrix::Sparse(a) => a.nonzero_rows().map(|(i, _)| i).collect(),
    }
}

fn dense_result<F>(shape: Shape, rows: Vec<usize>, exec: Execution<'_>, cell_value: F) -> Result<Matrix, MatrixError>
where
    F: Fn(usize, usize) -> Result<f64, MatrixError> + Sync,
{
    // allocate before dispatch; shape is fixed while workers run
    let mut out = DenseMatrix::zeros(shape.rows, shape.cols)?;
    match exec {
        Execution::Sequential => {
            for i in rows {
                for j in 0..shape.cols {
                    out.put(i, j, cell_value(i, j)?);
                }
            }
        }
        Execution::Parallel(opts) => {
            let partitions = Partition::round_robin(rows, opts.worker_count)?;
            let owned = run_on_pool(partitions, opts.worker_count, |i| {
                (0..shape.cols).map(|j| cell_value(i, j)).collect::<Result<Vec<f64>, _>>()
            })?;
            for (i, values) in owned.into_iter().flatten() {
                for (j, v) in values.into_iter().enumerate() {
                    out.put(i, j, v);
                }
            }
        }
    }
    Ok(Matrix::Dense(out))
}

fn sparse_result(
    shape: Shape,
    rows: Vec<usize>,
    a: &SparseMatrix,
    b: &SparseMatrix,
    exec: Execution<'_>,
) -> Result<Matrix, MatrixError> {
    let mut out = SparseMatrix::zeros(shape.rows, shape.cols);
    let row_product = |i| kernels::sparse_row_product(a, b, i);
    match exec {
        Execution::Sequential => {
            for i in rows {
                out.put_row(i, row_product(i)?);
            }
        }
        Execution::Parallel(opts) => {
            let partitions = Partition::round_robin(rows, opts.worker_count)?;
            for (i, row) in run_on_pool(partitions, opts.worker_count, row_product)?.into_iter().flatten() {
                out.put_row(i, row);
            }
        }
    }
    Ok(Matrix::Sparse(out))
}
