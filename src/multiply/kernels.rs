//! Per-item product formulas.
//!
//! Each function computes one unit of output from the operands alone, so the sequential
//! loop and every parallel worker call the same code. All of them add terms in ascending
//! `k`, which keeps every storage combination bit-identical to the dense triple loop.

use crate::core::traits::EntryStore;
use crate::error::MatrixError;
use crate::matrix::sparse::{SparseMatrix, SparseRow, accumulate_into};

/// `sum_k left[i, k] * right[k, j]` over the full inner dimension.
pub fn dense_row_cell<L, R>(left: &L, right: &R, i: usize, j: usize) -> Result<f64, MatrixError>
where
    L: EntryStore,
    R: EntryStore,
{
    (0..left.cols()).try_fold(0.0, |acc, k| Ok(acc + left.entry(i, k)? * right.entry(k, j)?))
}

/// Same sum, visiting only the nonzero columns of row `i` of a sparse left operand.
pub fn sparse_row_cell<R>(left: &SparseMatrix, right: &R, i: usize, j: usize) -> Result<f64, MatrixError>
where
    R: EntryStore,
{
    let Some(row) = left.nonzeros_in_row(i) else {
        return Ok(0.0);
    };
    row.iter().try_fold(0.0, |acc, (&k, &v)| Ok(acc + v * right.entry(k, j)?))
}

/// Row `i` of `left · right` for two sparse operands.
///
/// The inner loop only visits the nonzero columns of row `k` of `right`, never the
/// full output width. Cells whose sum reaches exactly zero are pruned.
pub fn sparse_row_product(left: &SparseMatrix, right: &SparseMatrix, i: usize) -> Result<SparseRow, MatrixError> {
    let mut acc = SparseRow::new();
    let Some(row) = left.nonzeros_in_row(i) else {
        return Ok(acc);
    };
    for (&k, &v) in row {
        if let Some(right_row) = right.nonzeros_in_row(k) {
            for (&j, &w) in right_row {
                accumulate_into(&mut acc, j, v * w);
            }
        }
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::DenseMatrix;

    fn sparse(rows: &[Vec<f64>]) -> SparseMatrix {
        let mut m = SparseMatrix::zeros(rows.len(), rows[0].len());
        for (i, r) in rows.iter().enumerate() {
            for (j, &v) in r.iter().enumerate() {
                m.set_entry(i, j, v).unwrap();
            }
        }
        m
    }

    #[test]
    fn dense_cell_matches_hand_sum() {
        let a = DenseMatrix::from_rows(2, &[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = DenseMatrix::from_rows(2, &[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        assert_eq!(dense_row_cell(&a, &b, 0, 0).unwrap(), 19.0);
        assert_eq!(dense_row_cell(&a, &b, 1, 1).unwrap(), 50.0);
    }

    #[test]
    fn sparse_cell_skips_empty_rows() {
        let a = sparse(&[vec![0.0, 0.0], vec![0.0, 2.0]]);
        let b = DenseMatrix::from_rows(2, &[vec![1.0, 1.0], vec![3.0, 5.0]]).unwrap();
        assert_eq!(sparse_row_cell(&a, &b, 0, 1).unwrap(), 0.0);
        assert_eq!(sparse_row_cell(&a, &b, 1, 1).unwrap(), 10.0);
    }

    #[test]
    fn sparse_row_product_prunes_cancellation() {
        // row 0: [1, 1] times [[2, 3], [-2, 1]] = [0, 4]
        let a = sparse(&[vec![1.0, 1.0]]);
        let b = sparse(&[vec![2.0, 3.0], vec![-2.0, 1.0]]);
        let row = sparse_row_product(&a, &b, 0).unwrap();
        assert_eq!(row, SparseRow::from([(1, 4.0)]));
    }

    #[test]
    fn out_of_range_reads_propagate() {
        let a = DenseMatrix::zeros(2, 2).unwrap();
        let b = DenseMatrix::zeros(1, 2).unwrap();
        assert!(matches!(dense_row_cell(&a, &b, 0, 0), Err(MatrixError::OutOfBounds { .. })));
    }
}
