//! Structural comparison of matrices.
//!
//! Equality is defined over logical entry values, independent of storage. Values are
//! compared with exact IEEE equality; there is no tolerance.

use super::{DenseMatrix, Matrix, SparseMatrix};
use crate::core::traits::MatShape;

/// True when `a` and `b` have the same shape and the same value at every index.
pub fn structurally_equal(a: &Matrix, b: &Matrix) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    match (a, b) {
        (Matrix::Dense(x), Matrix::Dense(y)) => dense_eq(x, y),
        (Matrix::Sparse(x), Matrix::Sparse(y)) => sparse_eq(x, y),
        (Matrix::Dense(d), Matrix::Sparse(s)) | (Matrix::Sparse(s), Matrix::Dense(d)) => {
            mixed_eq(d, s)
        }
    }
}

fn dense_eq(x: &DenseMatrix, y: &DenseMatrix) -> bool {
    (0..x.rows()).all(|i| (0..x.cols()).all(|j| x.at(i, j) == y.at(i, j)))
}

// Every stored key on either side must match the other side's value there.
fn sparse_eq(x: &SparseMatrix, y: &SparseMatrix) -> bool {
    x.triplets().all(|(i, j, v)| y.at(i, j) == v) && y.triplets().all(|(i, j, v)| x.at(i, j) == v)
}

// Cross-representation comparison goes through the shared accessor, so the
// argument order of the outer match cannot change the answer.
fn mixed_eq(d: &DenseMatrix, s: &SparseMatrix) -> bool {
    (0..d.rows()).all(|i| (0..d.cols()).all(|j| d.at(i, j) == s.at(i, j)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::EntryStore;
    use crate::matrix::StorageKind;

    fn pair(rows: &[Vec<f64>]) -> (Matrix, Matrix) {
        (
            Matrix::from_rows(StorageKind::Dense, rows).unwrap(),
            Matrix::from_rows(StorageKind::Sparse, rows).unwrap(),
        )
    }

    #[test]
    fn reflexive_and_symmetric() {
        let (d, s) = pair(&[vec![1.0, 0.0, 2.0], vec![0.0, 0.0, -3.0]]);
        assert!(d.equals(&d));
        assert!(s.equals(&s));
        assert!(d.equals(&s));
        assert!(s.equals(&d));
    }

    #[test]
    fn shape_mismatch_is_unequal() {
        let a = Matrix::zeros(StorageKind::Sparse, 2, 3).unwrap();
        let b = Matrix::zeros(StorageKind::Sparse, 3, 2).unwrap();
        assert!(!a.equals(&b));
        let c = Matrix::zeros(StorageKind::Dense, 2, 2).unwrap();
        let d = Matrix::zeros(StorageKind::Dense, 2, 3).unwrap();
        assert!(!c.equals(&d));
    }

    #[test]
    fn differing_value_detected_both_ways() {
        let (d, mut s) = pair(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        s.set_entry(0, 1, 0.0).unwrap();
        assert!(!d.equals(&s));
        assert!(!s.equals(&d));

        let (_, s1) = pair(&[vec![1.0, 0.0], vec![0.0, 0.0]]);
        let (_, s2) = pair(&[vec![1.0, 0.0], vec![0.0, 5.0]]);
        assert_ne!(s1, s2);
        assert_ne!(s2, s1);
    }

    #[test]
    fn content_not_identity() {
        // Same content built through different write sequences.
        let mut a = Matrix::zeros(StorageKind::Sparse, 2, 2).unwrap();
        a.set_entry(1, 0, 7.0).unwrap();
        let mut b = Matrix::zeros(StorageKind::Sparse, 2, 2).unwrap();
        b.accumulate_entry(1, 0, 3.0).unwrap();
        b.accumulate_entry(0, 0, 1.0).unwrap();
        b.accumulate_entry(1, 0, 4.0).unwrap();
        b.accumulate_entry(0, 0, -1.0).unwrap();
        assert_eq!(a, b);
    }
}
