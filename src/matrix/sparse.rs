// Sparse storage: row -> (col -> nonzero value)

use crate::core::traits::{EntryStore, MatShape};
use crate::error::MatrixError;
use std::collections::BTreeMap;

/// One stored row: column index -> nonzero value.
pub type SparseRow = BTreeMap<usize, f64>;

/// Row-keyed sparse matrix.
///
/// No stored value is ever exactly zero, and no stored row is ever empty, so the
/// storage size is proportional to the number of true nonzeros. Maps are ordered so
/// that kernels visit columns in ascending order.
#[derive(Debug, Clone, Default)]
pub struct SparseMatrix {
    nrows: usize,
    ncols: usize,
    table: BTreeMap<usize, SparseRow>,
}

impl SparseMatrix {
    /// Zero `nrows × ncols` matrix.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self { nrows, ncols, table: BTreeMap::new() }
    }

    /// Number of stored nonzeros.
    pub fn nnz(&self) -> usize {
        self.table.values().map(|row| row.len()).sum()
    }

    /// Nonzeros of row `i` in ascending column order, if the row has any.
    pub fn nonzeros_in_row(&self, i: usize) -> Option<&SparseRow> {
        self.table.get(&i)
    }

    /// Rows holding at least one nonzero, in ascending order.
    pub fn nonzero_rows(&self) -> impl Iterator<Item = (usize, &SparseRow)> + '_ {
        self.table.iter().map(|(&i, row)| (i, row))
    }

    /// All stored `(row, col, value)` triples in row-major order.
    pub fn triplets(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.table
            .iter()
            .flat_map(|(&i, row)| row.iter().map(move |(&j, &v)| (i, j, v)))
    }

    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> f64 {
        self.table.get(&i).and_then(|row| row.get(&j)).copied().unwrap_or(0.0)
    }

    /// Install a whole row computed elsewhere. Zero values are dropped.
    pub(crate) fn put_row(&mut self, i: usize, mut row: SparseRow) {
        row.retain(|_, v| *v != 0.0);
        if row.is_empty() {
            self.table.remove(&i);
        } else {
            self.table.insert(i, row);
        }
    }

    fn put(&mut self, i: usize, j: usize, v: f64) {
        if v == 0.0 {
            if let Some(row) = self.table.get_mut(&i) {
                row.remove(&j);
                if row.is_empty() {
                    self.table.remove(&i);
                }
            }
            return;
        }
        self.table.entry(i).or_default().insert(j, v);
    }
}

/// `row[j] += v`, removing the entry if the sum is exactly zero.
pub(crate) fn accumulate_into(row: &mut SparseRow, j: usize, v: f64) {
    if v == 0.0 {
        return;
    }
    let sum = row.get(&j).copied().unwrap_or(0.0) + v;
    if sum == 0.0 {
        row.remove(&j);
    } else {
        row.insert(j, sum);
    }
}

impl MatShape for SparseMatrix {
    fn rows(&self) -> usize {
        self.nrows
    }
    fn cols(&self) -> usize {
        self.ncols
    }
}

impl EntryStore for SparseMatrix {
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
        if v == 0.0 {
            return Ok(());
        }
        let sum = self.at(i, j) + v;
        self.put(i, j, sum);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_stored_zero(m: &SparseMatrix) {
        for (i, j, v) in m.triplets() {
            assert_ne!(v, 0.0, "stored zero at ({i}, {j})");
        }
        for (i, row) in m.nonzero_rows() {
            assert!(!row.is_empty(), "empty row {i} kept");
        }
    }

    #[test]
    fn absent_entries_read_as_zero() {
        let m = SparseMatrix::zeros(3, 3);
        assert_eq!(m.entry(2, 1).unwrap(), 0.0);
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn set_zero_removes() {
        let mut m = SparseMatrix::zeros(3, 3);
        m.set_entry(1, 1, 2.0).unwrap();
        assert_eq!(m.nnz(), 1);
        m.set_entry(1, 1, 0.0).unwrap();
        assert_eq!(m.nnz(), 0);
        assert!(m.nonzeros_in_row(1).is_none());
        // removing an absent key is a no-op
        m.set_entry(2, 2, 0.0).unwrap();
        assert_no_stored_zero(&m);
    }

    #[test]
    fn accumulate_to_zero_prunes() {
        let mut m = SparseMatrix::zeros(2, 2);
        m.accumulate_entry(0, 1, 1.5).unwrap();
        m.accumulate_entry(0, 1, 0.0).unwrap();
        assert_eq!(m.entry(0, 1).unwrap(), 1.5);
        m.accumulate_entry(0, 1, -1.5).unwrap();
        assert_eq!(m.nnz(), 0);
        assert_no_stored_zero(&m);
    }

    #[test]
    fn bounds_are_checked() {
        let mut m = SparseMatrix::zeros(2, 3);
        assert!(matches!(m.entry(0, 3), Err(MatrixError::OutOfBounds { .. })));
        assert!(matches!(m.set_entry(2, 0, 1.0), Err(MatrixError::OutOfBounds { .. })));
        assert!(matches!(m.accumulate_entry(2, 0, 0.0), Err(MatrixError::OutOfBounds { .. })));
    }

    #[test]
    fn put_row_drops_zeros() {
        let mut m = SparseMatrix::zeros(2, 3);
        m.put_row(1, SparseRow::from([(0, 0.0), (2, 3.0)]));
        assert_eq!(m.nnz(), 1);
        m.put_row(1, SparseRow::from([(0, 0.0)]));
        assert!(m.nonzeros_in_row(1).is_none());
    }

    #[test]
    fn accumulate_into_row() {
        let mut row = SparseRow::new();
        accumulate_into(&mut row, 4, 2.0);
        accumulate_into(&mut row, 4, -2.0);
        assert!(row.is_empty());
    }
}
