//! Row-major text loader.
//!
//! One matrix row per line, values separated by whitespace. The first line fixes the
//! column count and the first blank line ends the matrix. Values are written through
//! `set_entry`, so sparse targets never store the zero tokens.

use crate::core::traits::EntryStore;
use crate::error::MatrixError;
use crate::matrix::{Matrix, StorageKind};
use log::trace;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse a matrix of the given storage kind from `reader`.
pub fn read_matrix<B: BufRead>(reader: B, kind: StorageKind) -> Result<Matrix, MatrixError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut ncols = 0;
    for (n, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = n + 1;
        if line.trim().is_empty() {
            break;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<f64>()
                    .map_err(|_| MatrixError::Parse { line: line_no, token: token.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if rows.is_empty() {
            ncols = row.len();
        } else if row.len() != ncols {
            return Err(MatrixError::RaggedRow { line: line_no, expected: ncols, found: row.len() });
        }
        rows.push(row);
    }
    trace!("read {}x{} matrix as {:?}", rows.len(), ncols, kind);

    let mut m = Matrix::zeros(kind, rows.len(), ncols)?;
    for (i, row) in rows.iter().enumerate() {
        for (j, &v) in row.iter().enumerate() {
            m.set_entry(i, j, v)?;
        }
    }
    Ok(m)
}

/// Open `path` and parse it with [`read_matrix`].
pub fn load_matrix<P: AsRef<Path>>(path: P, kind: StorageKind) -> Result<Matrix, MatrixError> {
    let file = File::open(path)?;
    read_matrix(BufReader::new(file), kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MatShape;
    use std::io::Cursor;

    #[test]
    fn reads_until_blank_line() {
        let text = "1 2 3\n4 0 6\n\n7 8 9\n";
        let m = read_matrix(Cursor::new(text), StorageKind::Dense).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.entry(1, 2).unwrap(), 6.0);
    }

    #[test]
    fn sparse_skips_zero_tokens() {
        let m = read_matrix(Cursor::new("0 0.5\n0 0\n"), StorageKind::Sparse).unwrap();
        match m {
            Matrix::Sparse(s) => {
                assert_eq!(s.nnz(), 1);
                assert_eq!(s.rows(), 2);
            }
            Matrix::Dense(_) => panic!("expected sparse"),
        }
    }

    #[test]
    fn bad_token_reports_line() {
        let err = read_matrix(Cursor::new("1 2\n3 x\n"), StorageKind::Dense).unwrap_err();
        assert!(matches!(err, MatrixError::Parse { line: 2, ref token } if token == "x"));
    }

    #[test]
    fn ragged_row_rejected() {
        let err = read_matrix(Cursor::new("1 2\n3\n"), StorageKind::Sparse).unwrap_err();
        assert!(matches!(err, MatrixError::RaggedRow { line: 2, expected: 2, found: 1 }));
    }

    #[test]
    fn empty_input_is_degenerate() {
        let m = read_matrix(Cursor::new(""), StorageKind::Dense).unwrap();
        assert!(m.is_degenerate());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_matrix("/nonexistent/duomat/m1.txt", StorageKind::Dense).unwrap_err();
        assert!(matches!(err, MatrixError::Io(_)));
    }
}
