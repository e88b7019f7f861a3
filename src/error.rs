//! Error types.

use thiserror::Error;

/// Reasons a matrix cannot be turned into a link structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The matrix has no columns, so there is nothing to cover.
    #[error("matrix has no columns")]
    NoColumns,

    /// A row's length differs from the matrix width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!("matrix has no columns", InvalidInputError::NoColumns.to_string());
        assert_eq!(
            "row 2 has 3 cells, expected 4",
            InvalidInputError::RaggedRow { row: 2, expected: 4, found: 3 }.to_string()
        );
    }
}
