use thiserror::Error;

/// Invalid-input errors raised before any elimination runs.
///
/// A singular system is not an error: the solver reports it as `None`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SolveError {
    #[error("Empty matrix: a system needs at least one equation")]
    EmptyMatrix,

    #[error("Matrix is not square: row {row} has {got} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("Right-hand side has {got} entries but the matrix has {expected} rows")]
    RhsLength { expected: usize, got: usize },

    #[error("Diagonal-column layout: row {row} has {got} entries, expected 1")]
    NotDiagonalColumn { row: usize, got: usize },

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),
}

pub type SolveResult<T> = Result<T, SolveError>;
