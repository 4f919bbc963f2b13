//! Errors reported by the dense matrix engine.

use thiserror::Error;

use crate::vector::Orientation;

/// Result alias for fallible matrix and vector operations.
pub type LinalgResult<T> = Result<T, LinalgError>;

/// Errors that can occur in matrix and vector operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum LinalgError {
    /// A matrix was requested with zero rows or zero columns.
    #[error("matrix must have at least one row and one column")]
    EmptyMatrix,

    /// Rows of a matrix literal have different lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// A square-only operation received a rectangular matrix.
    #[error("operation requires a square matrix, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Operand sizes do not agree.
    #[error("dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch {
        /// Size required by the operation.
        expected: usize,
        /// Size actually supplied.
        found: usize,
    },

    /// Vector orientations do not form an inner or outer product.
    #[error("cannot multiply {lhs:?} vector by {rhs:?} vector")]
    OrientationMismatch {
        /// Orientation of the left operand.
        lhs: Orientation,
        /// Orientation of the right operand.
        rhs: Orientation,
    },

    /// A (near-)zero pivot was met during factorization or substitution.
    #[error("matrix is singular: zero pivot at position {pivot}")]
    SingularMatrix {
        /// Diagonal position of the zero pivot.
        pivot: usize,
    },

    /// Element access outside the matrix or vector bounds.
    #[error("index ({row}, {col}) out of bounds for {rows}x{cols}")]
    IndexOutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },
}
