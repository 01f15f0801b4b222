//! Error type for matrix construction, access and text input.

use std::fmt;
use std::io;

use thiserror::Error;

/// Which extent of a matrix a dimension error refers to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Axis {
    /// The row count.
    Rows,
    /// The column count.
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => write!(f, "rows"),
            Axis::Columns => write!(f, "columns"),
        }
    }
}

/// Errors produced by [`Matrix2D`](crate::Matrix2D) operations.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A row or column count was not strictly positive.
    #[error("number of {axis} must be greater than 0, got {value}")]
    InvalidDimension {
        /// The offending extent.
        axis: Axis,
        /// The value that was supplied.
        value: isize,
    },

    /// An element coordinate fell outside the matrix.
    #[error("subscript ({row}, {column}) out of range for {num_rows}x{num_cols} matrix")]
    IndexOutOfRange {
        /// Requested row.
        row: isize,
        /// Requested column.
        column: isize,
        /// Row count of the matrix.
        num_rows: usize,
        /// Column count of the matrix.
        num_cols: usize,
    },

    /// Nested rows passed to `from_rows` had differing lengths.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the first mismatching row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the mismatching row.
        found: usize,
    },

    /// A token in the input could not be parsed as an integer.
    #[error("malformed element {token:?} at position {index}")]
    MalformedToken {
        /// The raw token.
        token: String,
        /// Row-major position the token was meant for.
        index: usize,
    },

    /// The input ended before every element was read.
    #[error("input ended after {read} of {expected} elements")]
    UnexpectedEof {
        /// Number of elements the matrix holds.
        expected: usize,
        /// Number of elements successfully read.
        read: usize,
    },

    /// The underlying reader failed.
    #[error("i/o error while reading matrix: {0}")]
    Io(#[from] io::Error),
}
