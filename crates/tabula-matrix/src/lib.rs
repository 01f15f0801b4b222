//! # tabula-matrix
//!
//! Fixed-shape two-dimensional integer arrays for Tabula.
//!
//! This crate provides:
//! - [`Matrix2D`], a row-major `i32` matrix whose shape is fixed at construction
//! - Bounds-checked element access returning [`MatrixError`] instead of panicking
//! - Whitespace-separated text input and right-aligned text output
//!
//! ## Example
//!
//! ```
//! use tabula_matrix::Matrix2D;
//!
//! let mut board = Matrix2D::new(2, 3)?;
//! board.read_from_str("1 2 3\n4 5 6")?;
//! *board.at_mut(1, 2)? += 10;
//! assert_eq!(board.to_string(), "    1    2    3\n    4    5   16\n");
//! # Ok::<(), tabula_matrix::MatrixError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod format;
pub mod matrix2d;

pub use error::{Axis, MatrixError};
pub use format::{MatrixFormat, DEFAULT_FIELD_WIDTH};
pub use matrix2d::{Matrix2D, DEFAULT_COLUMNS, DEFAULT_ROWS};

#[cfg(test)]
mod proptests;
