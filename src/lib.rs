//! # Tabula
//!
//! Two small value types with strict invariants:
//!
//! - **[`Matrix2D`]**: a fixed-shape `i32` array with bounds-checked access,
//!   deep-copy semantics and whitespace-separated text I/O
//! - **[`Polynomial`]**: a sparse univariate polynomial whose terms are kept
//!   sorted by descending exponent, merged and free of zero coefficients
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! let mut board = Matrix2D::default();
//! *board.at_mut(1, 3)? = 42;
//! assert_eq!(board.at(1, 3)?, 42);
//!
//! let p = Polynomial::from_pairs(&[(1.0, 1), (1.0, 0)]);
//! assert_eq!((&p * &p).to_string(), "x^2 + 2x^1 + 1");
//! # Ok::<(), MatrixError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use tabula_matrix as matrix;
pub use tabula_poly as poly;

pub use tabula_matrix::{Matrix2D, MatrixError};
pub use tabula_poly::{Polynomial, Term};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use tabula_matrix::{Matrix2D, MatrixError, MatrixFormat};
    pub use tabula_poly::{Polynomial, Term};
}
