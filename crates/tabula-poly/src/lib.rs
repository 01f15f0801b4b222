//! # tabula-poly
//!
//! Sparse univariate polynomial arithmetic for Tabula.
//!
//! This crate provides:
//! - [`Term`], a `(coefficient, exponent)` pair compared by exponent alone
//! - [`Polynomial`], a term list kept sorted, merged and free of zeros
//! - Addition, subtraction and schoolbook multiplication, with operator and
//!   compound-assignment forms
//!
//! ## Example
//!
//! ```
//! use tabula_poly::Polynomial;
//!
//! let p = Polynomial::from_pairs(&[(2.0, 4), (-3.0, 1), (6.0, 0)]);
//! let q = Polynomial::from_pairs(&[(4.0, 2), (1.0, 2), (2.0, 0)]);
//!
//! assert_eq!(q.to_string(), "5x^2 + 2");
//! assert_eq!((&p + &q).to_string(), "2x^4 + 5x^2 - 3x^1 + 8");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use polynomial::Polynomial;
pub use term::Term;
