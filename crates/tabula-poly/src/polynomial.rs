//! Sparse univariate polynomials.
//!
//! A polynomial is a list of [`Term`]s kept in canonical form: sorted by
//! strictly descending exponent, one term per exponent, no zero coefficients.
//! Every constructor and every arithmetic operation restores that form before
//! returning, so the empty list is the one and only zero polynomial.

use std::fmt;
use std::io::{self, Write};
use std::ops;

use log::trace;
use num_traits::{One, Zero};

use crate::term::Term;

/// A sparse univariate polynomial with `f64` coefficients.
#[derive(Clone, Debug, Default)]
pub struct Polynomial {
    /// Terms in descending exponent order.
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates a polynomial from terms.
    ///
    /// Terms may arrive in any order and may repeat exponents; they are
    /// sorted and combined.
    #[must_use]
    pub fn new(terms: Vec<Term>) -> Self {
        let mut poly = Self { terms };
        poly.normalize();
        poly
    }

    /// Creates a polynomial from `(coefficient, exponent)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, i32)]) -> Self {
        pairs.iter().copied().map(Term::from).collect()
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(1.0)
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::monomial(c, 0)
    }

    /// Creates the monomial `c * x^exponent`.
    #[must_use]
    pub fn monomial(c: f64, exponent: i32) -> Self {
        Self::new(vec![Term::new(c, exponent)])
    }

    /// Replaces the terms, normalizing them.
    pub fn set_terms(&mut self, terms: Vec<Term>) {
        self.terms = terms;
        self.normalize();
    }

    /// Returns the terms in descending exponent order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the highest exponent, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<i32> {
        self.terms.first().map(Term::exponent)
    }

    /// Returns the term with the highest exponent.
    #[must_use]
    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// Returns the coefficient of `x^exponent` (zero if absent).
    #[must_use]
    pub fn coefficient(&self, exponent: i32) -> f64 {
        let probe = Term::new(0.0, exponent);
        self.terms
            .iter()
            .find(|t| **t == probe)
            .map_or(0.0, Term::coefficient)
    }

    /// Evaluates the polynomial at `x`.
    #[must_use]
    pub fn eval(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .map(|t| t.coefficient() * x.powi(t.exponent()))
            .sum()
    }

    /// Compares coefficient-wise within an absolute tolerance.
    ///
    /// An exponent missing on one side counts as a zero coefficient there.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.terms
            .iter()
            .chain(&other.terms)
            .all(|t| (self.coefficient(t.exponent()) - other.coefficient(t.exponent())).abs() <= tolerance)
    }

    /// Sorts terms, combines like terms and drops zero coefficients.
    fn normalize(&mut self) {
        let before = self.terms.len();

        // Descending exponent; leading term first
        self.terms.sort_by(|a, b| b.cmp(a));

        let mut merged: Vec<Term> = Vec::with_capacity(before);
        for term in self.terms.drain(..) {
            match merged.last_mut() {
                Some(last) if *last == term => last.accumulate(term.coefficient()),
                _ => merged.push(term),
            }
        }
        merged.retain(|t| t.coefficient() != 0.0);

        if merged.len() != before {
            trace!("normalized {before} terms into {}", merged.len());
        }
        self.terms = merged;
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for term in &other.terms {
            match result.terms.iter_mut().find(|t| **t == *term) {
                Some(existing) => existing.accumulate(term.coefficient()),
                None => result.terms.push(*term),
            }
        }
        result.normalize();
        result
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for term in &other.terms {
            match result.terms.iter_mut().find(|t| **t == *term) {
                Some(existing) => existing.accumulate(-term.coefficient()),
                None => result.terms.push(-*term),
            }
        }
        result.normalize();
        result
    }

    /// Multiplies two polynomials (schoolbook algorithm).
    ///
    /// # Panics
    ///
    /// Panics if some product term's exponent falls outside the `i32` range.
    /// Use [`Polynomial::checked_mul`] to handle that case.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        match self.checked_mul(other) {
            Some(product) => product,
            None => panic!("exponent overflow in polynomial product"),
        }
    }

    /// Multiplies two polynomials, returning `None` if an exponent sum
    /// overflows `i32`.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        if self.is_zero() || other.is_zero() {
            return Some(Self::zero());
        }

        let mut product: Vec<Term> = Vec::with_capacity(self.len() * other.len());

        for t1 in &self.terms {
            for t2 in &other.terms {
                let term = Term::new(
                    t1.coefficient() * t2.coefficient(),
                    t1.exponent().checked_add(t2.exponent())?,
                );
                match product.iter_mut().find(|t| **t == term) {
                    Some(existing) => existing.accumulate(term.coefficient()),
                    None => product.push(term),
                }
            }
        }

        Some(Self::new(product))
    }

    /// Writes the polynomial as a single line, terminated by a newline.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter().map(|t| -*t).collect(),
        }
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len()
            && self.terms.iter().zip(&other.terms).all(|(a, b)| {
                a.exponent() == b.exponent() && a.coefficient() == b.coefficient()
            })
    }
}

impl From<Vec<Term>> for Polynomial {
    fn from(terms: Vec<Term>) -> Self {
        Self::new(terms)
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident) => {
        impl ops::$trait<&Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$method(self, rhs)
            }
        }

        impl ops::$trait<Polynomial> for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$method(self, &rhs)
            }
        }

        impl ops::$trait<&Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: &Polynomial) -> Polynomial {
                Polynomial::$method(&self, rhs)
            }
        }

        impl ops::$trait<Polynomial> for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                Polynomial::$method(&self, &rhs)
            }
        }

        impl ops::$assign_trait<&Polynomial> for Polynomial {
            fn $assign_method(&mut self, rhs: &Polynomial) {
                *self = Polynomial::$method(self, rhs);
            }
        }

        impl ops::$assign_trait<Polynomial> for Polynomial {
            fn $assign_method(&mut self, rhs: Polynomial) {
                *self = Polynomial::$method(self, &rhs);
            }
        }
    };
}

impl_binary_op!(Add, add, AddAssign, add_assign);
impl_binary_op!(Sub, sub, SubAssign, sub_assign);
impl_binary_op!(Mul, mul, MulAssign, mul_assign);

impl ops::Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(self)
    }
}

impl ops::Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        Polynomial::neg(&self)
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, term) in self.terms.iter().enumerate() {
            let c = term.coefficient();
            let e = term.exponent();

            if i == 0 {
                if c < 0.0 {
                    write!(f, "-")?;
                }
            } else if c < 0.0 {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            // Unit coefficients are implied, except on the constant term
            let magnitude = c.abs();
            if magnitude != 1.0 || e == 0 {
                write!(f, "{magnitude}")?;
            }
            if e != 0 {
                write!(f, "x^{e}")?;
            }
        }

        Ok(())
    }
}
