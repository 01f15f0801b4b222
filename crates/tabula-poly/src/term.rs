//! Single monomials `c * x^e`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

/// A single term of a univariate polynomial.
///
/// Two terms are equal when their exponents are equal; the coefficient plays
/// no part in equality, hashing or ordering. This is what lets a polynomial
/// find "the term for x^e" by ordinary comparison.
#[derive(Clone, Copy, Debug, Default)]
pub struct Term {
    coefficient: f64,
    exponent: i32,
}

impl Term {
    /// Creates the term `coefficient * x^exponent`.
    #[must_use]
    pub const fn new(coefficient: f64, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    /// Returns the coefficient.
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the exponent.
    #[must_use]
    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Sets the coefficient.
    pub fn set_coefficient(&mut self, coefficient: f64) {
        self.coefficient = coefficient;
    }

    /// Sets the exponent.
    pub fn set_exponent(&mut self, exponent: i32) {
        self.exponent = exponent;
    }

    /// Adds `delta` to the coefficient in place.
    pub(crate) fn accumulate(&mut self, delta: f64) {
        self.coefficient += delta;
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.exponent == other.exponent
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.exponent.hash(state);
    }
}

impl PartialOrd for Term {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Term {
    fn cmp(&self, other: &Self) -> Ordering {
        self.exponent.cmp(&other.exponent)
    }
}

impl Neg for Term {
    type Output = Term;

    fn neg(self) -> Term {
        Term::new(-self.coefficient, self.exponent)
    }
}

impl From<(f64, i32)> for Term {
    fn from((coefficient, exponent): (f64, i32)) -> Self {
        Self::new(coefficient, exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default() {
        let t = Term::default();
        assert_eq!(t.coefficient(), 0.0);
        assert_eq!(t.exponent(), 0);
    }

    #[test]
    fn test_equality_ignores_coefficient() {
        assert_eq!(Term::new(2.0, 3), Term::new(-7.5, 3));
        assert_ne!(Term::new(2.0, 3), Term::new(2.0, 2));
    }

    #[test]
    fn test_hash_follows_exponent() {
        let set: HashSet<Term> = [Term::new(1.0, 2), Term::new(5.0, 2), Term::new(1.0, 0)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_setters_and_neg() {
        let mut t = Term::new(1.0, 1);
        t.set_coefficient(4.0);
        t.set_exponent(6);
        let n = -t;
        assert_eq!(n.coefficient(), -4.0);
        assert_eq!(n.exponent(), 6);
    }

    #[test]
    fn test_ordering() {
        let mut terms = vec![Term::new(1.0, 0), Term::new(1.0, 4), Term::new(1.0, 2)];
        terms.sort_by(|a, b| b.cmp(a));
        let exps: Vec<_> = terms.iter().map(Term::exponent).collect();
        assert_eq!(exps, vec![4, 2, 0]);
    }
}
