//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;
    use crate::term::Term;

    // Small integer coefficients keep every sum and product exact in f64
    fn small_term() -> impl Strategy<Value = Term> {
        (-20i32..20, -2i32..6).prop_map(|(c, e)| Term::new(f64::from(c), e))
    }

    // Strategy for generating raw, unnormalized term lists
    fn raw_terms() -> impl Strategy<Value = Vec<Term>> {
        proptest::collection::vec(small_term(), 0..8)
    }

    fn small_poly() -> impl Strategy<Value = Polynomial> {
        raw_terms().prop_map(Polynomial::new)
    }

    fn is_normalized(p: &Polynomial) -> bool {
        p.terms().windows(2).all(|w| w[0].exponent() > w[1].exponent())
            && p.terms().iter().all(|t| t.coefficient() != 0.0)
    }

    proptest! {
        #[test]
        fn construction_normalizes(terms in raw_terms()) {
            prop_assert!(is_normalized(&Polynomial::new(terms)));
        }

        #[test]
        fn normalization_idempotent(p in small_poly()) {
            let again = Polynomial::new(p.terms().to_vec());
            prop_assert_eq!(again, p);
        }

        #[test]
        fn construction_sums_by_exponent(terms in raw_terms()) {
            let p = Polynomial::new(terms.clone());
            for e in -2..6 {
                let expected: f64 = terms
                    .iter()
                    .filter(|t| t.exponent() == e)
                    .map(Term::coefficient)
                    .sum();
                prop_assert_eq!(p.coefficient(e), expected);
            }
        }

        #[test]
        fn add_is_coefficientwise(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert!(is_normalized(&sum));
            for e in -4..12 {
                prop_assert_eq!(sum.coefficient(e), a.coefficient(e) + b.coefficient(e));
            }
        }

        #[test]
        fn sub_is_coefficientwise(a in small_poly(), b in small_poly()) {
            let diff = a.sub(&b);
            prop_assert!(is_normalized(&diff));
            for e in -4..12 {
                prop_assert_eq!(diff.coefficient(e), a.coefficient(e) - b.coefficient(e));
            }
        }

        #[test]
        fn sub_self_is_zero(a in small_poly()) {
            prop_assert!(a.sub(&a).is_zero());
        }

        #[test]
        fn add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn mul_distributes(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert!(left.approx_eq(&right, 1e-9));
        }

        #[test]
        fn mul_identity(a in small_poly()) {
            prop_assert_eq!(a.mul(&Polynomial::one()), a);
        }

        #[test]
        fn compound_matches_binary(a in small_poly(), b in small_poly()) {
            let mut sum = a.clone();
            sum += &b;
            prop_assert_eq!(sum, a.add(&b));

            let mut diff = a.clone();
            diff -= &b;
            prop_assert_eq!(diff, a.sub(&b));

            let mut prod = a.clone();
            prod *= &b;
            prop_assert_eq!(prod, a.mul(&b));
        }

        #[test]
        fn eval_mul(
            a in small_poly(),
            b in small_poly(),
            x in prop::sample::select(vec![-3i32, -2, -1, 1, 2, 3])
        ) {
            // (a * b)(x) = a(x) * b(x)
            let x = f64::from(x);
            let lhs = a.mul(&b).eval(x);
            let rhs = a.eval(x) * b.eval(x);
            prop_assert!((lhs - rhs).abs() <= 1e-6 * (1.0 + rhs.abs()));
        }
    }
}
