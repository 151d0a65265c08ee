//! Property-based tests for unit-circle zero counting
//!
//! Polynomials are assembled from factors whose zeros are known, so the
//! expected counts follow from the factorization.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use proptest::prelude::*;
use zerocount_math::{BistritzCounter, Polynomial, bistritz_rule};

/// Factors with all zeros on the unit circle, pairwise without common zeros.
const UNIT_FACTORS: [&[i64]; 5] = [&[1, 1], &[-1, 1], &[1, 0, 1], &[1, 1, 1], &[1, -1, 1]];

/// Strategy for a linear factor `a*x - b` with `|b| != a`, as `(a, b)`
fn off_circle_factor() -> impl Strategy<Value = (i64, i64)> {
    (1i64..5, -9i64..10).prop_filter("zero on the unit circle", |&(a, b)| b.abs() != a)
}

/// Strategy for nonzero polynomials with integer coefficients
fn nonzero_poly() -> impl Strategy<Value = Polynomial> {
    prop::collection::vec(-20i64..20, 1..8)
        .prop_map(|coeffs| Polynomial::from_integers(&coeffs))
        .prop_filter("zero polynomial", |p| !p.is_zero())
}

fn product(factors: impl IntoIterator<Item = Polynomial>) -> Polynomial {
    factors
        .into_iter()
        .fold(Polynomial::one(), |acc, f| &acc * &f)
}

#[cfg(test)]
mod conservation_properties {
    use super::*;

    proptest! {
        /// inside + on + outside always equals the degree
        #[test]
        fn counts_sum_to_degree(p in nonzero_poly()) {
            let count = bistritz_rule(&p).expect("nonzero polynomial");
            prop_assert_eq!(Some(count.degree), p.degree());
            prop_assert_eq!(count.inside + count.on + count.outside, count.degree);
        }

        /// Repeated counts agree, with a fresh or a reused counter
        #[test]
        fn counting_is_deterministic(p in nonzero_poly(), q in nonzero_poly()) {
            let mut counter = BistritzCounter::new();
            let first = counter.count(&p).expect("nonzero polynomial");
            counter.count(&q).expect("nonzero polynomial");
            let again = counter.count(&p).expect("nonzero polynomial");
            prop_assert_eq!(first, again);
            prop_assert_eq!(Ok(first), bistritz_rule(&p));
            prop_assert_eq!(counter.stats().polynomials_counted, 3);
        }

        /// A nonzero rational multiple has the same zeros
        #[test]
        fn scaling_preserves_counts(p in nonzero_poly(), n in -7i64..8, d in 1i64..8) {
            prop_assume!(n != 0);
            let c = BigRational::new(BigInt::from(n), BigInt::from(d));
            prop_assert_eq!(bistritz_rule(&p.scale(&c)), bistritz_rule(&p));
        }

        /// Reversal maps z to 1/z, swapping inside and outside
        #[test]
        fn reversal_swaps_inside_and_outside(p in nonzero_poly()) {
            prop_assume!(!p.coefficient(0).is_zero());
            let count = bistritz_rule(&p).expect("nonzero polynomial");
            let reversed = bistritz_rule(&p.reverse(p.len())).expect("nonzero polynomial");
            prop_assert_eq!(reversed.inside, count.outside);
            prop_assert_eq!(reversed.on, count.on);
            prop_assert_eq!(reversed.outside, count.inside);
        }

        /// Multiplying by x adds exactly one zero inside
        #[test]
        fn zero_root_counts_inside(p in nonzero_poly()) {
            let count = bistritz_rule(&p).expect("nonzero polynomial");
            let x = Polynomial::from_integers(&[0, 1]);
            let shifted = bistritz_rule(&(&p * &x)).expect("nonzero polynomial");
            prop_assert_eq!(shifted.inside, count.inside + 1);
            prop_assert_eq!(shifted.on, count.on);
        }
    }
}

#[cfg(test)]
mod factorization_properties {
    use super::*;

    proptest! {
        /// Known factorizations give the expected counts
        #[test]
        fn counts_match_factorization(
            linear in prop::collection::vec(off_circle_factor(), 0..4),
            mask in 0usize..32,
        ) {
            let unit: Vec<&[i64]> = UNIT_FACTORS
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1usize << *i) != 0)
                .map(|(_, f)| *f)
                .collect();
            prop_assume!(!linear.is_empty() || !unit.is_empty());

            let p = product(
                linear
                    .iter()
                    .map(|&(a, b)| Polynomial::from_integers(&[-b, a]))
                    .chain(unit.iter().map(|f| Polynomial::from_integers(f))),
            );

            let expected_inside = linear.iter().filter(|(a, b)| b.abs() < *a).count();
            let expected_on: usize = unit.iter().map(|f| f.len() - 1).sum();

            let count = bistritz_rule(&p).expect("nonzero polynomial");
            prop_assert_eq!(count.inside, expected_inside, "P(x) = {}", p);
            prop_assert_eq!(count.on, expected_on, "P(x) = {}", p);
            prop_assert_eq!(count.outside, linear.len() - expected_inside);
        }

        /// Schur stability holds exactly when every factor zero is inside
        #[test]
        fn schur_stable_products(linear in prop::collection::vec(off_circle_factor(), 1..4)) {
            let p = product(linear.iter().map(|&(a, b)| Polynomial::from_integers(&[-b, a])));
            let stable = linear.iter().all(|(a, b)| b.abs() < *a);
            let count = bistritz_rule(&p).expect("nonzero polynomial");
            prop_assert_eq!(count.is_schur_stable(), stable);
        }
    }
}
