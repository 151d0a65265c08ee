//! Property-based tests for the polynomial primitives
//!
//! This module tests:
//! - Canonical form after arithmetic
//! - Evaluation at 1 of symmetric polynomials
//! - Division of antisymmetric polynomials by (x - 1)
//! - Deflation of the root x = 1

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use proptest::prelude::*;
use zerocount_math::Polynomial;

/// Strategy for generating small coefficients
fn coeff_strategy() -> impl Strategy<Value = i64> {
    -10i64..10i64
}

/// Strategy for generating polynomials with rational coefficients
fn poly_strategy() -> impl Strategy<Value = Polynomial> {
    (prop::collection::vec(coeff_strategy(), 0..8), 1i64..6i64).prop_map(|(nums, den)| {
        let coeffs: Vec<BigRational> = nums
            .iter()
            .map(|&n| BigRational::new(BigInt::from(n), BigInt::from(den)))
            .collect();
        Polynomial::from_rationals(&coeffs)
    })
}

/// Mirror `half` into a formally symmetric (or antisymmetric) coefficient list,
/// shifted up by `shift` leading zeros.
fn mirrored(half: &[i64], odd: bool, anti: bool, shift: usize) -> Vec<i64> {
    let mut coeffs = vec![0; shift];
    coeffs.extend_from_slice(half);
    if odd && !anti {
        coeffs.push(1);
    } else if odd {
        coeffs.push(0);
    }
    for &c in half.iter().rev() {
        coeffs.push(if anti { -c } else { c });
    }
    coeffs
}

/// Helper to create rational
fn rat(n: i64) -> BigRational {
    BigRational::from_integer(BigInt::from(n))
}

fn is_canonical(p: &Polynomial) -> bool {
    if p.is_zero() {
        return p.denominator().is_one();
    }
    let g = p
        .numerators()
        .iter()
        .fold(p.denominator().clone(), |g, c| g.gcd(c));
    p.denominator().is_positive()
        && g.is_one()
        && p.numerators().last().is_some_and(|c| !c.is_zero())
}

#[cfg(test)]
mod canonical_form_properties {
    use super::*;

    proptest! {
        /// Every constructor yields canonical form
        #[test]
        fn construction_is_canonical(p in poly_strategy()) {
            prop_assert!(is_canonical(&p));
        }

        /// Arithmetic results stay canonical
        #[test]
        fn arithmetic_is_canonical(p in poly_strategy(), q in poly_strategy()) {
            prop_assert!(is_canonical(&(&p + &q)));
            prop_assert!(is_canonical(&(&p - &q)));
            prop_assert!(is_canonical(&(&p * &q)));
            prop_assert!(is_canonical(&p.derivative()));
            prop_assert!(is_canonical(&p.reverse(p.len() + 2)));
        }

        /// Subtracting a polynomial from itself gives zero
        #[test]
        fn sub_self_is_zero(p in poly_strategy()) {
            prop_assert!((&p - &p).is_zero());
        }

        /// Coefficients outside the stored range are zero
        #[test]
        fn coefficient_out_of_range(p in poly_strategy(), n in 1isize..5) {
            prop_assert_eq!(p.coefficient(-n), BigRational::zero());
            prop_assert_eq!(p.coefficient(p.len() as isize + n - 1), BigRational::zero());
        }

        /// Parsing the printed form gives the same polynomial
        #[test]
        fn display_parse_round_trip(p in poly_strategy()) {
            let parsed: Polynomial = p.to_string().parse().expect("printed form parses");
            prop_assert_eq!(parsed, p);
        }
    }
}

#[cfg(test)]
mod symmetric_properties {
    use super::*;

    proptest! {
        /// The symmetric shortcut agrees with Horner evaluation at 1
        #[test]
        fn evaluate_symmetric_matches_eval(
            half in prop::collection::vec(coeff_strategy(), 1..5),
            odd in any::<bool>(),
            shift in 0usize..3,
            den in 1i64..6,
        ) {
            let nums = mirrored(&half, odd, false, shift);
            let coeffs: Vec<BigRational> = nums
                .iter()
                .map(|&n| BigRational::new(BigInt::from(n), BigInt::from(den)))
                .collect();
            let p = Polynomial::from_rationals(&coeffs);
            prop_assert!(p.is_formally_symmetric());
            prop_assert_eq!(p.evaluate_symmetric_at_1(), p.eval(&BigRational::one()));
        }

        /// The antisymmetric shortcut agrees with generic division by (x - 1)
        #[test]
        fn divide_antisymmetric_matches_division(
            half in prop::collection::vec(coeff_strategy(), 1..5),
            odd in any::<bool>(),
            shift in 0usize..3,
        ) {
            let p = Polynomial::from_integers(&mirrored(&half, odd, true, shift));
            prop_assert!(p.is_formally_antisymmetric());

            let (quotient, remainder) = p.div_rem_linear(&BigRational::one());
            prop_assert!(remainder.is_zero());

            let shortcut = p.divide_by_x_minus_1_antisymmetric();
            prop_assert!(shortcut.is_formally_symmetric());
            prop_assert!(is_canonical(&shortcut));
            prop_assert_eq!(shortcut, quotient);
        }

        /// D + D* is symmetric and D - D* antisymmetric
        #[test]
        fn reversal_pair_symmetry(p in poly_strategy()) {
            let reversed = p.reverse(p.len());
            prop_assert!((&p + &reversed).is_formally_symmetric());
            prop_assert!((&p - &reversed).is_formally_antisymmetric());
        }
    }
}

#[cfg(test)]
mod deflation_properties {
    use super::*;

    proptest! {
        /// Deflating twice removes nothing the second time
        #[test]
        fn deflation_is_idempotent(p in poly_strategy()) {
            let (_, reduced) = p.deflate_root_at_1();
            let (again_m, again) = reduced.deflate_root_at_1();
            prop_assert_eq!(again_m, 0);
            prop_assert_eq!(again, reduced);
        }

        /// Deflation finds every planted factor (x - 1)
        #[test]
        fn deflation_recovers_planted_roots(p in poly_strategy(), k in 0usize..4) {
            prop_assume!(!p.is_zero());
            let (base_m, _) = p.deflate_root_at_1();
            let factor = Polynomial::from_integers(&[-1, 1]);
            let mut planted = p.clone();
            for _ in 0..k {
                planted = &planted * &factor;
            }

            let (m, reduced) = planted.deflate_root_at_1();
            prop_assert_eq!(m, base_m + k);
            prop_assert!(!reduced.eval(&BigRational::one()).is_zero());

            let mut rebuilt = reduced;
            for _ in 0..m {
                rebuilt = &rebuilt * &factor;
            }
            prop_assert_eq!(rebuilt, planted);
        }

        /// Evaluation is linear in the coefficients
        #[test]
        fn eval_linear(p in poly_strategy(), q in poly_strategy(), x in -4i64..4) {
            let x = rat(x);
            prop_assert_eq!((&p + &q).eval(&x), p.eval(&x) + q.eval(&x));
        }
    }
}
