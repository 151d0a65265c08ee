//! The three-term Bistritz recurrence.
//!
//! Each member `T_i` of the sequence is formally symmetric and is paired with
//! its value `sigma_i = T_i(1)`. A new member is produced from the two
//! previous ones by
//!
//! ```text
//! T_next = delta * (x^(2*lambda + 1) + 1) * T_curr * x^(-lambda) - T_prev
//! ```
//!
//! divided by `x`, where `lambda` is the index of the lowest nonzero
//! coefficient of `T_curr` and `delta = T_prev(0) / T_curr[lambda]`.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::instrument;

use crate::polynomial::Polynomial;

/// A member of the recurrence together with its value at `x = 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    /// Formally symmetric polynomial `T_i`.
    pub poly: Polynomial,
    /// `T_i(1)`.
    pub sigma: BigRational,
}

impl Slot {
    /// Pair a formally symmetric polynomial with its value at 1.
    pub fn from_symmetric(poly: Polynomial) -> Self {
        let sigma = poly.evaluate_symmetric_at_1();
        Self { poly, sigma }
    }

    /// Negate both the polynomial and its value.
    pub fn negate(&mut self) {
        self.poly = -&self.poly;
        self.sigma = -std::mem::take(&mut self.sigma);
    }
}

/// Initial pair `T1 = D* + D`, `T2 = (D - D*) / (x - 1)`.
///
/// `D*` is the reversal of `D` over its own length.
#[instrument(level = "trace", skip_all)]
pub fn rule_init(d: &Polynomial) -> (Slot, Slot) {
    let reversed = d.reverse(d.len());
    let t2 = (d - &reversed).divide_by_x_minus_1_antisymmetric();
    let t1 = &reversed + d;
    (Slot::from_symmetric(t1), Slot::from_symmetric(t2))
}

/// `T_prev(0) / T_curr[lambda]`, zero when either polynomial is zero.
pub fn recursion_ratio(prev: &Polynomial, curr: &Polynomial) -> BigRational {
    if prev.is_zero() || curr.is_zero() {
        return BigRational::zero();
    }
    prev.coefficient(0) / curr.coefficient(curr.lambda() as isize)
}

/// Next member of the sequence with `formal_length` coefficient slots.
///
/// Only the lower half is computed; the upper half is mirrored. A formal
/// length of zero yields the zero polynomial with sigma 0. A zero `curr`
/// is allowed and gives `-T_prev / x`.
#[instrument(level = "trace", skip_all, fields(formal_length = formal_length))]
pub fn do_recurrence(prev: &Slot, curr: &Slot, formal_length: usize) -> Slot {
    if formal_length == 0 {
        return Slot::default();
    }

    let lambda = curr.poly.lambda() as isize;
    let delta = recursion_ratio(&prev.poly, &curr.poly);
    tracing::trace!(lambda, delta = %delta, "regular case");

    let sigma = &delta * &curr.sigma * BigRational::from_integer(BigInt::from(2)) - &prev.sigma;

    // t3[i] = delta * (t2[i - lambda] + t2[i + lambda + 1]) - t1[i + 1]
    // over the denominator delta.den * den(T_curr) * den(T_prev)
    let delta_num = delta.numer() * prev.poly.denominator();
    let delta_den = delta.denom() * curr.poly.denominator();
    let zero = BigInt::zero();
    let t1 = |n: isize| prev.poly.numerator_or(n, &zero);
    let t2 = |n: isize| curr.poly.numerator_or(n, &zero);

    let mid = (formal_length - 1) / 2;
    let mut coeffs = Vec::with_capacity(formal_length);
    for i in 0..=mid as isize {
        let c = (t2(i - lambda) + t2(i + lambda + 1)) * &delta_num - &delta_den * t1(i + 1);
        coeffs.push(c);
    }
    for i in mid + 1..formal_length {
        let mirrored = coeffs[formal_length - 1 - i].clone();
        coeffs.push(mirrored);
    }

    let den = &delta_den * prev.poly.denominator();
    Slot {
        poly: Polynomial::canonical(coeffs, den),
        sigma,
    }
}

/// Recover from `T_curr = 0` with `T_prev(0) != 0`.
///
/// Reinitializes from the derivative `D = T_prev'`: the returned triple is
/// `(D, -(D* + D), (D - D*) / (x - 1))` with matching values at 1. The
/// first slot keeps the old sigma of `T_prev`.
#[instrument(level = "trace", skip_all)]
pub fn do_singular(prev: &Slot) -> (Slot, Slot, Slot) {
    let derivative = prev.poly.derivative();
    let (mut curr, next) = rule_init(&derivative);
    // D* has the opposite orientation to the rule's reciprocal
    curr.negate();
    let first = Slot {
        poly: derivative,
        sigma: prev.sigma.clone(),
    };
    (first, curr, next)
}
