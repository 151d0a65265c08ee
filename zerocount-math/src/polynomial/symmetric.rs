//! Shortcuts for formally symmetric and antisymmetric polynomials.
//!
//! Symmetry is measured over the support `lambda..=degree`: a polynomial
//! `x^l * (c_0 + ... + c_m x^m)` is formally symmetric when `c_k = c_{m-k}`,
//! and formally antisymmetric when `c_k = -c_{m-k}`. Every intermediate
//! polynomial of the Bistritz recurrence is formally symmetric, so only the
//! lower half of its coefficients has to be touched.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use tracing::instrument;

use super::Polynomial;

impl Polynomial {
    /// Support bounds `(lambda, degree)`, `None` for the zero polynomial.
    fn support(&self) -> Option<(usize, usize)> {
        self.degree().map(|top| (self.lambda(), top))
    }

    /// Check `c_k = c_{m-k}` over the support.
    pub fn is_formally_symmetric(&self) -> bool {
        self.support().is_none_or(|(lo, hi)| {
            (0..=(hi - lo) / 2).all(|k| self.coeffs[lo + k] == self.coeffs[hi - k])
        })
    }

    /// Check `c_k = -c_{m-k}` over the support.
    pub fn is_formally_antisymmetric(&self) -> bool {
        self.support().is_none_or(|(lo, hi)| {
            (0..=(hi - lo) / 2).all(|k| self.coeffs[lo + k] == -&self.coeffs[hi - k])
        })
    }

    /// Value at `x = 1` of a formally symmetric polynomial.
    ///
    /// Sums the lower half of the support, doubles it and adds the middle
    /// coefficient once when the support has odd length.
    #[instrument(level = "trace", skip_all)]
    pub fn evaluate_symmetric_at_1(&self) -> BigRational {
        let Some((start, top)) = self.support() else {
            return BigRational::zero();
        };
        debug_assert!(self.is_formally_symmetric(), "not symmetric: {}", self);

        let length = top + 1 - start;
        let mid = start + length / 2;
        let half: BigInt = self.coeffs[start..mid].iter().sum();
        let mut total = half * 2u32;
        if length % 2 == 1 {
            total += &self.coeffs[mid];
        }
        BigRational::new(total, self.den.clone())
    }

    /// Quotient of a formally antisymmetric polynomial by `(x - 1)`.
    ///
    /// Antisymmetry guarantees a zero remainder and a formally symmetric
    /// quotient. The upper half of the quotient comes from running sums taken
    /// from the top coefficient down to the midpoint; the lower half is
    /// mirrored from it.
    #[instrument(level = "trace", skip_all)]
    pub fn divide_by_x_minus_1_antisymmetric(&self) -> Polynomial {
        let Some((start, top)) = self.support() else {
            return Polynomial::zero();
        };
        debug_assert!(self.is_formally_antisymmetric(), "not antisymmetric: {}", self);
        if top == 0 {
            // A nonzero constant is never antisymmetric.
            return Polynomial::zero();
        }

        let half = (top + 1 - start) / 2;
        let mut quotient = vec![BigInt::zero(); top];

        // q_{i-1} = c_i + c_{i+1} + ... + c_top
        let mut acc = BigInt::zero();
        for i in (start + half..=top).rev() {
            acc += &self.coeffs[i];
            quotient[i - 1] = acc.clone();
        }
        for k in 0..half.saturating_sub(1) {
            quotient[start + k] = quotient[top - 1 - k].clone();
        }

        Polynomial::canonical(quotient, self.den.clone())
    }

    /// Remove every factor `(x - 1)`.
    ///
    /// Returns the multiplicity of the root `x = 1` together with the reduced
    /// polynomial. The zero polynomial is returned unchanged with
    /// multiplicity 0.
    #[instrument(level = "trace", skip_all)]
    pub fn deflate_root_at_1(&self) -> (usize, Polynomial) {
        let mut multiplicity = 0;
        let mut reduced = self.clone();

        while !reduced.is_zero() {
            // sums[i] = c_i + ... + c_top; sums[0] is the scaled value at 1
            let mut acc = BigInt::zero();
            let mut sums: Vec<BigInt> = reduced
                .coeffs
                .iter()
                .rev()
                .map(|c| {
                    acc += c;
                    acc.clone()
                })
                .collect();
            if !acc.is_zero() {
                break;
            }
            sums.reverse();
            sums.remove(0);
            multiplicity += 1;
            reduced = Polynomial::canonical(sums, reduced.den.clone());
        }

        tracing::trace!(multiplicity, reduced = %reduced, "deflated roots at 1");
        (multiplicity, reduced)
    }
}
