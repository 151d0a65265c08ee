//! Dense univariate polynomials over Q.
//!
//! Coefficients are stored in ascending degree order as integer numerators
//! sharing a single positive denominator. Every constructor and operation
//! returns the canonical form:
//!
//! - the highest numerator is nonzero, and the zero polynomial is the empty
//!   coefficient vector with denominator 1;
//! - the denominator is positive and coprime with the gcd of the numerators.
//!
//! Canonical forms are unique, so structural equality is value equality.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::{Result, ZeroCountError};

mod parse;
mod symmetric;

/// A univariate polynomial with rational coefficients.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polynomial {
    /// Numerators in increasing degree order: a_0 + a_1*x + a_2*x^2 + ...
    coeffs: Vec<BigInt>,
    /// Shared positive denominator.
    den: BigInt,
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::zero()
    }
}

impl Polynomial {
    /// The zero polynomial.
    #[inline]
    pub fn zero() -> Self {
        Self {
            coeffs: Vec::new(),
            den: BigInt::one(),
        }
    }

    /// The constant polynomial 1.
    pub fn one() -> Self {
        Self {
            coeffs: vec![BigInt::one()],
            den: BigInt::one(),
        }
    }

    /// Create a polynomial from rational coefficients, lowest degree first.
    pub fn from_rationals(coeffs: &[BigRational]) -> Self {
        let den = coeffs
            .iter()
            .fold(BigInt::one(), |acc, c| acc.lcm(c.denom()));
        let nums = coeffs
            .iter()
            .map(|c| c.numer() * (&den / c.denom()))
            .collect();
        Self::canonical(nums, den)
    }

    /// Create a polynomial from integer coefficients, lowest degree first.
    pub fn from_integers(coeffs: &[i64]) -> Self {
        Self::canonical(coeffs.iter().map(|&c| BigInt::from(c)).collect(), BigInt::one())
    }

    /// Create a polynomial from numerators over a common denominator.
    pub fn from_parts(numerators: Vec<BigInt>, denominator: BigInt) -> Result<Self> {
        if denominator.is_zero() {
            return Err(ZeroCountError::ZeroDenominator);
        }
        Ok(Self::canonical(numerators, denominator))
    }

    /// Bring numerators and a nonzero denominator into canonical form.
    pub(crate) fn canonical(mut coeffs: Vec<BigInt>, mut den: BigInt) -> Self {
        debug_assert!(!den.is_zero());
        while coeffs.last().is_some_and(Zero::is_zero) {
            coeffs.pop();
        }
        if coeffs.is_empty() {
            return Self::zero();
        }
        if den.is_negative() {
            den = -den;
            for c in &mut coeffs {
                *c = -std::mem::take(c);
            }
        }
        let g = coeffs.iter().fold(den.clone(), |g, c| g.gcd(c));
        if !g.is_one() {
            den /= &g;
            for c in &mut coeffs {
                *c /= &g;
            }
        }
        Self { coeffs, den }
    }

    /// Number of stored coefficients (degree + 1, or 0 for the zero polynomial).
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Check if this is the zero polynomial.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    #[inline]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// The shared denominator.
    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.den
    }

    /// The numerators, lowest degree first.
    #[inline]
    pub fn numerators(&self) -> &[BigInt] {
        &self.coeffs
    }

    /// Numerator at degree `n`, or `zero` when `n` is out of range.
    pub(crate) fn numerator_or<'a>(&'a self, n: isize, zero: &'a BigInt) -> &'a BigInt {
        usize::try_from(n)
            .ok()
            .and_then(|n| self.coeffs.get(n))
            .unwrap_or(zero)
    }

    /// Coefficient at degree `n`; zero for negative `n` or `n >= len()`.
    pub fn coefficient(&self, n: isize) -> BigRational {
        let zero = BigInt::zero();
        let num = self.numerator_or(n, &zero);
        if num.is_zero() {
            BigRational::zero()
        } else {
            BigRational::new(num.clone(), self.den.clone())
        }
    }

    /// All coefficients as rationals, lowest degree first.
    pub fn coefficients(&self) -> Vec<BigRational> {
        self.coeffs
            .iter()
            .map(|c| BigRational::new(c.clone(), self.den.clone()))
            .collect()
    }

    /// Index of the lowest nonzero coefficient; 0 for the zero polynomial.
    pub fn lambda(&self) -> usize {
        self.coeffs.iter().position(|c| !c.is_zero()).unwrap_or(0)
    }

    /// Reverse the coefficients over a formal length `len`.
    ///
    /// Coefficient `k` of the result is coefficient `len - 1 - k` of `self`.
    /// Coefficients at degree `len` or above are dropped.
    pub fn reverse(&self, len: usize) -> Polynomial {
        let coeffs = (0..len)
            .map(|k| self.coeffs.get(len - 1 - k).cloned().unwrap_or_default())
            .collect();
        Self::canonical(coeffs, self.den.clone())
    }

    /// Drop the `n` lowest coefficients (divide by x^n, discarding the remainder).
    pub fn shift_right(&self, n: usize) -> Polynomial {
        if n >= self.len() {
            return Self::zero();
        }
        Self::canonical(self.coeffs[n..].to_vec(), self.den.clone())
    }

    /// Combine two polynomials coefficient-wise over the product denominator.
    fn zip_with(&self, other: &Polynomial, op: impl Fn(BigInt, BigInt) -> BigInt) -> Polynomial {
        let zero = BigInt::zero();
        let len = self.len().max(other.len());
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).unwrap_or(&zero) * &other.den;
                let b = other.coeffs.get(i).unwrap_or(&zero) * &self.den;
                op(a, b)
            })
            .collect();
        Self::canonical(coeffs, &self.den * &other.den)
    }

    /// Add two polynomials.
    pub fn add(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() {
            return other.clone();
        }
        if other.is_zero() {
            return self.clone();
        }
        self.zip_with(other, |a, b| a + b)
    }

    /// Subtract two polynomials.
    pub fn sub(&self, other: &Polynomial) -> Polynomial {
        if other.is_zero() {
            return self.clone();
        }
        self.zip_with(other, |a, b| a - b)
    }

    /// Negate the polynomial.
    pub fn neg(&self) -> Polynomial {
        Self {
            coeffs: self.coeffs.iter().map(|c| -c).collect(),
            den: self.den.clone(),
        }
    }

    /// Multiply two polynomials.
    pub fn mul(&self, other: &Polynomial) -> Polynomial {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coeffs = vec![BigInt::zero(); self.len() + other.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            if a.is_zero() {
                continue;
            }
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] += a * b;
            }
        }
        Self::canonical(coeffs, &self.den * &other.den)
    }

    /// Multiply every coefficient by a rational constant.
    pub fn scale(&self, c: &BigRational) -> Polynomial {
        if c.is_zero() {
            return Self::zero();
        }
        let coeffs = self.coeffs.iter().map(|a| a * c.numer()).collect();
        Self::canonical(coeffs, &self.den * c.denom())
    }

    /// Compute the formal derivative.
    pub fn derivative(&self) -> Polynomial {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, c)| c * BigInt::from(k))
            .collect();
        Self::canonical(coeffs, self.den.clone())
    }

    /// Evaluate the polynomial at a point.
    pub fn eval(&self, x: &BigRational) -> BigRational {
        // Horner's method on the numerators
        let mut result = BigRational::zero();
        for c in self.coeffs.iter().rev() {
            result = result * x + BigRational::from_integer(c.clone());
        }
        result / BigRational::from_integer(self.den.clone())
    }

    /// Divide by `(x - root)` with synthetic division.
    ///
    /// Returns the quotient and the remainder, which equals `self(root)`.
    pub fn div_rem_linear(&self, root: &BigRational) -> (Polynomial, BigRational) {
        let coeffs = self.coefficients();
        let mut quotient = vec![BigRational::zero(); coeffs.len().saturating_sub(1)];
        let mut acc = BigRational::zero();
        for (k, c) in coeffs.iter().enumerate().rev() {
            acc = acc * root + c;
            if k > 0 {
                quotient[k - 1] = acc.clone();
            }
        }
        (Self::from_rationals(&quotient), acc)
    }
}

impl fmt::Display for Polynomial {
    /// Pretty form, highest degree first: `2*x^2 - 3*x + 1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        let mut first = true;
        for (k, c) in self.coefficients().iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            let magnitude = c.abs();
            if first {
                if c.is_negative() {
                    write!(f, "-")?;
                }
            } else if c.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }
            first = false;

            match (k, magnitude.is_one()) {
                (0, _) => write!(f, "{}", magnitude)?,
                (_, true) => {}
                (_, false) => write!(f, "{}*", magnitude)?,
            }
            match k {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", k)?,
            }
        }
        Ok(())
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(&self)
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Self::Output {
        Polynomial::neg(self)
    }
}

impl Add for Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::add(self, rhs)
    }
}

impl Sub for Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::sub(&self, &rhs)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::sub(self, rhs)
    }
}

impl Mul for Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::mul(&self, &rhs)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        Polynomial::mul(self, rhs)
    }
}
