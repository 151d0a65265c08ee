//! zerocount-math - Exact unit-circle zero counting for rational polynomials
//!
//! This crate counts how many complex zeros of a polynomial with rational
//! coefficients lie strictly inside, and how many lie exactly on, the unit
//! circle. The zeros are never computed and no floating point is involved:
//! - [`Polynomial`]: dense polynomials over Q with a shared denominator
//! - symmetric shortcuts: evaluation at 1, division by `(x - 1)`, deflation
//! - [`bistritz`]: the three-term Bistritz recurrence and its driver
//!
//! # Examples
//!
//! ## Counting zeros
//!
//! ```
//! use zerocount_math::{Polynomial, bistritz_rule};
//!
//! // (2x - 1)(x - 1): one zero inside, one on the circle
//! let p = Polynomial::from_integers(&[1, -3, 2]);
//! let count = bistritz_rule(&p).unwrap();
//! assert_eq!(count.as_pair(), (1, 1));
//! assert_eq!(count.outside, 0);
//! ```
//!
//! ## Parsing
//!
//! ```
//! use zerocount_math::{Polynomial, bistritz_rule};
//!
//! let p: Polynomial = "x^2 + 1/4".parse().unwrap();
//! assert_eq!(bistritz_rule(&p).unwrap().inside, 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bistritz;
pub mod error;
pub mod polynomial;

pub use bistritz::{BistritzCounter, BistritzStats, ZeroCount, bistritz_rule};
pub use error::{Result, ZeroCountError};
pub use polynomial::Polynomial;
