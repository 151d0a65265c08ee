//! Property-based tests for zerocount-math
//!
//! This module contains property tests for:
//! - Canonical form of polynomial arithmetic
//! - Symmetric shortcuts against generic evaluation and division
//! - Zero counts of polynomials with known factorizations

mod counting_properties;
mod symmetry_properties;
