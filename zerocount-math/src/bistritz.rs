//! Unit-circle zero counting with the Bistritz rule.
//!
//! Counts the complex zeros of a rational polynomial that lie strictly inside
//! and exactly on the unit circle, without locating them and without any
//! rounding.
//!
//! ## Algorithm
//!
//! 1. Remove every factor `(x - 1)`; its multiplicity seeds the on-circle count.
//! 2. Build the symmetric pair `T_n = D* + D`, `T_{n-1} = (D - D*) / (x - 1)`.
//! 3. Run the three-term recurrence down to `T_0`, counting sign variations
//!    in `T_i(1)`. When some `T_i` vanishes while `T_{i+1}(0) != 0` the
//!    sequence is restarted from `T_{i+1}'` and the position is remembered.
//! 4. `inside = deg - vars`; the zeros of the last nonzero member before the
//!    first singularity give the on-circle count.
//!
//! ## References
//!
//! - Y. Bistritz, "Zero location of polynomials with respect to the unit-circle
//!   unhampered by nonessential singularities", IEEE TCAS-I, 2002.

use num_rational::BigRational;
use num_traits::{Signed, Zero};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{Result, ZeroCountError};
use crate::polynomial::Polynomial;

pub mod recurrence;

pub use recurrence::{Slot, do_recurrence, do_singular, recursion_ratio, rule_init};

/// Zero counts of a polynomial with respect to the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ZeroCount {
    /// Degree of the input polynomial.
    pub degree: usize,
    /// Zeros with |z| < 1, with multiplicity.
    pub inside: usize,
    /// Zeros with |z| = 1, with multiplicity.
    pub on: usize,
    /// Zeros with |z| > 1, with multiplicity.
    pub outside: usize,
}

impl ZeroCount {
    /// The `(inside, on)` pair.
    pub fn as_pair(&self) -> (usize, usize) {
        (self.inside, self.on)
    }

    /// Check if every zero lies strictly inside the unit circle (Schur stability).
    pub fn is_schur_stable(&self) -> bool {
        self.inside == self.degree
    }
}

/// Statistics for zero counting.
#[derive(Debug, Clone, Default)]
pub struct BistritzStats {
    /// Polynomials counted.
    pub polynomials_counted: u64,
    /// Ordinary recurrence steps.
    pub regular_steps: u64,
    /// Steps with `T_i = 0` and `T_{i+1}(0) = 0`.
    pub trivial_zero_steps: u64,
    /// Singular restarts from a derivative.
    pub singular_steps: u64,
    /// Recurrences stopped early because two members vanished.
    pub halts: u64,
    /// Roots at `x = 1` removed before the recurrence.
    pub unit_roots_deflated: u64,
}

/// What the recurrence does at one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Regular,
    TrivialZero,
    Singular,
    Halt,
}

impl Step {
    fn classify(prev: &Slot, curr: &Slot) -> Self {
        if !curr.poly.is_zero() {
            Step::Regular
        } else if prev.poly.is_zero() {
            Step::Halt
        } else if prev.poly.coefficient(0).is_zero() {
            Step::TrivialZero
        } else {
            Step::Singular
        }
    }
}

/// Ring of the three live members `[T_prev, T_curr, T_next]`.
struct Ring {
    slots: [Slot; 3],
}

impl Ring {
    fn new(prev: Slot, curr: Slot) -> Self {
        Self {
            slots: [prev, curr, Slot::default()],
        }
    }

    fn prev(&self) -> &Slot {
        &self.slots[0]
    }

    fn curr(&self) -> &Slot {
        &self.slots[1]
    }

    fn set_next(&mut self, next: Slot) {
        self.slots[2] = next;
    }

    fn replace(&mut self, (prev, curr, next): (Slot, Slot, Slot)) {
        self.slots = [prev, curr, next];
    }

    /// `T_prev <- T_curr <- T_next`; the old `T_prev` becomes scratch.
    fn rotate(&mut self) {
        self.slots.rotate_left(1);
    }
}

/// Running count of sign changes between consecutive nonzero signs.
#[derive(Debug, Clone, Copy)]
struct SignVariations {
    last: i8,
    count: usize,
}

impl SignVariations {
    fn new(first: i8) -> Self {
        Self {
            last: first,
            count: 0,
        }
    }

    fn push(&mut self, sign: i8) {
        if self.last * sign < 0 {
            self.count += 1;
        }
        if sign != 0 {
            self.last = sign;
        }
    }
}

fn sign(value: &BigRational) -> i8 {
    if value.is_positive() {
        1
    } else if value.is_negative() {
        -1
    } else {
        0
    }
}

/// Zero counting engine.
#[derive(Debug, Default)]
pub struct BistritzCounter {
    /// Statistics.
    stats: BistritzStats,
}

impl BistritzCounter {
    /// Create a new counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the zeros of `poly` inside and on the unit circle.
    ///
    /// Fails with [`ZeroCountError::InvalidInput`] for the zero polynomial.
    #[instrument(level = "trace", skip_all)]
    pub fn count(&mut self, poly: &Polynomial) -> Result<ZeroCount> {
        let Some(degree) = poly.degree() else {
            return Err(ZeroCountError::InvalidInput(
                "the zero polynomial has no zero count".to_string(),
            ));
        };
        debug!(poly = %poly, "received");

        let (multiplicity, reduced) = poly.deflate_root_at_1();
        let deg = degree - multiplicity;
        self.stats.unit_roots_deflated += multiplicity as u64;
        debug!(deg, reduced = %reduced, "(x-1) factors cleared");

        let (prev, curr) = rule_init(&reduced);
        let mut variations = SignVariations::new(sign(&prev.sigma));
        debug!(i = deg, t = %prev.poly, lambda = prev.poly.lambda(), sigma = %prev.sigma);
        let mut ring = Ring::new(prev, curr);

        let mut singular: Option<usize> = None;
        let mut vars_reg = 0;

        for i in (0..deg).rev() {
            debug!(i, t = %ring.curr().poly, lambda = ring.curr().poly.lambda(), sigma = %ring.curr().sigma, "loop");

            match Step::classify(ring.prev(), ring.curr()) {
                // Not produced by rule_init of a nonzero D; only a degenerate
                // trivial-zero step could empty both members.
                Step::Halt => {
                    self.stats.halts += 1;
                    break;
                }
                step @ (Step::Regular | Step::TrivialZero) => {
                    if step == Step::Regular {
                        self.stats.regular_steps += 1;
                    } else {
                        self.stats.trivial_zero_steps += 1;
                    }
                    let next = do_recurrence(ring.prev(), ring.curr(), i);
                    ring.set_next(next);
                }
                Step::Singular => {
                    self.stats.singular_steps += 1;
                    let triple = do_singular(ring.prev());
                    ring.replace(triple);
                    debug!(s = i + 1, t = %ring.curr().poly, sigma = %ring.curr().sigma, "singularity");

                    if singular.is_none() {
                        singular = Some(i);
                        vars_reg = variations.count;
                        debug!(vars_reg, "sign variations before singularity");
                    }
                }
            }

            variations.push(sign(&ring.curr().sigma));
            ring.rotate();
        }

        let vars = variations.count;
        if singular.is_none() {
            vars_reg = vars;
        }
        debug!(?singular, vars_reg, vars, "end loop");

        let count = Self::finish(degree, deg, multiplicity, vars, vars_reg, singular)?;
        self.stats.polynomials_counted += 1;
        debug!(inside = count.inside, on = count.on, "roots IUC/UC");
        Ok(count)
    }

    /// Combine the loop results into the final counts.
    fn finish(
        degree: usize,
        deg: usize,
        multiplicity: usize,
        vars: usize,
        vars_reg: usize,
        singular: Option<usize>,
    ) -> Result<ZeroCount> {
        let correction = singular.map_or(0, |s| s as i64 + 1);
        let inside = deg as i64 - vars as i64;
        let on = multiplicity as i64 + 2 * (vars as i64 - vars_reg as i64) - correction;
        let outside = degree as i64 - inside - on;

        match (
            usize::try_from(inside),
            usize::try_from(on),
            usize::try_from(outside),
        ) {
            (Ok(inside), Ok(on), Ok(outside)) => Ok(ZeroCount {
                degree,
                inside,
                on,
                outside,
            }),
            _ => Err(ZeroCountError::Internal(format!(
                "inconsistent counts: degree {}, inside {}, on {}",
                degree, inside, on
            ))),
        }
    }

    /// Get statistics.
    pub fn stats(&self) -> &BistritzStats {
        &self.stats
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.stats = BistritzStats::default();
    }
}

/// Count the zeros of `poly` inside and on the unit circle.
pub fn bistritz_rule(poly: &Polynomial) -> Result<ZeroCount> {
    BistritzCounter::new().count(poly)
}
