//! # Arithmetic Crossover
//!
//! Blends two parent genes into two children as convex combinations with a
//! shared random weight. Since both children are convex combinations of
//! in-domain values, they stay inside the gene bounds without clamping.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Arithmetic crossover with a fixed recombination rate.
///
/// With probability `rate` a weight `alpha ~ U(0, 1)` is drawn and the
/// children become
///
/// ```text
/// c1 = alpha·p1 + (1 - alpha)·p2
/// c2 = alpha·p2 + (1 - alpha)·p1
/// ```
///
/// Otherwise the parent genes are passed through unchanged. Either way the
/// returned genes are unevaluated; the caller re-scores them.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct ArithmeticCrossover {
    rate: f64,
}

impl ArithmeticCrossover {
    /// Creates a new `ArithmeticCrossover` with the given recombination rate.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is not within `[0, 1]`.
    pub fn new(rate: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(GeneticError::Configuration(format!(
                "Crossover rate must be within [0, 1], got {}",
                rate
            )));
        }
        Ok(Self { rate })
    }

    /// Recombines two parent genes into two child genes.
    pub fn recombine(&self, p1: f64, p2: f64, rng: &mut RandomNumberGenerator) -> (f64, f64) {
        if rng.uniform(0.0, 1.0) < self.rate {
            let alpha = rng.uniform(0.0, 1.0);
            (
                alpha * p1 + (1.0 - alpha) * p2,
                alpha * p2 + (1.0 - alpha) * p1,
            )
        } else {
            (p1, p2)
        }
    }
}
