//! # Bounded Mutation
//!
//! Perturbs a gene by a small uniform delta with fixed probability, then
//! clamps the result back into the gene domain.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Uniform mutation with a fixed rate, step magnitude, and gene bounds.
///
/// With probability `rate` a delta `~ U(-step, step)` is added to the gene
/// and the sum is clamped to `[min, max]`; otherwise the gene is returned
/// unchanged. Mutation runs before re-evaluation and does not itself produce
/// a fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct BoundedMutation {
    rate: f64,
    step: f64,
    min: f64,
    max: f64,
}

impl BoundedMutation {
    /// Creates a new `BoundedMutation`.
    ///
    /// # Errors
    ///
    /// Returns an error if `rate` is not within `[0, 1]`, if `step` is
    /// negative or non-finite, or if the bounds are inverted or non-finite.
    pub fn new(rate: f64, step: f64, min: f64, max: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                rate
            )));
        }
        if !step.is_finite() || step < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Mutation step must be finite and non-negative, got {}",
                step
            )));
        }
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(GeneticError::Configuration(format!(
                "Gene bounds must be finite with min <= max, got [{}, {}]",
                min, max
            )));
        }
        Ok(Self {
            rate,
            step,
            min,
            max,
        })
    }

    /// Applies the mutation to a gene, returning the (possibly unchanged)
    /// clamped result.
    pub fn apply(&self, gene: f64, rng: &mut RandomNumberGenerator) -> f64 {
        if rng.uniform(0.0, 1.0) < self.rate {
            let delta = rng.uniform(-self.step, self.step);
            (gene + delta).clamp(self.min, self.max)
        } else {
            gene
        }
    }
}
