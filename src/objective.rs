//! # Objective
//!
//! The `Objective` trait scores candidate genes, and `SineTarget` is the
//! concrete objective this crate ships: how close `f(x) = x·sin(10π·x) + 1`
//! comes to a fixed target value.
//!
//! Scores follow a closeness convention: they are never positive, the
//! magnitude is the distance from the target, and `0` means an exact hit.
//! Higher is therefore always better.

use std::f64::consts::PI;
use std::fmt::Debug;

/// Trait for objective functions that score a scalar gene.
///
/// Implementations must be pure and deterministic: the same gene always
/// produces the same raw value and the same score, with no side effects.
/// Scores follow the closeness convention described at the module level,
/// which is what lets the engine report `-score` as the error magnitude.
pub trait Objective: Debug {
    /// The raw function value at `gene`, before any comparison to a target.
    fn value(&self, gene: f64) -> f64;

    /// The fitness of `gene`. Higher is better; `0.0` is an exact hit.
    fn score(&self, gene: f64) -> f64;
}

/// The oscillatory reference objective: `f(x) = x·sin(10π·x) + 1`, scored by
/// its distance to a target value.
///
/// The function is total over the real line, so no domain restriction is
/// needed even though callers keep genes within the configured bounds.
#[derive(Debug, Clone, Copy)]
pub struct SineTarget {
    target: f64,
}

impl SineTarget {
    /// Creates an objective that rewards genes whose function value is close
    /// to `target`.
    pub fn new(target: f64) -> Self {
        Self { target }
    }

    /// The target value the search is driving `f(x)` toward.
    pub fn target(&self) -> f64 {
        self.target
    }
}

impl Objective for SineTarget {
    fn value(&self, gene: f64) -> f64 {
        gene * (10.0 * PI * gene).sin() + 1.0
    }

    fn score(&self, gene: f64) -> f64 {
        -(self.value(gene) - self.target).abs()
    }
}
