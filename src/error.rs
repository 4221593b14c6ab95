//! # Error Types
//!
//! This module defines the error type used across the crate. The evolutionary
//! operators themselves are total over domain-respecting inputs; the only
//! representable failures are configuration violations caught eagerly at
//! startup and non-finite fitness values produced by a broken objective.
//!
//! ## Examples
//!
//! ```rust
//! use sinefit::error::{GeneticError, Result};
//!
//! fn check_rate(rate: f64) -> Result<()> {
//!     if !(0.0..=1.0).contains(&rate) {
//!         return Err(GeneticError::Configuration(format!(
//!             "rate must be within [0, 1], got {}",
//!             rate
//!         )));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while configuring or running the
/// genetic algorithm.
///
/// All variants are fatal and non-retriable: a configuration violation is
/// rejected before the evolutionary loop starts, and there is no
/// partial-failure semantic anywhere in the system.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation produces an unusable value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for genetic algorithm operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the
/// error type fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use sinefit::error::{GeneticError, OptionExt};
///
/// fn first_score(scores: &[f64]) -> sinefit::error::Result<f64> {
///     scores.first().copied().ok_or_else_genetic(|| GeneticError::EmptyPopulation)
/// }
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using a closure
    /// to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
