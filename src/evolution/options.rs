//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct gathers every tunable of the algorithm in
//! one place: population size, generation count, operator rates, gene
//! bounds, the target value, and the logging level. The defaults are the
//! reference configuration; tests shrink them for speed or push them into
//! degenerate corners.
//!
//! ## Example
//!
//! ```rust
//! use sinefit::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .num_generations(50)
//!     .log_level(LogLevel::None)
//!     .build();
//!
//! assert!(options.validate().is_ok());
//! ```

use crate::error::{GeneticError, Result};

/// Controls how much the engine prints to the console while evolving.
///
/// The per-generation report line is product output, not diagnostics, so it
/// is gated here rather than behind the tracing subscriber.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub enum LogLevel {
    /// Per-generation report plus per-individual tracing events.
    Verbose,
    /// Per-generation report only.
    Minimal,
    /// No console output.
    None,
}

/// Configuration for one evolution run.
///
/// All values are fixed once the run starts; there is no adaptive tuning.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionOptions {
    population_size: usize,
    num_generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    mutation_step: f64,
    min_gene: f64,
    max_gene: f64,
    target_value: f64,
    log_level: LogLevel,
}

impl EvolutionOptions {
    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_mutation_step(&self) -> f64 {
        self.mutation_step
    }

    pub fn get_min_gene(&self) -> f64 {
        self.min_gene
    }

    pub fn get_max_gene(&self) -> f64 {
        self.max_gene
    }

    pub fn get_target_value(&self) -> f64 {
        self.target_value
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    /// Checks every precondition the evolutionary loop relies on.
    ///
    /// Violations are fatal: they are rejected here, before the loop starts,
    /// rather than surfacing as undefined behavior deep inside it (an index
    /// draw over an empty population, a sample from an inverted interval).
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error naming the offending parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }
        if !self.min_gene.is_finite() || !self.max_gene.is_finite() || self.min_gene > self.max_gene
        {
            return Err(GeneticError::Configuration(format!(
                "Gene bounds must be finite with min <= max, got [{}, {}]",
                self.min_gene, self.max_gene
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(GeneticError::Configuration(format!(
                "Crossover rate must be within [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(GeneticError::Configuration(format!(
                "Mutation rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !self.mutation_step.is_finite() || self.mutation_step < 0.0 {
            return Err(GeneticError::Configuration(format!(
                "Mutation step must be finite and non-negative, got {}",
                self.mutation_step
            )));
        }
        if !self.target_value.is_finite() {
            return Err(GeneticError::Configuration(format!(
                "Target value must be finite, got {}",
                self.target_value
            )));
        }
        Ok(())
    }
}

impl Default for EvolutionOptions {
    /// The reference configuration.
    fn default() -> Self {
        Self {
            population_size: 50,
            num_generations: 100,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            mutation_step: 0.1,
            min_gene: 0.0,
            max_gene: 1.0,
            target_value: 1.5,
            log_level: LogLevel::None,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface; any field left unset falls back to the
/// reference configuration.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    num_generations: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    mutation_step: Option<f64>,
    min_gene: Option<f64>,
    max_gene: Option<f64>,
    target_value: Option<f64>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    pub fn mutation_step(mut self, value: f64) -> Self {
        self.mutation_step = Some(value);
        self
    }

    pub fn min_gene(mut self, value: f64) -> Self {
        self.min_gene = Some(value);
        self
    }

    pub fn max_gene(mut self, value: f64) -> Self {
        self.max_gene = Some(value);
        self
    }

    pub fn target_value(mut self, value: f64) -> Self {
        self.target_value = Some(value);
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            num_generations: self.num_generations.unwrap_or(defaults.num_generations),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            mutation_step: self.mutation_step.unwrap_or(defaults.mutation_step),
            min_gene: self.min_gene.unwrap_or(defaults.min_gene),
            max_gene: self.max_gene.unwrap_or(defaults.max_gene),
            target_value: self.target_value.unwrap_or(defaults.target_value),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}
