//! # EvolutionEngine
//!
//! The `EvolutionEngine` owns the generational loop: seed a random
//! population, repeatedly breed a full replacement generation through
//! selection, crossover, and mutation, and track the best individual ever
//! seen. The loop is strictly sequential and bounded by a fixed generation
//! count; there is no convergence-based early termination.
//!
//! ## Example
//!
//! ```rust
//! use sinefit::evolution::{EvolutionEngine, EvolutionOptions};
//! use sinefit::objective::SineTarget;
//! use sinefit::rng::RandomNumberGenerator;
//! use sinefit::selection::TournamentSelection;
//!
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .num_generations(30)
//!     .build();
//!
//! let engine = EvolutionEngine::new(
//!     SineTarget::new(options.get_target_value()),
//!     TournamentSelection::new(),
//! );
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let result = engine.evolve(&options, &mut rng).unwrap();
//! assert!(result.error >= 0.0);
//! ```

use tracing::{debug, info};

use crate::breeding::{ArithmeticCrossover, BoundedMutation};
use crate::error::{GeneticError, OptionExt, Result};
use crate::evolution::builder::EvolutionEngineBuilder;
use crate::evolution::options::{EvolutionOptions, LogLevel};
use crate::individual::Individual;
use crate::objective::Objective;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// Snapshot of the best-ever individual after one generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationReport {
    /// 1-based generation number.
    pub generation: usize,
    /// Fitness of the best individual seen so far.
    pub best_fitness: f64,
    /// Distance of the best individual's function value from the target.
    pub error: f64,
}

/// The outcome of a completed evolution run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The best individual observed across all generations.
    pub best: Individual,
    /// The raw objective value at the best gene.
    pub value: f64,
    /// Distance of `value` from the target.
    pub error: f64,
    /// One report per generation, in order.
    pub history: Vec<GenerationReport>,
    /// The population at the final generation boundary.
    pub population: Vec<Individual>,
}

/// Runs the evolutionary loop for a given objective and selection strategy.
///
/// The variation operators are fixed by configuration and constructed per
/// run from [`EvolutionOptions`]; the engine itself holds no population
/// state between runs.
#[derive(Debug, Clone)]
pub struct EvolutionEngine<O, S>
where
    O: Objective,
    S: SelectionStrategy,
{
    objective: O,
    selection: S,
}

impl<O, S> EvolutionEngine<O, S>
where
    O: Objective,
    S: SelectionStrategy,
{
    /// Creates a new engine from an objective and a selection strategy.
    pub fn new(objective: O, selection: S) -> Self {
        Self {
            objective,
            selection,
        }
    }

    /// Returns a builder for assembling an engine piece by piece.
    pub fn builder() -> EvolutionEngineBuilder<O, S> {
        EvolutionEngineBuilder::new()
    }

    /// Evolves a population under the given options, drawing every random
    /// value from `rng`.
    ///
    /// The run proceeds through three phases. Seeding draws
    /// `population_size` genes uniformly from the configured bounds and
    /// scans the evaluated population for its best member. Each following
    /// generation breeds children in pairs (two tournaments, one crossover,
    /// two mutations, two evaluations) until a full replacement buffer
    /// exists, discarding the overflow child of the final pair when the
    /// population size is odd, then swaps the buffer in wholesale and
    /// re-scans for a new best. The best-ever individual is only replaced
    /// on strictly greater fitness, so it never regresses. After the last
    /// generation the best individual is returned together with the full
    /// report history and final population.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the options fail validation, and
    /// a `FitnessCalculation` error if the objective ever produces a
    /// non-finite score.
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        let crossover = ArithmeticCrossover::new(options.get_crossover_rate())?;
        let mutation = BoundedMutation::new(
            options.get_mutation_rate(),
            options.get_mutation_step(),
            options.get_min_gene(),
            options.get_max_gene(),
        )?;

        let population_size = options.get_population_size();
        let num_generations = options.get_num_generations();

        info!(
            population_size,
            num_generations,
            crossover_rate = options.get_crossover_rate(),
            mutation_rate = options.get_mutation_rate(),
            "starting evolution"
        );

        let mut population = Vec::with_capacity(population_size);
        for _ in 0..population_size {
            let gene = rng.uniform(options.get_min_gene(), options.get_max_gene());
            population.push(self.evaluated(gene)?);
        }

        let mut best = population
            .first()
            .copied()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;
        for individual in &population[1..] {
            if individual.fitness() > best.fitness() {
                best = *individual;
            }
        }

        let mut history = Vec::with_capacity(num_generations);
        for generation in 1..=num_generations {
            let mut next_generation = Vec::with_capacity(population_size);

            while next_generation.len() < population_size {
                let parent1 = self.selection.select_parent(&population, rng)?;
                let parent2 = self.selection.select_parent(&population, rng)?;

                let (gene1, gene2) = crossover.recombine(parent1.gene(), parent2.gene(), rng);

                let child1 = self.evaluated(mutation.apply(gene1, rng))?;
                let child2 = self.evaluated(mutation.apply(gene2, rng))?;

                next_generation.push(child1);
                if next_generation.len() < population_size {
                    next_generation.push(child2);
                }
            }

            population = next_generation;

            for individual in &population {
                if individual.fitness() > best.fitness() {
                    best = *individual;
                }
            }

            let report = GenerationReport {
                generation,
                best_fitness: best.fitness(),
                error: best.fitness().abs(),
            };
            self.report_generation(&report, &population, options.get_log_level());
            history.push(report);
        }

        let value = self.objective.value(best.gene());
        let error = best.fitness().abs();
        info!(gene = best.gene(), value, error, "evolution finished");

        Ok(EvolutionResult {
            best,
            value,
            error,
            history,
            population,
        })
    }

    /// Evaluates a gene and rejects non-finite scores.
    fn evaluated(&self, gene: f64) -> Result<Individual> {
        let individual = Individual::evaluated(gene, &self.objective);
        if !individual.fitness().is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite fitness score encountered: {}",
                individual.fitness()
            )));
        }
        Ok(individual)
    }

    fn report_generation(
        &self,
        report: &GenerationReport,
        population: &[Individual],
        log_level: &LogLevel,
    ) {
        match log_level {
            LogLevel::None => {}
            LogLevel::Minimal => {
                println!(
                    "Generation {} - Closest Fitness: {:.6} (Error: {:.6})",
                    report.generation, report.best_fitness, report.error
                );
            }
            LogLevel::Verbose => {
                println!(
                    "Generation {} - Closest Fitness: {:.6} (Error: {:.6})",
                    report.generation, report.best_fitness, report.error
                );
                for individual in population {
                    println!(
                        "  x = {:.6}, fitness = {:.6}",
                        individual.gene(),
                        individual.fitness()
                    );
                }
            }
        }

        debug!(
            generation = report.generation,
            best_fitness = report.best_fitness,
            error = report.error,
            "generation complete"
        );
    }
}
