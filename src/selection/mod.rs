pub mod tournament;

use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// A selection strategy picks one parent from the current population based
/// on fitness. It never mutates the population; individuals are value types
/// and come back by copy.
pub trait SelectionStrategy: Debug {
    /// Selects a single parent from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if the population is empty.
    fn select_parent(
        &self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual>;
}

pub use tournament::TournamentSelection;
