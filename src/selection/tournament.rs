//! # Tournament Selection
//!
//! Pairwise tournament selection: draw two individuals at random and keep
//! the fitter one. With only two participants the pressure stays mild, which
//! suits a small population searching a highly oscillatory landscape.

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::SelectionStrategy;

/// A selection strategy that picks the winner of a two-individual duel.
///
/// Both indices are drawn uniformly over the population, independently and
/// with replacement: the same individual may be drawn twice, and both draws
/// may coincide. The duel compares fitness with strict `>`; on a tie the
/// second draw wins, matching the reference behavior.
///
/// # Examples
///
/// ```
/// use sinefit::individual::Individual;
/// use sinefit::objective::SineTarget;
/// use sinefit::rng::RandomNumberGenerator;
/// use sinefit::selection::{SelectionStrategy, TournamentSelection};
///
/// let objective = SineTarget::new(1.5);
/// let population: Vec<Individual> = (0..4)
///     .map(|i| Individual::evaluated(i as f64 * 0.25, &objective))
///     .collect();
///
/// let mut rng = RandomNumberGenerator::from_seed(42);
/// let parent = TournamentSelection::default()
///     .select_parent(&population, &mut rng)
///     .unwrap();
/// assert!(population.contains(&parent));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct TournamentSelection;

impl TournamentSelection {
    /// Creates a new `TournamentSelection` strategy.
    pub fn new() -> Self {
        Self
    }

    /// Resolves a duel between the individuals at indices `first` and
    /// `second`. Strictly greater fitness wins; ties go to `second`.
    fn duel(&self, population: &[Individual], first: usize, second: usize) -> Individual {
        if population[first].fitness() > population[second].fitness() {
            population[first]
        } else {
            population[second]
        }
    }
}

impl SelectionStrategy for TournamentSelection {
    fn select_parent(
        &self,
        population: &[Individual],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Individual> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let first = rng.index(population.len());
        let second = rng.index(population.len());

        Ok(self.duel(population, first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::SineTarget;

    fn two_member_population() -> Vec<Individual> {
        let objective = SineTarget::new(1.5);
        // Distinct fitness values: x = 0 scores -0.5, x = 0.25 scores better.
        let population = vec![
            Individual::evaluated(0.0, &objective),
            Individual::evaluated(0.25, &objective),
        ];
        assert!(population[1].fitness() > population[0].fitness());
        population
    }

    #[test]
    fn test_duel_enumerated_over_all_index_pairs() {
        let population = two_member_population();
        let selection = TournamentSelection::new();
        let better = population[1];

        // All four draw combinations of a two-member population.
        assert_eq!(selection.duel(&population, 0, 0), population[0]);
        assert_eq!(selection.duel(&population, 1, 1), population[1]);
        assert_eq!(selection.duel(&population, 0, 1), better);
        assert_eq!(selection.duel(&population, 1, 0), better);
    }

    #[test]
    fn test_duel_tie_goes_to_second_draw() {
        let objective = SineTarget::new(1.5);
        // Same gene on both sides, so fitness ties exactly.
        let population = vec![
            Individual::evaluated(0.5, &objective),
            Individual::evaluated(0.5, &objective),
        ];

        let selection = TournamentSelection::new();
        assert_eq!(selection.duel(&population, 0, 1), population[1]);
    }

    #[test]
    fn test_select_parent_returns_population_member() {
        let objective = SineTarget::new(1.5);
        let population: Vec<Individual> = (0..10)
            .map(|i| Individual::evaluated(i as f64 * 0.1, &objective))
            .collect();

        let selection = TournamentSelection::new();
        let mut rng = RandomNumberGenerator::from_seed(42);

        for _ in 0..50 {
            let parent = selection.select_parent(&population, &mut rng).unwrap();
            assert!(population.contains(&parent));
        }
    }

    #[test]
    fn test_select_parent_never_returns_a_dominated_loser() {
        // Whatever the draws, the winner's fitness is at least the minimum.
        let population = two_member_population();
        let selection = TournamentSelection::new();
        let mut rng = RandomNumberGenerator::from_seed(7);

        for _ in 0..100 {
            let parent = selection.select_parent(&population, &mut rng).unwrap();
            assert!(parent.fitness() >= population[0].fitness());
        }
    }

    #[test]
    fn test_select_parent_empty_population() {
        let selection = TournamentSelection::new();
        let mut rng = RandomNumberGenerator::from_seed(42);

        let result = selection.select_parent(&[], &mut rng);
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }
}
