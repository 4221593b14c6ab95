//! # Individual
//!
//! An `Individual` pairs a gene with its cached fitness. The pair is an
//! immutable value type: the only way to obtain one is through evaluation,
//! so the cached fitness can never go stale behind a caller's back.

use crate::objective::Objective;

/// A candidate solution: a scalar gene and the fitness the objective
/// assigned to it.
///
/// Individuals carry no identity beyond their values and are freely copied.
/// Mutation and crossover operate on raw genes; the resulting gene is turned
/// back into an `Individual` through [`Individual::evaluated`], which is what
/// maintains the invariant that `fitness` always equals the objective's score
/// at the current gene.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Individual {
    gene: f64,
    fitness: f64,
}

impl Individual {
    /// Creates an individual by evaluating `gene` against the objective.
    pub fn evaluated(gene: f64, objective: &impl Objective) -> Self {
        Self {
            gene,
            fitness: objective.score(gene),
        }
    }

    /// The scalar decision variable.
    pub fn gene(&self) -> f64 {
        self.gene
    }

    /// The cached fitness. Higher is better; `0.0` is an exact hit.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}
