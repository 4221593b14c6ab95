use crate::error::{GeneticError, Result};
use crate::objective::Objective;
use crate::selection::SelectionStrategy;

use super::EvolutionEngine;

/// Builder for [`EvolutionEngine`].
///
/// Both components are mandatory; `build` rejects a partially assembled
/// engine with a configuration error.
pub struct EvolutionEngineBuilder<O, S>
where
    O: Objective,
    S: SelectionStrategy,
{
    objective: Option<O>,
    selection: Option<S>,
}

impl<O, S> EvolutionEngineBuilder<O, S>
where
    O: Objective,
    S: SelectionStrategy,
{
    pub fn new() -> Self {
        Self {
            objective: None,
            selection: None,
        }
    }

    pub fn with_objective(mut self, objective: O) -> Self {
        self.objective = Some(objective);
        self
    }

    pub fn with_selection(mut self, selection: S) -> Self {
        self.selection = Some(selection);
        self
    }

    pub fn build(self) -> Result<EvolutionEngine<O, S>> {
        let objective = self
            .objective
            .ok_or_else(|| GeneticError::Configuration("Objective not specified".to_string()))?;

        let selection = self.selection.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        Ok(EvolutionEngine::new(objective, selection))
    }
}

impl<O, S> Default for EvolutionEngineBuilder<O, S>
where
    O: Objective,
    S: SelectionStrategy,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::SineTarget;
    use crate::selection::TournamentSelection;

    #[test]
    fn test_build_with_all_components() {
        let engine = EvolutionEngineBuilder::new()
            .with_objective(SineTarget::new(1.5))
            .with_selection(TournamentSelection::new())
            .build();

        assert!(engine.is_ok());
    }

    #[test]
    fn test_build_without_objective_fails() {
        let result = EvolutionEngineBuilder::<SineTarget, TournamentSelection>::new()
            .with_selection(TournamentSelection::new())
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Objective")),
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_build_without_selection_fails() {
        let result = EvolutionEngineBuilder::<SineTarget, TournamentSelection>::new()
            .with_objective(SineTarget::new(1.5))
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => assert!(msg.contains("Selection")),
            _ => panic!("Expected Configuration error"),
        }
    }
}
