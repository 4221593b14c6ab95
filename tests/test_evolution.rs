use sinefit::evolution::{EvolutionEngine, EvolutionOptions};
use sinefit::objective::{Objective, SineTarget};
use sinefit::rng::RandomNumberGenerator;
use sinefit::selection::TournamentSelection;

fn reference_engine(
    options: &EvolutionOptions,
) -> EvolutionEngine<SineTarget, TournamentSelection> {
    EvolutionEngine::new(
        SineTarget::new(options.get_target_value()),
        TournamentSelection::new(),
    )
}

#[test]
fn test_reference_run_approaches_the_target() {
    let options = EvolutionOptions::default();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = reference_engine(&options).evolve(&options, &mut rng).unwrap();

    // Five oscillation periods cross the target several times within the
    // domain, so a full reference run lands close to one of the crossings.
    assert!(result.error < 0.05, "final error too large: {}", result.error);
    assert!((0.0..=1.0).contains(&result.best.gene()));

    // The reported value is the actual function value at the best gene.
    let objective = SineTarget::new(options.get_target_value());
    assert_eq!(result.value, objective.value(result.best.gene()));
    assert_eq!(
        result.error,
        (result.value - options.get_target_value()).abs()
    );
}

#[test]
fn test_fixed_seed_runs_are_identical() {
    let options = EvolutionOptions::default();
    let engine = reference_engine(&options);

    let mut rng1 = RandomNumberGenerator::from_seed(1234);
    let mut rng2 = RandomNumberGenerator::from_seed(1234);

    let first = engine.evolve(&options, &mut rng1).unwrap();
    let second = engine.evolve(&options, &mut rng2).unwrap();

    assert_eq!(first.best, second.best);
    assert_eq!(first.history.len(), second.history.len());
    for (a, b) in first.history.iter().zip(second.history.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let options = EvolutionOptions::default();
    let engine = reference_engine(&options);

    let mut rng1 = RandomNumberGenerator::from_seed(1);
    let mut rng2 = RandomNumberGenerator::from_seed(2);

    let first = engine.evolve(&options, &mut rng1).unwrap();
    let second = engine.evolve(&options, &mut rng2).unwrap();

    // Two fifty-point random seedings never coincide in practice.
    assert_ne!(first.population, second.population);
}

#[test]
fn test_disabled_operators_cannot_improve_on_the_seed() {
    // With crossover and mutation both off, every child is a copy of a
    // selected parent, so the best after any number of generations equals
    // the best of the initial population.
    let evolved_options = EvolutionOptions::builder()
        .crossover_rate(0.0)
        .mutation_rate(0.0)
        .num_generations(100)
        .build();
    let seed_only_options = EvolutionOptions::builder()
        .crossover_rate(0.0)
        .mutation_rate(0.0)
        .num_generations(0)
        .build();

    let engine = reference_engine(&evolved_options);

    // Identical seeds produce identical initial populations; the generation
    // loop afterwards only consumes selection and rate draws.
    let mut rng1 = RandomNumberGenerator::from_seed(99);
    let mut rng2 = RandomNumberGenerator::from_seed(99);

    let evolved = engine.evolve(&evolved_options, &mut rng1).unwrap();
    let seed_only = engine.evolve(&seed_only_options, &mut rng2).unwrap();

    assert_eq!(evolved.best.fitness(), seed_only.best.fitness());
    assert_eq!(evolved.best.gene(), seed_only.best.gene());
}

#[test]
fn test_two_member_population_run() {
    let options = EvolutionOptions::builder()
        .population_size(2)
        .num_generations(20)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = reference_engine(&options).evolve(&options, &mut rng).unwrap();

    assert_eq!(result.population.len(), 2);
    for pair in result.history.windows(2) {
        assert!(pair[1].best_fitness >= pair[0].best_fitness);
    }
}

#[test]
fn test_degenerate_single_point_domain() {
    // min == max collapses the search space to one gene; every individual
    // is that gene and the run still completes.
    let options = EvolutionOptions::builder()
        .min_gene(0.5)
        .max_gene(0.5)
        .population_size(10)
        .num_generations(5)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = reference_engine(&options).evolve(&options, &mut rng).unwrap();

    assert_eq!(result.best.gene(), 0.5);
    for individual in &result.population {
        assert_eq!(individual.gene(), 0.5);
    }
}

#[cfg(feature = "serde")]
#[test]
fn test_options_and_result_serialize() {
    let options = EvolutionOptions::default();
    let json = serde_json::to_string(&options).unwrap();
    let roundtrip: EvolutionOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(
        roundtrip.get_population_size(),
        options.get_population_size()
    );

    let mut rng = RandomNumberGenerator::from_seed(42);
    let small = EvolutionOptions::builder()
        .population_size(5)
        .num_generations(2)
        .build();
    let result = reference_engine(&small).evolve(&small, &mut rng).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("history"));
}
