use std::process;

use tracing_subscriber::EnvFilter;

use sinefit::error::Result;
use sinefit::evolution::{EvolutionEngine, EvolutionOptions, LogLevel};
use sinefit::objective::SineTarget;
use sinefit::rng::RandomNumberGenerator;
use sinefit::selection::TournamentSelection;

fn run() -> Result<()> {
    let options = EvolutionOptions::builder()
        .log_level(LogLevel::Minimal)
        .build();

    let engine = EvolutionEngine::builder()
        .with_objective(SineTarget::new(options.get_target_value()))
        .with_selection(TournamentSelection::new())
        .build()?;

    let mut rng = RandomNumberGenerator::new();
    let result = engine.evolve(&options, &mut rng)?;

    println!();
    println!("Closest Solution Found:");
    println!(
        "x = {:.6}, f(x) = {:.6}, Error = {:.6}",
        result.best.gene(),
        result.value,
        result.error
    );

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
