pub mod builder;
pub mod engine;
pub mod options;

pub use builder::EvolutionEngineBuilder;
pub use engine::{EvolutionEngine, EvolutionResult, GenerationReport};
pub use options::{EvolutionOptions, LogLevel};
