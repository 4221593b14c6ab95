pub mod breeding;
pub mod error;
pub mod evolution;
pub mod individual;
pub mod objective;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
