//! # Breeding Operators
//!
//! The two variation operators of the algorithm: arithmetic crossover and
//! bounded uniform mutation. Both operate on raw genes and leave evaluation
//! to the caller, so a freshly bred gene only becomes an
//! [`Individual`](crate::individual::Individual) once it has been scored.

pub mod crossover;
pub mod mutation;

pub use crossover::ArithmeticCrossover;
pub use mutation::BoundedMutation;
