//! Binary-string Genetic Algorithm.
//!
//! Evolves a fixed-size population of bit strings toward a known target.
//! Each generation scores every individual by positional agreement with the
//! target, culls everything below the rounded mean, and refills the culled
//! slots with recombined, occasionally mutated offspring of the survivors.
//!
//! # Key Types
//!
//! - [`Chromosome`] / [`Gene`]: Fixed-length bit-string encoding
//! - [`FitnessCalculator`]: Hamming similarity to the target
//! - [`Individual`] / [`Slot`]: Population members and array positions
//! - [`Population`]: The evaluate → select → reproduce pipeline
//! - [`PopulationConfig`]: Sizes, crossover strategy, mutation chance
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final result with per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: One-point, two-point, uniform and CX2 crossover; flip mutation
//! - [`selection`]: Mean-threshold culling and parent sampling
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod crossover;
mod error;
mod fitness;
pub mod operators;
mod population;
mod runner;
pub mod selection;
mod types;

pub use chromosome::{Chromosome, Gene};
pub use config::PopulationConfig;
pub use crossover::Crossover;
pub use error::{GaError, Result};
pub use fitness::FitnessCalculator;
pub use population::{Population, SelectionOutcome};
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use types::{by_fitness_desc, slot_by_fitness_desc, Individual, Slot};
