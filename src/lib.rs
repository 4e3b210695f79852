//! Binary-string genetic algorithm solver.
//!
//! Evolves fixed-length bit strings toward a known target using
//! mean-threshold culling, interchangeable crossover operators, and
//! single-locus flip mutation:
//!
//! - **Encoding**: [`ga::Chromosome`], a fixed-length sequence of binary genes.
//! - **Fitness**: count of loci matching the target (Hamming similarity).
//! - **Selection**: rank fittest-first, cull everything below the rounded mean.
//! - **Crossover**: one-point, two-point, uniform, or cycle crossover (CX2).
//! - **Mutation**: with probability `P/100`, flip exactly one gene.
//!
//! # Architecture
//!
//! All randomness flows through a caller-supplied [`rand::Rng`]; seed one
//! with [`random::create_rng`] for reproducible runs. Logging goes through
//! `tracing` spans and events; the crate never installs a subscriber.

pub mod ga;
pub mod random;
