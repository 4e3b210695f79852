//! Population members, population slots, and their ranking order.
//!
//! An [`Individual`] pairs a [`Chromosome`] with a cached fitness score. The
//! score is written by the evaluate step and is stale (zero) for freshly
//! created offspring until the next evaluation.
//!
//! A [`Slot`] is one position of the population array: it holds a living
//! individual, or is dead between culling and refill.

use super::chromosome::Chromosome;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// A candidate solution in the population.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    chromosome: Chromosome,
    fitness: usize,
}

impl Individual {
    /// Founding-generation member with a random chromosome.
    pub fn random<R: Rng>(chromosome_length: usize, rng: &mut R) -> Self {
        Self::new(Chromosome::random(chromosome_length, rng))
    }

    /// Wraps a chromosome (typically an offspring). Fitness starts at zero.
    pub fn new(chromosome: Chromosome) -> Self {
        Self {
            chromosome,
            fitness: 0,
        }
    }

    pub fn fitness(&self) -> usize {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: usize) {
        self.fitness = fitness;
    }

    pub fn chromosome(&self) -> &Chromosome {
        &self.chromosome
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} fitness: {}", self.chromosome, self.fitness)
    }
}

/// One position in the population array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Alive(Individual),
    /// Culled this generation, awaiting an offspring.
    Dead,
}

impl Slot {
    pub fn is_alive(&self) -> bool {
        matches!(self, Slot::Alive(_))
    }

    pub fn individual(&self) -> Option<&Individual> {
        match self {
            Slot::Alive(ind) => Some(ind),
            Slot::Dead => None,
        }
    }

    pub fn individual_mut(&mut self) -> Option<&mut Individual> {
        match self {
            Slot::Alive(ind) => Some(ind),
            Slot::Dead => None,
        }
    }
}

/// Ranking comparator: higher fitness sorts first.
///
/// Kept separate from the `Individual` type so selection can pass it to a
/// generic sort.
///
/// ```
/// use u_bitga::ga::{by_fitness_desc, Chromosome, Individual};
///
/// let mut a = Individual::new("00".parse()?);
/// let mut b = Individual::new("11".parse()?);
/// a.set_fitness(1);
/// b.set_fitness(2);
/// let mut v = vec![a, b];
/// v.sort_by(by_fitness_desc);
/// assert_eq!(v[0].fitness(), 2);
/// # Ok::<(), u_bitga::ga::GaError>(())
/// ```
pub fn by_fitness_desc(a: &Individual, b: &Individual) -> Ordering {
    b.fitness.cmp(&a.fitness)
}

/// Slot ordering for selection: living slots by [`by_fitness_desc`], dead
/// slots after every living one.
pub fn slot_by_fitness_desc(a: &Slot, b: &Slot) -> Ordering {
    match (a, b) {
        (Slot::Alive(x), Slot::Alive(y)) => by_fitness_desc(x, y),
        (Slot::Alive(_), Slot::Dead) => Ordering::Less,
        (Slot::Dead, Slot::Alive(_)) => Ordering::Greater,
        (Slot::Dead, Slot::Dead) => Ordering::Equal,
    }
}
