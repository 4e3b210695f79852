//! Crossover strategy selection.
//!
//! A [`Population`](super::Population) fixes one [`Crossover`] variant at
//! construction and uses it for every offspring.

use super::chromosome::Gene;
use super::operators;
use rand::Rng;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Recombination strategy.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Crossover;
///
/// assert_eq!(Crossover::from_name("two-point"), Crossover::TwoPoint);
/// assert_eq!(Crossover::from_name("cx2"), Crossover::CycleV2);
///
/// // Unknown names fall back to uniform crossover.
/// assert_eq!(Crossover::from_name("whatever"), Crossover::Uniform);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// One cut point; see [`operators::one_point_crossover`].
    OnePoint,

    /// Two cut points, one per half; see [`operators::two_point_crossover`].
    TwoPoint,

    /// Per-locus fair coin; see [`operators::uniform_crossover`].
    #[default]
    Uniform,

    /// Cycle crossover variant 2; see [`operators::cycle_crossover_v2`].
    ///
    /// Designed for permutations. On bit strings it degrades to a
    /// deterministic rearrangement of the second parent.
    CycleV2,
}

impl Crossover {
    /// Every strategy, in declaration order.
    pub const ALL: [Crossover; 4] = [
        Crossover::OnePoint,
        Crossover::TwoPoint,
        Crossover::Uniform,
        Crossover::CycleV2,
    ];

    /// Maps a strategy name to its variant.
    ///
    /// `"one-point"`, `"two-point"`, `"uniform"` and `"cx2"` are recognized;
    /// anything else selects [`Crossover::Uniform`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "one-point" => Crossover::OnePoint,
            "two-point" => Crossover::TwoPoint,
            "cx2" => Crossover::CycleV2,
            _ => Crossover::Uniform,
        }
    }

    /// Canonical name, accepted by [`from_name`](Self::from_name).
    pub fn name(&self) -> &'static str {
        match self {
            Crossover::OnePoint => "one-point",
            Crossover::TwoPoint => "two-point",
            Crossover::Uniform => "uniform",
            Crossover::CycleV2 => "cx2",
        }
    }

    /// Produces one offspring gene sequence from two parents.
    ///
    /// # Panics
    /// Panics if the parents differ in length, or if a cut-point strategy
    /// gets fewer than 2 genes.
    pub fn apply<R: Rng>(&self, parent1: &[Gene], parent2: &[Gene], rng: &mut R) -> Vec<Gene> {
        match self {
            Crossover::OnePoint => operators::one_point_crossover(parent1, parent2, rng),
            Crossover::TwoPoint => operators::two_point_crossover(parent1, parent2, rng),
            Crossover::Uniform => operators::uniform_crossover(parent1, parent2, rng),
            Crossover::CycleV2 => operators::cycle_crossover_v2(parent1, parent2),
        }
    }
}

impl FromStr for Crossover {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Self::from_name(s))
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Chromosome;
    use crate::random::create_rng;

    #[test]
    fn test_default_is_uniform() {
        assert_eq!(Crossover::default(), Crossover::Uniform);
    }

    #[test]
    fn test_names_round_trip() {
        for strategy in Crossover::ALL {
            assert_eq!(Crossover::from_name(strategy.name()), strategy);
            assert_eq!(strategy.to_string().parse::<Crossover>(), Ok(strategy));
        }
    }

    #[test]
    fn test_unknown_names_fall_back_to_uniform() {
        for name in ["", "One-Point", "two_point", "cx", "pmx"] {
            assert_eq!(Crossover::from_name(name), Crossover::Uniform, "{name:?}");
        }
    }

    #[test]
    fn test_apply_preserves_length_for_every_strategy() {
        let mut rng = create_rng(42);
        let p1 = Chromosome::random(33, &mut rng);
        let p2 = Chromosome::random(33, &mut rng);
        for strategy in Crossover::ALL {
            for _ in 0..20 {
                let child = strategy.apply(p1.genes(), p2.genes(), &mut rng);
                assert_eq!(child.len(), 33, "{strategy}");
            }
        }
    }

    #[test]
    fn test_apply_on_identical_parents_clones() {
        let mut rng = create_rng(42);
        let p = Chromosome::random(16, &mut rng);
        for strategy in Crossover::ALL {
            assert_eq!(strategy.apply(p.genes(), p.genes(), &mut rng), p.genes());
        }
    }
}
