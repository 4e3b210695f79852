//! Population configuration.
//!
//! [`PopulationConfig`] holds every parameter fixed for the lifetime of a
//! [`Population`](super::Population), plus the driver's generation budget.

use super::crossover::Crossover;
use super::error::{GaError, Result};

/// Configuration for a binary-string GA run.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::{Crossover, PopulationConfig};
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.crossover, Crossover::Uniform);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{Crossover, PopulationConfig};
///
/// let config = PopulationConfig::new(300, 1000)
///     .with_crossover(Crossover::TwoPoint)
///     .with_mutation_percent(60)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    /// Number of slots `N`. Never changes during a run.
    pub population_size: usize,

    /// Genes per chromosome `L`. The target must have the same length.
    pub chromosome_length: usize,

    /// Recombination strategy used for every offspring.
    pub crossover: Crossover,

    /// Chance, in percent, that an offspring gets one locus flipped.
    pub mutation_percent: u8,

    /// Generation budget for [`GaRunner`](super::GaRunner).
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            chromosome_length: 64,
            crossover: Crossover::default(),
            mutation_percent: 60,
            max_generations: 400,
            seed: None,
        }
    }
}

impl PopulationConfig {
    /// Default configuration with the given population size and chromosome length.
    pub fn new(population_size: usize, chromosome_length: usize) -> Self {
        Self {
            population_size,
            chromosome_length,
            ..Self::default()
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_chromosome_length(mut self, n: usize) -> Self {
        self.chromosome_length = n;
        self
    }

    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation chance, clamped to 100.
    pub fn with_mutation_percent(mut self, percent: u8) -> Self {
        self.mutation_percent = percent.min(100);
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first violated invariant.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GaError::PopulationTooSmall {
                size: self.population_size,
            });
        }
        if self.chromosome_length < 2 {
            return Err(GaError::ChromosomeTooShort {
                length: self.chromosome_length,
            });
        }
        if self.mutation_percent > 100 {
            return Err(GaError::MutationProbabilityOutOfRange {
                percent: self.mutation_percent,
            });
        }
        if self.max_generations == 0 {
            return Err(GaError::MaxGenerationsZero);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PopulationConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.chromosome_length, 64);
        assert_eq!(config.crossover, Crossover::Uniform);
        assert_eq!(config.mutation_percent, 60);
        assert_eq!(config.max_generations, 400);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PopulationConfig::default()
            .with_population_size(10)
            .with_chromosome_length(12)
            .with_crossover(Crossover::CycleV2)
            .with_mutation_percent(5)
            .with_max_generations(50)
            .with_seed(7);

        assert_eq!(config.population_size, 10);
        assert_eq!(config.chromosome_length, 12);
        assert_eq!(config.crossover, Crossover::CycleV2);
        assert_eq!(config.mutation_percent, 5);
        assert_eq!(config.max_generations, 50);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_clamp_mutation_percent() {
        let config = PopulationConfig::default().with_mutation_percent(250);
        assert_eq!(config.mutation_percent, 100);
    }

    #[test]
    fn test_validate_population_too_small() {
        let err = PopulationConfig::new(1, 10).validate().unwrap_err();
        assert_eq!(err, GaError::PopulationTooSmall { size: 1 });
    }

    #[test]
    fn test_validate_chromosome_too_short() {
        let err = PopulationConfig::new(10, 1).validate().unwrap_err();
        assert_eq!(err, GaError::ChromosomeTooShort { length: 1 });
    }

    #[test]
    fn test_validate_unclamped_mutation_percent() {
        let config = PopulationConfig {
            mutation_percent: 101,
            ..PopulationConfig::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            GaError::MutationProbabilityOutOfRange { percent: 101 }
        );
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = PopulationConfig::default().with_max_generations(0);
        assert_eq!(config.validate().unwrap_err(), GaError::MaxGenerationsZero);
    }

    #[test]
    fn test_validate_minimal_sizes() {
        assert!(PopulationConfig::new(2, 2).validate().is_ok());
    }
}
