//! Error type for the GA engine.
//!
//! Every variant is a configuration or precondition failure detected before
//! any population state is modified. Once preconditions hold, the
//! evolutionary loop itself cannot fail.

/// Errors reported by [`Population`](super::Population),
/// [`PopulationConfig`](super::PopulationConfig) and chromosome parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaError {
    #[error("population_size must be at least 2, got {size}")]
    PopulationTooSmall { size: usize },

    #[error("chromosome_length must be at least 2, got {length}")]
    ChromosomeTooShort { length: usize },

    #[error("mutation probability must be within 0..=100 percent, got {percent}")]
    MutationProbabilityOutOfRange { percent: u8 },

    #[error("max_generations must be at least 1")]
    MaxGenerationsZero,

    #[error("invalid gene {character:?} at position {position}: expected '0' or '1'")]
    InvalidGene { character: char, position: usize },

    #[error("chromosome length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("population size mismatch: expected {expected} chromosomes, got {actual}")]
    PopulationSizeMismatch { expected: usize, actual: usize },

    #[error("reproduction needs at least 2 living individuals, got {living}")]
    LivingPopulationTooSmall { living: usize },
}

/// Result alias used throughout the `ga` module.
pub type Result<T> = std::result::Result<T, GaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_violated_invariant() {
        let err = GaError::PopulationTooSmall { size: 1 };
        assert_eq!(err.to_string(), "population_size must be at least 2, got 1");

        let err = GaError::InvalidGene {
            character: 'x',
            position: 3,
        };
        assert!(err.to_string().contains("'x'"));
        assert!(err.to_string().contains("position 3"));

        let err = GaError::LengthMismatch {
            expected: 10,
            actual: 9,
        };
        assert_eq!(
            err.to_string(),
            "chromosome length mismatch: expected 10, got 9"
        );

        let err = GaError::PopulationSizeMismatch {
            expected: 3,
            actual: 2,
        };
        assert_eq!(
            err.to_string(),
            "population size mismatch: expected 3 chromosomes, got 2"
        );
    }
}
