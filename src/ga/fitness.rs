//! Positional-match fitness.

use super::chromosome::{Chromosome, Gene};
use super::error::{GaError, Result};

/// Scores candidates by Hamming similarity to a fixed target.
///
/// Fitness is the number of loci at which candidate and target agree, so it
/// ranges over `0..=L` and `L` marks an exact solution.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{Chromosome, FitnessCalculator};
///
/// let calc = FitnessCalculator::new("1111".parse()?);
/// assert_eq!(calc.evaluate(&"1010".parse()?), 2);
/// assert_eq!(calc.max_fitness(), 4);
/// # Ok::<(), u_bitga::ga::GaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FitnessCalculator {
    target: Vec<Gene>,
}

impl FitnessCalculator {
    pub fn new(target: Chromosome) -> Self {
        Self {
            target: target.into_genes(),
        }
    }

    /// Parses `bits` and checks it against the expected chromosome length.
    pub fn for_target(bits: &str, chromosome_length: usize) -> Result<Self> {
        let target = Chromosome::parse_bits(bits)?;
        if target.len() != chromosome_length {
            return Err(GaError::LengthMismatch {
                expected: chromosome_length,
                actual: target.len(),
            });
        }
        Ok(Self::new(target))
    }

    /// The score of an exact match.
    pub fn max_fitness(&self) -> usize {
        self.target.len()
    }

    pub fn target(&self) -> &[Gene] {
        &self.target
    }

    /// Counts matching loci.
    ///
    /// # Panics
    /// Panics if the candidate length differs from the target length.
    pub fn evaluate(&self, chromosome: &Chromosome) -> usize {
        let genes = chromosome.genes();
        assert_eq!(
            genes.len(),
            self.target.len(),
            "candidate and target must have equal length"
        );
        genes
            .iter()
            .zip(&self.target)
            .filter(|(a, b)| a == b)
            .count()
    }
}
