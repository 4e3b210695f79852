//! Fixed-length bit-string encoding.
//!
//! A [`Chromosome`] is an ordered sequence of [`Gene`]s over the binary
//! alphabet. Its length is fixed at construction; offspring are always built
//! into a fresh gene vector rather than by editing a parent in place.

use super::error::{GaError, Result};
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// A single binary gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gene {
    Zero,
    One,
}

impl Gene {
    /// Returns the opposite allele.
    pub fn flip(self) -> Self {
        match self {
            Gene::Zero => Gene::One,
            Gene::One => Gene::Zero,
        }
    }

    /// Draws a gene uniformly from `{0, 1}`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Gene::One
        } else {
            Gene::Zero
        }
    }

    /// Character form: `'0'` or `'1'`.
    pub fn as_char(self) -> char {
        match self {
            Gene::Zero => '0',
            Gene::One => '1',
        }
    }
}

impl TryFrom<char> for Gene {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, char> {
        match c {
            '0' => Ok(Gene::Zero),
            '1' => Ok(Gene::One),
            other => Err(other),
        }
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A candidate solution encoded as a bit string.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::{Chromosome, Gene};
///
/// let c: Chromosome = "1011".parse()?;
/// assert_eq!(c.len(), 4);
/// assert_eq!(c.genes()[1], Gene::Zero);
/// assert_eq!(c.to_string(), "1011");
/// # Ok::<(), u_bitga::ga::GaError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<Gene>,
}

impl Chromosome {
    /// Creates a chromosome whose genes are i.i.d. uniform over `{0, 1}`.
    pub fn random<R: Rng>(length: usize, rng: &mut R) -> Self {
        let genes = (0..length).map(|_| Gene::random(rng)).collect();
        Self { genes }
    }

    /// Wraps an already-built gene sequence, taking ownership.
    pub fn from_genes(genes: Vec<Gene>) -> Self {
        Self { genes }
    }

    /// Parses a literal bit string. Any character other than `'0'` or `'1'`
    /// is rejected, including whitespace.
    pub fn parse_bits(bits: &str) -> Result<Self> {
        let genes = bits
            .chars()
            .enumerate()
            .map(|(position, c)| {
                Gene::try_from(c).map_err(|character| GaError::InvalidGene {
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { genes })
    }

    /// First locus in `genes` holding `value`, or `None`.
    ///
    /// Linear scan; used by the cycle-crossover chase.
    pub fn index_of(genes: &[Gene], value: Gene) -> Option<usize> {
        genes.iter().position(|&g| g == value)
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn into_genes(self) -> Vec<Gene> {
        self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Gene at `locus`, or `None` when out of range.
    pub fn gene(&self, locus: usize) -> Option<Gene> {
        self.genes.get(locus).copied()
    }

    /// Bitwise complement: every gene flipped.
    pub fn complement(&self) -> Self {
        Self {
            genes: self.genes.iter().map(|g| g.flip()).collect(),
        }
    }

    pub fn to_bit_string(&self) -> String {
        self.genes.iter().map(|g| g.as_char()).collect()
    }
}

impl FromStr for Chromosome {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_bits(s)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            write!(f, "{gene}")?;
        }
        Ok(())
    }
}
