//! Bit-string genetic operators.
//!
//! Crossover and mutation operators for binary chromosomes. They operate on
//! `&[Gene]` slices and always build the offspring into a new vector, so
//! parents are never modified.
//!
//! # Crossover Operators
//!
//! - [`one_point_crossover`]: head of parent1, tail of parent2
//! - [`two_point_crossover`]: parent1 / parent2 / parent1 segments
//! - [`uniform_crossover`]: per-locus fair coin
//! - [`cycle_crossover_v2`] (CX2): Hussain et al. (2017), adapted to a
//!   two-symbol alphabet
//!
//! # Mutation Operators
//!
//! - [`flip_mutation`]: with probability `P/100`, flip exactly one locus
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Hussain et al. (2017), "Genetic Algorithm for Traveling Salesman Problem
//!   with Modified Cycle Crossover Operator"

use super::chromosome::{Chromosome, Gene};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// One-point crossover.
///
/// Draws a cut point `c` in `[0, n-1)`; the child takes loci `0..=c` from
/// parent1 and `c+1..n` from parent2, so both parents always contribute.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 genes.
pub fn one_point_crossover<R: Rng>(parent1: &[Gene], parent2: &[Gene], rng: &mut R) -> Vec<Gene> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "one-point crossover needs at least 2 genes");

    let cut = rng.random_range(0..n - 1);
    one_point_at(parent1, parent2, cut)
}

fn one_point_at(parent1: &[Gene], parent2: &[Gene], cut: usize) -> Vec<Gene> {
    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..=cut]);
    child.extend_from_slice(&parent2[cut + 1..]);
    child
}

/// Two-point crossover.
///
/// Draws `c1` in `[0, n/2)` and `c2` in `[n/2, n)`; the child is
/// `parent1[..=c1] + parent2[c1+1..=c2] + parent1[c2+1..]`.
///
/// # Panics
/// Panics if parents have different lengths or fewer than 2 genes.
pub fn two_point_crossover<R: Rng>(parent1: &[Gene], parent2: &[Gene], rng: &mut R) -> Vec<Gene> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n >= 2, "two-point crossover needs at least 2 genes");

    let (c1, c2) = two_cut_points(n, rng);
    two_point_at(parent1, parent2, c1, c2)
}

fn two_point_at(parent1: &[Gene], parent2: &[Gene], c1: usize, c2: usize) -> Vec<Gene> {
    let mut child = Vec::with_capacity(parent1.len());
    child.extend_from_slice(&parent1[..=c1]);
    child.extend_from_slice(&parent2[c1 + 1..=c2]);
    child.extend_from_slice(&parent1[c2 + 1..]);
    child
}

/// Uniform crossover: each locus independently comes from either parent
/// with probability 1/2.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(parent1: &[Gene], parent2: &[Gene], rng: &mut R) -> Vec<Gene> {
    assert_eq!(parent1.len(), parent2.len(), "parents must have equal length");

    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

/// Cycle crossover, second variant (CX2), on binary chromosomes.
///
/// # Algorithm
///
/// 1. Copy the gene of parent2 at the current locus into the child
/// 2. Look that gene up in parent1's remaining (not yet consumed) loci; the
///    first hit is the next locus of the chase
/// 3. Consume the current locus from both parents' remaining genes
/// 4. When the lookup misses, or points back at the consumed locus, the cycle
///    is closed and the chase restarts at the first remaining locus
///
/// With a two-symbol alphabet many loci share a value, so the lookup picks
/// the first match rather than a unique position. The child is therefore a
/// rearrangement of parent2's genes in chase order: always length `n`, same
/// number of ones as parent2, deterministic given the parents.
///
/// The textbook second lookup of each step, into the partially built child,
/// is intentionally omitted; the lookup in parent1 alone picks the next locus.
///
/// # Complexity
/// O(n²) time (remaining arrays are rebuilt on every step), O(n) space
///
/// # Panics
/// Panics if parents have different lengths.
pub fn cycle_crossover_v2(parent1: &[Gene], parent2: &[Gene]) -> Vec<Gene> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut remaining1 = parent1.to_vec();
    let mut remaining2 = parent2.to_vec();
    let mut child = Vec::with_capacity(n);
    let mut cursor = 0;

    while !remaining2.is_empty() {
        let gene = remaining2[cursor];
        child.push(gene);

        let next = Chromosome::index_of(&remaining1, gene);
        remaining1.remove(cursor);
        remaining2.remove(cursor);

        cursor = match next {
            // Indices past the removed slot shift down by one.
            Some(locus) if locus > cursor => locus - 1,
            Some(locus) if locus < cursor => locus,
            _ => 0,
        };
    }

    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Single-locus flip mutation.
///
/// With probability `percent / 100`, flips one uniformly chosen gene and
/// returns its locus. Otherwise leaves `genes` untouched and returns `None`.
/// At most one locus is ever changed.
///
/// # Complexity
/// O(1)
pub fn flip_mutation<R: Rng>(genes: &mut [Gene], percent: u8, rng: &mut R) -> Option<usize> {
    if genes.is_empty() || rng.random_range(0u8..100) >= percent {
        return None;
    }
    let locus = rng.random_range(0..genes.len());
    genes[locus] = genes[locus].flip();
    Some(locus)
}

// ============================================================================
// Helpers
// ============================================================================

/// Pick two-point cut points: `c1` in `[0, n/2)`, `c2` in `[n/2, n)`.
///
/// The pair is redrawn until `c2 >= c1`; with disjoint halves the first draw
/// always qualifies, so this terminates for every `n >= 2`.
fn two_cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let half = n / 2;
    loop {
        let c1 = rng.random_range(0..half);
        let c2 = rng.random_range(half..n);
        if c2 >= c1 {
            return (c1, c2);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
