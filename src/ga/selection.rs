//! Mean-threshold truncation selection.
//!
//! Each generation the population is ranked fittest-first and every
//! individual scoring strictly below the rounded mean fitness is culled.
//! Survivors form a contiguous prefix of the slot array; parents for the
//! refill are drawn uniformly from that prefix.
//!
//! # References
//!
//! - Mühlenbein & Schlierkamp-Voosen (1993), "Predictive Models for the
//!   Breeder Genetic Algorithm" (truncation selection)

use super::types::{slot_by_fitness_desc, Individual, Slot};
use rand::Rng;

/// Mean fitness rounded to the nearest integer (halves round up).
///
/// Returns 0 for an empty input.
pub fn rounded_mean_fitness<'a, I>(individuals: I) -> usize
where
    I: IntoIterator<Item = &'a Individual>,
{
    let (sum, count) = individuals
        .into_iter()
        .fold((0usize, 0usize), |(sum, count), ind| {
            (sum + ind.fitness(), count + 1)
        });
    if count == 0 {
        return 0;
    }
    (sum as f64 / count as f64).round() as usize
}

/// Sorts slots fittest-first, dead slots last.
pub fn rank_slots(slots: &mut [Slot]) {
    slots.sort_by(slot_by_fitness_desc);
}

/// Marks every living slot with fitness strictly below `threshold` as dead.
///
/// Returns the number of slots culled. On a ranked array the dead slots form
/// a suffix.
pub fn cull_below(slots: &mut [Slot], threshold: usize) -> usize {
    let mut culled = 0;
    for slot in slots.iter_mut() {
        if slot.individual().is_some_and(|ind| ind.fitness() < threshold) {
            *slot = Slot::Dead;
            culled += 1;
        }
    }
    culled
}

/// Draws two distinct parent indices uniformly from `0..living`.
///
/// The second index is redrawn until it differs from the first.
///
/// # Panics
/// Panics if `living < 2`; callers validate this before reproducing.
pub fn pick_parents<R: Rng>(living: usize, rng: &mut R) -> (usize, usize) {
    assert!(living >= 2, "parent sampling needs at least 2 living individuals");

    let first = rng.random_range(0..living);
    let mut second = rng.random_range(0..living);
    while second == first {
        second = rng.random_range(0..living);
    }
    (first, second)
}
