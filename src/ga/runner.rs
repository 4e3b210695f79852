//! Generational driver.
//!
//! [`GaRunner`] repeats evaluate → select → reproduce on one
//! [`Population`] until the fittest individual matches the target exactly,
//! the generation budget runs out, the survivors collapse below two, or the
//! run is cancelled.

use super::config::PopulationConfig;
use super::error::Result;
use super::fitness::FitnessCalculator;
use super::population::Population;
use super::types::Individual;
use crate::random::create_rng;
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::instrument;

/// Per-generation statistics, recorded right after selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Fitness of the individual in slot 0 after ranking.
    pub best_fitness: usize,
    /// Rounded mean fitness used as the survival threshold.
    pub mean_fitness: usize,
    /// Survivors of this generation's culling.
    pub living: usize,
    /// Offspring bred to refill the culled slots.
    pub offspring: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Fittest individual observed in any generation.
    ///
    /// `None` only when the run was cancelled before the first generation.
    pub best: Option<Individual>,

    /// Fitness of `best`, or 0 when there is none.
    pub best_fitness: usize,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Whether an exact match to the target was found.
    pub solved: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Whether the run stopped because fewer than two individuals survived
    /// culling while offspring were still needed.
    pub collapsed: bool,

    /// Statistics for every evaluated generation.
    pub history: Vec<GenerationStats>,
}

/// Executes the generational loop.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaRunner, PopulationConfig};
///
/// let config = PopulationConfig::new(30, 12)
///     .with_max_generations(200)
///     .with_seed(42);
/// let result = GaRunner::run(&config, "101100111000")?;
/// assert!(result.generations <= 200);
/// assert!(result.best_fitness <= 12);
/// # Ok::<(), u_bitga::ga::GaError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA toward `target`.
    ///
    /// Fails fast on an invalid configuration or a target that does not
    /// parse to exactly `chromosome_length` genes.
    pub fn run(config: &PopulationConfig, target: &str) -> Result<GaResult> {
        Self::run_with_cancel(config, target, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation starts and returns the best individual
    /// found so far.
    pub fn run_with_cancel(
        config: &PopulationConfig,
        target: &str,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(config, target, &mut rng, cancel)
    }

    /// Runs the GA drawing every random decision from `rng`.
    pub fn run_with_rng<R: Rng>(
        config: &PopulationConfig,
        target: &str,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        config.validate()?;
        let calculator = FitnessCalculator::for_target(target, config.chromosome_length)?;
        let mut population = Population::new(config.clone(), rng)?;
        Self::evolve(&mut population, &calculator, rng, cancel)
    }

    /// Evolves an existing population for up to its configured
    /// `max_generations`.
    ///
    /// Each generation evaluates, selects, records [`GenerationStats`], then
    /// stops on an exact match or a collapse before reproducing.
    #[instrument(level = "debug", skip_all, fields(population_size = population.len(), crossover = %population.config().crossover))]
    pub fn evolve<R: Rng>(
        population: &mut Population,
        calculator: &FitnessCalculator,
        rng: &mut R,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        let max_generations = population.config().max_generations;
        let max_fitness = calculator.max_fitness();

        let mut best: Option<Individual> = None;
        let mut history = Vec::new();
        let mut solved = false;
        let mut cancelled = false;
        let mut collapsed = false;

        for generation in 0..max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population.evaluate_with(calculator)?;
            let outcome = population.select_fittest_individuals();

            let Some(fittest) = population.fittest_individual() else {
                break;
            };
            let best_fitness = fittest.fitness();
            if best.as_ref().map_or(true, |b| best_fitness > b.fitness()) {
                best = Some(fittest.clone());
            }
            history.push(GenerationStats {
                generation,
                best_fitness,
                mean_fitness: outcome.mean_fitness,
                living: outcome.living,
                offspring: outcome.offspring_quota,
            });

            if best_fitness == max_fitness {
                solved = true;
                tracing::info!(generation, best_fitness, "exact solution found");
                break;
            }
            if outcome.offspring_quota > 0 && outcome.living < 2 {
                collapsed = true;
                tracing::warn!(
                    generation,
                    living = outcome.living,
                    "population collapsed below two survivors"
                );
                break;
            }

            population.reproduce(rng)?;
        }

        let best_fitness = best.as_ref().map_or(0, Individual::fitness);
        tracing::info!(
            generations = history.len(),
            best_fitness,
            solved,
            cancelled,
            collapsed,
            "run finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: history.len(),
            solved,
            cancelled,
            collapsed,
            history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Crossover, GaError};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_all_ones_scenario_terminates_and_solves() {
        init_tracing();
        let target = "1111111111";
        let mut solved_runs = 0;

        for seed in 0..20 {
            let config = PopulationConfig::new(10, 10)
                .with_crossover(Crossover::Uniform)
                .with_mutation_percent(0)
                .with_max_generations(500)
                .with_seed(seed);
            let result = GaRunner::run(&config, target).unwrap();

            assert!(result.generations <= 500);
            assert_eq!(result.history.len(), result.generations);
            if result.solved {
                solved_runs += 1;
                let best = result.best.as_ref().expect("solved run has a best");
                assert_eq!(best.chromosome().to_bit_string(), target);
                assert_eq!(result.best_fitness, 10);
            }
        }

        assert!(solved_runs > 0, "no seed reached fitness 10");
    }

    #[test]
    fn test_mutation_drives_every_strategy_to_solution() {
        let target = "0110100110";
        for crossover in Crossover::ALL {
            let solved = (0..10).any(|seed| {
                let config = PopulationConfig::new(20, 10)
                    .with_crossover(crossover)
                    .with_mutation_percent(60)
                    .with_max_generations(400)
                    .with_seed(seed);
                GaRunner::run(&config, target).unwrap().solved
            });
            assert!(solved, "{crossover} never solved a 10-bit target");
        }
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = PopulationConfig::new(16, 24)
            .with_crossover(Crossover::TwoPoint)
            .with_max_generations(60)
            .with_seed(42);
        let target = "101010101010101010101010";
        let a = GaRunner::run(&config, target).unwrap();
        let b = GaRunner::run(&config, target).unwrap();
        assert_eq!(a.history, b.history);
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_history_is_consistent() {
        let config = PopulationConfig::new(20, 32)
            .with_max_generations(30)
            .with_seed(7);
        let target = "1".repeat(32);
        let result = GaRunner::run(&config, &target).unwrap();

        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert_eq!(stats.living + stats.offspring, 20);
            assert!(stats.best_fitness >= stats.mean_fitness);
            assert!(stats.best_fitness <= result.best_fitness);
        }
        let observed_max = result.history.iter().map(|s| s.best_fitness).max();
        assert_eq!(observed_max, Some(result.best_fitness));
    }

    #[test]
    fn test_invalid_target_fails_fast() {
        let config = PopulationConfig::new(10, 4).with_seed(1);
        assert_eq!(
            GaRunner::run(&config, "101").unwrap_err(),
            GaError::LengthMismatch {
                expected: 4,
                actual: 3
            }
        );
        assert!(matches!(
            GaRunner::run(&config, "10-1").unwrap_err(),
            GaError::InvalidGene { character: '-', .. }
        ));
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = PopulationConfig::new(1, 4);
        assert_eq!(
            GaRunner::run(&config, "1010").unwrap_err(),
            GaError::PopulationTooSmall { size: 1 }
        );
    }

    #[test]
    fn test_cancelled_before_first_generation() {
        let config = PopulationConfig::new(10, 8).with_seed(42);
        let cancel = Arc::new(AtomicBool::new(true));
        let result = GaRunner::run_with_cancel(&config, "11110000", Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        assert!(result.best.is_none());
        assert_eq!(result.best_fitness, 0);
    }

    #[test]
    fn test_cancellation_mid_run() {
        use crate::ga::Chromosome;
        use crate::random::create_rng;

        // Identical individuals without mutation: everyone ties at the mean,
        // nobody is culled and nothing ever changes, so only the flag can
        // end the run.
        let config = PopulationConfig::new(4, 4)
            .with_mutation_percent(0)
            .with_max_generations(usize::MAX);
        let chromosomes: Vec<Chromosome> = vec!["0000".parse().unwrap(); 4];
        let mut population = Population::from_chromosomes(config, chromosomes).unwrap();
        let calculator = FitnessCalculator::new("1111".parse().unwrap());

        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(10));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let mut rng = create_rng(42);
        let result =
            GaRunner::evolve(&mut population, &calculator, &mut rng, Some(cancel)).unwrap();

        assert!(result.cancelled);
        assert!(!result.solved);
        assert!(!result.collapsed);
        assert_eq!(result.history.len(), result.generations);
        assert!(result
            .history
            .iter()
            .all(|s| s.best_fitness == 0 && s.offspring == 0 && s.living == 4));
        assert_eq!(population.living_count(), 4);
    }

    #[test]
    fn test_outlier_population_collapses() {
        use crate::ga::Chromosome;
        use crate::random::create_rng;

        // Fitness 3, 0, 0, 0, 0 against 1111: mean 1 leaves one survivor.
        let config = PopulationConfig::new(5, 4);
        let chromosomes: Vec<Chromosome> = ["1110", "0000", "0000", "0000", "0000"]
            .iter()
            .map(|b| b.parse().unwrap())
            .collect();
        let mut population = Population::from_chromosomes(config, chromosomes).unwrap();
        let calculator = FitnessCalculator::new("1111".parse().unwrap());

        let mut rng = create_rng(42);
        let result = GaRunner::evolve(&mut population, &calculator, &mut rng, None).unwrap();

        assert!(result.collapsed);
        assert!(!result.solved);
        assert_eq!(result.generations, 1);
        assert_eq!(result.best_fitness, 3);
        assert_eq!(population.living_count(), 1);
    }

    #[test]
    fn test_evolve_seeded_population_solves_immediately() {
        use crate::ga::Chromosome;
        use crate::random::create_rng;

        let config = PopulationConfig::new(3, 4);
        let chromosomes: Vec<Chromosome> = ["0101", "1111", "0000"]
            .iter()
            .map(|b| b.parse().unwrap())
            .collect();
        let mut population = Population::from_chromosomes(config, chromosomes).unwrap();
        let calculator = FitnessCalculator::new("1111".parse().unwrap());

        let mut rng = create_rng(42);
        let result = GaRunner::evolve(&mut population, &calculator, &mut rng, None).unwrap();

        assert!(result.solved);
        assert_eq!(result.generations, 1);
        assert_eq!(
            population.fittest_individual().map(|i| i.chromosome().to_bit_string()),
            Some("1111".to_string())
        );
    }
}
