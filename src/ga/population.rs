//! The evolutionary engine.
//!
//! A [`Population`] owns a fixed number of [`Slot`]s and advances one
//! generation through three strictly ordered steps:
//!
//! 1. [`evaluate_fitness`](Population::evaluate_fitness): score every living
//!    individual against the target
//! 2. [`select_fittest_individuals`](Population::select_fittest_individuals):
//!    rank fittest-first and cull everything below the rounded mean
//! 3. [`reproduce`](Population::reproduce): refill each dead slot with a
//!    crossed-over, possibly mutated offspring of two distinct survivors
//!
//! Outside the window between steps 2 and 3 every slot is alive.

use super::chromosome::Chromosome;
use super::config::PopulationConfig;
use super::error::{GaError, Result};
use super::fitness::FitnessCalculator;
use super::operators::flip_mutation;
use super::selection::{cull_below, pick_parents, rank_slots, rounded_mean_fitness};
use super::types::{Individual, Slot};
use rand::Rng;
use std::fmt;
use tracing::instrument;

/// What a selection step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOutcome {
    /// Rounded mean fitness used as the survival threshold.
    pub mean_fitness: usize,
    /// Survivors, occupying slots `0..living`.
    pub living: usize,
    /// Dead slots the next reproduce step will refill.
    pub offspring_quota: usize,
}

/// Fixed-size population of bit-string individuals.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{Population, PopulationConfig};
/// use u_bitga::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let config = PopulationConfig::new(10, 8);
/// let mut population = Population::new(config, &mut rng)?;
///
/// population.evaluate_fitness("10110011")?;
/// let outcome = population.select_fittest_individuals();
/// assert_eq!(population.living_count(), outcome.living);
///
/// if outcome.living >= 2 {
///     population.reproduce(&mut rng)?;
///     assert_eq!(population.living_count(), 10);
/// }
/// # Ok::<(), u_bitga::ga::GaError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    slots: Vec<Slot>,
    config: PopulationConfig,
}

impl Population {
    /// Creates a founding generation of random individuals.
    ///
    /// Fails if the configuration is invalid.
    pub fn new<R: Rng>(config: PopulationConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let slots = (0..config.population_size)
            .map(|_| Slot::Alive(Individual::random(config.chromosome_length, rng)))
            .collect();
        Ok(Self { slots, config })
    }

    /// Creates a founding generation from given chromosomes.
    ///
    /// Exactly `population_size` chromosomes of `chromosome_length` genes
    /// are required; a wrong count is reported as
    /// [`GaError::PopulationSizeMismatch`], a wrong length as
    /// [`GaError::LengthMismatch`].
    pub fn from_chromosomes(config: PopulationConfig, chromosomes: Vec<Chromosome>) -> Result<Self> {
        config.validate()?;
        if chromosomes.len() != config.population_size {
            return Err(GaError::PopulationSizeMismatch {
                expected: config.population_size,
                actual: chromosomes.len(),
            });
        }
        if let Some(bad) = chromosomes
            .iter()
            .find(|c| c.len() != config.chromosome_length)
        {
            return Err(GaError::LengthMismatch {
                expected: config.chromosome_length,
                actual: bad.len(),
            });
        }
        let slots = chromosomes
            .into_iter()
            .map(|c| Slot::Alive(Individual::new(c)))
            .collect();
        Ok(Self { slots, config })
    }

    /// Scores every living individual against `target`.
    ///
    /// The target must be a `'0'`/`'1'` string of exactly
    /// `chromosome_length` characters; otherwise no score is touched.
    #[instrument(level = "debug", skip(self, target), fields(population_size = self.slots.len(), target_len = target.len()))]
    pub fn evaluate_fitness(&mut self, target: &str) -> Result<()> {
        let calculator = FitnessCalculator::for_target(target, self.config.chromosome_length)?;
        self.evaluate_with(&calculator)
    }

    /// Scores every living individual with a prebuilt calculator.
    pub fn evaluate_with(&mut self, calculator: &FitnessCalculator) -> Result<()> {
        if calculator.max_fitness() != self.config.chromosome_length {
            return Err(GaError::LengthMismatch {
                expected: self.config.chromosome_length,
                actual: calculator.max_fitness(),
            });
        }
        for ind in self.slots.iter_mut().filter_map(Slot::individual_mut) {
            let score = calculator.evaluate(ind.chromosome());
            ind.set_fitness(score);
        }
        Ok(())
    }

    /// Ranks slots fittest-first and culls every individual whose fitness is
    /// strictly below the rounded mean.
    ///
    /// Afterwards slot 0 holds the fittest individual and the dead slots
    /// form a suffix. If everyone ties at the mean nobody is culled.
    #[instrument(level = "debug", skip(self), fields(population_size = self.slots.len()))]
    pub fn select_fittest_individuals(&mut self) -> SelectionOutcome {
        let mean_fitness = rounded_mean_fitness(self.individuals());
        rank_slots(&mut self.slots);
        let culled = cull_below(&mut self.slots, mean_fitness);

        let outcome = SelectionOutcome {
            mean_fitness,
            living: self.living_count(),
            offspring_quota: self.dead_count(),
        };
        tracing::debug!(
            mean_fitness,
            culled,
            living = outcome.living,
            best = ?self.fittest_individual().map(Individual::fitness),
            "selection complete"
        );
        outcome
    }

    /// Refills every dead slot, in index order, with a new offspring.
    ///
    /// Each offspring comes from two distinct survivors via the configured
    /// crossover, then with probability `mutation_percent / 100` gets one
    /// locus flipped. New individuals carry fitness 0 until the next
    /// evaluation. Returns the number of offspring created.
    ///
    /// Fails without modifying any slot if offspring are needed but fewer
    /// than two individuals survived.
    #[instrument(level = "debug", skip(self, rng), fields(population_size = self.slots.len(), crossover = %self.config.crossover))]
    pub fn reproduce<R: Rng>(&mut self, rng: &mut R) -> Result<usize> {
        let quota = self.dead_count();
        if quota == 0 {
            return Ok(0);
        }

        let survivors: Vec<&Chromosome> = self
            .individuals()
            .map(Individual::chromosome)
            .collect();
        if survivors.len() < 2 {
            return Err(GaError::LivingPopulationTooSmall {
                living: survivors.len(),
            });
        }

        let mut mutations = 0usize;
        let offspring: Vec<Chromosome> = (0..quota)
            .map(|_| {
                let (a, b) = pick_parents(survivors.len(), rng);
                let mut genes =
                    self.config
                        .crossover
                        .apply(survivors[a].genes(), survivors[b].genes(), rng);
                if flip_mutation(&mut genes, self.config.mutation_percent, rng).is_some() {
                    mutations += 1;
                }
                Chromosome::from_genes(genes)
            })
            .collect();

        let dead = self.slots.iter_mut().filter(|slot| !slot.is_alive());
        for (slot, child) in dead.zip(offspring) {
            *slot = Slot::Alive(Individual::new(child));
        }

        tracing::debug!(offspring = quota, mutations, "reproduction complete");
        Ok(quota)
    }

    /// The individual in slot 0.
    ///
    /// Only meaningful right after
    /// [`select_fittest_individuals`](Self::select_fittest_individuals),
    /// which sorts fittest-first.
    pub fn fittest_individual(&self) -> Option<&Individual> {
        self.slots.first().and_then(Slot::individual)
    }

    /// Living individuals in slot order.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.slots.iter().filter_map(Slot::individual)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// Slot count `N`; constant for the population's lifetime.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn living_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_alive()).count()
    }

    pub fn dead_count(&self) -> usize {
        self.slots.len() - self.living_count()
    }
}

/// One line per slot: the fitness, or `empty` for a dead slot.
impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in &self.slots {
            match slot {
                Slot::Alive(ind) => writeln!(f, "{}", ind.fitness())?,
                Slot::Dead => writeln!(f, "empty")?,
            }
        }
        Ok(())
    }
}
