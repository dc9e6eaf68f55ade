//! Generational state and the evolution step.
//!
//! A [`Population`] is always sorted ascending by fitness, so
//! [`best`](Population::best) is simply the first individual. Each call to
//! [`evolve`](Population::evolve) replaces the whole generation:
//!
//! 1. the `round(size * elitism_rate)` best individuals are copied unchanged;
//! 2. every remaining slot is filled either by a tournament-selected pair's
//!    crossover children (probability `crossover_rate`) or by carrying one
//!    individual over, and each new individual is swapped for a mutant with
//!    probability `mutation_rate`;
//! 3. a second crossover child that finds no free slot is dropped;
//! 4. the new generation is scored and stably sorted.
//!
//! All random draws happen in slot order before any scoring, so a seeded
//! run produces the same generations whether or not scoring is parallel.

use super::chromosome::{crossover_genes, mutate_gene, random_pivot, Chromosome};
use super::config::{PopulationConfig, Replacement};
use super::selection::tournament;
use super::target::Target;
use crate::error::{GaError, Result};
use rand::Rng;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An individual of the next generation before it is scored.
enum Offspring {
    /// Copied unchanged; fitness is already known.
    Carried(Chromosome),
    /// Produced by crossover and/or mutation; needs scoring.
    Bred(Vec<u8>),
}

/// A fixed-size, fitness-sorted set of chromosomes.
///
/// # Examples
///
/// ```
/// use hello_ga::ga::{Population, PopulationConfig, Target};
/// use hello_ga::random::create_rng;
///
/// let target = Target::new("Hi").unwrap();
/// let config = PopulationConfig::default().with_population_size(64);
/// let mut rng = create_rng(42);
/// let mut pop = Population::new(target, config, &mut rng).unwrap();
///
/// while pop.best().fitness() > 0 && pop.generation() < 1000 {
///     pop.evolve(&mut rng);
/// }
/// assert_eq!(pop.len(), 64);
/// ```
#[derive(Debug, Clone)]
pub struct Population {
    target: Target,
    config: PopulationConfig,
    individuals: Vec<Chromosome>,
    generation: usize,
}

impl Population {
    /// Creates a random population of `config.population_size` individuals,
    /// sorted ascending by fitness.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`](crate::GaError::InvalidConfig) if the
    /// configuration does not validate.
    pub fn new<R: Rng>(target: Target, config: PopulationConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;

        let mut individuals: Vec<Chromosome> = (0..config.population_size)
            .map(|_| Chromosome::generate_random(&target, rng))
            .collect();
        individuals.sort_by_key(Chromosome::fitness);

        log::debug!(
            "initialised population of {} for target {:?} (best fitness {})",
            individuals.len(),
            target.to_string(),
            individuals[0].fitness()
        );

        Ok(Self {
            target,
            config,
            individuals,
            generation: 0,
        })
    }

    /// Creates a population from existing chromosomes.
    ///
    /// The chromosomes are sorted; their count must equal
    /// `config.population_size` and their genes must match the target.
    pub fn from_individuals(
        target: Target,
        config: PopulationConfig,
        individuals: Vec<Chromosome>,
    ) -> Result<Self> {
        config.validate()?;
        if individuals.len() != config.population_size {
            return Err(GaError::InvalidConfig(format!(
                "expected {} individuals, got {}",
                config.population_size,
                individuals.len()
            )));
        }
        // Re-score so fitness is always relative to this target.
        let mut individuals = individuals
            .into_iter()
            .map(|ind| Chromosome::from_gene(&target, ind.gene().to_vec()))
            .collect::<Result<Vec<_>>>()?;
        individuals.sort_by_key(Chromosome::fitness);

        Ok(Self {
            target,
            config,
            individuals,
            generation: 0,
        })
    }

    /// The lowest-fitness chromosome of the current generation.
    pub fn best(&self) -> &Chromosome {
        &self.individuals[0]
    }

    /// The current generation, best first.
    pub fn individuals(&self) -> &[Chromosome] {
        &self.individuals
    }

    /// Number of individuals; constant for the population's lifetime.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Always `false`; a population has at least one individual.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The configuration the population was built with.
    pub fn config(&self) -> &PopulationConfig {
        &self.config
    }

    /// The target every individual is scored against.
    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Number of completed `evolve` calls.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Picks a parent by tournament from the current generation.
    pub fn tournament_select<R: Rng>(&self, rng: &mut R) -> &Chromosome {
        let idx = tournament(&self.individuals, self.config.tournament_size, rng);
        &self.individuals[idx]
    }

    /// Replaces the current generation with the next one.
    pub fn evolve<R: Rng>(&mut self, rng: &mut R) {
        let size = self.config.population_size;
        let elite_count = self.config.elite_count();
        log::trace!(
            "generation {}: carrying {elite_count} elites of {size}",
            self.generation + 1
        );

        let mut next: Vec<Offspring> = Vec::with_capacity(size);
        next.extend(
            self.individuals[..elite_count]
                .iter()
                .cloned()
                .map(Offspring::Carried),
        );

        while next.len() < size {
            if rng.random_bool(self.config.crossover_rate) {
                let p1 = self.tournament_select(rng).gene();
                let p2 = self.tournament_select(rng).gene();
                let (first, second) = match random_pivot(p1.len(), rng) {
                    Some(pivot) => crossover_genes(p1, p2, pivot),
                    None => (p1.to_vec(), p2.to_vec()),
                };

                next.push(self.maybe_mutate(first, rng));
                if next.len() < size {
                    next.push(self.maybe_mutate(second, rng));
                }
            } else {
                let source = match self.config.replacement {
                    Replacement::Positional => &self.individuals[next.len()],
                    Replacement::Tournament => self.tournament_select(rng),
                };
                let offspring = if rng.random_bool(self.config.mutation_rate) {
                    let mut gene = source.gene().to_vec();
                    mutate_gene(&mut gene, rng);
                    Offspring::Bred(gene)
                } else {
                    Offspring::Carried(source.clone())
                };
                next.push(offspring);
            }
        }

        let mut individuals = self.score(next);
        individuals.sort_by_key(Chromosome::fitness);
        debug_assert_eq!(individuals.len(), size);

        self.individuals = individuals;
        self.generation += 1;
    }

    fn maybe_mutate<R: Rng>(&self, mut gene: Vec<u8>, rng: &mut R) -> Offspring {
        if rng.random_bool(self.config.mutation_rate) {
            mutate_gene(&mut gene, rng);
        }
        Offspring::Bred(gene)
    }

    fn score(&self, next: Vec<Offspring>) -> Vec<Chromosome> {
        let target = &self.target;
        let finish = |o: Offspring| match o {
            Offspring::Carried(c) => c,
            Offspring::Bred(gene) => Chromosome::scored(target, gene),
        };

        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return next.into_par_iter().map(finish).collect();
        }

        next.into_iter().map(finish).collect()
    }
}
