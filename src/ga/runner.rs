//! Run control around a [`Population`].
//!
//! [`GaRunner`] owns everything the population deliberately does not:
//! seeding, the generation budget, the stop condition and cancellation.
//! The loop is: build population → `evolve` → inspect `best` → repeat.

use super::chromosome::Chromosome;
use super::config::RunConfig;
use super::population::Population;
use super::target::Target;
use crate::error::Result;
use crate::random::create_rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Best chromosome of the final generation.
    pub best: Chromosome,

    /// Number of `evolve` calls performed.
    pub generations: usize,

    /// Whether the best chromosome matches the target exactly.
    pub converged: bool,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Seed the run was started with; replaying it reproduces the run.
    pub seed: u64,

    /// Best fitness of the initial population followed by one entry per
    /// generation.
    pub fitness_history: Vec<u64>,
}

/// Drives a population until it converges or the budget runs out.
///
/// # Usage
///
/// ```
/// use hello_ga::ga::{GaRunner, PopulationConfig, RunConfig, Target};
///
/// let target = Target::new("Hi!").unwrap();
/// let config = RunConfig::default()
///     .with_population(PopulationConfig::default().with_population_size(128))
///     .with_max_generations(2000)
///     .with_seed(42);
/// let result = GaRunner::run(&target, &config).unwrap();
/// assert!(result.generations <= 2000);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs to convergence or until `max_generations` is exhausted.
    pub fn run(target: &Target, config: &RunConfig) -> Result<RunResult> {
        Self::run_with_observer(target, config, None, |_, _| {})
    }

    /// Runs with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the run stops
    /// before the next generation and returns the current best.
    pub fn run_with_cancel(
        target: &Target,
        config: &RunConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<RunResult> {
        Self::run_with_observer(target, config, cancel, |_, _| {})
    }

    /// Runs and reports the best chromosome after construction (generation
    /// 0) and after every generation.
    pub fn run_with_observer<F>(
        target: &Target,
        config: &RunConfig,
        cancel: Option<Arc<AtomicBool>>,
        mut observer: F,
    ) -> Result<RunResult>
    where
        F: FnMut(usize, &Chromosome),
    {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        let mut population = Population::new(target.clone(), config.population.clone(), &mut rng)?;

        let mut fitness_history = Vec::with_capacity(config.max_generations.min(4096) + 1);
        fitness_history.push(population.best().fitness());
        observer(0, population.best());

        let mut cancelled = false;

        while population.best().fitness() > 0 && population.generation() < config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            population.evolve(&mut rng);

            let best = population.best();
            log::debug!(
                "generation {}: {:?} (fitness {})",
                population.generation(),
                best.gene_string(),
                best.fitness()
            );
            fitness_history.push(best.fitness());
            observer(population.generation(), best);
        }

        let best = population.best().clone();
        let converged = best.fitness() == 0;
        let generations = population.generation();

        if converged {
            log::info!("converged on {:?} after {generations} generations", best.gene_string());
        } else if cancelled {
            log::info!("cancelled after {generations} generations");
        } else {
            log::info!(
                "generation budget of {} exhausted; best {:?} (fitness {})",
                config.max_generations,
                best.gene_string(),
                best.fitness()
            );
        }

        Ok(RunResult {
            best,
            generations,
            converged,
            cancelled,
            seed,
            fitness_history,
        })
    }
}
