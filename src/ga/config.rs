//! Population and run configuration.
//!
//! [`PopulationConfig`] holds the parameters fixed for the lifetime of a
//! [`Population`](super::Population); [`RunConfig`] adds the run-control
//! knobs used by [`GaRunner`](super::GaRunner).

use crate::error::{GaError, Result};

/// How a non-elite slot is filled when crossover is not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Replacement {
    /// Slot `i` takes individual `i` of the previous generation.
    #[default]
    Positional,

    /// Slot `i` takes a fresh tournament winner.
    Tournament,
}

/// Parameters of a population, fixed for the whole run.
///
/// Builders store values as given. Call [`validate`](Self::validate) (the
/// population constructor does) to reject out-of-range values.
///
/// # Defaults
///
/// ```
/// use hello_ga::ga::PopulationConfig;
///
/// let config = PopulationConfig::default();
/// assert_eq!(config.population_size, 2048);
/// assert_eq!(config.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use hello_ga::ga::{PopulationConfig, Replacement};
///
/// let config = PopulationConfig::default()
///     .with_population_size(500)
///     .with_elitism_rate(0.05)
///     .with_replacement(Replacement::Tournament);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulationConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Probability of filling slots by crossover rather than copying (0.0–1.0).
    pub crossover_rate: f64,

    /// Fraction of the best individuals carried over unchanged (0.0–1.0).
    ///
    /// The elite count is `round(population_size * elitism_rate)`.
    pub elitism_rate: f64,

    /// Probability that a new individual is replaced by a mutant (0.0–1.0).
    pub mutation_rate: f64,

    /// Number of draws after the initial one in a tournament.
    pub tournament_size: usize,

    /// Source of the non-crossover individual.
    pub replacement: Replacement,

    /// Score the next generation with rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way.
    pub parallel: bool,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            population_size: 2048,
            crossover_rate: 0.8,
            elitism_rate: 0.1,
            mutation_rate: 0.03,
            tournament_size: 3,
            replacement: Replacement::default(),
            parallel: false,
        }
    }
}

impl PopulationConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the elitism rate.
    pub fn with_elitism_rate(mut self, rate: f64) -> Self {
        self.elitism_rate = rate;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the non-crossover replacement policy.
    pub fn with_replacement(mut self, replacement: Replacement) -> Self {
        self.replacement = replacement;
        self
    }

    /// Enables or disables parallel scoring.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Large, mostly-crossover preset.
    ///
    /// - Population: 2048, Crossover: 0.8, Elitism: 0.1, Mutation: 0.03
    pub fn classic() -> Self {
        Self::default()
    }

    /// Small, elitism-heavy preset.
    ///
    /// - Population: 100, Crossover: 0.5, Elitism: 0.7, Mutation: 0.2
    pub fn small() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.5,
            elitism_rate: 0.7,
            mutation_rate: 0.2,
            ..Self::default()
        }
    }

    /// Number of individuals carried over unchanged each generation.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elitism_rate).round() as usize)
            .min(self.population_size)
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidConfig`] describing the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be positive".into(),
            ));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("elitism_rate", self.elitism_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.tournament_size == 0 {
            return Err(GaError::InvalidConfig(
                "tournament_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(GaError::InvalidConfig(format!(
            "{name} must be in [0, 1], got {rate}"
        )))
    }
}

/// Configuration of a complete run driven by [`GaRunner`](super::GaRunner).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Parameters of the evolved population.
    pub population: PopulationConfig,

    /// Maximum number of `evolve` calls before giving up.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a seed, which is reported in the result.
    pub seed: Option<u64>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            population: PopulationConfig::default(),
            max_generations: 16384,
            seed: None,
        }
    }
}

impl RunConfig {
    /// Sets the population parameters.
    pub fn with_population(mut self, population: PopulationConfig) -> Self {
        self.population = population;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the run and population parameters.
    pub fn validate(&self) -> Result<()> {
        self.population.validate()
    }
}
