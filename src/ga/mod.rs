//! Canonical genetic algorithm for string matching.
//!
//! Evolves a population of fixed-length symbol strings toward an exact
//! match with a [`Target`], using tournament selection, single-point
//! crossover, point mutation and elitism.
//!
//! # Key Types
//!
//! - [`Target`]: The string to match; required to build any chromosome
//! - [`Chromosome`]: Immutable candidate solution with its fitness
//! - [`Population`]: Fitness-sorted generation plus the evolution step
//! - [`PopulationConfig`] / [`RunConfig`]: Algorithm and run parameters
//! - [`GaRunner`]: Drives `evolve` until convergence or budget exhaustion
//!
//! Fitness is the L1 distance between symbol codes; lower is better and 0
//! is an exact match.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod population;
mod runner;
mod selection;
mod target;

pub use chromosome::{fitness, Chromosome};
pub use config::{PopulationConfig, Replacement, RunConfig};
pub use population::Population;
pub use runner::{GaRunner, RunResult};
pub use target::{codes_to_string, random_symbol, Target, SYMBOL_MAX, SYMBOL_MIN};
