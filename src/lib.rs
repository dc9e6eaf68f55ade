//! String-matching genetic algorithm.
//!
//! Evolves random printable strings toward a known target with a canonical
//! genetic algorithm: tournament selection, single-point crossover, point
//! mutation and elitism.
//!
//! - [`ga`]: Chromosome, population, configuration and run control
//! - [`random`]: Seeded construction of the shared random source
//! - [`error`]: The crate error type
//!
//! # Example
//!
//! ```
//! use hello_ga::ga::{Population, PopulationConfig, Target};
//! use hello_ga::random::create_rng;
//!
//! let target = Target::new("GA").unwrap();
//! let mut rng = create_rng(1);
//! let mut pop = Population::new(target, PopulationConfig::small(), &mut rng).unwrap();
//! for _ in 0..10 {
//!     pop.evolve(&mut rng);
//! }
//! assert_eq!(pop.len(), 100);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
