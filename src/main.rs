//! Command-line driver for the string-matching GA.
//!
//! Usage:
//!   hello-ga [--target TEXT] [--population-size N] [--seed S] ...
//!
//! Prints the best gene of every generation (unless `--quiet`), then the
//! final generation, fitness, seed and wall-clock time.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use hello_ga::ga::{GaRunner, PopulationConfig, Replacement, RunConfig, Target};
use std::time::Instant;

/// Evolve random strings toward a target with a genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "hello-ga")]
#[command(version, about, long_about = None)]
struct Cli {
    /// String to evolve toward
    #[arg(short, long, default_value = "Hello, world!")]
    target: String,

    /// Number of individuals per generation
    #[arg(short = 'n', long, default_value_t = 2048)]
    population_size: usize,

    /// Probability of crossover per slot, in [0, 1]
    #[arg(long, default_value_t = 0.8)]
    crossover: f64,

    /// Fraction of elites carried over unchanged, in [0, 1]
    #[arg(long, default_value_t = 0.1)]
    elitism: f64,

    /// Probability of mutating a new individual, in [0, 1]
    #[arg(long, default_value_t = 0.03)]
    mutation: f64,

    /// Extra draws per tournament
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// Source of non-crossover individuals
    #[arg(long, value_enum, default_value_t = ReplacementArg::Positional)]
    replacement: ReplacementArg,

    /// Generation budget
    #[arg(short = 'g', long, default_value_t = 16384)]
    max_generations: usize,

    /// Random seed; omitted means a fresh seed per run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of independent runs
    #[arg(long, default_value_t = 1)]
    runs: usize,

    /// Only print the final result of each run
    #[arg(short, long)]
    quiet: bool,

    /// Score generations in parallel (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReplacementArg {
    Positional,
    Tournament,
}

impl From<ReplacementArg> for Replacement {
    fn from(arg: ReplacementArg) -> Self {
        match arg {
            ReplacementArg::Positional => Replacement::Positional,
            ReplacementArg::Tournament => Replacement::Tournament,
        }
    }
}

impl Cli {
    fn run_config(&self, run: usize) -> RunConfig {
        let population = PopulationConfig::default()
            .with_population_size(self.population_size)
            .with_crossover_rate(self.crossover)
            .with_elitism_rate(self.elitism)
            .with_mutation_rate(self.mutation)
            .with_tournament_size(self.tournament_size)
            .with_replacement(self.replacement.into())
            .with_parallel(self.parallel);

        let mut config = RunConfig::default()
            .with_population(population)
            .with_max_generations(self.max_generations);
        // Successive runs get successive seeds so `--runs` stays replayable.
        if let Some(seed) = self.seed {
            config = config.with_seed(seed.wrapping_add(run as u64));
        }
        config
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let target = Target::new(&cli.target).context("invalid --target")?;

    for run in 0..cli.runs {
        let config = cli.run_config(run);
        let start = Instant::now();

        let result = GaRunner::run_with_observer(&target, &config, None, |generation, best| {
            if !cli.quiet {
                println!("Generation {generation}: {}", best.gene_string());
            }
        })
        .with_context(|| format!("run {} failed", run + 1))?;

        let elapsed = start.elapsed();
        if cli.quiet {
            println!(
                "Generation {}: {}",
                result.generations,
                result.best.gene_string()
            );
        }
        println!(
            "{} with fitness {} (seed {})",
            if result.converged {
                "Converged"
            } else {
                "Gave up"
            },
            result.best.fitness(),
            result.seed
        );
        println!("Total execution time: {}ms", elapsed.as_millis());
    }

    Ok(())
}
