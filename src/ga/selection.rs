//! Tournament selection.
//!
//! The only parent-selection scheme the engine uses. Selection pressure
//! grows with the tournament size.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::chromosome::Chromosome;
use rand::Rng;

/// Picks a parent index from `population`.
///
/// Starts from one uniformly drawn individual, then makes `k` further draws
/// with replacement and keeps the lowest fitness seen. Only a strictly
/// better draw replaces the current winner, so among ties the earliest
/// draw wins and seeded runs stay reproducible.
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<R: Rng>(population: &[Chromosome], k: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 0..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}
