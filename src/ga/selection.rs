//! Parent selection for the GA.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::seq::index;
use rand::Rng;

use super::types::Chromosome;

/// Tournament selection without replacement.
///
/// Draws `size` distinct individuals uniformly and returns the index of
/// the one with the lowest fitness (the first drawn, on ties). Two calls
/// are independent, so both parents of a child may be the same individual.
///
/// Higher `size` = stronger selection pressure. `size == population.len()`
/// always returns the best individual.
///
/// # Complexity
/// O(size) per selection
///
/// # Panics
/// Panics if `population` is empty or `size` is not in `1..=population.len()`.
pub fn tournament<R: Rng>(population: &[Chromosome], size: usize, rng: &mut R) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    assert!(
        (1..=population.len()).contains(&size),
        "tournament size {size} out of range 1..={}",
        population.len()
    );

    index::sample(rng, population.len(), size)
        .into_iter()
        .reduce(|best, idx| {
            if population[idx].fitness < population[best].fitness {
                idx
            } else {
                best
            }
        })
        .unwrap_or(0)
}
