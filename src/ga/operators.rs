//! Genetic operators for slot-triple chromosomes.
//!
//! Genes cycle through the domains `[DAYS, PERIODS_PER_DAY, ROOMS]`; see
//! [`GENE_DOMAIN`](crate::encoding::GENE_DOMAIN).
//!
//! - [`random_genes`]: Uniform sample of the legal domain, O(n)
//! - [`uniform_crossover`]: Per-gene fair coin between two parents, O(n)
//! - [`mutate_triples`]: Independent per-field resampling, O(n)
//!
//! Crossover works at gene granularity, not per triple, so a child's
//! session may combine one parent's day with the other's period and room.

use rand::Rng;

use crate::encoding::{gene_domain, GENES_PER_SESSION, GENE_DOMAIN};

/// Samples a vector of `len` genes uniformly from their legal domains.
pub fn random_genes<R: Rng>(len: usize, rng: &mut R) -> Vec<f64> {
    (0..len)
        .map(|i| rng.random_range(0..gene_domain(i)) as f64)
        .collect()
}

/// Uniform crossover: each gene comes from `parent1` or `parent2` with
/// equal probability, independently.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn uniform_crossover<R: Rng>(parent1: &[f64], parent2: &[f64], rng: &mut R) -> Vec<f64> {
    assert_eq!(
        parent1.len(),
        parent2.len(),
        "parents must have equal length"
    );
    parent1
        .iter()
        .zip(parent2)
        .map(|(&a, &b)| if rng.random_bool(0.5) { a } else { b })
        .collect()
}

/// Resamples each field of each triple independently with probability `rate`.
///
/// A trailing partial triple, if any, is mutated field by field the same way.
///
/// # Panics
/// Panics if `rate` is not in `[0, 1]`.
pub fn mutate_triples<R: Rng>(genes: &mut [f64], rate: f64, rng: &mut R) {
    for triple in genes.chunks_mut(GENES_PER_SESSION) {
        for (gene, &domain) in triple.iter_mut().zip(GENE_DOMAIN.iter()) {
            if rng.random_bool(rate) {
                *gene = rng.random_range(0..domain) as f64;
            }
        }
    }
}
