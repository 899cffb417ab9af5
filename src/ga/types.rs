//! Population member for the GA.

/// A candidate vector with its cached fitness.
///
/// Fitness is computed once when the chromosome is created and copied
/// along with it; elites carried into the next generation are not
/// re-evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    /// Gene values, three per session.
    pub genes: Vec<f64>,

    /// Cached fitness (lower is better).
    pub fitness: f64,
}

impl Chromosome {
    /// Creates a chromosome with a known fitness.
    pub fn new(genes: Vec<f64>, fitness: f64) -> Self {
        Self { genes, fitness }
    }
}

/// Index of the lowest-fitness chromosome, the first one on ties.
///
/// Returns `None` for an empty population.
pub(crate) fn best_index(population: &[Chromosome]) -> Option<usize> {
    population
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.fitness.total_cmp(&b.fitness))
        .map(|(i, _)| i)
}
