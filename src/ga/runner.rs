//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → elitism → selection → crossover → mutation → repeat.

use log::{debug, trace, warn};
use rand::Rng;

use super::config::GaConfig;
use super::operators::{mutate_triples, random_genes, uniform_crossover};
use super::selection::tournament;
use super::types::{best_index, Chromosome};
use crate::fitness::{sanitize, UNEVALUABLE};
use crate::optimizer::Optimizer;
use crate::random::rng_from_seed;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The best individual found during the entire run.
    ///
    /// `None` if no individual ever scored a finite fitness.
    pub best: Option<Vec<f64>>,

    /// Fitness of `best` ([`UNEVALUABLE`] when absent).
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Total fitness evaluations, initial population included.
    pub evaluations: usize,

    /// Best-ever fitness after initialization, then after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_timetable::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// // Minimize the sum of genes; the optimum is the all-zero vector.
/// let result = GaRunner::run(|v: &[f64]| v.iter().sum(), 9, &config);
/// assert!(result.best_fitness <= 3.0);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG built from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run<F>(fitness: F, vector_length: usize, config: &GaConfig) -> GaResult
    where
        F: Fn(&[f64]) -> f64 + Sync,
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(fitness, vector_length, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<F, R>(
        fitness: F,
        vector_length: usize,
        config: &GaConfig,
        rng: &mut R,
    ) -> GaResult
    where
        F: Fn(&[f64]) -> f64 + Sync,
        R: Rng,
    {
        config.validate().expect("invalid GaConfig");

        let score = |genes: &[f64]| sanitize(fitness(genes));

        debug!(
            "ga: population {} x {} generations, vector length {}, elites {}, tournament {}",
            config.population_size,
            config.generation_count,
            vector_length,
            config.elite_size,
            config.tournament_size
        );

        // 1. Initialize and evaluate population
        let initial: Vec<Vec<f64>> = (0..config.population_size)
            .map(|_| random_genes(vector_length, rng))
            .collect();
        let scores = score_batch(&score, &initial, config.parallel);
        let mut population: Vec<Chromosome> = initial
            .into_iter()
            .zip(scores)
            .map(|(genes, f)| Chromosome::new(genes, f))
            .collect();
        let mut evaluations = config.population_size;

        // 2. Track best-ever (only finite fitness counts)
        let mut best: Option<Chromosome> = best_index(&population)
            .map(|i| &population[i])
            .filter(|c| c.fitness < UNEVALUABLE)
            .cloned();
        let mut fitness_history = Vec::with_capacity(config.generation_count + 1);
        fitness_history.push(best_fitness(&best));

        let offspring_count = config.population_size - config.elite_size;

        // 3. Evolutionary loop
        for gen in 0..config.generation_count {
            // Sort ascending (best first); stable, so ties keep their order
            population.sort_by(|a, b| a.fitness.total_cmp(&b.fitness));

            let mut next_gen: Vec<Chromosome> = Vec::with_capacity(config.population_size);
            next_gen.extend_from_slice(&population[..config.elite_size]);

            // Breed all offspring first; scoring never feeds back into selection
            let offspring: Vec<Vec<f64>> = (0..offspring_count)
                .map(|_| {
                    let p1 = tournament(&population, config.tournament_size, rng);
                    let p2 = tournament(&population, config.tournament_size, rng);
                    let mut child =
                        uniform_crossover(&population[p1].genes, &population[p2].genes, rng);
                    mutate_triples(&mut child, config.mutation_rate, rng);
                    child
                })
                .collect();

            let scores = score_batch(&score, &offspring, config.parallel);
            evaluations += offspring.len();

            for (genes, f) in offspring.into_iter().zip(scores) {
                let child = Chromosome::new(genes, f);
                if f < best_fitness(&best) {
                    best = Some(child.clone());
                }
                next_gen.push(child);
            }

            population = next_gen;
            fitness_history.push(best_fitness(&best));
            trace!("ga: generation {} best {}", gen + 1, best_fitness(&best));
        }

        if best.is_none() {
            warn!("ga: no candidate with a finite fitness was found");
        }
        debug!(
            "ga: finished after {} evaluations, best fitness {}",
            evaluations,
            best_fitness(&best)
        );

        GaResult {
            best_fitness: best_fitness(&best),
            best: best.map(|c| c.genes),
            generations: config.generation_count,
            evaluations,
            fitness_history,
        }
    }
}

fn best_fitness(best: &Option<Chromosome>) -> f64 {
    best.as_ref().map_or(UNEVALUABLE, |c| c.fitness)
}

/// Scores a batch of gene vectors, preserving order.
#[cfg(feature = "parallel")]
fn score_batch<F>(score: &F, batch: &[Vec<f64>], parallel: bool) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    use rayon::prelude::*;

    if parallel {
        batch.par_iter().map(|genes| score(genes)).collect()
    } else {
        batch.iter().map(|genes| score(genes)).collect()
    }
}

/// Scores a batch of gene vectors, preserving order.
#[cfg(not(feature = "parallel"))]
fn score_batch<F>(score: &F, batch: &[Vec<f64>], _parallel: bool) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    batch.iter().map(|genes| score(genes)).collect()
}

impl Optimizer for GaConfig {
    fn name(&self) -> &'static str {
        "ga"
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn validate(&self) -> Result<(), String> {
        GaConfig::validate(self)
    }

    fn optimize_with_rng<F, R>(
        &self,
        fitness: F,
        vector_length: usize,
        rng: &mut R,
    ) -> Option<Vec<f64>>
    where
        F: Fn(&[f64]) -> f64 + Sync,
        R: Rng,
    {
        GaRunner::run_with_rng(fitness, vector_length, self, rng).best
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::gene_domain;
    use crate::random::create_rng;
    use std::sync::Mutex;

    // ---- Target matching: distance to a fixed in-domain vector ----

    fn target() -> Vec<f64> {
        vec![4.0, 7.0, 3.0, 0.0, 2.0, 5.0, 1.0, 6.0, 7.0, 2.0, 3.0, 0.0]
    }

    fn distance(v: &[f64]) -> f64 {
        v.iter()
            .zip(target())
            .filter(|(a, b)| **a != *b)
            .count() as f64
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(40)
            .with_generation_count(80)
            .with_seed(42)
    }

    #[test]
    fn test_target_convergence() {
        let result = GaRunner::run(distance, 12, &config());
        assert!(
            result.best_fitness <= 2.0,
            "expected near-exact match, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_best_ever_non_increasing() {
        let result = GaRunner::run(distance, 12, &config());
        assert_eq!(result.fitness_history.len(), 81);
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best-ever must be monotonically non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_evaluation_count() {
        let config = config().with_elite_size(4);
        let result = GaRunner::run(distance, 12, &config);
        assert_eq!(result.evaluations, 40 + 80 * 36);
        assert_eq!(result.generations, 80);
    }

    #[test]
    fn test_all_candidates_in_domain() {
        let seen = Mutex::new(Vec::new());
        GaRunner::run(
            |v: &[f64]| {
                seen.lock().unwrap().push(v.to_vec());
                distance(v)
            },
            12,
            &config().with_generation_count(10).with_mutation_rate(0.5),
        );
        for v in seen.into_inner().unwrap() {
            assert!(v
                .iter()
                .enumerate()
                .all(|(i, &g)| g >= 0.0 && (g as usize) < gene_domain(i) && g.fract() == 0.0));
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = GaRunner::run(distance, 12, &config());
        let b = GaRunner::run(distance, 12, &config());
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_injected_rng_matches_seed() {
        let mut rng = create_rng(42);
        let a = GaRunner::run_with_rng(distance, 12, &config(), &mut rng);
        let b = GaRunner::run(distance, 12, &config());
        assert_eq!(a.best, b.best);
    }

    #[test]
    fn test_best_fitness_matches_best_vector() {
        let result = GaRunner::run(distance, 12, &config());
        let best = result.best.unwrap();
        assert_eq!(distance(&best), result.best_fitness);
    }

    #[test]
    fn test_zero_elites() {
        let result = GaRunner::run(distance, 12, &config().with_elite_size(0));
        for window in result.fitness_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_single_individual_population() {
        let config = GaConfig::default()
            .with_population_size(1)
            .with_tournament_size(1)
            .with_elite_size(0)
            .with_generation_count(5)
            .with_seed(1);
        let result = GaRunner::run(distance, 12, &config);
        assert!(result.best.is_some());
        assert_eq!(result.evaluations, 6);
    }

    #[test]
    fn test_all_unevaluable_yields_none() {
        let result = GaRunner::run(|_: &[f64]| f64::INFINITY, 6, &config());
        assert!(result.best.is_none());
        assert_eq!(result.best_fitness, UNEVALUABLE);
        assert!(result.fitness_history.iter().all(|f| f.is_infinite()));
    }

    #[test]
    fn test_empty_vector() {
        let result = GaRunner::run(|_: &[f64]| 0.0, 0, &config());
        assert_eq!(result.best, Some(Vec::new()));
        assert_eq!(result.best_fitness, 0.0);
    }

    #[test]
    fn test_optimizer_trait() {
        let best = config().optimize(distance, 12).unwrap();
        assert_eq!(best.len(), 12);
    }

    #[test]
    fn test_parallel_flag_gives_identical_results() {
        let seq = GaRunner::run(distance, 12, &config());
        let par = GaRunner::run(distance, 12, &config().with_parallel(true));
        assert_eq!(seq.best, par.best);
        assert_eq!(seq.fitness_history, par.fitness_history);
    }

    #[test]
    #[should_panic(expected = "invalid GaConfig")]
    fn test_invalid_config_panics() {
        GaRunner::run(distance, 12, &GaConfig::default().with_elite_size(50));
    }
}
