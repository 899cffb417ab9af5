//! The uniform driver contract both searches implement.
//!
//! An [`Optimizer`] minimizes a scalar fitness over flat `f64` vectors of
//! a given length. It knows nothing about courses or rooms; the fitness
//! closure carries the decoding.

use rand::Rng;

use crate::random::rng_from_seed;

/// A search strategy over fixed-length real vectors (minimization).
///
/// Implemented by [`PsoConfig`](crate::pso::PsoConfig) and
/// [`GaConfig`](crate::ga::GaConfig): a configuration fully determines a
/// run, so it doubles as the optimizer value.
///
/// # Examples
///
/// ```
/// use u_timetable::optimizer::Optimizer;
/// use u_timetable::ga::GaConfig;
///
/// let ga = GaConfig::default()
///     .with_population_size(10)
///     .with_generation_count(5)
///     .with_seed(1);
/// let best = ga.optimize(|v: &[f64]| v.iter().sum(), 6).unwrap();
/// assert_eq!(best.len(), 6);
/// ```
pub trait Optimizer {
    /// Short name for logging.
    fn name(&self) -> &'static str;

    /// Seed used by [`optimize`](Self::optimize); `None` draws a fresh one.
    fn seed(&self) -> Option<u64>;

    /// Checks the configuration, describing the first problem found.
    fn validate(&self) -> Result<(), String>;

    /// Runs the search with a caller-supplied random source.
    ///
    /// `fitness` must return a non-negative score, lower being better, and
    /// may return `f64::INFINITY` for candidates it cannot score. Returns
    /// `None` if no candidate with a finite score was ever seen.
    ///
    /// # Panics
    ///
    /// Panics if [`validate`](Self::validate) fails.
    fn optimize_with_rng<F, R>(
        &self,
        fitness: F,
        vector_length: usize,
        rng: &mut R,
    ) -> Option<Vec<f64>>
    where
        F: Fn(&[f64]) -> f64 + Sync,
        R: Rng;

    /// Runs the search with an RNG built from [`seed`](Self::seed).
    ///
    /// # Panics
    ///
    /// Panics if [`validate`](Self::validate) fails.
    fn optimize<F>(&self, fitness: F, vector_length: usize) -> Option<Vec<f64>>
    where
        F: Fn(&[f64]) -> f64 + Sync,
    {
        let mut rng = rng_from_seed(self.seed());
        self.optimize_with_rng(fitness, vector_length, &mut rng)
    }
}
