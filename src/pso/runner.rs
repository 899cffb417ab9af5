//! PSO swarm loop execution.

use log::{debug, trace, warn};
use rand::Rng;

use super::config::PsoConfig;
use super::types::Particle;
use crate::fitness::{sanitize, UNEVALUABLE};
use crate::optimizer::Optimizer;
use crate::random::rng_from_seed;

/// Result of a PSO run.
#[derive(Debug, Clone)]
pub struct PsoResult {
    /// Best position ever evaluated, in raw continuous form.
    ///
    /// `None` if every evaluation returned a non-finite score.
    pub best_position: Option<Vec<f64>>,

    /// Fitness of `best_position` ([`UNEVALUABLE`] when absent).
    pub best_fitness: f64,

    /// Iterations executed.
    pub iterations: usize,

    /// Total fitness evaluations, initialization included.
    pub evaluations: usize,

    /// Global best after initialization, then after each iteration.
    pub fitness_history: Vec<f64>,
}

/// Executes the PSO loop.
///
/// # Usage
///
/// ```
/// use u_timetable::pso::{PsoConfig, PsoRunner};
///
/// let config = PsoConfig::default()
///     .with_particle_count(20)
///     .with_iteration_count(50)
///     .with_seed(42);
/// let result = PsoRunner::run(|x: &[f64]| x.iter().map(|v| v * v).sum(), 4, &config);
/// assert!(result.best_fitness < 1.0);
/// ```
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO with an RNG built from `config.seed`.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`PsoConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<F>(fitness: F, vector_length: usize, config: &PsoConfig) -> PsoResult
    where
        F: Fn(&[f64]) -> f64,
    {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(fitness, vector_length, config, &mut rng)
    }

    /// Runs PSO drawing all randomness from `rng`.
    ///
    /// Particles are updated one after another; a particle that improves
    /// the global best changes the attractor for the particles after it
    /// in the same iteration.
    ///
    /// # Panics
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<F, R>(
        fitness: F,
        vector_length: usize,
        config: &PsoConfig,
        rng: &mut R,
    ) -> PsoResult
    where
        F: Fn(&[f64]) -> f64,
        R: Rng,
    {
        config.validate().expect("invalid PsoConfig");

        let score = |x: &[f64]| sanitize(fitness(x));
        let v_max = config.max_velocity;
        let (lower, upper) = config.init_range;

        debug!(
            "pso: {} particles x {} iterations, vector length {}",
            config.particle_count, config.iteration_count, vector_length
        );

        // 1. Initialize swarm
        let mut global_best: Option<Vec<f64>> = None;
        let mut global_best_fitness = UNEVALUABLE;
        let mut swarm: Vec<Particle> = Vec::with_capacity(config.particle_count);

        for _ in 0..config.particle_count {
            let position: Vec<f64> = (0..vector_length)
                .map(|_| rng.random_range(lower..upper))
                .collect();
            let velocity: Vec<f64> = (0..vector_length)
                .map(|_| rng.random_range(-v_max..=v_max))
                .collect();
            let f = score(&position);
            if f < global_best_fitness {
                global_best_fitness = f;
                global_best = Some(position.clone());
            }
            swarm.push(Particle::new(position, velocity, f));
        }

        let mut evaluations = config.particle_count;
        let mut fitness_history = Vec::with_capacity(config.iteration_count + 1);
        fitness_history.push(global_best_fitness);

        // 2. Swarm loop
        for iteration in 0..config.iteration_count {
            let w = config.inertia_at(iteration);

            for particle in swarm.iter_mut() {
                // One coefficient pair per particle per step, shared across dimensions
                let r1: f64 = rng.random();
                let r2: f64 = rng.random();

                let Particle {
                    position,
                    velocity,
                    best_position,
                    ..
                } = &mut *particle;

                for d in 0..vector_length {
                    let cognitive = config.cognitive_weight * r1 * (best_position[d] - position[d]);
                    // No global attractor until some particle scored finite
                    let social = global_best
                        .as_ref()
                        .map_or(0.0, |g| config.social_weight * r2 * (g[d] - position[d]));
                    velocity[d] = (w * velocity[d] + cognitive + social).clamp(-v_max, v_max);
                    position[d] += velocity[d];
                }

                let f = score(&particle.position);
                evaluations += 1;

                if particle.observe(f) && f < global_best_fitness {
                    global_best_fitness = f;
                    global_best = Some(particle.position.clone());
                }
            }

            fitness_history.push(global_best_fitness);
            trace!(
                "pso: iteration {} inertia {:.3} best {}",
                iteration + 1,
                w,
                global_best_fitness
            );
        }

        if global_best.is_none() {
            warn!("pso: no candidate with a finite fitness was found");
        }
        debug!(
            "pso: finished after {} evaluations, best fitness {}",
            evaluations, global_best_fitness
        );

        PsoResult {
            best_position: global_best,
            best_fitness: global_best_fitness,
            iterations: config.iteration_count,
            evaluations,
            fitness_history,
        }
    }
}

impl Optimizer for PsoConfig {
    fn name(&self) -> &'static str {
        "pso"
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }

    fn validate(&self) -> Result<(), String> {
        PsoConfig::validate(self)
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
        PsoRunner::run_with_rng(fitness, vector_length, self, rng).best_position
    }
}

// ============================================================================
// Tests
// ============================================================================
