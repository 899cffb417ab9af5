//! PSO configuration.
//!
//! [`PsoConfig`] holds all parameters that control the swarm loop.

/// Configuration for Particle Swarm Optimization.
///
/// # Defaults
///
/// ```
/// use u_timetable::pso::PsoConfig;
///
/// let config = PsoConfig::default();
/// assert_eq!(config.particle_count, 100);
/// assert_eq!(config.iteration_count, 200);
/// assert_eq!(config.max_velocity, 4.0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_particle_count(40)
///     .with_inertia(0.8, 0.3)
///     .with_cognitive_weight(1.5)
///     .with_social_weight(2.5)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PsoConfig {
    /// Number of particles in the swarm.
    pub particle_count: usize,

    /// Number of iterations. Every iteration moves and re-evaluates each particle once.
    pub iteration_count: usize,

    /// Inertia weight at the first iteration.
    pub inertia_start: f64,

    /// Inertia weight the schedule decays toward.
    ///
    /// The weight at iteration `t` is
    /// `inertia_start - (inertia_start - inertia_end) * t / iteration_count`,
    /// so the last iteration uses a value just above `inertia_end`.
    pub inertia_end: f64,

    /// Pull toward the particle's own best position (`c1`).
    pub cognitive_weight: f64,

    /// Pull toward the swarm's best position (`c2`).
    pub social_weight: f64,

    /// Velocity components are clamped to `[-max_velocity, max_velocity]`.
    pub max_velocity: f64,

    /// Initial positions are drawn uniformly from `[lower, upper)`.
    ///
    /// Deliberately not the legal slot domain: the decoder's modulo wrap
    /// makes any real value legal.
    pub init_range: (f64, f64),

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            particle_count: 100,
            iteration_count: 200,
            inertia_start: 0.9,
            inertia_end: 0.4,
            cognitive_weight: 2.0,
            social_weight: 2.0,
            max_velocity: 4.0,
            init_range: (0.0, 5.0),
            seed: None,
        }
    }
}

impl PsoConfig {
    /// Sets the swarm size.
    pub fn with_particle_count(mut self, n: usize) -> Self {
        self.particle_count = n;
        self
    }

    /// Sets the number of iterations.
    pub fn with_iteration_count(mut self, n: usize) -> Self {
        self.iteration_count = n;
        self
    }

    /// Sets the start and end of the inertia schedule.
    pub fn with_inertia(mut self, start: f64, end: f64) -> Self {
        self.inertia_start = start;
        self.inertia_end = end;
        self
    }

    /// Sets the cognitive weight `c1`.
    pub fn with_cognitive_weight(mut self, c1: f64) -> Self {
        self.cognitive_weight = c1;
        self
    }

    /// Sets the social weight `c2`.
    pub fn with_social_weight(mut self, c2: f64) -> Self {
        self.social_weight = c2;
        self
    }

    /// Sets the velocity cap.
    pub fn with_max_velocity(mut self, v_max: f64) -> Self {
        self.max_velocity = v_max;
        self
    }

    /// Sets the initial position range `[lower, upper)`.
    pub fn with_init_range(mut self, lower: f64, upper: f64) -> Self {
        self.init_range = (lower, upper);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inertia weight used during iteration `iteration` (0-based).
    pub fn inertia_at(&self, iteration: usize) -> f64 {
        if self.iteration_count == 0 {
            return self.inertia_start;
        }
        self.inertia_start
            - (self.inertia_start - self.inertia_end) * iteration as f64
                / self.iteration_count as f64
    }

    /// Preset for quick interactive runs.
    ///
    /// - Particles: 30, Iterations: 100
    pub fn fast() -> Self {
        Self {
            particle_count: 30,
            iteration_count: 100,
            ..Self::default()
        }
    }

    /// Preset matching the defaults.
    ///
    /// - Particles: 100, Iterations: 200
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for larger timetables.
    ///
    /// - Particles: 200, Iterations: 500
    pub fn quality() -> Self {
        Self {
            particle_count: 200,
            iteration_count: 500,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.particle_count == 0 {
            return Err("particle_count must be at least 1".into());
        }
        if self.iteration_count == 0 {
            return Err("iteration_count must be at least 1".into());
        }
        if !(self.max_velocity.is_finite() && self.max_velocity > 0.0) {
            return Err("max_velocity must be finite and positive".into());
        }
        // Initial velocities are drawn from [-max_velocity, max_velocity]
        if !(2.0 * self.max_velocity).is_finite() {
            return Err("max_velocity too large: velocity range overflows".into());
        }
        let weights = [
            self.inertia_start,
            self.inertia_end,
            self.cognitive_weight,
            self.social_weight,
        ];
        if weights.iter().any(|w| !w.is_finite()) {
            return Err("inertia and acceleration weights must be finite".into());
        }
        let (lower, upper) = self.init_range;
        if !(lower.is_finite() && upper.is_finite() && lower < upper) {
            return Err("init_range must be a finite, non-empty interval".into());
        }
        if !(upper - lower).is_finite() {
            return Err("init_range too wide: width overflows".into());
        }
        Ok(())
    }
}
