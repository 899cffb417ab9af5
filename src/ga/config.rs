//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.generation_count, 100);
/// assert_eq!(config.tournament_size, 3);
/// assert_eq!(config.elite_size, 1);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(5)
///     .with_elite_size(4)
///     .with_mutation_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaConfig {
    /// Number of individuals in the population.
    ///
    /// Larger populations increase diversity but slow down each generation.
    pub population_size: usize,

    /// Number of generations. The run always executes all of them.
    pub generation_count: usize,

    /// Per-field resampling probability (0.0–1.0).
    ///
    /// Applied independently to the day, the period and the room of every
    /// session of every offspring.
    pub mutation_rate: f64,

    /// Individuals drawn (without replacement) per tournament.
    ///
    /// - 2: light pressure (good for diversity)
    /// - 3-5: moderate pressure (typical default)
    pub tournament_size: usize,

    /// Best individuals copied unchanged into the next generation.
    pub elite_size: usize,

    /// Whether to score offspring in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature. Results are identical to
    /// the sequential path for the same seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generation_count: 100,
            mutation_rate: 0.1,
            tournament_size: 3,
            elite_size: 1,
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the mutation rate, clamped into `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_size(mut self, n: usize) -> Self {
        self.elite_size = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick interactive runs.
    ///
    /// - Population: 30, Generations: 50
    pub fn fast() -> Self {
        Self {
            population_size: 30,
            generation_count: 50,
            ..Self::default()
        }
    }

    /// Preset matching the defaults.
    ///
    /// - Population: 50, Generations: 100
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Preset for larger timetables.
    ///
    /// - Population: 150, Generations: 400, Elites: 3
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            generation_count: 400,
            elite_size: 3,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size == 0 {
            return Err("population_size must be at least 1".into());
        }
        if self.generation_count == 0 {
            return Err("generation_count must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must be within [0, 1]".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.tournament_size > self.population_size {
            return Err("tournament_size cannot exceed population_size".into());
        }
        if self.elite_size >= self.population_size {
            return Err("elite_size too high: elites fill entire population".into());
        }
        Ok(())
    }
}
