//! Swarm member state.

/// One particle of the swarm.
#[derive(Debug, Clone)]
pub struct Particle {
    /// Current position (raw, unconstrained).
    pub position: Vec<f64>,

    /// Current velocity, each component within `[-max_velocity, max_velocity]`.
    pub velocity: Vec<f64>,

    /// Best position this particle has visited.
    pub best_position: Vec<f64>,

    /// Fitness at `best_position`.
    pub best_fitness: f64,
}

impl Particle {
    /// Creates a particle whose personal best is its starting point.
    pub fn new(position: Vec<f64>, velocity: Vec<f64>, fitness: f64) -> Self {
        Self {
            best_position: position.clone(),
            position,
            velocity,
            best_fitness: fitness,
        }
    }

    /// Records `fitness` for the current position.
    ///
    /// Returns `true` if it strictly improved the personal best.
    pub fn observe(&mut self, fitness: f64) -> bool {
        if fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best_position.clone_from(&self.position);
            true
        } else {
            false
        }
    }
}
