//! Particle Swarm Optimization (PSO).
//!
//! A continuous search over unconstrained real vectors. Each particle is
//! pulled toward its own best position and the swarm's best position,
//! with an inertia weight that decays linearly over the run. Positions
//! are never clamped; the timetable decoder wraps them into range.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: Swarm parameters (size, iterations, weights, velocity cap)
//! - [`PsoRunner`]: Executes the swarm loop
//! - [`PsoResult`]: Global best plus statistics
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"
//!   (linearly decreasing inertia weight)

mod config;
mod runner;
mod types;

pub use config::PsoConfig;
pub use runner::{PsoResult, PsoRunner};
pub use types::Particle;
