//! Genetic Algorithm over slot-domain integer vectors.
//!
//! Individuals are flat `f64` vectors whose genes hold integers already
//! inside their slot domain (`day < 5`, `period < 8`, `room < 8`, repeating
//! per triple). They are still decoded through the shared wrap-and-round
//! routine, so future operators that leave the domain stay safe.
//!
//! Each generation keeps the `elite_size` best individuals unchanged and
//! fills the rest with offspring: two tournament-selected parents, uniform
//! crossover per gene, then per-field resampling mutation.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, generations, rates, presets)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best-ever individual with statistics
//!
//! # Submodules
//!
//! - [`operators`]: Domain sampling, uniform crossover and triple mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;
pub use types::Chromosome;
