//! University course timetabling by metaheuristic search.
//!
//! Assigns every session of every course to a `(day, period, room)` slot,
//! penalizing room and lecturer clashes, unusable rooms, lecturer
//! unavailability and sessions that do not form one unbroken block.
//!
//! - **Model** ([`model`]): `Course`, `Lecturer`, `Slot`, `Schedule`
//! - **Encoding** ([`encoding`]): flat search vector ↔ `Schedule`, one
//!   `(day, period, room)` triple per session, wrapped into range on decode
//! - **Fitness** ([`fitness`]): additive penalty terms, violation reports,
//!   hard-constraint validity
//! - **Particle Swarm Optimization** ([`pso`]): continuous search over
//!   unconstrained real vectors
//! - **Genetic Algorithm** ([`ga`]): discrete search over in-domain integer
//!   vectors with elitism and tournament selection
//! - **Driver** ([`optimizer`], [`Timetable`]): the uniform
//!   `optimize(fitness, vector_length)` contract and an end-to-end `solve`
//!
//! # Example
//!
//! ```
//! use u_timetable::{Course, Lecturer, Timetable};
//! use u_timetable::pso::PsoConfig;
//!
//! let timetable = Timetable::new(
//!     vec![
//!         Course::new(0, "Math", 2, 0, [0, 1]),
//!         Course::new(1, "Physics", 1, 1, [1, 2]),
//!     ],
//!     vec![
//!         Lecturer::new(0, "Dr. Smith", [(0, 0), (0, 1), (1, 0)]),
//!         Lecturer::new(1, "Dr. Jones", [(0, 2), (1, 1), (1, 2)]),
//!     ],
//! )?;
//!
//! let config = PsoConfig::fast().with_seed(42);
//! if let Some(solution) = timetable.solve(&config)? {
//!     for (course, slots) in solution.schedule.iter() {
//!         println!("course {course}: {slots:?}");
//!     }
//! }
//! # Ok::<(), u_timetable::TimetableError>(())
//! ```
//!
//! # Architecture
//!
//! The searches know nothing about timetables: they minimize any
//! `Fn(&[f64]) -> f64`. [`Timetable`] binds the inputs, checks the vector
//! length once, and hands the searches a closure that scores every
//! correctly sized candidate ([`fitness::UNEVALUABLE`] for those it cannot
//! evaluate). A wrongly sized candidate aborts the run with a panic.
//! All randomness flows through an injectable `rand::Rng`, so seeded runs
//! are reproducible.

pub mod encoding;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod model;
pub mod optimizer;
pub mod pso;
pub mod random;
mod timetable;

pub use error::TimetableError;
pub use model::{Course, Lecturer, Schedule, Slot};
pub use optimizer::Optimizer;
pub use timetable::{Solution, Timetable};
