//! Timetable problem: validated inputs bound to the fitness closure.
//!
//! [`Timetable`] owns the immutable inputs of one optimization run and
//! exposes the pieces both searches need: the required vector length,
//! decoding, and the fitness closure. [`Timetable::solve`] runs
//! any [`Optimizer`] end to end and returns the decoded best schedule.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::encoding::{decode, vector_length};
use crate::error::TimetableError;
use crate::fitness::{
    fitness_indexed, sanitize, scan, ConstraintIndex, Validity, Violation, UNEVALUABLE,
};
use crate::model::{Course, Lecturer, Schedule, MAX_DURATION, MIN_DURATION, ROOMS};
use crate::optimizer::Optimizer;
use crate::random::rng_from_seed;

/// Best schedule found by a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Raw best vector returned by the optimizer.
    pub vector: Vec<f64>,

    /// `vector` decoded; the value handed to persistence.
    pub schedule: Schedule,

    /// Penalty of `schedule`. Greater than zero means some constraints are
    /// still violated, not that the run failed.
    pub fitness: f64,
}

/// Courses and lecturers for one optimization run.
///
/// # Examples
///
/// ```
/// use u_timetable::{Course, Lecturer, Timetable};
/// use u_timetable::ga::GaConfig;
///
/// let timetable = Timetable::new(
///     vec![Course::new(0, "Math", 2, 0, [0, 1])],
///     vec![Lecturer::always_available(0, "Dr. Smith")],
/// )
/// .unwrap();
/// assert_eq!(timetable.vector_length(), 6);
///
/// let solution = timetable
///     .solve(&GaConfig::default().with_seed(3))
///     .unwrap()
///     .expect("a finite schedule");
/// assert_eq!(solution.schedule.get(0).unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Timetable {
    courses: Vec<Course>,
    lecturers: Vec<Lecturer>,
    index: ConstraintIndex,
    vector_length: usize,
}

impl Timetable {
    /// Validates and binds the inputs.
    ///
    /// # Errors
    ///
    /// - [`TimetableError::DuplicateCourse`] / [`TimetableError::DuplicateLecturer`]
    /// - [`TimetableError::InvalidDuration`] if a duration is outside `1..=4`
    /// - [`TimetableError::EmptyRoomSet`] / [`TimetableError::RoomOutOfRange`]
    /// - [`TimetableError::UnknownLecturer`] for a dangling lecturer reference
    pub fn new(courses: Vec<Course>, lecturers: Vec<Lecturer>) -> Result<Self, TimetableError> {
        let mut lecturer_ids = HashSet::new();
        for lecturer in &lecturers {
            if !lecturer_ids.insert(lecturer.id) {
                return Err(TimetableError::DuplicateLecturer(lecturer.id));
            }
        }

        let mut course_ids = HashSet::new();
        for course in &courses {
            if !course_ids.insert(course.id) {
                return Err(TimetableError::DuplicateCourse(course.id));
            }
            if !(MIN_DURATION..=MAX_DURATION).contains(&course.duration) {
                return Err(TimetableError::InvalidDuration {
                    course: course.id,
                    duration: course.duration,
                });
            }
            if course.required_rooms.is_empty() {
                return Err(TimetableError::EmptyRoomSet(course.id));
            }
            if let Some(&room) = course.required_rooms.iter().find(|&&r| r >= ROOMS) {
                return Err(TimetableError::RoomOutOfRange {
                    course: course.id,
                    room,
                });
            }
            if !lecturer_ids.contains(&course.lecturer) {
                return Err(TimetableError::UnknownLecturer {
                    course: course.id,
                    lecturer: course.lecturer,
                });
            }
        }

        let index = ConstraintIndex::new(&courses, &lecturers);
        let vector_length = vector_length(&courses);
        Ok(Self {
            courses,
            lecturers,
            index,
            vector_length,
        })
    }

    /// Supplied courses, in vector order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Supplied lecturers.
    pub fn lecturers(&self) -> &[Lecturer] {
        &self.lecturers
    }

    /// Required search-vector length: `Σ duration × 3`.
    pub fn vector_length(&self) -> usize {
        self.vector_length
    }

    /// Decodes a vector against this timetable's courses.
    pub fn decode(&self, vector: &[f64]) -> Result<Schedule, TimetableError> {
        decode(vector, &self.courses)
    }

    /// Penalty of a schedule.
    ///
    /// # Errors
    ///
    /// Fails if the schedule references a course not in this timetable.
    pub fn evaluate(&self, schedule: &Schedule) -> Result<f64, TimetableError> {
        fitness_indexed(schedule, &self.courses, &self.lecturers, &self.index)
    }

    /// Decodes and scores a vector.
    ///
    /// # Errors
    ///
    /// [`TimetableError::LengthMismatch`] for a wrongly sized vector. A
    /// vector that decodes but cannot be scored yields `Ok(UNEVALUABLE)`.
    pub fn fitness(&self, vector: &[f64]) -> Result<f64, TimetableError> {
        let schedule = self.decode(vector)?;
        Ok(sanitize(self.evaluate(&schedule).unwrap_or(UNEVALUABLE)))
    }

    /// Builds the fitness closure consumed by an [`Optimizer`].
    ///
    /// The length is checked here, once. Every correctly sized candidate
    /// gets a score, [`UNEVALUABLE`] at worst.
    ///
    /// # Errors
    ///
    /// [`TimetableError::LengthMismatch`] if `vector_length` differs from
    /// [`vector_length`](Self::vector_length).
    ///
    /// # Panics
    ///
    /// The returned closure panics when called with a vector of any other
    /// length, which happens only if the optimizer is run with a length
    /// different from the one the closure was built for.
    pub fn fitness_fn(
        &self,
        vector_length: usize,
    ) -> Result<impl Fn(&[f64]) -> f64 + Sync + '_, TimetableError> {
        if vector_length != self.vector_length {
            return Err(TimetableError::LengthMismatch {
                expected: self.vector_length,
                actual: vector_length,
            });
        }
        Ok(move |vector: &[f64]| match self.fitness(vector) {
            Ok(score) => score,
            Err(err) => panic!("fitness called with a malformed candidate: {err}"),
        })
    }

    /// Every penalty term of a schedule.
    pub fn violations(&self, schedule: &Schedule) -> Result<Vec<Violation>, TimetableError> {
        let mut found = Vec::new();
        scan(schedule, &self.courses, &self.lecturers, &self.index, |v| {
            found.push(v)
        })?;
        Ok(found)
    }

    /// Hard-constraint validity of a schedule.
    pub fn check_validity(&self, schedule: &Schedule) -> Result<Validity, TimetableError> {
        self.violations(schedule).map(Validity::from_violations)
    }

    /// Runs `optimizer` with an RNG from its own seed.
    ///
    /// See [`solve_with_rng`](Self::solve_with_rng).
    pub fn solve<O: Optimizer>(&self, optimizer: &O) -> Result<Option<Solution>, TimetableError> {
        let mut rng = rng_from_seed(optimizer.seed());
        self.solve_with_rng(optimizer, &mut rng)
    }

    /// Runs `optimizer` and decodes its best vector once.
    ///
    /// Returns `Ok(None)` when the search never saw a finite-fitness
    /// candidate.
    ///
    /// # Errors
    ///
    /// [`TimetableError::InvalidConfig`] if the optimizer configuration is
    /// rejected; no search is started in that case.
    pub fn solve_with_rng<O: Optimizer, R: Rng>(
        &self,
        optimizer: &O,
        rng: &mut R,
    ) -> Result<Option<Solution>, TimetableError> {
        optimizer.validate().map_err(TimetableError::InvalidConfig)?;
        let fitness = self.fitness_fn(self.vector_length)?;

        debug!(
            "{}: solving {} courses ({} genes)",
            optimizer.name(),
            self.courses.len(),
            self.vector_length
        );

        let Some(vector) = optimizer.optimize_with_rng(fitness, self.vector_length, rng) else {
            warn!("{}: no usable schedule found", optimizer.name());
            return Ok(None);
        };

        let schedule = self.decode(&vector)?;
        let fitness = sanitize(self.evaluate(&schedule).unwrap_or(UNEVALUABLE));
        debug!("{}: best fitness {}", optimizer.name(), fitness);

        Ok(Some(Solution {
            vector,
            schedule,
            fitness,
        }))
    }
}
