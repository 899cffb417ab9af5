//! Timetabling domain model.
//!
//! Courses and lecturers are immutable inputs supplied once per run.
//! A [`Schedule`] is the phenotype the searches produce: every course
//! mapped to the ordered [`Slot`]s it occupies.
//!
//! The slot universe is fixed: [`DAYS`] days, [`PERIODS_PER_DAY`] one-hour
//! periods per day and [`ROOMS`] rooms.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Course identifier.
pub type CourseId = u32;

/// Lecturer identifier.
pub type LecturerId = u32;

/// Room identifier, in `0..ROOMS`.
pub type RoomId = usize;

/// Number of teaching days.
pub const DAYS: usize = 5;

/// Number of one-hour periods per day.
pub const PERIODS_PER_DAY: usize = 8;

/// Number of rooms.
pub const ROOMS: usize = 8;

/// Shortest allowed course, in sessions.
pub const MIN_DURATION: usize = 1;

/// Longest allowed course, in sessions.
pub const MAX_DURATION: usize = 4;

/// A course to be placed in the timetable.
///
/// # Examples
///
/// ```
/// use u_timetable::model::Course;
///
/// let math = Course::new(0, "Math", 2, 0, [0, 1]);
/// assert!(math.accepts_room(1));
/// assert!(!math.accepts_room(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Course {
    /// Unique, stable identifier.
    pub id: CourseId,

    /// Display name.
    pub name: String,

    /// Number of one-hour sessions (1–4).
    pub duration: usize,

    /// Lecturer teaching this course.
    pub lecturer: LecturerId,

    /// Rooms that may host this course.
    pub required_rooms: BTreeSet<RoomId>,
}

impl Course {
    /// Creates a course.
    pub fn new(
        id: CourseId,
        name: impl Into<String>,
        duration: usize,
        lecturer: LecturerId,
        rooms: impl IntoIterator<Item = RoomId>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            duration,
            lecturer,
            required_rooms: rooms.into_iter().collect(),
        }
    }

    /// Whether `room` is one of the course's permitted rooms.
    #[inline]
    pub fn accepts_room(&self, room: RoomId) -> bool {
        self.required_rooms.contains(&room)
    }
}

/// A lecturer and the (day, period) pairs they can teach.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Lecturer {
    /// Unique identifier.
    pub id: LecturerId,

    /// Display name.
    pub name: String,

    /// Available `(day, period)` pairs.
    pub availability: BTreeSet<(usize, usize)>,
}

impl Lecturer {
    /// Creates a lecturer.
    pub fn new(
        id: LecturerId,
        name: impl Into<String>,
        availability: impl IntoIterator<Item = (usize, usize)>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            availability: availability.into_iter().collect(),
        }
    }

    /// Creates a lecturer available in every period of every day.
    pub fn always_available(id: LecturerId, name: impl Into<String>) -> Self {
        let all = (0..DAYS).flat_map(|d| (0..PERIODS_PER_DAY).map(move |p| (d, p)));
        Self::new(id, name, all)
    }

    /// Whether the lecturer can teach at `(day, period)`.
    #[inline]
    pub fn is_available(&self, day: usize, period: usize) -> bool {
        self.availability.contains(&(day, period))
    }
}

/// One atomic placement: a single hour of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Slot {
    /// Day index in `0..DAYS`.
    pub day: usize,
    /// Period index in `0..PERIODS_PER_DAY`.
    pub period: usize,
    /// Room index in `0..ROOMS`.
    pub room: RoomId,
}

impl Slot {
    /// Creates a slot.
    #[inline]
    pub fn new(day: usize, period: usize, room: RoomId) -> Self {
        Self { day, period, room }
    }

    /// The `(day, period)` time key, ignoring the room.
    #[inline]
    pub fn time(&self) -> (usize, usize) {
        (self.day, self.period)
    }
}

/// Assignment of every course to its ordered sessions.
///
/// Backed by a `BTreeMap` so iteration order (and therefore any derived
/// report) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Schedule {
    assignments: BTreeMap<CourseId, Vec<Slot>>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the sessions of a course, replacing any previous ones.
    pub fn insert(&mut self, course: CourseId, slots: Vec<Slot>) -> Option<Vec<Slot>> {
        self.assignments.insert(course, slots)
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_course(mut self, course: CourseId, slots: Vec<Slot>) -> Self {
        self.insert(course, slots);
        self
    }

    /// Sessions of a course, if scheduled.
    pub fn get(&self, course: CourseId) -> Option<&[Slot]> {
        self.assignments.get(&course).map(Vec::as_slice)
    }

    /// Iterates `(course, sessions)` in ascending course id.
    pub fn iter(&self) -> impl Iterator<Item = (CourseId, &[Slot])> {
        self.assignments.iter().map(|(&id, slots)| (id, slots.as_slice()))
    }

    /// Number of scheduled courses.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether no course is scheduled.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Total number of sessions across all courses.
    pub fn session_count(&self) -> usize {
        self.assignments.values().map(Vec::len).sum()
    }

    /// Consumes the schedule, returning the underlying mapping.
    pub fn into_inner(self) -> BTreeMap<CourseId, Vec<Slot>> {
        self.assignments
    }
}

impl FromIterator<(CourseId, Vec<Slot>)> for Schedule {
    fn from_iter<T: IntoIterator<Item = (CourseId, Vec<Slot>)>>(iter: T) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}
