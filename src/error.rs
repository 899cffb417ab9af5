//! Error types for timetable construction and decoding.
//!
//! Only precondition violations live here. A candidate that decodes but
//! cannot be scored is not an error for the search; it is scored at
//! [`UNEVALUABLE`](crate::fitness::UNEVALUABLE) instead.

use crate::model::{CourseId, LecturerId, RoomId};
use thiserror::Error;

/// Errors reported by the timetable core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    /// The search vector does not hold exactly three genes per session.
    #[error("vector length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A schedule or lookup references a course that was not supplied.
    #[error("unknown course {0}")]
    UnknownCourse(CourseId),

    /// A course references a lecturer that was not supplied.
    #[error("course {course} references unknown lecturer {lecturer}")]
    UnknownLecturer {
        course: CourseId,
        lecturer: LecturerId,
    },

    /// Two courses share the same identifier.
    #[error("duplicate course id {0}")]
    DuplicateCourse(CourseId),

    /// Two lecturers share the same identifier.
    #[error("duplicate lecturer id {0}")]
    DuplicateLecturer(LecturerId),

    /// Course duration outside `1..=4` sessions.
    #[error("course {course} has invalid duration {duration}")]
    InvalidDuration { course: CourseId, duration: usize },

    /// Course has no room it may be held in.
    #[error("course {0} has an empty room set")]
    EmptyRoomSet(CourseId),

    /// Course requires a room outside the room universe.
    #[error("course {course} requires room {room}, which does not exist")]
    RoomOutOfRange { course: CourseId, room: RoomId },

    /// Schedule lacks an entry for a course that must be encoded.
    #[error("schedule has no sessions for course {0}")]
    MissingCourse(CourseId),

    /// Schedule holds a session count different from the course duration.
    #[error("course {course} expects {expected} sessions, schedule has {actual}")]
    SessionCountMismatch {
        course: CourseId,
        expected: usize,
        actual: usize,
    },

    /// Optimizer configuration rejected by its `validate()`.
    #[error("invalid optimizer configuration: {0}")]
    InvalidConfig(String),
}
