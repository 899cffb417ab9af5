//! Constraint-penalty fitness.
//!
//! A schedule is scored by summing independent penalty terms. Lower is
//! better; a conflict-free schedule whose courses each sit in one
//! unbroken block scores exactly `0.0`.
//!
//! | Term | Weight | Counted |
//! |---|---|---|
//! | [`InvalidRoom`](ViolationKind::InvalidRoom) | 100 | per session |
//! | [`RoomConflict`](ViolationKind::RoomConflict) | 1000 | per pair of sessions of different courses in one `(day, period, room)` |
//! | [`LecturerUnavailable`](ViolationKind::LecturerUnavailable) | 100 | per session |
//! | [`LecturerConflict`](ViolationKind::LecturerConflict) | 1000 | per pair of sessions of different courses with one lecturer at one `(day, period)` |
//! | [`DaySplit`](ViolationKind::DaySplit) | 50 | per adjacent pair (by time) on different days |
//! | [`NonConsecutive`](ViolationKind::NonConsecutive) | 30 | per adjacent pair on one day with a gap or overlap |
//!
//! Every term is a small integer, so the floating-point sum is exact and
//! independent of the order in which terms are visited.
//!
//! The same scan backs three views: [`fitness`] (the scalar), [`violations`]
//! (every term as a record) and [`check_validity`] (hard terms only).

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::error::TimetableError;
use crate::model::{Course, CourseId, Lecturer, LecturerId, RoomId, Schedule, Slot};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Penalty for a session outside the course's room set.
pub const INVALID_ROOM_PENALTY: f64 = 100.0;

/// Penalty for two courses sharing a room at the same time.
pub const ROOM_CONFLICT_PENALTY: f64 = 1000.0;

/// Penalty for a session outside the lecturer's availability.
pub const LECTURER_UNAVAILABLE_PENALTY: f64 = 100.0;

/// Penalty for a lecturer teaching two courses at the same time.
pub const LECTURER_CONFLICT_PENALTY: f64 = 1000.0;

/// Penalty for consecutive sessions of a course falling on different days.
pub const DAY_SPLIT_PENALTY: f64 = 50.0;

/// Penalty for same-day sessions that are not exactly adjacent.
pub const NON_CONSECUTIVE_PENALTY: f64 = 30.0;

/// Score assigned to a candidate that cannot be evaluated.
///
/// Compares worse than any finite penalty, so searches treat it as an
/// ordinary, very bad candidate.
pub const UNEVALUABLE: f64 = f64::INFINITY;

/// Category of a penalty term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ViolationKind {
    /// Session placed in a room the course may not use.
    InvalidRoom,
    /// Two different courses in the same room at the same time.
    RoomConflict,
    /// Session outside the lecturer's availability.
    LecturerUnavailable,
    /// One lecturer teaching two different courses at the same time.
    LecturerConflict,
    /// Adjacent sessions of a course on different days.
    DaySplit,
    /// Adjacent same-day sessions whose periods are not consecutive.
    NonConsecutive,
}

impl ViolationKind {
    /// Penalty weight of this kind.
    pub fn penalty(self) -> f64 {
        match self {
            ViolationKind::InvalidRoom => INVALID_ROOM_PENALTY,
            ViolationKind::RoomConflict => ROOM_CONFLICT_PENALTY,
            ViolationKind::LecturerUnavailable => LECTURER_UNAVAILABLE_PENALTY,
            ViolationKind::LecturerConflict => LECTURER_CONFLICT_PENALTY,
            ViolationKind::DaySplit => DAY_SPLIT_PENALTY,
            ViolationKind::NonConsecutive => NON_CONSECUTIVE_PENALTY,
        }
    }

    /// Hard kinds make a schedule invalid; soft kinds only make it worse.
    pub fn is_hard(self) -> bool {
        !matches!(self, ViolationKind::DaySplit | ViolationKind::NonConsecutive)
    }

    /// Short human-readable label, used as the message prefix.
    pub fn label(self) -> &'static str {
        match self {
            ViolationKind::InvalidRoom => "Invalid room",
            ViolationKind::RoomConflict => "Room conflict",
            ViolationKind::LecturerUnavailable => "Lecturer unavailable",
            ViolationKind::LecturerConflict => "Lecturer conflict",
            ViolationKind::DaySplit => "Day split",
            ViolationKind::NonConsecutive => "Non-consecutive sessions",
        }
    }
}

/// One penalty term found in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    /// What went wrong.
    pub kind: ViolationKind,
    /// Offending course.
    pub course: CourseId,
    /// The other course involved, for conflict kinds.
    pub other: Option<CourseId>,
    /// Lecturer of `course`.
    pub lecturer: LecturerId,
    /// Session where the violation was detected.
    pub slot: Slot,
}

impl Violation {
    /// Penalty contributed by this term.
    #[inline]
    pub fn penalty(&self) -> f64 {
        self.kind.penalty()
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Slot { day, period, room } = self.slot;
        write!(f, "{}: ", self.kind.label())?;
        match (self.kind, self.other) {
            (ViolationKind::RoomConflict, Some(other)) => write!(
                f,
                "courses {} and {other} both in room {room} at day {day} period {period}",
                self.course
            ),
            (ViolationKind::LecturerConflict, Some(other)) => write!(
                f,
                "courses {} and {other} share lecturer {} at day {day} period {period}",
                self.course, self.lecturer
            ),
            (ViolationKind::InvalidRoom, _) => write!(
                f,
                "course {} may not use room {room}",
                self.course
            ),
            (ViolationKind::LecturerUnavailable, _) => write!(
                f,
                "lecturer {} (course {}) at day {day} period {period}",
                self.lecturer, self.course
            ),
            _ => write!(
                f,
                "course {} at day {day} period {period}",
                self.course
            ),
        }
    }
}

/// Outcome of [`check_validity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validity {
    /// No hard violation.
    Valid,
    /// Hard violations, in scan order.
    Invalid(Vec<Violation>),
}

impl Validity {
    /// Keeps the hard violations of a full scan.
    pub fn from_violations(found: Vec<Violation>) -> Self {
        let hard: Vec<Violation> = found.into_iter().filter(|v| v.kind.is_hard()).collect();
        if hard.is_empty() {
            Validity::Valid
        } else {
            Validity::Invalid(hard)
        }
    }

    /// Whether the schedule has no hard violation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    /// Human-readable summary: `"Valid timetable"` or the hard violations
    /// joined by `"; "`.
    pub fn message(&self) -> String {
        match self {
            Validity::Valid => "Valid timetable".to_string(),
            Validity::Invalid(found) => found
                .iter()
                .map(Violation::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Id → position lookup over the supplied courses and lecturers.
///
/// Built once per [`Timetable`](crate::Timetable); the free functions in
/// this module build a throwaway one per call.
#[derive(Debug, Clone, Default)]
pub struct ConstraintIndex {
    courses: HashMap<CourseId, usize>,
    lecturers: HashMap<LecturerId, usize>,
}

impl ConstraintIndex {
    /// Indexes `courses` and `lecturers`. Later duplicates shadow earlier ones.
    pub fn new(courses: &[Course], lecturers: &[Lecturer]) -> Self {
        Self {
            courses: courses.iter().enumerate().map(|(i, c)| (c.id, i)).collect(),
            lecturers: lecturers
                .iter()
                .enumerate()
                .map(|(i, l)| (l.id, i))
                .collect(),
        }
    }

    fn course<'a>(&self, courses: &'a [Course], id: CourseId) -> Option<&'a Course> {
        self.courses.get(&id).and_then(|&i| courses.get(i))
    }

    fn lecturer<'a>(&self, lecturers: &'a [Lecturer], id: LecturerId) -> Option<&'a Lecturer> {
        self.lecturers.get(&id).and_then(|&i| lecturers.get(i))
    }
}

/// Visits every penalty term of `schedule`.
///
/// # Errors
///
/// [`TimetableError::UnknownCourse`] or [`TimetableError::UnknownLecturer`]
/// when the schedule references ids missing from the inputs.
pub(crate) fn scan<F: FnMut(Violation)>(
    schedule: &Schedule,
    courses: &[Course],
    lecturers: &[Lecturer],
    index: &ConstraintIndex,
    mut sink: F,
) -> Result<(), TimetableError> {
    let mut rooms: BTreeMap<(usize, usize, RoomId), Vec<CourseId>> = BTreeMap::new();
    let mut teaching: BTreeMap<(usize, usize, LecturerId), Vec<(CourseId, Slot)>> =
        BTreeMap::new();

    for (course_id, slots) in schedule.iter() {
        let course = index
            .course(courses, course_id)
            .ok_or(TimetableError::UnknownCourse(course_id))?;
        let lecturer = index.lecturer(lecturers, course.lecturer).ok_or(
            TimetableError::UnknownLecturer {
                course: course_id,
                lecturer: course.lecturer,
            },
        )?;

        let violation = |kind, slot, other| Violation {
            kind,
            course: course_id,
            other,
            lecturer: lecturer.id,
            slot,
        };

        for &slot in slots {
            if !course.accepts_room(slot.room) {
                sink(violation(ViolationKind::InvalidRoom, slot, None));
            }
            if !lecturer.is_available(slot.day, slot.period) {
                sink(violation(ViolationKind::LecturerUnavailable, slot, None));
            }
            rooms
                .entry((slot.day, slot.period, slot.room))
                .or_default()
                .push(course_id);
            teaching
                .entry((slot.day, slot.period, lecturer.id))
                .or_default()
                .push((course_id, slot));
        }

        let mut ordered = slots.to_vec();
        ordered.sort_by_key(Slot::time);
        for pair in ordered.windows(2) {
            let (prev, next) = (pair[0], pair[1]);
            if next.day != prev.day {
                sink(violation(ViolationKind::DaySplit, next, None));
            } else if next.period != prev.period + 1 {
                sink(violation(ViolationKind::NonConsecutive, next, None));
            }
        }
    }

    for (&(day, period, room), occupants) in &rooms {
        for (i, &a) in occupants.iter().enumerate() {
            for &b in occupants[i + 1..].iter().filter(|&&b| b != a) {
                let lecturer = index
                    .course(courses, a)
                    .map(|c| c.lecturer)
                    .ok_or(TimetableError::UnknownCourse(a))?;
                sink(Violation {
                    kind: ViolationKind::RoomConflict,
                    course: a,
                    other: Some(b),
                    lecturer,
                    slot: Slot::new(day, period, room),
                });
            }
        }
    }

    for (&(_, _, lecturer), sessions) in &teaching {
        for (i, &(a, slot)) in sessions.iter().enumerate() {
            for &(b, _) in sessions[i + 1..].iter().filter(|(b, _)| *b != a) {
                sink(Violation {
                    kind: ViolationKind::LecturerConflict,
                    course: a,
                    other: Some(b),
                    lecturer,
                    slot,
                });
            }
        }
    }

    Ok(())
}

/// Total penalty of `schedule`. Lower is better.
///
/// # Errors
///
/// Fails when the schedule references a course or lecturer that is not in
/// the supplied lists. Search callers should go through
/// [`score_or_unevaluable`] instead, which never fails.
///
/// # Examples
///
/// ```
/// use u_timetable::fitness::fitness;
/// use u_timetable::model::{Course, Lecturer, Schedule, Slot};
///
/// let courses = vec![Course::new(0, "Math", 2, 0, [0, 1])];
/// let lecturers = vec![Lecturer::new(0, "Dr. Smith", [(0, 0), (1, 0)])];
/// let split = Schedule::new().with_course(0, vec![Slot::new(0, 0, 0), Slot::new(1, 0, 0)]);
/// assert_eq!(fitness(&split, &courses, &lecturers).unwrap(), 50.0);
/// ```
pub fn fitness(
    schedule: &Schedule,
    courses: &[Course],
    lecturers: &[Lecturer],
) -> Result<f64, TimetableError> {
    fitness_indexed(schedule, courses, lecturers, &ConstraintIndex::new(courses, lecturers))
}

pub(crate) fn fitness_indexed(
    schedule: &Schedule,
    courses: &[Course],
    lecturers: &[Lecturer],
    index: &ConstraintIndex,
) -> Result<f64, TimetableError> {
    let mut total = 0.0;
    scan(schedule, courses, lecturers, index, |v| total += v.penalty())?;
    Ok(total)
}

/// Every penalty term of `schedule`, in deterministic scan order.
///
/// Summing [`Violation::penalty`] over the result gives [`fitness`].
pub fn violations(
    schedule: &Schedule,
    courses: &[Course],
    lecturers: &[Lecturer],
) -> Result<Vec<Violation>, TimetableError> {
    let index = ConstraintIndex::new(courses, lecturers);
    let mut found = Vec::new();
    scan(schedule, courses, lecturers, &index, |v| found.push(v))?;
    Ok(found)
}

/// Hard-constraint view over the same terms [`fitness`] sums.
///
/// The schedule is valid iff it has no invalid room, room conflict,
/// lecturer unavailability or lecturer conflict. Day splits and gaps only
/// affect the score.
pub fn check_validity(
    schedule: &Schedule,
    courses: &[Course],
    lecturers: &[Lecturer],
) -> Result<Validity, TimetableError> {
    violations(schedule, courses, lecturers).map(Validity::from_violations)
}

/// Scores `schedule`, mapping any evaluation failure to [`UNEVALUABLE`].
pub fn score_or_unevaluable(schedule: &Schedule, courses: &[Course], lecturers: &[Lecturer]) -> f64 {
    sanitize(fitness(schedule, courses, lecturers).unwrap_or(UNEVALUABLE))
}

/// Maps NaN to [`UNEVALUABLE`] so every score is totally ordered.
#[inline]
pub fn sanitize(score: f64) -> f64 {
    if score.is_nan() {
        UNEVALUABLE
    } else {
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PERIODS_PER_DAY;
    use proptest::prelude::*;

    fn courses() -> Vec<Course> {
        vec![
            Course::new(0, "Math", 2, 0, [0, 1]),
            Course::new(1, "Physics", 1, 1, [1, 2]),
        ]
    }

    fn lecturers() -> Vec<Lecturer> {
        vec![
            Lecturer::new(0, "Dr. Smith", [(0, 0), (0, 1), (1, 0)]),
            Lecturer::new(1, "Dr. Jones", [(0, 2), (1, 1), (1, 2)]),
        ]
    }

    fn perfect() -> Schedule {
        Schedule::new()
            .with_course(0, vec![Slot::new(0, 0, 0), Slot::new(0, 1, 0)])
            .with_course(1, vec![Slot::new(0, 2, 1)])
    }

    #[test]
    fn test_perfect_schedule_scores_zero() {
        assert_eq!(fitness(&perfect(), &courses(), &lecturers()).unwrap(), 0.0);
        assert!(violations(&perfect(), &courses(), &lecturers())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_day_split() {
        let s = perfect().with_course(0, vec![Slot::new(0, 0, 0), Slot::new(1, 0, 0)]);
        let found = violations(&s, &courses(), &lecturers()).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::DaySplit);
        assert_eq!(fitness(&s, &courses(), &lecturers()).unwrap(), 50.0);
    }

    #[test]
    fn test_non_consecutive_gap() {
        let courses = vec![Course::new(0, "Lab", 2, 0, [0])];
        let lecturers = vec![Lecturer::always_available(0, "Any")];
        let s = Schedule::new().with_course(0, vec![Slot::new(2, 1, 0), Slot::new(2, 3, 0)]);
        assert_eq!(
            fitness(&s, &courses, &lecturers).unwrap(),
            NON_CONSECUTIVE_PENALTY
        );
    }

    #[test]
    fn test_contiguity_uses_sorted_order() {
        let courses = vec![Course::new(0, "Lab", 3, 0, [0])];
        let lecturers = vec![Lecturer::always_available(0, "Any")];
        let s = Schedule::new().with_course(
            0,
            vec![Slot::new(1, 4, 0), Slot::new(1, 2, 0), Slot::new(1, 3, 0)],
        );
        assert_eq!(fitness(&s, &courses, &lecturers).unwrap(), 0.0);
    }

    #[test]
    fn test_room_conflict_counted_once_per_pair() {
        let courses = vec![
            Course::new(0, "A", 1, 0, [0]),
            Course::new(1, "B", 1, 1, [0]),
        ];
        let lecturers = vec![
            Lecturer::always_available(0, "L0"),
            Lecturer::always_available(1, "L1"),
        ];
        let s = Schedule::new()
            .with_course(0, vec![Slot::new(0, 0, 0)])
            .with_course(1, vec![Slot::new(0, 0, 0)]);
        let found = violations(&s, &courses, &lecturers).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::RoomConflict);
        assert_eq!(found[0].other, Some(1));
        assert_eq!(fitness(&s, &courses, &lecturers).unwrap(), 1000.0);
    }

    #[test]
    fn test_three_way_room_conflict_is_three_pairs() {
        let courses: Vec<Course> = (0..3).map(|i| Course::new(i, "X", 1, i, [0])).collect();
        let lecturers: Vec<Lecturer> = (0..3).map(|i| Lecturer::always_available(i, "L")).collect();
        let s: Schedule = (0..3).map(|i| (i, vec![Slot::new(0, 0, 0)])).collect();
        assert_eq!(fitness(&s, &courses, &lecturers).unwrap(), 3000.0);
    }

    #[test]
    fn test_same_course_twice_in_a_slot_is_not_a_room_conflict() {
        let courses = vec![Course::new(0, "A", 2, 0, [0])];
        let lecturers = vec![Lecturer::always_available(0, "L0")];
        let s = Schedule::new().with_course(0, vec![Slot::new(0, 0, 0); 2]);
        // Overlapping sessions only break contiguity.
        assert_eq!(
            fitness(&s, &courses, &lecturers).unwrap(),
            NON_CONSECUTIVE_PENALTY
        );
    }

    #[test]
    fn test_lecturer_conflict() {
        let courses = vec![
            Course::new(0, "A", 1, 7, [0, 1]),
            Course::new(1, "B", 1, 7, [0, 1]),
        ];
        let lecturers = vec![Lecturer::always_available(7, "Busy")];
        let s = Schedule::new()
            .with_course(0, vec![Slot::new(3, 3, 0)])
            .with_course(1, vec![Slot::new(3, 3, 1)]);
        let found = violations(&s, &courses, &lecturers).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind, ViolationKind::LecturerConflict);
        assert_eq!(found[0].lecturer, 7);
        assert_eq!(fitness(&s, &courses, &lecturers).unwrap(), 1000.0);
    }

    #[test]
    fn test_invalid_room_and_unavailability() {
        // Physics in room 0 is not allowed; (0, 5) is outside Dr. Jones' hours.
        let s = perfect().with_course(1, vec![Slot::new(0, 2, 0)]);
        assert_eq!(fitness(&s, &courses(), &lecturers()).unwrap(), 100.0);

        let s = perfect().with_course(1, vec![Slot::new(0, 5, 1)]);
        assert_eq!(fitness(&s, &courses(), &lecturers()).unwrap(), 100.0);
    }

    #[test]
    fn test_unknown_course_is_an_error() {
        let s = perfect().with_course(42, vec![Slot::new(0, 0, 0)]);
        assert_eq!(
            fitness(&s, &courses(), &lecturers()),
            Err(TimetableError::UnknownCourse(42))
        );
        assert_eq!(score_or_unevaluable(&s, &courses(), &lecturers()), UNEVALUABLE);
    }

    #[test]
    fn test_unknown_lecturer_is_an_error() {
        let lecturers = vec![lecturers().remove(0)];
        assert_eq!(
            fitness(&perfect(), &courses(), &lecturers),
            Err(TimetableError::UnknownLecturer {
                course: 1,
                lecturer: 1
            })
        );
    }

    #[test]
    fn test_validity_messages() {
        let v = check_validity(&perfect(), &courses(), &lecturers()).unwrap();
        assert!(v.is_valid());
        assert_eq!(v.message(), "Valid timetable");

        let clash = perfect().with_course(1, vec![Slot::new(0, 0, 0)]);
        let v = check_validity(&clash, &courses(), &lecturers()).unwrap();
        assert!(!v.is_valid());
        assert!(v.message().contains("Room conflict"), "{}", v.message());

        let shared = vec![
            Course::new(0, "Math", 2, 0, [0, 1]),
            Course::new(1, "Physics", 1, 0, [1, 2]),
        ];
        let overlap = perfect().with_course(1, vec![Slot::new(0, 0, 1)]);
        let v = check_validity(&overlap, &shared, &lecturers()).unwrap();
        assert!(v.message().contains("Lecturer conflict"), "{}", v.message());
    }

    #[test]
    fn test_soft_violations_keep_schedule_valid() {
        let s = perfect().with_course(0, vec![Slot::new(0, 0, 0), Slot::new(1, 0, 0)]);
        assert!(check_validity(&s, &courses(), &lecturers())
            .unwrap()
            .is_valid());
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(f64::NAN), UNEVALUABLE);
        assert_eq!(sanitize(30.0), 30.0);
    }

    #[test]
    fn test_kind_weights() {
        assert_eq!(ViolationKind::RoomConflict.penalty(), 1000.0);
        assert!(ViolationKind::LecturerUnavailable.is_hard());
        assert!(!ViolationKind::NonConsecutive.is_hard());
    }

    proptest! {
        #[test]
        fn prop_conflict_free_contiguous_schedule_scores_zero(
            shape in proptest::collection::vec((1usize..=4, 0usize..5, 0usize..8, 0usize..8), 1..=8)
        ) {
            // Course i owns room i and lecturer i, so nothing can clash.
            let courses: Vec<Course> = shape
                .iter()
                .enumerate()
                .map(|(i, &(duration, _, _, extra))| {
                    Course::new(i as u32, "C", duration, i as u32, [i, extra])
                })
                .collect();
            let lecturers: Vec<Lecturer> = (0..shape.len() as u32)
                .map(|i| Lecturer::always_available(i, "L"))
                .collect();
            let schedule: Schedule = shape
                .iter()
                .enumerate()
                .map(|(i, &(duration, day, start, _))| {
                    let start = start % (PERIODS_PER_DAY - duration + 1);
                    let slots: Vec<Slot> = (start..start + duration)
                        .map(|period| Slot::new(day, period, i))
                        .collect();
                    (i as u32, slots)
                })
                .collect();

            prop_assert_eq!(fitness(&schedule, &courses, &lecturers).unwrap(), 0.0);
            prop_assert!(check_validity(&schedule, &courses, &lecturers).unwrap().is_valid());
        }

        #[test]
        fn prop_fitness_ignores_course_order(
            raw in proptest::collection::vec((0usize..5, 0usize..8, 0usize..8), 6)
        ) {
            let courses: Vec<Course> = (0..3)
                .map(|i| Course::new(i, "C", 2, i % 2, [0, 1, 2]))
                .collect();
            let lecturers = vec![
                Lecturer::new(0, "L0", [(0, 0), (0, 1), (2, 3)]),
                Lecturer::always_available(1, "L1"),
            ];
            let slots: Vec<Slot> = raw.iter().map(|&(d, p, r)| Slot::new(d, p, r)).collect();

            let forward: Schedule = (0..3u32)
                .map(|i| (i, slots[2 * i as usize..2 * i as usize + 2].to_vec()))
                .collect();
            let mut reversed_courses = courses.clone();
            reversed_courses.reverse();
            let mut reversed_lecturers = lecturers.clone();
            reversed_lecturers.reverse();
            let swapped: Schedule = (0..3u32)
                .map(|i| {
                    let mut s = slots[2 * i as usize..2 * i as usize + 2].to_vec();
                    s.reverse();
                    (i, s)
                })
                .collect();

            let a = fitness(&forward, &courses, &lecturers).unwrap();
            let b = fitness(&swapped, &reversed_courses, &reversed_lecturers).unwrap();
            prop_assert_eq!(a, b);

            let total: f64 = violations(&forward, &courses, &lecturers)
                .unwrap()
                .iter()
                .map(Violation::penalty)
                .sum();
            prop_assert_eq!(total, a);
        }
    }
}
