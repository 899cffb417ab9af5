//! Search-vector encoding.
//!
//! Both searches manipulate a flat `Vec<f64>` genotype. Each session of
//! each course occupies one consecutive triple `(day, period, room)`, and
//! courses appear in the order they were supplied:
//!
//! ```text
//! [ c0.s0.day, c0.s0.period, c0.s0.room, c0.s1.day, ..., c1.s0.day, ... ]
//! ```
//!
//! [`decode`] rounds each gene half away from zero and wraps it into its
//! legal domain with a Euclidean modulo, so unconstrained continuous
//! positions and already-legal integer genes go through the same routine.

use crate::error::TimetableError;
use crate::model::{Course, Schedule, Slot, DAYS, PERIODS_PER_DAY, ROOMS};

/// Genes per session: day, period, room.
pub const GENES_PER_SESSION: usize = 3;

/// Domain size of each gene within a triple.
pub const GENE_DOMAIN: [usize; GENES_PER_SESSION] = [DAYS, PERIODS_PER_DAY, ROOMS];

/// Required search-vector length for `courses`: `Σ duration × 3`.
pub fn vector_length(courses: &[Course]) -> usize {
    courses.iter().map(|c| c.duration * GENES_PER_SESSION).sum()
}

/// Domain size of the gene at `index` in a search vector.
#[inline]
pub fn gene_domain(index: usize) -> usize {
    GENE_DOMAIN[index % GENES_PER_SESSION]
}

/// Rounds and wraps a raw gene into `0..modulus`.
///
/// NaN maps to 0; infinities saturate before wrapping.
#[inline]
pub fn wrap_gene(raw: f64, modulus: usize) -> usize {
    (raw.round() as i64).rem_euclid(modulus as i64) as usize
}

/// Decodes one `(day, period, room)` triple.
#[inline]
pub fn decode_slot(day: f64, period: f64, room: f64) -> Slot {
    Slot::new(
        wrap_gene(day, DAYS),
        wrap_gene(period, PERIODS_PER_DAY),
        wrap_gene(room, ROOMS),
    )
}

/// Decodes a search vector into a [`Schedule`].
///
/// Each course's sessions are sorted by `(day, period)`; the sort is
/// stable, so sessions sharing a time keep their vector order. Nothing
/// about contiguity is enforced here.
///
/// # Errors
///
/// [`TimetableError::LengthMismatch`] when `vector.len()` differs from
/// [`vector_length`]. The check happens before any decoding.
///
/// # Examples
///
/// ```
/// use u_timetable::encoding::decode;
/// use u_timetable::model::{Course, Slot};
///
/// let courses = vec![Course::new(0, "Math", 2, 0, [0])];
/// let schedule = decode(&[1.0, 3.4, 8.0, 0.6, -1.0, 2.0], &courses).unwrap();
/// assert_eq!(
///     schedule.get(0).unwrap(),
///     &[Slot::new(1, 3, 0), Slot::new(1, 7, 2)]
/// );
/// ```
pub fn decode(vector: &[f64], courses: &[Course]) -> Result<Schedule, TimetableError> {
    let expected = vector_length(courses);
    if vector.len() != expected {
        return Err(TimetableError::LengthMismatch {
            expected,
            actual: vector.len(),
        });
    }

    let mut triples = vector.chunks_exact(GENES_PER_SESSION);
    let schedule = courses
        .iter()
        .map(|course| {
            let mut slots: Vec<Slot> = triples
                .by_ref()
                .take(course.duration)
                .map(|t| decode_slot(t[0], t[1], t[2]))
                .collect();
            slots.sort_by_key(Slot::time);
            (course.id, slots)
        })
        .collect();

    Ok(schedule)
}

/// Encodes a schedule back into a search vector with the same layout.
///
/// Mostly useful for seeding searches and for building known vectors in
/// tests. Slots are written in the order the schedule stores them.
///
/// # Errors
///
/// - [`TimetableError::MissingCourse`] if a course has no entry.
/// - [`TimetableError::SessionCountMismatch`] if an entry's length differs
///   from the course duration.
pub fn encode(schedule: &Schedule, courses: &[Course]) -> Result<Vec<f64>, TimetableError> {
    let mut vector = Vec::with_capacity(vector_length(courses));
    for course in courses {
        let slots = schedule
            .get(course.id)
            .ok_or(TimetableError::MissingCourse(course.id))?;
        if slots.len() != course.duration {
            return Err(TimetableError::SessionCountMismatch {
                course: course.id,
                expected: course.duration,
                actual: slots.len(),
            });
        }
        for slot in slots {
            vector.extend([slot.day as f64, slot.period as f64, slot.room as f64]);
        }
    }
    Ok(vector)
}
