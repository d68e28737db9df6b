//! Input validation for timetabling catalogs.
//!
//! Checks structural integrity of rooms, groups, professors, courses,
//! and sessions before a catalog is frozen. Detects:
//! - Empty catalogs (no rooms or no sessions)
//! - Duplicate IDs
//! - Sessions referencing unknown groups, courses, or professors
//! - Session durations that cannot fit in a day
//! - Degenerate calendars and empty group windows
//!
//! A session that is structurally valid but has no compatible room or no
//! usable start hour is *not* a validation error: it is placed at the
//! infeasible default position and penalized by the evaluator.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Course, Professor, Room, Session, StudentGroup, WeekCalendar};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities of the same kind share an ID.
    DuplicateId,
    /// The catalog has no rooms or no sessions.
    EmptyCatalog,
    /// A session references a group, course, or professor that doesn't exist.
    InvalidReference,
    /// A session has zero duration or is longer than a day.
    InvalidDuration,
    /// The calendar has zero days or zero hours per day.
    InvalidCalendar,
    /// A group's availability window is empty.
    InvalidWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Borrowed view of every entity a catalog is built from.
#[derive(Debug, Clone, Copy)]
pub struct CatalogInput<'a> {
    /// Week grid.
    pub calendar: &'a WeekCalendar,
    /// Rooms in ordinal order.
    pub rooms: &'a [Room],
    /// Student groups.
    pub groups: &'a [StudentGroup],
    /// Professors.
    pub professors: &'a [Professor],
    /// Courses.
    pub courses: &'a [Course],
    /// Sessions to place.
    pub sessions: &'a [Session],
}

/// Validates the input data for a timetabling catalog.
///
/// Checks:
/// 1. Calendar has at least one day and one hour per day, and the day ends
///    by midnight
/// 2. At least one room and one session
/// 3. No duplicate IDs within each entity kind
/// 4. Every group window is non-empty
/// 5. Every session references an existing group, course, and professor
/// 6. Every session duration is in `1..=hours_per_day`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(input: CatalogInput<'_>) -> ValidationResult {
    let mut errors = Vec::new();
    let calendar = input.calendar;

    if calendar.days == 0 || calendar.hours_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCalendar,
            format!(
                "Calendar must have at least one day and one hour (got {} days × {} hours)",
                calendar.days, calendar.hours_per_day
            ),
        ));
    }
    if (calendar.start_clock_hour as usize).saturating_add(calendar.hours_per_day) > 24 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidCalendar,
            format!(
                "Calendar day runs past midnight (starts {}:00, {} hours)",
                calendar.start_clock_hour, calendar.hours_per_day
            ),
        ));
    }

    if input.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog has no rooms",
        ));
    }
    if input.sessions.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyCatalog,
            "Catalog has no sessions",
        ));
    }

    check_unique("room", input.rooms.iter().map(|r| r.id), &mut errors);
    let group_ids = check_unique("group", input.groups.iter().map(|g| g.id), &mut errors);
    let professor_ids = check_unique(
        "professor",
        input.professors.iter().map(|p| p.id),
        &mut errors,
    );
    let course_ids = check_unique("course", input.courses.iter().map(|c| c.id), &mut errors);
    check_unique("session", input.sessions.iter().map(|s| s.id), &mut errors);

    for group in input.groups {
        if group.available.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWindow,
                format!(
                    "Group '{}' has an empty availability window {}..{}",
                    group.name, group.available.start_hour, group.available.end_hour
                ),
            ));
        }
    }

    for session in input.sessions {
        if !group_ids.contains(&session.group_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!(
                    "Session {} references unknown group {}",
                    session.id, session.group_id
                ),
            ));
        }
        if !course_ids.contains(&session.course_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!(
                    "Session {} references unknown course {}",
                    session.id, session.course_id
                ),
            ));
        }
        if !professor_ids.contains(&session.professor_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidReference,
                format!(
                    "Session {} references unknown professor {}",
                    session.id, session.professor_id
                ),
            ));
        }
        if session.duration == 0 || session.duration > calendar.hours_per_day {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Session {} has duration {} (day has {} hours)",
                    session.id, session.duration, calendar.hours_per_day
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Records a `DuplicateId` error for every repeated id and returns the id set.
fn check_unique(
    entity: &str,
    ids: impl Iterator<Item = u32>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<u32> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {entity} ID: {id}"),
            ));
        }
    }
    seen
}
