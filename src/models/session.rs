//! Course and session models.
//!
//! A session is one teaching occurrence: a fixed-length block of a
//! course, taught by one professor to one group, in a lab or a theory
//! room. A course with three weekly lectures is three sessions.

use serde::{Deserialize, Serialize};

use super::{CourseId, GroupId, ProfessorId, SessionId};

/// A course (subject). Opaque to the evaluator beyond its id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Course {
    /// Unique course identifier.
    pub id: CourseId,
    /// Human-readable name (e.g. "DBMS").
    pub name: String,
}

impl Course {
    /// Creates a course.
    pub fn new(id: CourseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A single teaching occurrence to be placed on the week grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    /// Unique session identifier, stable for the run.
    pub id: SessionId,
    /// Attending group.
    pub group_id: GroupId,
    /// Course taught.
    pub course_id: CourseId,
    /// Teaching professor.
    pub professor_id: ProfessorId,
    /// Length in hourly slots (>= 1).
    pub duration: usize,
    /// Whether the session needs a lab room.
    pub is_lab: bool,
}

impl Session {
    /// Creates a one-hour theory session.
    pub fn new(
        id: SessionId,
        group_id: GroupId,
        course_id: CourseId,
        professor_id: ProfessorId,
    ) -> Self {
        Self {
            id,
            group_id,
            course_id,
            professor_id,
            duration: 1,
            is_lab: false,
        }
    }

    /// Sets the duration in hours.
    pub fn with_duration(mut self, duration: usize) -> Self {
        self.duration = duration;
        self
    }

    /// Marks the session as needing a lab.
    pub fn lab(mut self) -> Self {
        self.is_lab = true;
        self
    }

    /// `"Lab"` or `"Theory"`.
    pub fn kind_label(&self) -> &'static str {
        if self.is_lab {
            "Lab"
        } else {
            "Theory"
        }
    }

    /// Whether both sessions are taught by the same professor.
    #[inline]
    pub fn shares_professor(&self, other: &Session) -> bool {
        self.professor_id == other.professor_id
    }

    /// Whether both sessions are attended by the same group.
    #[inline]
    pub fn shares_group(&self, other: &Session) -> bool {
        self.group_id == other.group_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builder() {
        let s = Session::new(1, 1, 6, 4).with_duration(2).lab();
        assert_eq!(s.id, 1);
        assert_eq!(s.group_id, 1);
        assert_eq!(s.course_id, 6);
        assert_eq!(s.professor_id, 4);
        assert_eq!(s.duration, 2);
        assert!(s.is_lab);
        assert_eq!(s.kind_label(), "Lab");
    }

    #[test]
    fn test_session_defaults() {
        let s = Session::new(2, 1, 5, 3);
        assert_eq!(s.duration, 1);
        assert!(!s.is_lab);
        assert_eq!(s.kind_label(), "Theory");
    }

    #[test]
    fn test_shared_entities() {
        let a = Session::new(1, 1, 5, 3);
        let b = Session::new(2, 2, 7, 3);
        let c = Session::new(3, 1, 8, 9);
        assert!(a.shares_professor(&b));
        assert!(!a.shares_group(&b));
        assert!(a.shares_group(&c));
        assert!(!a.shares_professor(&c));
    }
}
