//! Immutable entity catalog.
//!
//! The catalog is the read-only input of a timetabling run: the week
//! grid plus every room, group, professor, course, and session. It is
//! validated once at construction and never mutated afterwards, so it
//! can be shared across threads behind an `Arc` while schedules are
//! evaluated in parallel.
//!
//! # Ordering
//! Rooms keep insertion order; a room's position in that order is its
//! *room ordinal*, the index used by the slot encoding. All other
//! entities are keyed by id in ordered maps, so iteration over sessions
//! is always ascending by session id.
//!
//! # Reloading
//! A reload builds a new catalog. Schedules hold the `Arc<Catalog>` they
//! were created from, which keeps them bound to that catalog generation.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::ga::SlotLayout;
use crate::models::{
    Course, CourseId, GroupId, Professor, ProfessorId, Room, RoomId, Session, SessionId,
    StudentGroup, WeekCalendar,
};
use crate::validation::{validate_catalog, CatalogInput, ValidationError};

/// Validated, immutable set of timetabling entities.
#[derive(Debug, Clone)]
pub struct Catalog {
    calendar: WeekCalendar,
    rooms: Vec<Room>,
    groups: BTreeMap<GroupId, StudentGroup>,
    professors: BTreeMap<ProfessorId, Professor>,
    courses: BTreeMap<CourseId, Course>,
    sessions: BTreeMap<SessionId, Session>,
}

/// Collects entities for a [`Catalog`].
///
/// # Example
/// ```
/// use u_timetable::catalog::Catalog;
/// use u_timetable::models::{Course, Professor, Room, Session, StudentGroup};
///
/// let catalog = Catalog::builder()
///     .with_room(Room::theory(0, "R51", 60))
///     .with_group(StudentGroup::new(1, "TY/1", 19))
///     .with_professor(Professor::new(1, "Joglekar"))
///     .with_course(Course::new(5, "CC"))
///     .with_session(Session::new(1, 1, 5, 1))
///     .build()
///     .unwrap();
/// assert_eq!(catalog.session_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    calendar: WeekCalendar,
    rooms: Vec<Room>,
    groups: Vec<StudentGroup>,
    professors: Vec<Professor>,
    courses: Vec<Course>,
    sessions: Vec<Session>,
}

impl CatalogBuilder {
    /// Sets the week grid (default: 5 days × 10 hours from 08:00).
    pub fn with_calendar(mut self, calendar: WeekCalendar) -> Self {
        self.calendar = calendar;
        self
    }

    /// Appends a room. Rooms are ordered by insertion.
    pub fn with_room(mut self, room: Room) -> Self {
        self.rooms.push(room);
        self
    }

    /// Appends several rooms in order.
    pub fn with_rooms(mut self, rooms: impl IntoIterator<Item = Room>) -> Self {
        self.rooms.extend(rooms);
        self
    }

    /// Adds a student group.
    pub fn with_group(mut self, group: StudentGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Adds a professor.
    pub fn with_professor(mut self, professor: Professor) -> Self {
        self.professors.push(professor);
        self
    }

    /// Adds a course.
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Adds a session.
    pub fn with_session(mut self, session: Session) -> Self {
        self.sessions.push(session);
        self
    }

    /// Adds several sessions.
    pub fn with_sessions(mut self, sessions: impl IntoIterator<Item = Session>) -> Self {
        self.sessions.extend(sessions);
        self
    }

    /// Validates and freezes the catalog.
    ///
    /// Fails with every detected problem if the input is malformed (see
    /// [`validate_catalog`]). Sessions that cannot be placed anywhere are
    /// accepted and logged as warnings.
    pub fn build(self) -> Result<Catalog, Vec<ValidationError>> {
        validate_catalog(CatalogInput {
            calendar: &self.calendar,
            rooms: &self.rooms,
            groups: &self.groups,
            professors: &self.professors,
            courses: &self.courses,
            sessions: &self.sessions,
        })?;

        let catalog = Catalog {
            calendar: self.calendar,
            rooms: self.rooms,
            groups: self.groups.into_iter().map(|g| (g.id, g)).collect(),
            professors: self.professors.into_iter().map(|p| (p.id, p)).collect(),
            courses: self.courses.into_iter().map(|c| (c.id, c)).collect(),
            sessions: self.sessions.into_iter().map(|s| (s.id, s)).collect(),
        };

        for session in catalog.sessions.values() {
            if catalog.compatible_rooms(session).is_empty() {
                log::warn!(
                    "session {} has no compatible room; it will be penalized",
                    session.id
                );
            } else if catalog.valid_start_range(session).is_none() {
                log::warn!(
                    "session {} does not fit its group's time window; it will be penalized",
                    session.id
                );
            }
        }

        log::debug!(
            "catalog built: {} rooms, {} sessions, {}×{} grid",
            catalog.rooms.len(),
            catalog.sessions.len(),
            catalog.calendar.days,
            catalog.calendar.hours_per_day
        );
        Ok(catalog)
    }
}

impl Catalog {
    /// Starts building a catalog.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// The week grid.
    pub fn calendar(&self) -> &WeekCalendar {
        &self.calendar
    }

    /// Slot encoding for this catalog's grid and room count.
    pub fn layout(&self) -> SlotLayout {
        SlotLayout::new(
            self.calendar.days,
            self.rooms.len(),
            self.calendar.hours_per_day,
        )
    }

    /// Rooms in ordinal order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Room at an ordinal position.
    pub fn room(&self, index: usize) -> Option<&Room> {
        self.rooms.get(index)
    }

    /// Ordinal position of a room id.
    pub fn room_index_of(&self, id: RoomId) -> Option<usize> {
        self.rooms.iter().position(|r| r.id == id)
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All sessions, ascending by id.
    pub fn sessions(&self) -> &BTreeMap<SessionId, Session> {
        &self.sessions
    }

    /// Looks up a session.
    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Number of sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Session ids, ascending.
    pub fn session_ids(&self) -> impl Iterator<Item = SessionId> + '_ {
        self.sessions.keys().copied()
    }

    /// All groups, ascending by id.
    pub fn groups(&self) -> &BTreeMap<GroupId, StudentGroup> {
        &self.groups
    }

    /// Looks up a group.
    pub fn group(&self, id: GroupId) -> Option<&StudentGroup> {
        self.groups.get(&id)
    }

    /// All professors, ascending by id.
    pub fn professors(&self) -> &BTreeMap<ProfessorId, Professor> {
        &self.professors
    }

    /// Looks up a professor.
    pub fn professor(&self, id: ProfessorId) -> Option<&Professor> {
        self.professors.get(&id)
    }

    /// All courses, ascending by id.
    pub fn courses(&self) -> &BTreeMap<CourseId, Course> {
        &self.courses
    }

    /// Looks up a course.
    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.get(&id)
    }

    /// Ordinals of rooms matching the session's lab flag and seating its group.
    ///
    /// Empty if no room qualifies (or the group is unknown).
    pub fn compatible_rooms(&self, session: &Session) -> Vec<usize> {
        let Some(group) = self.group(session.group_id) else {
            return Vec::new();
        };
        self.rooms
            .iter()
            .enumerate()
            .filter(|(_, room)| room.accepts(group.size, session.is_lab))
            .map(|(index, _)| index)
            .collect()
    }

    /// Start-hour indices at which the session fits inside its group's
    /// window (clamped to the day).
    ///
    /// Returns `None` if the window is shorter than the session.
    pub fn valid_start_range(&self, session: &Session) -> Option<RangeInclusive<usize>> {
        let group = self.group(session.group_id)?;
        let (start, end) = self.calendar.window_indices(&group.available);
        let last = end.checked_sub(session.duration)?;
        (last >= start).then_some(start..=last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_build_sample_catalog() {
        let catalog = fixtures::faculty_catalog();
        assert_eq!(catalog.room_count(), 7);
        assert_eq!(catalog.session_count(), 20);
        assert_eq!(catalog.groups().len(), 4);
        assert_eq!(catalog.layout().position_count(), 5 * 7 * 10);
    }

    #[test]
    fn test_sessions_iterate_by_id() {
        let catalog = fixtures::faculty_catalog();
        let ids: Vec<_> = catalog.session_ids().collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        // Sparse ids are kept as-is (20 was inserted between 17 and 18)
        assert_eq!(ids.last(), Some(&20));
    }

    #[test]
    fn test_room_ordinals_follow_insertion() {
        let catalog = fixtures::faculty_catalog();
        assert_eq!(catalog.room(0).map(|r| r.name.as_str()), Some("R48"));
        assert_eq!(catalog.room(6).map(|r| r.name.as_str()), Some("R13"));
        assert!(catalog.room(7).is_none());
        assert_eq!(catalog.room_index_of(4), Some(4));
        assert_eq!(catalog.room_index_of(99), None);
    }

    #[test]
    fn test_compatible_rooms() {
        let catalog = fixtures::faculty_catalog();
        // Session 1: DBMS lab for TY/1 (19 students) → lab rooms 4, 5, 6
        let lab = catalog.session(1).unwrap();
        assert_eq!(catalog.compatible_rooms(lab), vec![4, 5, 6]);
        // Session 2: CC theory → theory rooms 0..=3 (R48 seats 24 ≥ 19)
        let theory = catalog.session(2).unwrap();
        assert_eq!(catalog.compatible_rooms(theory), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_compatible_rooms_respects_capacity() {
        let catalog = fixtures::two_room_catalog(40);
        let session = catalog.session(1).unwrap();
        // Both rooms seat 30
        assert!(catalog.compatible_rooms(session).is_empty());
    }

    #[test]
    fn test_valid_start_range() {
        let catalog = fixtures::faculty_catalog();
        let two_hour = catalog.session(1).unwrap();
        assert_eq!(catalog.valid_start_range(two_hour), Some(0..=8));
        let one_hour = catalog.session(2).unwrap();
        assert_eq!(catalog.valid_start_range(one_hour), Some(0..=9));
    }

    #[test]
    fn test_valid_start_range_narrow_window() {
        let catalog = Catalog::builder()
            .with_room(Room::theory(0, "R1", 30))
            .with_group(StudentGroup::new(1, "G", 10).with_window(10, 12))
            .with_professor(Professor::new(1, "P"))
            .with_course(Course::new(1, "C"))
            .with_session(Session::new(1, 1, 1, 1).with_duration(2))
            .with_session(Session::new(2, 1, 1, 1).with_duration(3))
            .build()
            .unwrap();

        let fits = catalog.session(1).unwrap();
        assert_eq!(catalog.valid_start_range(fits), Some(2..=2));
        let too_long = catalog.session(2).unwrap();
        assert_eq!(catalog.valid_start_range(too_long), None);
    }

    #[test]
    fn test_build_rejects_empty() {
        let errors = Catalog::builder().build().unwrap_err();
        assert!(errors
            .iter()
            .all(|e| e.kind == ValidationErrorKind::EmptyCatalog));
        assert_eq!(errors.len(), 2);
    }
}
