//! Timetabling domain models.
//!
//! Provides the entity types a timetable is built from. All entities are
//! plain data with fixed fields; they are collected into an immutable
//! [`Catalog`](crate::catalog::Catalog) before a run starts.
//!
//! # Domain Mappings
//!
//! | u-timetable | University | School | Training Center |
//! |-------------|-----------|--------|-----------------|
//! | Session | Lecture/Lab block | Lesson | Workshop slot |
//! | StudentGroup | Division | Class | Cohort |
//! | Professor | Faculty member | Teacher | Trainer |
//! | Room | Lecture hall/Lab | Classroom | Training room |

mod calendar;
mod group;
mod professor;
mod room;
mod session;

pub use calendar::{format_clock_hour, HourWindow, WeekCalendar};
pub use group::StudentGroup;
pub use professor::Professor;
pub use room::Room;
pub use session::{Course, Session};

/// Room identifier.
pub type RoomId = u32;
/// Student group identifier.
pub type GroupId = u32;
/// Professor identifier.
pub type ProfessorId = u32;
/// Course identifier.
pub type CourseId = u32;
/// Session identifier.
pub type SessionId = u32;
