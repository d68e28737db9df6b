//! Read-only views of a timetable.
//!
//! Turns a [`Timetable`](crate::ga::Timetable) and its catalog into
//! display-ready data. Nothing here mutates the timetable or re-runs the
//! evaluator; metrics come from the score the timetable already carries.
//!
//! - [`TimetableReport`]: Header metrics plus a chronological listing
//! - [`WeekGrid`]: Hour-by-day grid with multi-hour sessions spread out
//! - [`requirement_table`]: Required versus feasibly scheduled sessions
//! - [`TimetableKpi`]: Violation counts and room utilization

mod grid;
mod kpi;
mod listing;
mod tally;

pub use grid::{GridCell, WeekGrid};
pub use kpi::TimetableKpi;
pub use listing::{ReportEntry, TimetableReport};
pub use tally::{requirement_table, RequirementRow, RequirementStatus};
