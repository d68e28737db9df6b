//! Weekly course timetabling for the U-Engine ecosystem.
//!
//! Places every teaching session of a faculty (lectures and labs) onto a
//! weekly grid of days, rooms, and hours, searching with a genetic
//! algorithm for a clash-free timetable that also respects soft
//! preferences.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Room`, `StudentGroup`, `Professor`,
//!   `Course`, `Session`, `WeekCalendar`
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, degenerate sizes)
//! - **`catalog`**: Immutable, validated set of entities a run reads from
//! - **`evaluation`**: Hard/soft constraint evaluator producing one scalar fitness
//! - **`ga`**: Slot encoding, timetable chromosome, and the generational GA runner
//! - **`report`**: Listing, week grid, requirement tally, and KPIs
//!
//! # Architecture
//!
//! ```text
//! CatalogBuilder ──build──▶ Arc<Catalog> ──▶ TimetableProblem ──▶ GaRunner
//!                                                  │                 │
//!                                         FitnessEvaluator      GaResult<Timetable>
//!                                                                    │
//!                                                                 report
//! ```
//!
//! The catalog is immutable for the duration of a run. Reloading data
//! means building a new catalog; timetables keep the catalog they were
//! created against.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"

pub mod catalog;
pub mod evaluation;
pub mod ga;
pub mod models;
pub mod report;
pub mod validation;

#[cfg(test)]
mod fixtures;
