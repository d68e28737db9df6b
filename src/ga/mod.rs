//! GA-based timetable optimization.
//!
//! A self-contained generational genetic algorithm ([`GaRunner`]) driven
//! through the [`GaProblem`] trait, and its timetabling instance
//! ([`TimetableProblem`]) over slot-encoded [`Timetable`]s.
//!
//! # Encoding
//!
//! Each session maps to one integer position jointly encoding day, room
//! ordinal, and start hour ([`SlotLayout`]). Random initialization and
//! mutation draw positions only from a session's valid-position set
//! ([`PlacementDomain`]); sessions with no valid position sit at the
//! infeasible default 0 and are penalized by the evaluator.
//!
//! # Submodules
//!
//! - [`operators`]: Runtime-selectable crossover strategy and mutation size
//!
//! # Reference
//! - Holland (1975), "Adaptation in Natural and Artificial Systems"
//! - Colorni, Dorigo & Maniezzo (1998), "Metaheuristics for high school
//!   timetabling"

mod chromosome;
mod config;
mod encoding;
pub mod operators;
mod problem;
mod runner;
mod types;

pub use chromosome::{Timetable, TimetableError};
pub use config::GaConfig;
pub use encoding::{sample_position, PlacementDomain, Slot, SlotLayout};
pub use operators::{CrossoverType, GeneticOperators};
pub use problem::TimetableProblem;
pub use runner::{GaPhase, GaResult, GaRunner, TerminationReason};
pub use types::{GaProblem, Individual};
