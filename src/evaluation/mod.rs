//! Constraint evaluation.
//!
//! Scores a full placement map against a catalog. The score is a single
//! scalar:
//!
//! ```text
//! fitness = hard_ratio + Σ weight_i * max(0, 1 - penalty_i / max_raw_penalty)
//! ```
//!
//! where `hard_ratio` is the fraction of sessions passing every hard
//! constraint. Infeasibility is a score, not an error: the search keeps
//! running and improves it.
//!
//! # Hard constraints
//!
//! | Kind | Rule |
//! |------|------|
//! | Room | Room exists and seats the group |
//! | Type | Lab session in a lab room, theory in a theory room |
//! | Boundary | Session ends by the end of the day |
//! | Window | Session lies in the group's availability window |
//! | Availability | Professor available at the start hour |
//! | Overlap | No room, professor, or group clash |
//!
//! # Soft constraints
//!
//! | Kind | Penalty |
//! |------|---------|
//! | Professor load | Hours per day beyond the threshold |
//! | Group gap | Idle hours between a group's sessions beyond the tolerance |
//! | Professor consecutive | Hours beyond the longest allowed run |
//! | Lunch | Professor-hours in the lunch slot |
//! | Late long | Long sessions starting late |
//! | Same subject | Back-to-back one-hour theory sessions of a group's course |
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod config;
mod evaluator;
mod score;
mod violation;

pub use config::{EvaluatorConfig, SoftWeights};
pub use evaluator::FitnessEvaluator;
pub use score::{FitnessScore, SoftPenalties};
pub use violation::{HardViolation, SessionViolation};
