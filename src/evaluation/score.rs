//! Fitness score of an evaluated timetable.

use serde::{Deserialize, Serialize};

use super::{EvaluatorConfig, HardViolation, SessionViolation};
use crate::models::SessionId;

/// Raw soft-constraint penalties (before scaling).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftPenalties {
    /// Hours taught beyond the daily threshold, summed over professors and days.
    pub prof_load: usize,
    /// Excess idle hours between a group's sessions.
    pub group_gap: usize,
    /// Hours beyond the maximum consecutive run for a professor.
    pub prof_consecutive: usize,
    /// Professor-hours taught in the lunch slot.
    pub lunch: usize,
    /// Long sessions starting late.
    pub late_long: usize,
    /// Back-to-back single-hour theory sessions of the same group and course.
    pub same_subject_consecutive: usize,
}

impl SoftPenalties {
    /// Sum of scaled soft scores.
    pub fn scaled_total(&self, config: &EvaluatorConfig) -> f64 {
        let w = &config.weights;
        config.scale(w.prof_load, self.prof_load)
            + config.scale(w.group_gap, self.group_gap)
            + config.scale(w.prof_consecutive, self.prof_consecutive)
            + config.scale(w.lunch, self.lunch)
            + config.scale(w.late_long, self.late_long)
            + config.scale(w.same_subject_consecutive, self.same_subject_consecutive)
    }

    /// Sum of raw penalties.
    pub fn total(&self) -> usize {
        self.prof_load
            + self.group_gap
            + self.prof_consecutive
            + self.lunch
            + self.late_long
            + self.same_subject_consecutive
    }
}

/// Result of one evaluation pass.
///
/// Every field is derived from the same placements; a score is never
/// updated piecemeal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitnessScore {
    /// `hard_ratio + total_soft_score`.
    pub fitness: f64,
    /// `total_hard_score / max_hard_score` in `[0, 1]`.
    pub hard_ratio: f64,
    /// Sum of per-session hard scores.
    pub total_hard_score: f64,
    /// `session_count * session_score`.
    pub max_hard_score: f64,
    /// Sum of scaled soft scores.
    pub total_soft_score: f64,
    /// Raw soft penalties.
    pub penalties: SoftPenalties,
    /// First hard failure of every failing session, ascending by session id.
    pub violations: Vec<SessionViolation>,
}

impl FitnessScore {
    /// Whether every session passed every hard check.
    pub fn is_feasible(&self) -> bool {
        self.max_hard_score > 0.0 && self.violations.is_empty()
    }

    /// Violation recorded for a session, if any.
    pub fn violation_for(&self, session_id: SessionId) -> Option<&SessionViolation> {
        self.violations
            .binary_search_by_key(&session_id, |v| v.session_id)
            .ok()
            .map(|i| &self.violations[i])
    }

    /// Number of violations of one kind.
    pub fn count(&self, kind: HardViolation) -> usize {
        self.violations.iter().filter(|v| v.kind == kind).count()
    }
}
