//! Timetable quality metrics (KPIs).
//!
//! Summarizes an evaluated timetable for acceptance checks and run
//! comparison.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Fitness | Evaluator scalar |
//! | Hard Ratio | Fraction of sessions passing every hard constraint |
//! | Feasible Sessions | Sessions with no hard violation |
//! | Violations | Count per hard-violation kind |
//! | Room Utilization | Feasibly occupied hours / week hours, per room |
//! | Avg Utilization | Mean room utilization |
//!
//! # Reference
//! McCollum et al. (2010), "Setting the Research Agenda in Automated
//! Timetabling: The Second International Timetabling Competition"

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::evaluation::{HardViolation, SoftPenalties};
use crate::ga::Timetable;
use crate::models::RoomId;

/// Timetable performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableKpi {
    /// Evaluator fitness.
    pub fitness: f64,
    /// Hard ratio (0.0..1.0).
    pub hard_ratio: f64,
    /// Sessions in the catalog.
    pub session_count: usize,
    /// Sessions with no hard violation.
    pub feasible_sessions: usize,
    /// Violation count per kind (kinds that occurred only).
    pub violations_by_kind: BTreeMap<HardViolation, usize>,
    /// Per-room utilization (0.0..1.0).
    pub utilization_by_room: BTreeMap<RoomId, f64>,
    /// Average room utilization (0.0..1.0).
    pub avg_utilization: f64,
    /// Raw soft penalties.
    pub penalties: SoftPenalties,
}

impl TimetableKpi {
    /// Computes KPIs from a timetable.
    ///
    /// An unevaluated timetable reports zero scores and no feasible
    /// sessions.
    pub fn calculate(timetable: &Timetable) -> Self {
        let catalog = timetable.catalog();
        let layout = catalog.layout();
        let week_hours = catalog.calendar().week_hours();
        let score = timetable.score();

        let mut violations_by_kind = BTreeMap::new();
        if let Some(score) = score {
            for violation in &score.violations {
                *violations_by_kind.entry(violation.kind).or_insert(0) += 1;
            }
        }

        // Occupied hours per room ordinal, feasible sessions only
        let mut occupied = vec![0usize; catalog.room_count()];
        let mut feasible_sessions = 0;
        for (&id, &position) in timetable.placements() {
            let feasible = score.is_some_and(|s| s.violation_for(id).is_none());
            if !feasible {
                continue;
            }
            feasible_sessions += 1;
            let Some(session) = catalog.session(id) else {
                continue;
            };
            let slot = layout.decode(position);
            if let Some(hours) = occupied.get_mut(slot.room_index) {
                *hours += session.duration;
            }
        }

        let utilization_by_room: BTreeMap<RoomId, f64> = catalog
            .rooms()
            .iter()
            .zip(&occupied)
            .map(|(room, &hours)| {
                let u = if week_hours == 0 {
                    0.0
                } else {
                    hours as f64 / week_hours as f64
                };
                (room.id, u)
            })
            .collect();

        let avg_utilization = if utilization_by_room.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_room.values().sum();
            sum / utilization_by_room.len() as f64
        };

        Self {
            fitness: score.map_or(0.0, |s| s.fitness),
            hard_ratio: score.map_or(0.0, |s| s.hard_ratio),
            session_count: catalog.session_count(),
            feasible_sessions,
            violations_by_kind,
            utilization_by_room,
            avg_utilization,
            penalties: score.map(|s| s.penalties).unwrap_or_default(),
        }
    }

    /// Total hard violations.
    pub fn violation_count(&self) -> usize {
        self.violations_by_kind.values().sum()
    }

    /// Whether the timetable meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_hard_ratio: f64, min_fitness: f64) -> bool {
        self.hard_ratio >= min_hard_ratio && self.fitness >= min_fitness
    }
}
