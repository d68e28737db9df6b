//! Chronological session listing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ga::Timetable;
use crate::models::SessionId;

/// One placed session in human-readable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Session id.
    pub session_id: SessionId,
    /// Encoded position.
    pub position: usize,
    /// Day index.
    pub day: usize,
    /// Short day name (`Mon`..).
    pub day_name: String,
    /// Start hour index.
    pub start_hour: usize,
    /// Start clock hour.
    pub clock_hour: u32,
    /// Start time label (`9:00 AM`).
    pub time_label: String,
    /// Room ordinal.
    pub room_index: usize,
    /// Room name.
    pub room_name: String,
    /// Course name.
    pub course: String,
    /// Group name.
    pub group: String,
    /// Professor name.
    pub professor: String,
    /// Length in hours.
    pub duration: usize,
    /// Lab session.
    pub is_lab: bool,
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] R:{} | {} ({}) for {} (Prof: {}, Duration: {})",
            self.day_name,
            self.time_label,
            self.room_name,
            self.course,
            if self.is_lab { "Lab" } else { "Theory" },
            self.group,
            self.professor,
            self.duration
        )
    }
}

/// Header metrics plus every placed session, ordered by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableReport {
    /// Fitness (0 if unevaluated).
    pub fitness: f64,
    /// Hard ratio (0 if unevaluated).
    pub hard_ratio: f64,
    /// Hard score achieved.
    pub total_hard_score: f64,
    /// Hard score attainable.
    pub max_hard_score: f64,
    /// Placed sessions.
    pub entries: Vec<ReportEntry>,
}

impl TimetableReport {
    /// Builds the listing of a timetable.
    ///
    /// Sessions whose room ordinal does not resolve are skipped; names of
    /// unknown entities render as `?`.
    pub fn from_timetable(timetable: &Timetable) -> Self {
        let catalog = timetable.catalog();
        let calendar = catalog.calendar();
        let layout = catalog.layout();
        let score = timetable.score().cloned().unwrap_or_default();

        let mut entries: Vec<ReportEntry> = timetable
            .placements()
            .iter()
            .filter_map(|(&id, &position)| {
                let session = catalog.session(id)?;
                let slot = layout.decode(position);
                let room = catalog.room(slot.room_index)?;
                Some(ReportEntry {
                    session_id: id,
                    position,
                    day: slot.day,
                    day_name: calendar.day_name(slot.day).to_string(),
                    start_hour: slot.start_hour,
                    clock_hour: calendar.clock_hour(slot.start_hour),
                    time_label: calendar.time_label(slot.start_hour),
                    room_index: slot.room_index,
                    room_name: room.name.clone(),
                    course: name_or_unknown(catalog.course(session.course_id).map(|c| &c.name)),
                    group: name_or_unknown(catalog.group(session.group_id).map(|g| &g.name)),
                    professor: name_or_unknown(
                        catalog.professor(session.professor_id).map(|p| &p.name),
                    ),
                    duration: session.duration,
                    is_lab: session.is_lab,
                })
            })
            .collect();
        entries.sort_by_key(|e| (e.position, e.session_id));

        Self {
            fitness: score.fitness,
            hard_ratio: score.hard_ratio,
            total_hard_score: score.total_hard_score,
            max_hard_score: score.max_hard_score,
            entries,
        }
    }
}

fn name_or_unknown(name: Option<&String>) -> String {
    name.cloned().unwrap_or_else(|| "?".to_string())
}

impl fmt::Display for TimetableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Fitness: {:.4} | Hard: {:.1}/{:.1} ({:.1}%)",
            self.fitness,
            self.total_hard_score,
            self.max_hard_score,
            self.hard_ratio * 100.0
        )?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::FitnessEvaluator;
    use crate::fixtures;
    use std::sync::Arc;

    fn solved() -> Timetable {
        let catalog = Arc::new(fixtures::faculty_catalog());
        let mut tt = Timetable::from_slots(&catalog, &fixtures::feasible_faculty_slots()).unwrap();
        tt.evaluate(&FitnessEvaluator::default());
        tt
    }

    #[test]
    fn test_entries_sorted_by_position() {
        let report = TimetableReport::from_timetable(&solved());
        assert_eq!(report.entries.len(), 20);
        for w in report.entries.windows(2) {
            assert!(w[0].position <= w[1].position);
        }
        // Monday 10:00 in R48 (position 2) comes first
        assert_eq!(report.entries[0].position, 2);
        assert_eq!(report.entries[0].session_id, 2);
        // the Monday lab in R53 sorts after every R48 hour of Monday
        let lab = report.entries.iter().position(|e| e.session_id == 1).unwrap();
        assert_eq!(report.entries[lab].position, 40);
        assert_eq!(lab, 4);
        assert!((report.hard_ratio - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_entry_format() {
        let report = TimetableReport::from_timetable(&solved());
        let entry = report.entries.iter().find(|e| e.session_id == 1).unwrap();
        assert_eq!(
            entry.to_string(),
            "[Mon, 8:00 AM] R:R53 | DBMS (Lab) for TY/1 (Prof: Cholke, Duration: 2)"
        );

        let entry = report.entries.iter().find(|e| e.session_id == 12).unwrap();
        assert_eq!(entry.clock_hour, 10);
        assert_eq!(
            entry.to_string(),
            "[Wed, 10:00 AM] R:R51 | SDAM (Theory) for SY/3 (Prof: Sawant, Duration: 1)"
        );
    }

    #[test]
    fn test_display_header() {
        let text = TimetableReport::from_timetable(&solved()).to_string();
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("Fitness: "));
        assert!(first.contains("Hard: 100.0/100.0 (100.0%)"));
        assert_eq!(text.lines().count(), 21);
    }

    #[test]
    fn test_unevaluated_reports_zero_metrics() {
        let catalog = Arc::new(fixtures::two_room_catalog(10));
        let tt = Timetable::from_slots(&catalog, &[(1, crate::ga::Slot::new(0, 1, 1))]).unwrap();
        let report = TimetableReport::from_timetable(&tt);
        assert!((report.fitness - 0.0).abs() < 1e-10);
        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].time_label, "9:00 AM");
    }

    #[test]
    fn test_serialize() {
        let report = TimetableReport::from_timetable(&solved());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"room_name\":\"R53\""));
    }
}
