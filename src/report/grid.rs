//! Hour-by-day weekly grid.

use serde::{Deserialize, Serialize};

use crate::ga::Timetable;
use crate::models::SessionId;

/// A session occupying one grid hour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Session id.
    pub session_id: SessionId,
    /// Course name.
    pub course: String,
    /// Group name.
    pub group: String,
    /// Professor name.
    pub professor: String,
    /// Room name.
    pub room: String,
    /// Lab session.
    pub is_lab: bool,
    /// First hour of the session (false on continuation hours).
    pub is_start: bool,
}

/// Week grid indexed `[hour][day]`.
///
/// Multi-hour sessions occupy every hour they span; hours that would run
/// past the end of the day are dropped. Each cell lists its sessions
/// ordered by group name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekGrid {
    /// Day names, one per column.
    pub day_names: Vec<String>,
    /// Time labels, one per row.
    pub time_labels: Vec<String>,
    cells: Vec<Vec<Vec<GridCell>>>,
}

impl WeekGrid {
    /// Lays a timetable out on the week grid.
    pub fn from_timetable(timetable: &Timetable) -> Self {
        let catalog = timetable.catalog();
        let calendar = catalog.calendar();
        let layout = catalog.layout();
        let (days, hours) = (calendar.days, calendar.hours_per_day);

        let mut cells = vec![vec![Vec::new(); days]; hours];

        for (&id, &position) in timetable.placements() {
            let Some(session) = catalog.session(id) else {
                continue;
            };
            let slot = layout.decode(position);
            let Some(room) = catalog.room(slot.room_index) else {
                continue;
            };
            if slot.day >= days {
                continue;
            }
            let name = |n: Option<&String>| n.cloned().unwrap_or_else(|| "?".to_string());
            let end = (slot.start_hour + session.duration).min(hours);
            for hour in slot.start_hour..end {
                let cell: &mut Vec<GridCell> = &mut cells[hour][slot.day];
                cell.push(GridCell {
                    session_id: id,
                    course: name(catalog.course(session.course_id).map(|c| &c.name)),
                    group: name(catalog.group(session.group_id).map(|g| &g.name)),
                    professor: name(catalog.professor(session.professor_id).map(|p| &p.name)),
                    room: room.name.clone(),
                    is_lab: session.is_lab,
                    is_start: hour == slot.start_hour,
                });
            }
        }

        for row in &mut cells {
            for cell in row.iter_mut() {
                cell.sort_by(|a, b| a.group.cmp(&b.group).then(a.session_id.cmp(&b.session_id)));
            }
        }

        Self {
            day_names: (0..days).map(|d| calendar.day_name(d).to_string()).collect(),
            time_labels: (0..hours).map(|h| calendar.time_label(h)).collect(),
            cells,
        }
    }

    /// Number of day columns.
    pub fn days(&self) -> usize {
        self.day_names.len()
    }

    /// Number of hour rows.
    pub fn hours(&self) -> usize {
        self.time_labels.len()
    }

    /// Sessions at `(hour, day)`; empty outside the grid.
    pub fn cell(&self, hour: usize, day: usize) -> &[GridCell] {
        self.cells
            .get(hour)
            .and_then(|row| row.get(day))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Occupied `(hour, day)` pairs.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(hour, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, cell)| !cell.is_empty())
                .map(move |(day, _)| (hour, day))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::ga::Slot;
    use std::sync::Arc;

    fn faculty_grid() -> WeekGrid {
        let catalog = Arc::new(fixtures::faculty_catalog());
        let tt = Timetable::from_slots(&catalog, &fixtures::feasible_faculty_slots()).unwrap();
        WeekGrid::from_timetable(&tt)
    }

    #[test]
    fn test_dimensions_and_labels() {
        let grid = faculty_grid();
        assert_eq!(grid.days(), 5);
        assert_eq!(grid.hours(), 10);
        assert_eq!(grid.day_names[0], "Mon");
        assert_eq!(grid.time_labels[0], "8:00 AM");
        assert_eq!(grid.time_labels[5], "1:00 PM");
    }

    #[test]
    fn test_lab_spans_two_rows() {
        let grid = faculty_grid();
        // session 1: Monday, hours 0-1, R53
        let first = grid.cell(0, 0);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].session_id, 1);
        assert!(first[0].is_start);

        let second = grid.cell(1, 0);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].session_id, 1);
        assert!(!second[0].is_start);
        assert_eq!(second[0].room, "R53");
    }

    #[test]
    fn test_occupied_hours_match_durations() {
        let grid = faculty_grid();
        // 20 sessions, 5 of them two hours long
        let total: usize = grid
            .occupied()
            .map(|(hour, day)| grid.cell(hour, day).len())
            .sum();
        assert_eq!(total, 25);
        assert!(grid.cell(9, 4).is_empty());
        assert!(grid.cell(99, 0).is_empty());
    }

    #[test]
    fn test_truncates_past_end_of_day() {
        let catalog = Arc::new(fixtures::faculty_catalog());
        let mut slots = fixtures::feasible_faculty_slots();
        // move session 1 (two hours) to the last hour of Friday
        slots[0].1 = Slot::new(4, 4, 9);
        let tt = Timetable::from_slots(&catalog, &slots).unwrap();
        let grid = WeekGrid::from_timetable(&tt);
        assert_eq!(grid.cell(9, 4).len(), 1);
        assert!(grid.cell(0, 0).is_empty());
    }

    #[test]
    fn test_cell_sorted_by_group() {
        let catalog = Arc::new(fixtures::single_professor_catalog(3));
        let tt = Timetable::from_slots(
            &catalog,
            &[
                (3, Slot::new(0, 0, 0)),
                (1, Slot::new(0, 1, 0)),
                (2, Slot::new(0, 0, 0)),
            ],
        )
        .unwrap();
        let grid = WeekGrid::from_timetable(&tt);
        let groups: Vec<&str> = grid.cell(0, 0).iter().map(|c| c.group.as_str()).collect();
        assert_eq!(groups, vec!["G1", "G2", "G3"]);
    }
}
