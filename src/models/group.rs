//! Student group model.

use serde::{Deserialize, Serialize};

use super::{GroupId, HourWindow};

/// A cohort of students attending sessions together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentGroup {
    /// Unique group identifier.
    pub id: GroupId,
    /// Human-readable name (e.g. "TY/1").
    pub name: String,
    /// Number of students.
    pub size: u32,
    /// Clock hours during which the group can attend sessions.
    pub available: HourWindow,
}

impl StudentGroup {
    /// Creates a group available 08:00 to 18:00.
    pub fn new(id: GroupId, name: impl Into<String>, size: u32) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            available: HourWindow::default(),
        }
    }

    /// Sets the availability window (clock hours, end exclusive).
    pub fn with_window(mut self, start_hour: u32, end_hour: u32) -> Self {
        self.available = HourWindow::new(start_hour, end_hour);
        self
    }

    /// Year label: the name prefix before `/`, or the whole name.
    pub fn year(&self) -> &str {
        self.name.split('/').next().unwrap_or(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_defaults() {
        let g = StudentGroup::new(1, "TY/1", 19);
        assert_eq!(g.size, 19);
        assert_eq!(g.available, HourWindow::new(8, 18));
    }

    #[test]
    fn test_group_window() {
        let g = StudentGroup::new(2, "SY/3", 30).with_window(10, 16);
        assert_eq!(g.available.start_hour, 10);
        assert_eq!(g.available.end_hour, 16);
    }

    #[test]
    fn test_group_year() {
        assert_eq!(StudentGroup::new(1, "TY/1", 19).year(), "TY");
        assert_eq!(StudentGroup::new(2, "Evening", 19).year(), "Evening");
    }
}
