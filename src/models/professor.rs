//! Professor model.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ProfessorId;

/// A professor teaching one or more sessions.
///
/// Availability is expressed negatively: a professor is available at
/// every (day, clock hour) not listed in `unavailable`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Professor {
    /// Unique professor identifier.
    pub id: ProfessorId,
    /// Human-readable name.
    pub name: String,
    /// Blocked (day index, clock hour) slots.
    pub unavailable: BTreeSet<(usize, u32)>,
}

impl Professor {
    /// Creates a professor with no blocked slots.
    pub fn new(id: ProfessorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unavailable: BTreeSet::new(),
        }
    }

    /// Blocks a (day, clock hour) slot.
    pub fn with_unavailable(mut self, day: usize, hour: u32) -> Self {
        self.unavailable.insert((day, hour));
        self
    }

    /// Blocks every hour in `[start_hour, end_hour)` on `day`.
    pub fn with_unavailable_range(mut self, day: usize, start_hour: u32, end_hour: u32) -> Self {
        for hour in start_hour..end_hour {
            self.unavailable.insert((day, hour));
        }
        self
    }

    /// Whether the professor can teach at (day, clock hour).
    #[inline]
    pub fn is_available(&self, day: usize, hour: u32) -> bool {
        !self.unavailable.contains(&(day, hour))
    }
}
