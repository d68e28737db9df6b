//! Hard-constraint violations.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ga::Slot;
use crate::models::SessionId;

/// Classification of hard-constraint failures, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HardViolation {
    /// Room ordinal does not resolve to a catalog room.
    RoomMissing,
    /// Room seats fewer students than the group has.
    CapacityExceeded,
    /// Lab session in a theory room or vice versa.
    LabMismatch,
    /// Session lies past the last day or runs past the end of the day.
    DayBoundary,
    /// Session leaves the group's availability window.
    GroupWindow,
    /// Professor is unavailable at the start hour.
    ProfessorUnavailable,
    /// Room already booked at an occupied hour.
    RoomOverlap,
    /// Professor already teaching at an occupied hour.
    ProfessorOverlap,
    /// Group already attending at an occupied hour.
    GroupOverlap,
    /// Session has no placement at all.
    Unplaced,
}

impl HardViolation {
    /// All kinds, in evaluation order.
    pub const ALL: [HardViolation; 10] = [
        HardViolation::RoomMissing,
        HardViolation::CapacityExceeded,
        HardViolation::LabMismatch,
        HardViolation::DayBoundary,
        HardViolation::GroupWindow,
        HardViolation::ProfessorUnavailable,
        HardViolation::RoomOverlap,
        HardViolation::ProfessorOverlap,
        HardViolation::GroupOverlap,
        HardViolation::Unplaced,
    ];

    /// Whether this is a clash with another booked session.
    pub fn is_overlap(&self) -> bool {
        matches!(
            self,
            HardViolation::RoomOverlap
                | HardViolation::ProfessorOverlap
                | HardViolation::GroupOverlap
        )
    }
}

impl fmt::Display for HardViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            HardViolation::RoomMissing => "room does not exist",
            HardViolation::CapacityExceeded => "room too small",
            HardViolation::LabMismatch => "room type mismatch",
            HardViolation::DayBoundary => "outside the week grid",
            HardViolation::GroupWindow => "outside group availability",
            HardViolation::ProfessorUnavailable => "professor unavailable",
            HardViolation::RoomOverlap => "room double-booked",
            HardViolation::ProfessorOverlap => "professor double-booked",
            HardViolation::GroupOverlap => "group double-booked",
            HardViolation::Unplaced => "not placed",
        };
        f.write_str(text)
    }
}

/// The first hard failure of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionViolation {
    /// Failing session.
    pub session_id: SessionId,
    /// Failure kind.
    pub kind: HardViolation,
    /// Decoded placement at evaluation time.
    pub slot: Slot,
}

impl fmt::Display for SessionViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "session {} at day {} room #{} hour {}: {}",
            self.session_id, self.slot.day, self.slot.room_index, self.slot.start_hour, self.kind
        )
    }
}
