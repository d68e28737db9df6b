//! Room model.
//!
//! Rooms are where sessions take place. A room is either a lab or a
//! theory room and seats a fixed number of students.

use serde::{Deserialize, Serialize};

use super::RoomId;

/// A teaching room.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    /// Unique room identifier.
    pub id: RoomId,
    /// Human-readable name (e.g. "R51").
    pub name: String,
    /// Number of seats.
    pub capacity: u32,
    /// Whether this is a lab room.
    pub is_lab: bool,
}

impl Room {
    /// Creates a theory room with no seats.
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            capacity: 0,
            is_lab: false,
        }
    }

    /// Creates a theory room.
    pub fn theory(id: RoomId, name: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, name).with_capacity(capacity)
    }

    /// Creates a lab room.
    pub fn lab(id: RoomId, name: impl Into<String>, capacity: u32) -> Self {
        Self::new(id, name).with_capacity(capacity).with_lab(true)
    }

    /// Sets the seat count.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the lab flag.
    pub fn with_lab(mut self, is_lab: bool) -> Self {
        self.is_lab = is_lab;
        self
    }

    /// Whether a group of `group_size` students needing a lab (or not)
    /// can be seated here.
    #[inline]
    pub fn accepts(&self, group_size: u32, is_lab: bool) -> bool {
        self.is_lab == is_lab && self.capacity >= group_size
    }
}
