//! Slot-position encoding.
//!
//! A session's placement is a single integer jointly encoding day, room
//! ordinal, and start hour. For `D` days, `R` rooms, and `H` hours per day:
//!
//! ```text
//! day_slots  = R * H
//! position   = day * day_slots + room_index * H + start_hour
//! ```
//!
//! Decoding is the inverse (integer division and remainder). Positions
//! beyond `D * R * H` still decode, to a day `>= D`, which the evaluator
//! rejects as a day-boundary violation.
//!
//! # Reference
//! Burke & Petrovic (2002), "Recent research directions in automated
//! timetabling"

use std::ops::RangeInclusive;

use rand::Rng;
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::models::Session;

/// A decoded (day, room ordinal, start hour index) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Day index (0 = first teaching day).
    pub day: usize,
    /// Ordinal of the room in catalog order.
    pub room_index: usize,
    /// Start hour index within the day.
    pub start_hour: usize,
}

impl Slot {
    /// Creates a slot.
    pub fn new(day: usize, room_index: usize, start_hour: usize) -> Self {
        Self {
            day,
            room_index,
            start_hour,
        }
    }
}

/// Grid dimensions that fix the position encoding for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLayout {
    /// Days per week (D).
    pub days: usize,
    /// Room count (R).
    pub rooms: usize,
    /// Hours per day (H).
    pub hours_per_day: usize,
}

impl SlotLayout {
    /// Creates a layout.
    pub fn new(days: usize, rooms: usize, hours_per_day: usize) -> Self {
        Self {
            days,
            rooms,
            hours_per_day,
        }
    }

    /// Positions per day (`R * H`).
    #[inline]
    pub fn day_slots(&self) -> usize {
        self.rooms * self.hours_per_day
    }

    /// Number of in-bounds positions (`D * R * H`).
    #[inline]
    pub fn position_count(&self) -> usize {
        self.days * self.day_slots()
    }

    /// Encodes a slot.
    #[inline]
    pub fn encode(&self, slot: Slot) -> usize {
        slot.day * self.day_slots() + slot.room_index * self.hours_per_day + slot.start_hour
    }

    /// Decodes a position. Pure; never fails.
    ///
    /// A degenerate layout (no rooms or no hours) decodes everything to
    /// day 0, room 0, hour 0.
    pub fn decode(&self, position: usize) -> Slot {
        let day = position.checked_div(self.day_slots()).unwrap_or(0);
        let time_room = position.checked_rem(self.day_slots()).unwrap_or(0);
        Slot {
            day,
            room_index: time_room.checked_div(self.hours_per_day).unwrap_or(0),
            start_hour: time_room.checked_rem(self.hours_per_day).unwrap_or(0),
        }
    }

    /// Whether the slot lies inside the grid.
    #[inline]
    pub fn contains(&self, slot: Slot) -> bool {
        slot.day < self.days && slot.room_index < self.rooms && slot.start_hour < self.hours_per_day
    }
}

/// The valid-position set of one session: every day × compatible room ×
/// valid start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementDomain {
    /// Compatible room ordinals (non-empty).
    pub rooms: Vec<usize>,
    /// Valid start hour indices (non-empty).
    pub starts: RangeInclusive<usize>,
}

impl PlacementDomain {
    /// Builds the domain of a session, or `None` if it has no valid position.
    pub fn for_session(catalog: &Catalog, session: &Session) -> Option<Self> {
        if catalog.calendar().days == 0 {
            return None;
        }
        let rooms = catalog.compatible_rooms(session);
        if rooms.is_empty() {
            return None;
        }
        let starts = catalog.valid_start_range(session)?;
        Some(Self { rooms, starts })
    }

    /// Number of valid positions.
    pub fn position_count(&self, layout: &SlotLayout) -> usize {
        layout.days * self.rooms.len() * self.starts.clone().count()
    }

    /// Enumerates every valid position, ascending by day, then room, then hour.
    pub fn positions(&self, layout: &SlotLayout) -> Vec<usize> {
        let mut positions = Vec::with_capacity(self.position_count(layout));
        for day in 0..layout.days {
            for &room_index in &self.rooms {
                for start_hour in self.starts.clone() {
                    positions.push(layout.encode(Slot::new(day, room_index, start_hour)));
                }
            }
        }
        positions
    }

    /// Draws a position uniformly from the domain.
    ///
    /// Day, room, and start hour are drawn independently; since the domain
    /// is a full product, this is uniform over its positions.
    pub fn sample<R: Rng>(&self, layout: &SlotLayout, rng: &mut R) -> usize {
        let day = rng.random_range(0..layout.days.max(1));
        let room_index = self.rooms.choose(rng).copied().unwrap_or(0);
        let start_hour = rng.random_range(self.starts.clone());
        layout.encode(Slot::new(day, room_index, start_hour))
    }
}

/// Draws a position for a session, falling back to the infeasible default
/// (position 0) when it has no valid position.
pub fn sample_position<R: Rng>(catalog: &Catalog, session: &Session, rng: &mut R) -> usize {
    match PlacementDomain::for_session(catalog, session) {
        Some(domain) => domain.sample(&catalog.layout(), rng),
        None => 0,
    }
}
