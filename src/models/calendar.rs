//! Week calendar and hour window models.
//!
//! Defines the weekly teaching grid (days × hourly slots) and the
//! clock-hour availability windows attached to student groups.
//!
//! # Time Model
//! Entities speak in clock hours (e.g. 9 = 09:00). The search speaks in
//! hour indices relative to `start_clock_hour` (index 0 = first slot of
//! the day). [`WeekCalendar`] converts between the two.

use serde::{Deserialize, Serialize};

const DAY_NAMES: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// A clock-hour interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourWindow {
    /// Interval start (clock hour, inclusive).
    pub start_hour: u32,
    /// Interval end (clock hour, exclusive).
    pub end_hour: u32,
}

impl HourWindow {
    /// Creates a new hour window.
    pub fn new(start_hour: u32, end_hour: u32) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Number of hours in this window (0 if inverted).
    #[inline]
    pub fn len(&self) -> u32 {
        self.end_hour.saturating_sub(self.start_hour)
    }

    /// Whether the window contains no hours.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether a clock hour falls within this window.
    #[inline]
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour < self.end_hour
    }
}

impl Default for HourWindow {
    /// 08:00 to 18:00.
    fn default() -> Self {
        Self::new(8, 18)
    }
}

/// The weekly teaching grid.
///
/// `days × hours_per_day` hourly slots per room, the first slot of every
/// day starting at `start_clock_hour`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekCalendar {
    /// Teaching days per week (D).
    pub days: usize,
    /// Hourly slots per day (H).
    pub hours_per_day: usize,
    /// Clock hour of slot index 0.
    pub start_clock_hour: u32,
}

impl Default for WeekCalendar {
    /// Monday to Friday, 08:00 to 18:00.
    fn default() -> Self {
        Self {
            days: 5,
            hours_per_day: 10,
            start_clock_hour: 8,
        }
    }
}

impl WeekCalendar {
    /// Creates a calendar.
    pub fn new(days: usize, hours_per_day: usize, start_clock_hour: u32) -> Self {
        Self {
            days,
            hours_per_day,
            start_clock_hour,
        }
    }

    /// Total hourly slots in the week (per room).
    pub fn week_hours(&self) -> usize {
        self.days * self.hours_per_day
    }

    /// Clock hour of an hour index.
    #[inline]
    pub fn clock_hour(&self, index: usize) -> u32 {
        self.start_clock_hour + index as u32
    }

    /// Hour index of a clock hour, if it lies on the grid.
    pub fn hour_index(&self, clock_hour: u32) -> Option<usize> {
        let index = clock_hour.checked_sub(self.start_clock_hour)? as usize;
        (index < self.hours_per_day).then_some(index)
    }

    /// Converts a clock-hour window to an index window clamped to `[0, H]`.
    ///
    /// Returns `(start, end)` with `start <= end`; an empty window yields
    /// `start == end`.
    pub fn window_indices(&self, window: &HourWindow) -> (usize, usize) {
        let clamp = |hour: u32| -> usize {
            (hour.saturating_sub(self.start_clock_hour) as usize).min(self.hours_per_day)
        };
        let start = clamp(window.start_hour);
        let end = clamp(window.end_hour).max(start);
        (start, end)
    }

    /// Short day name (`Mon`..`Sun`), cycling past a seven-day week.
    pub fn day_name(&self, day: usize) -> &'static str {
        DAY_NAMES[day % DAY_NAMES.len()]
    }

    /// 12-hour clock label for an hour index (`8:00 AM`, `12:00 PM`).
    pub fn time_label(&self, index: usize) -> String {
        format_clock_hour(self.clock_hour(index))
    }
}

/// Formats a clock hour on a 12-hour clock.
pub fn format_clock_hour(hour: u32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        1..=11 => format!("{hour}:00 AM"),
        12 => "12:00 PM".to_string(),
        _ => format!("{}:00 PM", hour - 12),
    }
}
