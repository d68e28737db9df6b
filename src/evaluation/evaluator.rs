//! Hard/soft constraint evaluator.
//!
//! # Algorithm
//!
//! Sessions are visited in ascending id order. Each session's position is
//! decoded and checked against the hard constraints in a fixed order:
//!
//! 1. Room exists and seats the group
//! 2. Room type matches the session's lab flag
//! 3. Session lies on the grid and ends by the end of the day
//! 4. Session lies inside the group's availability window
//! 5. Professor is available at the start hour
//! 6. No room, professor, or group clash at any occupied hour
//!
//! The first failing check is recorded and the session contributes 0 to
//! the hard score. A session passing every check is booked into the
//! occupancy grid for its whole duration and contributes `session_score`.
//!
//! Clash checks only see sessions already booked in this pass, so of two
//! clashing sessions the one with the lower id keeps the slot and the
//! other is penalized. A failing session books nothing, so it never
//! blocks a later session.
//!
//! Soft penalties are computed afterwards from booked sessions only.

use std::collections::{BTreeMap, HashMap};

use super::{EvaluatorConfig, FitnessScore, HardViolation, SessionViolation, SoftPenalties};
use crate::catalog::Catalog;
use crate::ga::Slot;
use crate::models::{CourseId, GroupId, ProfessorId, Session, SessionId};

/// One booked session-hour in the occupancy grid.
#[derive(Debug, Clone, Copy)]
struct Booking {
    room_index: usize,
    professor_id: ProfessorId,
    group_id: GroupId,
    course_id: CourseId,
    single_theory: bool,
}

/// Per-pass bookkeeping: occupancy grid plus per-(entity, day) hour lists.
struct Ledger {
    hours_per_day: usize,
    occupancy: Vec<Vec<Booking>>,
    professor_hours: HashMap<(ProfessorId, usize), Vec<usize>>,
    group_hours: HashMap<(GroupId, usize), Vec<usize>>,
    lunch: usize,
    late_long: usize,
}

impl Ledger {
    fn new(days: usize, hours_per_day: usize) -> Self {
        Self {
            hours_per_day,
            occupancy: vec![Vec::new(); days * hours_per_day],
            professor_hours: HashMap::new(),
            group_hours: HashMap::new(),
            lunch: 0,
            late_long: 0,
        }
    }

    fn cell(&self, day: usize, hour: usize) -> &[Booking] {
        &self.occupancy[day * self.hours_per_day + hour]
    }

    /// First clash of `session` at `slot` with an already booked session.
    fn clash(&self, session: &Session, slot: Slot) -> Option<HardViolation> {
        for hour in slot.start_hour..slot.start_hour + session.duration {
            for booked in self.cell(slot.day, hour) {
                if booked.room_index == slot.room_index {
                    return Some(HardViolation::RoomOverlap);
                }
                if booked.professor_id == session.professor_id {
                    return Some(HardViolation::ProfessorOverlap);
                }
                if booked.group_id == session.group_id {
                    return Some(HardViolation::GroupOverlap);
                }
            }
        }
        None
    }

    fn book(&mut self, session: &Session, slot: Slot, config: &EvaluatorConfig) {
        let booking = Booking {
            room_index: slot.room_index,
            professor_id: session.professor_id,
            group_id: session.group_id,
            course_id: session.course_id,
            single_theory: session.duration == 1 && !session.is_lab,
        };
        for hour in slot.start_hour..slot.start_hour + session.duration {
            self.occupancy[slot.day * self.hours_per_day + hour].push(booking);
            self.professor_hours
                .entry((session.professor_id, slot.day))
                .or_default()
                .push(hour);
            self.group_hours
                .entry((session.group_id, slot.day))
                .or_default()
                .push(hour);
            if hour == config.lunch_hour_index {
                self.lunch += 1;
            }
        }
        if session.duration >= config.long_class_duration
            && slot.start_hour >= config.late_start_index
        {
            self.late_long += 1;
        }
    }

    fn penalties(&self, config: &EvaluatorConfig) -> SoftPenalties {
        let mut penalties = SoftPenalties {
            lunch: self.lunch,
            late_long: self.late_long,
            ..SoftPenalties::default()
        };

        for hours in self.professor_hours.values() {
            let hours = sorted(hours);
            penalties.prof_load += hours.len().saturating_sub(config.prof_load_threshold);
            penalties.prof_consecutive += run_excess(&hours, config.max_consecutive_hours);
        }
        for hours in self.group_hours.values() {
            penalties.group_gap += gap_excess(&sorted(hours), config.gap_tolerance);
        }

        let days = self.occupancy.len().checked_div(self.hours_per_day).unwrap_or(0);
        for day in 0..days {
            for hour in 1..self.hours_per_day {
                for a in self.cell(day, hour - 1).iter().filter(|b| b.single_theory) {
                    penalties.same_subject_consecutive += self
                        .cell(day, hour)
                        .iter()
                        .filter(|b| {
                            b.single_theory
                                && b.group_id == a.group_id
                                && b.course_id == a.course_id
                        })
                        .count();
                }
            }
        }
        penalties
    }
}

fn sorted(hours: &[usize]) -> Vec<usize> {
    let mut hours = hours.to_vec();
    hours.sort_unstable();
    hours.dedup();
    hours
}

/// Sum over consecutive runs of `max(0, run_length - max_run)`.
fn run_excess(sorted_hours: &[usize], max_run: usize) -> usize {
    let mut excess = 0;
    let mut run = 0;
    let mut previous: Option<usize> = None;
    for &hour in sorted_hours {
        run = match previous {
            Some(p) if hour == p + 1 => run + 1,
            _ => 1,
        };
        if run > max_run {
            excess += 1;
        }
        previous = Some(hour);
    }
    excess
}

/// Sum over adjacent hours of `max(0, gap - tolerance)`.
fn gap_excess(sorted_hours: &[usize], tolerance: usize) -> usize {
    sorted_hours
        .windows(2)
        .map(|w| (w[1] - w[0]).saturating_sub(tolerance))
        .sum()
}

/// Scores placements against a catalog.
///
/// Stateless apart from its configuration; one evaluator can score many
/// timetables concurrently.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
/// use u_timetable::catalog::Catalog;
/// use u_timetable::evaluation::FitnessEvaluator;
/// use u_timetable::ga::Slot;
/// use u_timetable::models::{Course, Professor, Room, Session, StudentGroup};
///
/// let catalog = Catalog::builder()
///     .with_room(Room::theory(0, "R51", 60))
///     .with_group(StudentGroup::new(1, "TY/1", 19))
///     .with_professor(Professor::new(1, "Joglekar"))
///     .with_course(Course::new(5, "CC"))
///     .with_session(Session::new(1, 1, 5, 1))
///     .build()
///     .unwrap();
///
/// let position = catalog.layout().encode(Slot::new(0, 0, 1));
/// let placements = BTreeMap::from([(1, position)]);
/// let score = FitnessEvaluator::default().evaluate(&catalog, &placements);
/// assert!((score.hard_ratio - 1.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FitnessEvaluator {
    config: EvaluatorConfig,
}

impl FitnessEvaluator {
    /// Creates an evaluator.
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    /// Evaluator constants.
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates a full placement map.
    ///
    /// `placements` must hold a position for every catalog session; a
    /// missing entry is a caller bug (asserted in debug builds) and is
    /// scored as [`HardViolation::Unplaced`]. Entries for unknown session
    /// ids are ignored.
    ///
    /// A catalog with no sessions scores all zeros.
    pub fn evaluate(
        &self,
        catalog: &Catalog,
        placements: &BTreeMap<SessionId, usize>,
    ) -> FitnessScore {
        let config = &self.config;
        let max_hard_score = catalog.session_count() as f64 * config.session_score;
        if max_hard_score <= 0.0 {
            return FitnessScore::default();
        }

        let calendar = catalog.calendar();
        let layout = catalog.layout();
        let mut ledger = Ledger::new(calendar.days, calendar.hours_per_day);
        let mut total_hard_score = 0.0;
        let mut violations = Vec::new();

        for (&id, session) in catalog.sessions() {
            let Some(&position) = placements.get(&id) else {
                debug_assert!(false, "session {id} has no placement");
                violations.push(SessionViolation {
                    session_id: id,
                    kind: HardViolation::Unplaced,
                    slot: Slot::new(0, 0, 0),
                });
                continue;
            };
            let slot = layout.decode(position);

            match self.check(catalog, session, slot, &ledger) {
                Some(kind) => violations.push(SessionViolation {
                    session_id: id,
                    kind,
                    slot,
                }),
                None => {
                    ledger.book(session, slot, config);
                    total_hard_score += config.session_score;
                }
            }
        }

        let penalties = ledger.penalties(config);
        let hard_ratio = total_hard_score / max_hard_score;
        let total_soft_score = penalties.scaled_total(config);

        FitnessScore {
            fitness: hard_ratio + total_soft_score,
            hard_ratio,
            total_hard_score,
            max_hard_score,
            total_soft_score,
            penalties,
            violations,
        }
    }

    /// First hard failure of a session at a slot.
    fn check(
        &self,
        catalog: &Catalog,
        session: &Session,
        slot: Slot,
        ledger: &Ledger,
    ) -> Option<HardViolation> {
        let calendar = catalog.calendar();

        let Some(room) = catalog.room(slot.room_index) else {
            return Some(HardViolation::RoomMissing);
        };
        let Some(group) = catalog.group(session.group_id) else {
            return Some(HardViolation::GroupWindow);
        };
        if room.capacity < group.size {
            return Some(HardViolation::CapacityExceeded);
        }
        if room.is_lab != session.is_lab {
            return Some(HardViolation::LabMismatch);
        }

        let end = slot.start_hour + session.duration;
        if slot.day >= calendar.days || end > calendar.hours_per_day {
            return Some(HardViolation::DayBoundary);
        }

        let (window_start, window_end) = calendar.window_indices(&group.available);
        if slot.start_hour < window_start || end > window_end {
            return Some(HardViolation::GroupWindow);
        }

        let start_clock = calendar.clock_hour(slot.start_hour);
        if catalog
            .professor(session.professor_id)
            .is_some_and(|p| !p.is_available(slot.day, start_clock))
        {
            return Some(HardViolation::ProfessorUnavailable);
        }

        ledger.clash(session, slot)
    }
}
