//! Evaluator constants and soft-constraint weights.

use serde::{Deserialize, Serialize};

/// Weight of each soft constraint in the fitness sum.
///
/// A weight of 0.0 disables the corresponding constraint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoftWeights {
    /// Professor daily load.
    pub prof_load: f64,
    /// Idle gaps in a group's day.
    pub group_gap: f64,
    /// Long consecutive runs for a professor.
    pub prof_consecutive: f64,
    /// Teaching through the lunch hour.
    pub lunch: f64,
    /// Long sessions starting late in the day.
    pub late_long: f64,
    /// Same subject back to back for a group.
    pub same_subject_consecutive: f64,
}

impl Default for SoftWeights {
    fn default() -> Self {
        Self {
            prof_load: 0.5,
            group_gap: 0.5,
            prof_consecutive: 0.5,
            lunch: 0.5,
            late_long: 0.5,
            same_subject_consecutive: 1.0,
        }
    }
}

impl SoftWeights {
    /// Sum of all weights: the largest possible soft score.
    pub fn total(&self) -> f64 {
        self.prof_load
            + self.group_gap
            + self.prof_consecutive
            + self.lunch
            + self.late_long
            + self.same_subject_consecutive
    }
}

/// Constants of the constraint evaluator.
///
/// Hour thresholds are hour *indices* (0 = first slot of the day).
///
/// # Defaults
/// ```
/// use u_timetable::evaluation::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default();
/// assert_eq!(config.prof_load_threshold, 5);
/// assert!((config.max_fitness() - 4.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Hard score a session earns when it passes every hard check.
    pub session_score: f64,
    /// Raw penalty at which a soft constraint's scaled score reaches zero.
    pub max_raw_penalty: f64,
    /// Hours a professor may teach per day before each extra hour is penalized.
    pub prof_load_threshold: usize,
    /// Gap (difference between consecutive occupied hours) tolerated in a
    /// group's day; each hour beyond it costs one penalty point.
    pub gap_tolerance: usize,
    /// Longest run of consecutive hours a professor may teach unpenalized.
    pub max_consecutive_hours: usize,
    /// Hour index of the lunch break.
    pub lunch_hour_index: usize,
    /// First hour index counted as "late".
    pub late_start_index: usize,
    /// Minimum duration of a "long" session.
    pub long_class_duration: usize,
    /// Soft-constraint weights.
    pub weights: SoftWeights,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            session_score: 5.0,
            max_raw_penalty: 10.0,
            prof_load_threshold: 5,
            gap_tolerance: 1,
            max_consecutive_hours: 3,
            lunch_hour_index: 4,
            late_start_index: 7,
            long_class_duration: 2,
            weights: SoftWeights::default(),
        }
    }
}

impl EvaluatorConfig {
    /// Sets the per-session hard score.
    pub fn with_session_score(mut self, score: f64) -> Self {
        self.session_score = score;
        self
    }

    /// Sets the raw penalty at which a soft score bottoms out.
    pub fn with_max_raw_penalty(mut self, penalty: f64) -> Self {
        self.max_raw_penalty = penalty;
        self
    }

    /// Sets the professor daily-load threshold.
    pub fn with_prof_load_threshold(mut self, hours: usize) -> Self {
        self.prof_load_threshold = hours;
        self
    }

    /// Sets the tolerated group gap.
    pub fn with_gap_tolerance(mut self, hours: usize) -> Self {
        self.gap_tolerance = hours;
        self
    }

    /// Sets the longest unpenalized consecutive run.
    pub fn with_max_consecutive_hours(mut self, hours: usize) -> Self {
        self.max_consecutive_hours = hours;
        self
    }

    /// Sets the lunch hour index.
    pub fn with_lunch_hour_index(mut self, index: usize) -> Self {
        self.lunch_hour_index = index;
        self
    }

    /// Sets the late-start threshold and the long-session duration.
    pub fn with_late_long(mut self, late_start_index: usize, long_class_duration: usize) -> Self {
        self.late_start_index = late_start_index;
        self.long_class_duration = long_class_duration;
        self
    }

    /// Sets the soft-constraint weights.
    pub fn with_weights(mut self, weights: SoftWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Scales a raw penalty: `weight * max(0, 1 - penalty / max_raw_penalty)`.
    pub fn scale(&self, weight: f64, penalty: usize) -> f64 {
        if self.max_raw_penalty <= 0.0 {
            return if penalty == 0 { weight } else { 0.0 };
        }
        weight * (1.0 - penalty as f64 / self.max_raw_penalty).max(0.0)
    }

    /// Best attainable fitness: a feasible timetable with no soft penalty.
    pub fn max_fitness(&self) -> f64 {
        1.0 + self.weights.total()
    }
}
