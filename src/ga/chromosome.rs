//! Slot-position chromosome for timetabling.
//!
//! # Encoding
//!
//! A [`Timetable`] maps every session id of its catalog to one encoded
//! slot position (see [`SlotLayout`](super::SlotLayout)). The map always
//! has exactly one entry per catalog session; infeasible placements are
//! kept and penalized, never dropped.
//!
//! # Operators
//!
//! - **Segment crossover**: copy parent 1, then take parent 2's positions
//!   for the ids in `[lo, hi)` of the ascending id order.
//! - **Multi-point crossover**: shuffle the ids, cut them at `n` random
//!   points, and alternate the parent each cut.
//! - **Resample mutation**: redraw up to `k` distinct sessions from their
//!   valid-position sets.
//!
//! # Reference
//! Colorni, Dorigo & Maniezzo (1998), "Metaheuristics for high school
//! timetabling"

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use rand::Rng;
use rand::prelude::{IndexedRandom, SliceRandom};

use super::encoding::{sample_position, Slot};
use super::operators::CrossoverType;
use super::types::Individual;
use crate::catalog::Catalog;
use crate::evaluation::{FitnessEvaluator, FitnessScore};
use crate::models::SessionId;

/// Errors from hand-built placement maps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    /// A catalog session has no position.
    MissingSession(SessionId),
    /// A position was given for a session the catalog does not contain.
    UnknownSession(SessionId),
}

impl fmt::Display for TimetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimetableError::MissingSession(id) => write!(f, "session {id} has no placement"),
            TimetableError::UnknownSession(id) => write!(f, "session {id} is not in the catalog"),
        }
    }
}

impl std::error::Error for TimetableError {}

/// A candidate timetable: one encoded position per session.
///
/// Holds the catalog it was built against, so it can only ever be
/// evaluated against that catalog. `Clone` copies the placement map;
/// clones never share mutable state.
///
/// Higher fitness = better timetable.
#[derive(Debug, Clone)]
pub struct Timetable {
    catalog: Arc<Catalog>,
    placements: BTreeMap<SessionId, usize>,
    score: Option<FitnessScore>,
}

impl Individual for Timetable {
    fn fitness(&self) -> f64 {
        Timetable::fitness(self)
    }
}

impl Timetable {
    /// Creates an unevaluated timetable with every session drawn uniformly
    /// from its valid positions (position 0 if it has none).
    pub fn random<R: Rng>(catalog: &Arc<Catalog>, rng: &mut R) -> Self {
        let placements = catalog
            .sessions()
            .values()
            .map(|session| (session.id, sample_position(catalog, session, rng)))
            .collect();
        Self {
            catalog: Arc::clone(catalog),
            placements,
            score: None,
        }
    }

    /// Creates an unevaluated timetable from explicit positions.
    ///
    /// # Errors
    /// Fails if a catalog session is missing or an unknown id is present.
    pub fn from_placements(
        catalog: &Arc<Catalog>,
        placements: BTreeMap<SessionId, usize>,
    ) -> Result<Self, TimetableError> {
        if let Some(&id) = placements.keys().find(|id| catalog.session(**id).is_none()) {
            return Err(TimetableError::UnknownSession(id));
        }
        if let Some(id) = catalog.session_ids().find(|id| !placements.contains_key(id)) {
            return Err(TimetableError::MissingSession(id));
        }
        Ok(Self {
            catalog: Arc::clone(catalog),
            placements,
            score: None,
        })
    }

    /// Creates an unevaluated timetable from decoded slots.
    pub fn from_slots(
        catalog: &Arc<Catalog>,
        slots: &[(SessionId, Slot)],
    ) -> Result<Self, TimetableError> {
        let layout = catalog.layout();
        let placements = slots
            .iter()
            .map(|&(id, slot)| (id, layout.encode(slot)))
            .collect();
        Self::from_placements(catalog, placements)
    }

    /// The catalog this timetable was built against.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Session id → encoded position.
    pub fn placements(&self) -> &BTreeMap<SessionId, usize> {
        &self.placements
    }

    /// Encoded position of a session.
    pub fn position_of(&self, id: SessionId) -> Option<usize> {
        self.placements.get(&id).copied()
    }

    /// Decoded slot of a session.
    pub fn slot_of(&self, id: SessionId) -> Option<Slot> {
        let layout = self.catalog.layout();
        self.position_of(id).map(|p| layout.decode(p))
    }

    /// Overwrites one session's position and drops the cached score.
    ///
    /// # Errors
    /// Fails if the session is not in the catalog.
    pub fn set_position(&mut self, id: SessionId, position: usize) -> Result<(), TimetableError> {
        match self.placements.get_mut(&id) {
            Some(slot) => {
                *slot = position;
                self.score = None;
                Ok(())
            }
            None => Err(TimetableError::UnknownSession(id)),
        }
    }

    /// Whether the cached score matches the current placements.
    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }

    /// Cached score, if evaluated.
    pub fn score(&self) -> Option<&FitnessScore> {
        self.score.as_ref()
    }

    /// Scores the current placements and caches the result.
    pub fn evaluate(&mut self, evaluator: &FitnessEvaluator) {
        self.score = Some(evaluator.evaluate(&self.catalog, &self.placements));
    }

    /// Fitness of the current placements.
    ///
    /// Reading it before [`evaluate`](Self::evaluate) is a caller bug:
    /// asserted in debug builds, 0.0 otherwise.
    pub fn fitness(&self) -> f64 {
        self.read(|s| s.fitness)
    }

    /// Fraction of sessions passing every hard constraint.
    pub fn hard_ratio(&self) -> f64 {
        self.read(|s| s.hard_ratio)
    }

    /// Sum of per-session hard scores.
    pub fn total_hard_score(&self) -> f64 {
        self.read(|s| s.total_hard_score)
    }

    /// Largest attainable hard score.
    pub fn max_hard_score(&self) -> f64 {
        self.read(|s| s.max_hard_score)
    }

    fn read(&self, field: impl Fn(&FitnessScore) -> f64) -> f64 {
        debug_assert!(self.score.is_some(), "timetable read before evaluation");
        self.score.as_ref().map_or(0.0, field)
    }

    /// Returns an evaluated child of `self` and `other`.
    pub fn crossover<R: Rng>(
        &self,
        other: &Timetable,
        crossover_type: CrossoverType,
        evaluator: &FitnessEvaluator,
        rng: &mut R,
    ) -> Self {
        let mut child = self.cross_genes(other, crossover_type, rng);
        child.evaluate(evaluator);
        child
    }

    /// Resamples up to `mutation_size` sessions, then re-evaluates.
    pub fn mutate<R: Rng>(
        &mut self,
        mutation_size: usize,
        evaluator: &FitnessEvaluator,
        rng: &mut R,
    ) {
        self.mutate_genes(mutation_size, rng);
        self.evaluate(evaluator);
    }

    /// Unevaluated crossover child.
    pub(crate) fn cross_genes<R: Rng>(
        &self,
        other: &Timetable,
        crossover_type: CrossoverType,
        rng: &mut R,
    ) -> Self {
        debug_assert!(
            Arc::ptr_eq(&self.catalog, &other.catalog),
            "crossover across catalogs"
        );
        let mut child = Self {
            catalog: Arc::clone(&self.catalog),
            placements: self.placements.clone(),
            score: None,
        };
        let mut ids: Vec<SessionId> = self.placements.keys().copied().collect();
        let n = ids.len();

        match crossover_type {
            CrossoverType::Segment => {
                let a = rng.random_range(0..=n);
                let b = rng.random_range(0..=n);
                let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
                for id in &ids[lo..hi] {
                    child.take_from(other, *id);
                }
            }
            CrossoverType::MultiPoint(points) => {
                ids.shuffle(rng);
                let mut cuts: Vec<usize> =
                    rand::seq::index::sample(rng, n, points.min(n)).into_vec();
                cuts.sort_unstable();
                let mut cuts = cuts.into_iter().peekable();
                let mut from_other = false;
                for (i, id) in ids.iter().enumerate() {
                    if cuts.next_if_eq(&i).is_some() {
                        from_other = !from_other;
                    }
                    if from_other {
                        child.take_from(other, *id);
                    }
                }
            }
        }
        child
    }

    /// Resamples up to `mutation_size` distinct sessions without evaluating.
    pub(crate) fn mutate_genes<R: Rng>(&mut self, mutation_size: usize, rng: &mut R) {
        let ids: Vec<SessionId> = self.placements.keys().copied().collect();
        let picked: Vec<SessionId> = ids
            .choose_multiple(rng, mutation_size.min(ids.len()))
            .copied()
            .collect();
        for id in picked {
            if let Some(session) = self.catalog.session(id) {
                let position = sample_position(&self.catalog, session, rng);
                self.placements.insert(id, position);
            }
        }
        self.score = None;
    }

    fn take_from(&mut self, other: &Timetable, id: SessionId) {
        if let Some(&position) = other.placements.get(&id) {
            self.placements.insert(id, position);
        }
    }
}
