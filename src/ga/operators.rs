//! Configurable genetic operators for timetabling.
//!
//! Provides runtime-selectable crossover strategy and mutation size
//! via [`GeneticOperators`].
//!
//! # Usage
//!
//! ```
//! use u_timetable::ga::operators::{CrossoverType, GeneticOperators};
//!
//! let ops = GeneticOperators::default();
//! assert_eq!(ops.crossover_type, CrossoverType::Segment);
//! assert_eq!(ops.mutation_size, 8);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::chromosome::Timetable;

/// Crossover strategy for timetables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverType {
    /// One contiguous run of ids (ascending order) taken from parent 2.
    Segment,
    /// Ids shuffled and cut at `n` points, parents alternating per cut.
    MultiPoint(usize),
}

/// Runtime-selectable genetic operators for the timetabling GA.
///
/// # Example
///
/// ```
/// use u_timetable::ga::operators::{CrossoverType, GeneticOperators};
///
/// let ops = GeneticOperators::default()
///     .with_crossover_type(CrossoverType::MultiPoint(2))
///     .with_mutation_size(4);
/// assert_eq!(ops.mutation_size, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneticOperators {
    /// Crossover strategy.
    pub crossover_type: CrossoverType,
    /// Maximum number of sessions resampled per mutation.
    pub mutation_size: usize,
}

impl Default for GeneticOperators {
    fn default() -> Self {
        Self {
            crossover_type: CrossoverType::Segment,
            mutation_size: 8,
        }
    }
}

impl GeneticOperators {
    /// Sets the crossover strategy.
    pub fn with_crossover_type(mut self, crossover_type: CrossoverType) -> Self {
        self.crossover_type = crossover_type;
        self
    }

    /// Sets the mutation size.
    pub fn with_mutation_size(mut self, size: usize) -> Self {
        self.mutation_size = size;
        self
    }

    /// Unevaluated child of two parents.
    pub(crate) fn crossover<R: Rng>(&self, p1: &Timetable, p2: &Timetable, rng: &mut R) -> Timetable {
        p1.cross_genes(p2, self.crossover_type, rng)
    }

    /// Resamples sessions in place without evaluating.
    pub(crate) fn mutate<R: Rng>(&self, timetable: &mut Timetable, rng: &mut R) {
        timetable.mutate_genes(self.mutation_size, rng);
    }
}
