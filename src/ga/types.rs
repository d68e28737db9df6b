//! Core trait definitions for the GA runner.
//!
//! [`Individual`] and [`GaProblem`] are the contract between the generic
//! evolution loop in [`GaRunner`](super::GaRunner) and a problem such as
//! [`TimetableProblem`](super::TimetableProblem).
//!
//! Higher fitness is better (maximization).

use rand::Rng;

/// A candidate solution in the GA population.
///
/// Individuals carry their own evaluated fitness; the runner only reads it
/// after calling [`GaProblem::evaluate`].
pub trait Individual: Clone + Send + Sync {
    /// Current fitness (higher = better).
    fn fitness(&self) -> f64;
}

/// Defines a GA optimization problem.
///
/// Covers:
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Evaluation**: How to score an individual in place
/// 3. **Crossover**: How to recombine two parents into one child
/// 4. **Mutation**: How to perturb an individual
///
/// Crossover and mutation return unevaluated individuals; the runner
/// evaluates each offspring exactly once before it joins the population.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may evaluate
/// individuals in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random, unevaluated individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Scores an individual and stores the result on it.
    ///
    /// May be called in parallel across the population.
    fn evaluate(&self, individual: &mut Self::Individual);

    /// Produces one unevaluated child from two parents.
    ///
    /// The default implementation clones parent1 (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called after each generation's evaluation with the tracked best fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: f64) {}
}
