//! Timetabling GA problem definition.
//!
//! Implements [`GaProblem`] for timetabling: bridges the catalog, the
//! constraint evaluator, and the genetic operators to the generic runner.

use std::sync::Arc;

use rand::Rng;

use super::chromosome::Timetable;
use super::operators::GeneticOperators;
use super::types::GaProblem;
use crate::catalog::Catalog;
use crate::evaluation::{EvaluatorConfig, FitnessEvaluator};

/// GA problem definition for timetabling.
///
/// # Example
/// ```no_run
/// use std::sync::Arc;
/// use u_timetable::catalog::Catalog;
/// use u_timetable::ga::{GaConfig, GaRunner, TimetableProblem};
///
/// # fn load() -> Catalog { unimplemented!() }
/// let catalog = Arc::new(load());
/// let problem = TimetableProblem::new(catalog);
/// let result = GaRunner::run(&problem, &GaConfig::default()).unwrap();
/// println!("best fitness {:.3}", result.best_fitness);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    /// Shared read-only catalog.
    pub catalog: Arc<Catalog>,
    /// Constraint evaluator.
    pub evaluator: FitnessEvaluator,
    /// Crossover and mutation settings.
    pub operators: GeneticOperators,
}

impl TimetableProblem {
    /// Creates a problem with default evaluator constants and operators.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            evaluator: FitnessEvaluator::default(),
            operators: GeneticOperators::default(),
        }
    }

    /// Sets the evaluator constants.
    pub fn with_evaluator_config(mut self, config: EvaluatorConfig) -> Self {
        self.evaluator = FitnessEvaluator::new(config);
        self
    }

    /// Sets the genetic operators.
    pub fn with_operators(mut self, operators: GeneticOperators) -> Self {
        self.operators = operators;
        self
    }
}

impl GaProblem for TimetableProblem {
    type Individual = Timetable;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Timetable {
        Timetable::random(&self.catalog, rng)
    }

    fn evaluate(&self, individual: &mut Timetable) {
        individual.evaluate(&self.evaluator);
    }

    fn crossover<R: Rng>(&self, parent1: &Timetable, parent2: &Timetable, rng: &mut R) -> Timetable {
        self.operators.crossover(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, individual: &mut Timetable, rng: &mut R) {
        self.operators.mutate(individual, rng);
    }

    fn on_generation(&self, generation: usize, best_fitness: f64) {
        log::debug!("generation {generation}: best fitness {best_fitness:.4}");
    }
}
