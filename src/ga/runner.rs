//! Generational GA runner.
//!
//! # Algorithm
//!
//! ```text
//! Initializing → Evaluating → (Selecting → Breeding → Evaluating)* → Terminated
//! ```
//!
//! 1. **Initializing**: create `population_size` random individuals
//! 2. **Evaluating**: score every unevaluated individual (in parallel if
//!    enabled) and update the best-ever individual
//! 3. **Selecting**: rank the population by descending fitness
//! 4. **Breeding**: carry over the top `elite_ratio` unchanged, then fill
//!    the population with offspring of parents drawn uniformly (with
//!    replacement) from the top `selection_ratio`
//!
//! The run terminates after an evaluation phase when the best fitness
//! reaches the goal, when `max_generations` breeding rounds are done, or
//! when the cancel flag is raised.
//!
//! The best-ever individual is stored by value and only replaced by a
//! strictly fitter one, so the tracked best never regresses.
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and
//! Machine Learning"

use std::sync::atomic::{AtomicBool, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use super::config::GaConfig;
use super::types::{GaProblem, Individual};

/// Phase of the evolution loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaPhase {
    /// Building the initial population.
    Initializing,
    /// Scoring new individuals and tracking the best.
    Evaluating,
    /// Ranking the population.
    Selecting,
    /// Producing the next population.
    Breeding,
    /// Run finished.
    Terminated(TerminationReason),
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// Best fitness reached the configured goal.
    GoalReached,
    /// `max_generations` breeding rounds completed.
    MaxGenerations,
    /// The cancel flag was raised.
    Cancelled,
}

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// Best individual ever seen (a copy, independent of the population).
    pub best: I,
    /// Fitness of `best`.
    pub best_fitness: f64,
    /// Breeding rounds completed.
    pub generations: usize,
    /// Tracked best fitness after every evaluation phase (non-decreasing).
    pub history: Vec<f64>,
    /// Why the run stopped.
    pub termination: TerminationReason,
}

/// Runs the genetic algorithm on a [`GaProblem`].
pub struct GaRunner;

impl GaRunner {
    /// Runs to completion.
    ///
    /// # Errors
    /// Returns the [`GaConfig::validate`] message for an invalid config.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, String> {
        Self::run_with_cancel(problem, config, &AtomicBool::new(false))
    }

    /// Runs until done or until `cancel` is raised.
    ///
    /// The flag is checked once per generation, after evaluation; a
    /// cancelled run still returns the best individual found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: &AtomicBool,
    ) -> Result<GaResult<P::Individual>, String> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let elite_count = config.elite_count();
        let pool_size = config.pool_size();

        log::info!(
            "GA start: population {}, max generations {}, goal {:?}",
            config.population_size,
            config.max_generations,
            config.goal_fitness
        );

        let mut phase = GaPhase::Initializing;
        let mut population: Vec<P::Individual> = Vec::with_capacity(config.population_size);
        // population[fresh..] still needs evaluation
        let mut fresh = 0;
        let mut best: Option<P::Individual> = None;
        let mut history = Vec::with_capacity(config.max_generations + 1);
        let mut generation = 0;

        let termination = loop {
            log::trace!("generation {generation}: {phase:?}");
            phase = match phase {
                GaPhase::Initializing => {
                    population.extend(
                        (0..config.population_size).map(|_| problem.create_individual(&mut rng)),
                    );
                    fresh = 0;
                    GaPhase::Evaluating
                }
                GaPhase::Evaluating => {
                    evaluate_batch(problem, &mut population[fresh..], config.parallel);

                    let champion = population
                        .iter()
                        .max_by(|a, b| a.fitness().total_cmp(&b.fitness()));
                    if let Some(champion) = champion {
                        let improved = match &best {
                            Some(current) => champion.fitness() > current.fitness(),
                            None => true,
                        };
                        if improved {
                            best = Some(champion.clone());
                        }
                    }
                    let best_fitness = best.as_ref().map_or(f64::NEG_INFINITY, |b| b.fitness());
                    history.push(best_fitness);
                    problem.on_generation(generation, best_fitness);

                    if config.goal_fitness.is_some_and(|goal| best_fitness >= goal) {
                        GaPhase::Terminated(TerminationReason::GoalReached)
                    } else if generation >= config.max_generations {
                        GaPhase::Terminated(TerminationReason::MaxGenerations)
                    } else if cancel.load(Ordering::Relaxed) {
                        GaPhase::Terminated(TerminationReason::Cancelled)
                    } else {
                        GaPhase::Selecting
                    }
                }
                GaPhase::Selecting => {
                    population.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
                    GaPhase::Breeding
                }
                GaPhase::Breeding => {
                    let mut next: Vec<P::Individual> = Vec::with_capacity(config.population_size);
                    next.extend_from_slice(&population[..elite_count]);

                    while next.len() < config.population_size {
                        let p1 = &population[rng.random_range(0..pool_size)];
                        let p2 = &population[rng.random_range(0..pool_size)];
                        let mut child = if rng.random_bool(config.crossover_rate) {
                            problem.crossover(p1, p2, &mut rng)
                        } else {
                            p1.clone()
                        };
                        if rng.random_bool(config.mutation_rate) {
                            problem.mutate(&mut child, &mut rng);
                        }
                        next.push(child);
                    }

                    population = next;
                    fresh = elite_count;
                    generation += 1;
                    GaPhase::Evaluating
                }
                GaPhase::Terminated(reason) => break reason,
            };
        };

        let best = best.ok_or_else(|| "GA produced no individuals".to_string())?;
        let best_fitness = best.fitness();
        log::info!(
            "GA done: {termination:?} after {generation} generations, best fitness {best_fitness:.4}"
        );

        Ok(GaResult {
            best,
            best_fitness,
            generations: generation,
            history,
            termination,
        })
    }
}

fn evaluate_batch<P: GaProblem>(problem: &P, batch: &mut [P::Individual], parallel: bool) {
    if parallel {
        batch.par_iter_mut().for_each(|ind| problem.evaluate(ind));
    } else {
        batch.iter_mut().for_each(|ind| problem.evaluate(ind));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::ga::TimetableProblem;
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;

    /// OneMax: maximize the number of set bits.
    #[derive(Debug, Clone)]
    struct Bits {
        genes: Vec<bool>,
        fitness: f64,
    }

    impl Individual for Bits {
        fn fitness(&self) -> f64 {
            self.fitness
        }
    }

    struct OneMax {
        len: usize,
        evaluations: AtomicUsize,
    }

    impl OneMax {
        fn new(len: usize) -> Self {
            Self {
                len,
                evaluations: AtomicUsize::new(0),
            }
        }
    }

    impl GaProblem for OneMax {
        type Individual = Bits;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Bits {
            Bits {
                genes: (0..self.len).map(|_| rng.random_bool(0.5)).collect(),
                fitness: f64::NAN,
            }
        }

        fn evaluate(&self, individual: &mut Bits) {
            self.evaluations.fetch_add(1, Ordering::Relaxed);
            individual.fitness = individual.genes.iter().filter(|&&g| g).count() as f64;
        }

        fn crossover<R: Rng>(&self, p1: &Bits, p2: &Bits, rng: &mut R) -> Bits {
            let cut = rng.random_range(0..=self.len);
            let mut genes = p1.genes[..cut].to_vec();
            genes.extend_from_slice(&p2.genes[cut..]);
            Bits {
                genes,
                fitness: f64::NAN,
            }
        }

        fn mutate<R: Rng>(&self, individual: &mut Bits, rng: &mut R) {
            let i = rng.random_range(0..self.len);
            individual.genes[i] = !individual.genes[i];
            individual.fitness = f64::NAN;
        }
    }

    #[test]
    fn test_invalid_config() {
        let problem = OneMax::new(8);
        let config = GaConfig::default().with_population_size(1);
        assert!(GaRunner::run(&problem, &config).is_err());
    }

    #[test]
    fn test_out_of_range_rate_is_rejected_not_panicking() {
        let problem = OneMax::new(8);
        let mut config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(2)
            .with_seed(42);
        config.crossover_rate = 1.5;
        let err = GaRunner::run(&problem, &config).unwrap_err();
        assert!(err.contains("crossover_rate"));
        assert_eq!(problem.evaluations.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_onemax_reaches_goal() {
        let problem = OneMax::new(20);
        let config = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(300)
            .with_goal_fitness(20.0)
            .with_mutation_rate(0.3)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.termination, TerminationReason::GoalReached);
        assert!((result.best_fitness - 20.0).abs() < 1e-10);
        assert!(result.best.genes.iter().all(|&g| g));
    }

    #[test]
    fn test_each_offspring_evaluated_once() {
        let problem = OneMax::new(16);
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(5)
            .with_elite_ratio(0.1)
            .without_goal()
            .with_seed(7);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.termination, TerminationReason::MaxGenerations);
        assert_eq!(result.generations, 5);
        // 20 initial + (20 - 2 elites) per generation
        assert_eq!(problem.evaluations.load(Ordering::Relaxed), 20 + 18 * 5);
        assert_eq!(result.history.len(), 6);
    }

    #[test]
    fn test_history_never_regresses() {
        let problem = TimetableProblem::new(Arc::new(fixtures::faculty_catalog()));
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_generations(25)
            .without_goal()
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.history.len(), result.generations + 1);
        for w in result.history.windows(2) {
            assert!(w[1] >= w[0], "best fitness regressed: {} → {}", w[0], w[1]);
        }
        assert!((result.best.fitness() - result.best_fitness).abs() < 1e-10);
        assert_eq!(result.history.last().copied(), Some(result.best_fitness));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let problem = TimetableProblem::new(Arc::new(fixtures::faculty_catalog()));
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .without_goal()
            .with_seed(123);

        // Parallel evaluation does not touch the RNG
        let a = GaRunner::run(&problem, &config).unwrap();
        let b = GaRunner::run(&problem, &config.clone().with_parallel(false)).unwrap();
        assert_eq!(a.best.placements(), b.best.placements());
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_goal_checked_after_initial_evaluation() {
        // Every random timetable of this catalog is feasible and penalty-free
        let problem = TimetableProblem::new(Arc::new(fixtures::two_room_catalog(10)));
        let config = GaConfig::default().with_population_size(10).with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.termination, TerminationReason::GoalReached);
        assert_eq!(result.generations, 0);
        assert!((result.best.hard_ratio() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cancel_at_generation_boundary() {
        let problem = OneMax::new(16);
        let config = GaConfig::default()
            .with_population_size(10)
            .without_goal()
            .with_seed(42);
        let cancel = AtomicBool::new(true);

        let result = GaRunner::run_with_cancel(&problem, &config, &cancel).unwrap();
        assert_eq!(result.termination, TerminationReason::Cancelled);
        assert_eq!(result.generations, 0);
        assert_eq!(result.history.len(), 1);
        assert_eq!(problem.evaluations.load(Ordering::Relaxed), 10);
    }

    #[test]
    fn test_best_is_independent_of_population() {
        let problem = TimetableProblem::new(Arc::new(fixtures::faculty_catalog()));
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(3)
            .without_goal()
            .with_seed(9);

        let result = GaRunner::run(&problem, &config).unwrap();
        let mut copy = result.best.clone();
        copy.evaluate(&problem.evaluator);
        assert!((copy.fitness() - result.best_fitness).abs() < 1e-10);
    }
}
