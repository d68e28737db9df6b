//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use serde::{Deserialize, Serialize};

/// Configuration for the genetic algorithm.
///
/// Controls population size, elitism, truncation selection, operator
/// rates, termination conditions, and parallelism.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 250);
/// assert_eq!(config.max_generations, 500);
/// assert_eq!(config.goal_fitness, Some(4.4));
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_elite_ratio(0.05)
///     .with_mutation_rate(0.5)
///     .without_goal()
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Fraction of the population carried over unchanged (0.0–1.0).
    pub elite_ratio: f64,

    /// Fraction of the ranked population forming the breeding pool (0.0–1.0).
    ///
    /// Parents are drawn uniformly, with replacement, from the top
    /// `selection_ratio` of the population (truncation selection).
    pub selection_ratio: f64,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, a clone of parent 1 is used.
    pub crossover_rate: f64,

    /// Probability of applying mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Stop as soon as the best fitness reaches this value.
    ///
    /// `None` runs until `max_generations`.
    pub goal_fitness: Option<f64>,

    /// Whether to evaluate individuals in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 250,
            max_generations: 500,
            elite_ratio: 0.1,
            selection_ratio: 0.5,
            crossover_rate: 0.85,
            mutation_rate: 0.80,
            goal_fitness: Some(4.4),
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the breeding-pool ratio.
    pub fn with_selection_ratio(mut self, ratio: f64) -> Self {
        self.selection_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the goal fitness.
    pub fn with_goal_fitness(mut self, goal: f64) -> Self {
        self.goal_fitness = Some(goal);
        self
    }

    /// Disables goal-based termination.
    pub fn without_goal(mut self) -> Self {
        self.goal_fitness = None;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of elites carried over each generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }

    /// Size of the breeding pool (at least one individual).
    pub fn pool_size(&self) -> usize {
        ((self.population_size as f64 * self.selection_ratio) as usize)
            .clamp(1, self.population_size.max(1))
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        for (name, value) in [
            ("elite_ratio", self.elite_ratio),
            ("selection_ratio", self.selection_ratio),
            ("crossover_rate", self.crossover_rate),
            ("mutation_rate", self.mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be in [0, 1] (got {value})"));
            }
        }
        if self.elite_count() >= self.population_size {
            return Err("elite_ratio too high: elites fill entire population".into());
        }
        if self.selection_ratio <= 0.0 {
            return Err("selection_ratio must be positive".into());
        }
        if self.goal_fitness.is_some_and(|g| g.is_nan()) {
            return Err("goal_fitness must be a number".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 250);
        assert_eq!(config.max_generations, 500);
        assert!((config.elite_ratio - 0.1).abs() < 1e-10);
        assert!((config.selection_ratio - 0.5).abs() < 1e-10);
        assert!((config.crossover_rate - 0.85).abs() < 1e-10);
        assert!((config.mutation_rate - 0.80).abs() < 1e-10);
        assert_eq!(config.goal_fitness, Some(4.4));
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert_eq!(config.elite_count(), 25);
        assert_eq!(config.pool_size(), 125);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(1000)
            .with_elite_ratio(0.2)
            .with_selection_ratio(0.25)
            .with_crossover_rate(0.8)
            .with_mutation_rate(0.05)
            .with_goal_fitness(4.0)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.population_size, 40);
        assert_eq!(config.max_generations, 1000);
        assert_eq!(config.elite_count(), 8);
        assert_eq!(config.pool_size(), 10);
        assert!((config.crossover_rate - 0.8).abs() < 1e-10);
        assert!((config.mutation_rate - 0.05).abs() < 1e-10);
        assert_eq!(config.goal_fitness, Some(4.0));
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = GaConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_max_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elite_too_high() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_ratio(1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_pool() {
        let config = GaConfig::default().with_selection_ratio(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rates_out_of_range() {
        let mut config = GaConfig::default();
        config.crossover_rate = 1.5;
        assert!(config.validate().unwrap_err().contains("crossover_rate"));

        let mut config = GaConfig::default();
        config.mutation_rate = -0.1;
        assert!(config.validate().unwrap_err().contains("mutation_rate"));

        let mut config = GaConfig::default();
        config.elite_ratio = 2.0;
        assert!(config.validate().unwrap_err().contains("elite_ratio"));

        let mut config = GaConfig::default();
        config.selection_ratio = 1.01;
        assert!(config.validate().unwrap_err().contains("selection_ratio"));
    }

    #[test]
    fn test_validate_rates_nan() {
        let mut config = GaConfig::default();
        config.crossover_rate = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = GaConfig::default();
        config.mutation_rate = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = GaConfig::default();
        config.elite_ratio = f64::NAN;
        assert!(config.validate().is_err());

        let mut config = GaConfig::default();
        config.selection_ratio = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialized_rates_are_validated() {
        let mut value = serde_json::to_value(GaConfig::default()).unwrap();
        value["crossover_rate"] = serde_json::json!(1.5);
        let config: GaConfig = serde_json::from_value(value).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pool_never_empty() {
        let config = GaConfig::default()
            .with_population_size(3)
            .with_selection_ratio(0.1);
        assert_eq!(config.pool_size(), 1);
    }

    #[test]
    fn test_clamp_rates() {
        let config = GaConfig::default()
            .with_elite_ratio(1.5)
            .with_crossover_rate(-0.5)
            .with_mutation_rate(2.0);

        assert!((config.elite_ratio - 1.0).abs() < 1e-10);
        assert!((config.crossover_rate - 0.0).abs() < 1e-10);
        assert!((config.mutation_rate - 1.0).abs() < 1e-10);
    }
}
