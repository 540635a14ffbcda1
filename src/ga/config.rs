//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop,
//! and [`PenaltyWeights`] the per-violation costs the fitness charges.

/// Penalty charged per constraint violation (positive magnitudes).
///
/// Fitness is the negated sum of incurred penalties, so 0 means
/// conflict-free and lower means worse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PenaltyWeights {
    /// Cost per extra session sharing a (room, slot) pair.
    pub double_booking: i64,
    /// Cost per session sitting in a slot its teacher is not free in.
    pub teacher_clash: i64,
    /// Cost per session whose room is too small for the group.
    pub capacity_shortfall: i64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            double_booking: 10,
            teacher_clash: 5,
            capacity_shortfall: 5,
        }
    }
}

impl PenaltyWeights {
    /// Sets the double-booking penalty.
    pub fn with_double_booking(mut self, penalty: i64) -> Self {
        self.double_booking = penalty;
        self
    }

    /// Sets the teacher-clash penalty.
    pub fn with_teacher_clash(mut self, penalty: i64) -> Self {
        self.teacher_clash = penalty;
        self
    }

    /// Sets the capacity-shortfall penalty.
    pub fn with_capacity_shortfall(mut self, penalty: i64) -> Self {
        self.capacity_shortfall = penalty;
        self
    }
}

/// Configuration for the genetic search.
///
/// # Defaults
///
/// ```
/// use timetable_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use timetable_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_generations(200)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of candidates in the population.
    ///
    /// Must be at least 2 so that reproduction has parents to draw from.
    pub population_size: usize,

    /// Number of generations to evolve.
    ///
    /// 0 is legal: the run records no history and returns the best of the
    /// initial random population.
    pub generations: usize,

    /// Probability that a freshly bred child receives one mutation (0.0-1.0).
    pub mutation_rate: f64,

    /// Number of top-ranked candidates parents are drawn from.
    ///
    /// Clamped to the population size at draw time; must be at least 1.
    pub parent_pool: usize,

    /// Penalty weights the fitness charges per violation.
    pub weights: PenaltyWeights,

    /// Whether to evaluate candidates in parallel using rayon.
    ///
    /// Evaluation is deterministic, so this never changes results.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generations: 100,
            mutation_rate: 0.1,
            parent_pool: 5,
            weights: PenaltyWeights::default(),
            parallel: false,
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

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the parent pool size.
    pub fn with_parent_pool(mut self, n: usize) -> Self {
        self.parent_pool = n;
        self
    }

    /// Sets the penalty weights.
    pub fn with_weights(mut self, weights: PenaltyWeights) -> Self {
        self.weights = weights;
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

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.parent_pool == 0 {
            return Err("parent_pool must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err("mutation_rate must lie in [0, 1]".into());
        }
        if self.weights.double_booking < 0
            || self.weights.teacher_clash < 0
            || self.weights.capacity_shortfall < 0
        {
            return Err("penalty weights must be non-negative".into());
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
        assert_eq!(config.population_size, 10);
        assert_eq!(config.generations, 100);
        assert!((config.mutation_rate - 0.1).abs() < 1e-10);
        assert_eq!(config.parent_pool, 5);
        assert_eq!(config.weights, PenaltyWeights::default());
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_default_weights() {
        let w = PenaltyWeights::default();
        assert_eq!(w.double_booking, 10);
        assert_eq!(w.teacher_clash, 5);
        assert_eq!(w.capacity_shortfall, 5);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(30)
            .with_generations(500)
            .with_mutation_rate(0.25)
            .with_parent_pool(8)
            .with_weights(PenaltyWeights::default().with_double_booking(20))
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.population_size, 30);
        assert_eq!(config.generations, 500);
        assert!((config.mutation_rate - 0.25).abs() < 1e-10);
        assert_eq!(config.parent_pool, 8);
        assert_eq!(config.weights.double_booking, 20);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_mutation_rate_clamped() {
        let low = GaConfig::default().with_mutation_rate(-0.5);
        let high = GaConfig::default().with_mutation_rate(2.0);
        assert!((low.mutation_rate - 0.0).abs() < 1e-10);
        assert!((high.mutation_rate - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations_ok() {
        assert!(GaConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(0).validate().is_err());
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_empty_parent_pool() {
        assert!(GaConfig::default().with_parent_pool(0).validate().is_err());
    }

    #[test]
    fn test_validate_rate_out_of_range() {
        // Builders clamp, but fields are public
        let mut config = GaConfig::default();
        config.mutation_rate = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_negative_weight() {
        let config =
            GaConfig::default().with_weights(PenaltyWeights::default().with_teacher_clash(-5));
        assert!(config.validate().is_err());
    }
}
