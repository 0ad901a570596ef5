//! Search configuration.
//!
//! [`SearchConfig`] holds all parameters that control the generation loop.

/// Configuration for the evolutionary search.
///
/// # Defaults
///
/// ```
/// use evomatch::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generation_count, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evomatch::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_population_size(50)
///     .with_children_count(10)
///     .with_child_tries(8)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Number of candidates in the population.
    pub population_size: usize,

    /// Number of new children bred per generation.
    ///
    /// Must leave at least one surviving member, so valid values are
    /// `0..population_size`. Zero degrades the loop to re-sorting the
    /// same population each generation.
    pub children_count: usize,

    /// Crossover attempts per child; the best-scoring attempt becomes
    /// the child.
    pub child_tries: usize,

    /// Maximum number of generations before the search gives up.
    pub generation_count: usize,

    /// Number of worker threads used for batch scoring.
    ///
    /// Typically the number of available execution units.
    pub worker_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            children_count: 20,
            child_tries: 10,
            generation_count: 100,
            worker_count: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of children bred per generation.
    pub fn with_children_count(mut self, n: usize) -> Self {
        self.children_count = n;
        self
    }

    /// Sets the number of crossover attempts per child.
    pub fn with_child_tries(mut self, n: usize) -> Self {
        self.child_tries = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generation_count(mut self, n: usize) -> Self {
        self.generation_count = n;
        self
    }

    /// Sets the scoring worker count.
    pub fn with_worker_count(mut self, n: usize) -> Self {
        self.worker_count = n;
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
        if self.population_size == 0 {
            return Err("population_size must be positive".into());
        }
        if self.children_count >= self.population_size {
            return Err(format!(
                "children_count ({}) must leave at least one surviving member \
                 of the population ({})",
                self.children_count, self.population_size
            ));
        }
        if self.child_tries == 0 {
            return Err("child_tries must be positive".into());
        }
        if self.generation_count == 0 {
            return Err("generation_count must be positive".into());
        }
        if self.worker_count == 0 {
            return Err("worker_count must be positive".into());
        }
        Ok(())
    }
}
