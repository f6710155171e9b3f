//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the generational loop.
//! They are fixed for the duration of a run.

use crate::error::{Error, Result};

/// Configuration for the genetic path search.
///
/// # Defaults
///
/// ```
/// use u_evopath::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_evopath::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(1000)
///     .with_mutation_rate(0.05)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    ///
    /// Half of it (rounded down) survives truncation selection, so it must be
    /// at least 2.
    pub population_size: usize,

    /// Number of generations to run. This is the only termination condition.
    pub generations: usize,

    /// Probability (0.0–1.0) that an offspring receives one swap mutation.
    pub mutation_rate: f64,

    /// Whether to evaluate individuals in parallel using rayon.
    ///
    /// Only honoured when the crate is built with the `parallel` feature.
    /// Evaluation draws no randomness, so seeded runs give identical results
    /// either way.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.1,
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

    /// Sets the mutation rate, clamped into `[0, 1]`.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
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

    /// Preset for quick runs: population 50, 100 generations.
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            ..Self::default()
        }
    }

    /// Preset trading quality against time: population 100, 300 generations.
    pub fn balanced() -> Self {
        Self {
            population_size: 100,
            generations: 300,
            ..Self::default()
        }
    }

    /// Preset for large graphs: population 200, 1000 generations.
    pub fn quality() -> Self {
        Self {
            population_size: 200,
            generations: 1000,
            mutation_rate: 0.2,
            ..Self::default()
        }
    }

    /// Picks a preset from the number of nodes in the graph.
    ///
    /// - `node_count < 20` → [`fast()`](Self::fast)
    /// - `20 ≤ node_count < 100` → [`balanced()`](Self::balanced)
    /// - `node_count ≥ 100` → [`quality()`](Self::quality)
    pub fn auto_select(node_count: usize) -> Self {
        if node_count < 20 {
            Self::fast()
        } else if node_count < 100 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }

    /// Size of the breeding pool kept by truncation selection.
    pub fn pool_size(&self) -> usize {
        self.population_size / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::PopulationTooSmall(self.population_size));
        }
        if self.generations == 0 {
            return Err(Error::ZeroGenerations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidMutationRate(self.mutation_rate));
        }
        Ok(())
    }
}
