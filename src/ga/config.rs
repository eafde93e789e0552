//! GA parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

use super::MutationKind;

/// Parameters for a [`GaRunner`](super::GaRunner) run.
///
/// # Examples
///
/// ```
/// use tsp3d::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_target_length(1700.0);
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.target_length, Some(1700.0));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Individuals per generation.
    pub population_size: usize,
    /// Probability that a child is mutated.
    pub mutation_rate: f64,
    /// Mutation operator applied to children.
    pub mutation: MutationKind,
    /// Keep city 0 as the first city of every path.
    ///
    /// Initial paths shuffle only the remaining cities and mutation never
    /// touches position 0. Order crossover already keeps a start city that
    /// both parents share.
    pub fixed_start: bool,
    /// Generation cap.
    pub max_generations: usize,
    /// Stop as soon as any child is shorter than this length.
    ///
    /// `None` disables the convergence check.
    pub target_length: Option<f64>,
    /// Log progress every this many generations (0 disables).
    pub log_interval: usize,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            mutation_rate: 0.10,
            mutation: MutationKind::Swap,
            fixed_start: false,
            max_generations: 10_000,
            target_length: None,
            log_interval: 1000,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, population_size: usize) -> Self {
        self.population_size = population_size;
        self
    }

    /// Sets the per-child mutation probability.
    pub fn with_mutation_rate(mut self, mutation_rate: f64) -> Self {
        self.mutation_rate = mutation_rate;
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, mutation: MutationKind) -> Self {
        self.mutation = mutation;
        self
    }

    /// Keeps city 0 fixed at the start of every path.
    pub fn with_fixed_start(mut self, fixed_start: bool) -> Self {
        self.fixed_start = fixed_start;
        self
    }

    /// Sets the generation cap.
    pub fn with_max_generations(mut self, max_generations: usize) -> Self {
        self.max_generations = max_generations;
        self
    }

    /// Enables convergence once a child beats `target_length`.
    pub fn with_target_length(mut self, target_length: f64) -> Self {
        self.target_length = Some(target_length);
        self
    }

    /// Sets the progress logging interval.
    pub fn with_log_interval(mut self, log_interval: usize) -> Self {
        self.log_interval = log_interval;
        self
    }

    /// Checks every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(TspError::InvalidConfig(
                "population_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TspError::InvalidConfig(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if let Some(t) = self.target_length {
            if t.is_nan() {
                return Err(TspError::InvalidConfig("target_length is NaN".into()));
            }
        }
        Ok(())
    }
}
