//! ACO parameters.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TspError};

/// Parameters for an [`AntColony`](super::AntColony) run.
///
/// # Examples
///
/// ```
/// use tsp3d::aco::AcoConfig;
///
/// let config = AcoConfig::default().with_num_ants(20).with_beta(3.0);
/// assert_eq!(config.num_ants, 20);
/// assert_eq!(config.num_iterations, 100);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcoConfig {
    /// Ants spawned per iteration.
    pub num_ants: usize,
    /// Fixed number of iterations; there is no early stopping.
    pub num_iterations: usize,
    /// Exponent applied to the pheromone level.
    pub alpha: f64,
    /// Exponent applied to the inverse distance.
    pub beta: f64,
    /// Fraction of every trail removed once per iteration, in `[0, 1)`.
    pub evaporation_rate: f64,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            num_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.1,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, num_ants: usize) -> Self {
        self.num_ants = num_ants;
        self
    }

    /// Sets the number of iterations.
    pub fn with_num_iterations(mut self, num_iterations: usize) -> Self {
        self.num_iterations = num_iterations;
        self
    }

    /// Sets the pheromone exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the visibility exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation_rate(mut self, evaporation_rate: f64) -> Self {
        self.evaporation_rate = evaporation_rate;
        self
    }

    /// Checks every parameter is in range.
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(TspError::InvalidConfig("num_ants must be at least 1".into()));
        }
        if self.num_iterations == 0 {
            return Err(TspError::InvalidConfig(
                "num_iterations must be at least 1".into(),
            ));
        }
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(TspError::InvalidConfig(
                "alpha and beta must be finite".into(),
            ));
        }
        // A rate of 1.0 would zero every trail and break positivity.
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(TspError::InvalidConfig(format!(
                "evaporation_rate must be in [0, 1), got {}",
                self.evaporation_rate
            )));
        }
        Ok(())
    }
}
