//! Combined solver configuration, loadable from JSON.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::aco::AcoConfig;
use crate::error::Result;
use crate::ga::GaConfig;

/// Parameters for every solver, as read from a config file.
///
/// Missing sections and fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// use tsp3d::config::SolverConfig;
///
/// let config = SolverConfig::from_json_str(r#"{ "ga": { "population_size": 30 } }"#).unwrap();
/// assert_eq!(config.ga.population_size, 30);
/// assert_eq!(config.aco.num_ants, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Ant colony parameters.
    pub aco: AcoConfig,
    /// Genetic algorithm parameters.
    pub ga: GaConfig,
}

impl SolverConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let config: Self = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates both sections.
    pub fn validate(&self) -> Result<()> {
        self.aco.validate()?;
        self.ga.validate()
    }
}
