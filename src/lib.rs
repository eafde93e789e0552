//! # tsp3d
//!
//! Traveling salesman tours over 3D point sets, with two interchangeable
//! metaheuristics and a greedy baseline.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour)
//! - [`distance`] — Distance matrix and the `DistanceSource` capability
//! - [`evaluation`] — Closed-loop tour length
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`aco`] — Ant colony optimization (pheromone model, ants, colony driver)
//! - [`ga`] — Genetic algorithm (tournament selection, order crossover, swap mutation)
//! - [`loader`] — Point file parsing
//! - [`config`] — JSON-loadable solver parameters
//!
//! All randomness flows through an explicit `rand::Rng` argument, so runs
//! are reproducible from a seed.

pub mod aco;
pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod loader;
pub mod models;

pub use error::{Result, TspError};
