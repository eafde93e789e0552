//! Ant colony optimization for the 3D TSP.
//!
//! - [`PheromoneMatrix`] — Symmetric trail-strength matrix with deposit and evaporation
//! - [`Ant`] — Probabilistic tour construction biased by pheromone and inverse distance
//! - [`AntColony`] — Iterates construction and pheromone update, tracking the best tour
//!
//! # Reference
//!
//! Dorigo, M., Maniezzo, V. & Colorni, A. (1996). "Ant system: optimization
//! by a colony of cooperating agents", *IEEE Transactions on Systems, Man,
//! and Cybernetics, Part B* 26(1), 29-41.

mod ant;
mod colony;
mod config;
mod pheromone;

pub use ant::{choose_next_city, log_transition_weight, transition_weight, Ant};
pub use colony::{solve, AcoResult, AntColony};
pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
