//! Constructive heuristics for building tours without search.
//!
//! - [`nearest_neighbor`] — Greedy nearest-unvisited-city tour, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::{nearest_neighbor, nearest_neighbor_from};
