//! Domain model types for 3D traveling salesman problems.
//!
//! Points are immutable once loaded; tours are validated permutations of
//! the point indices.

mod point;
mod tour;

pub use point::{points_from_coords, Point};
pub use tour::{is_permutation, validate_permutation, Tour};
