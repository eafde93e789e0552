//! Pairwise distances between points.
//!
//! Provides a dense precomputed matrix and the [`DistanceSource`] capability
//! that evaluators and solvers are written against.

mod matrix;
mod source;

pub use matrix::DistanceMatrix;
pub(crate) use matrix::is_symmetric_within;
pub use source::{DistanceSource, MIN_EDGE_DISTANCE};
