//! Individual: a tour with its cached fitness.

use serde::Serialize;

use crate::distance::DistanceSource;
use crate::evaluation::tour_length;

/// A candidate tour paired with its closed length.
///
/// Fitness is computed whenever the path is set, so it always matches the
/// current path. Lower fitness = better individual.
///
/// # Examples
///
/// ```
/// use tsp3d::ga::Individual;
/// use tsp3d::models::points_from_coords;
///
/// let points = points_from_coords(&[[0.0, 0.0, 0.0], [0.0, 3.0, 0.0]]);
/// let ind = Individual::new(vec![1, 0], points.as_slice());
/// assert_eq!(ind.path(), &[1, 0]);
/// assert_eq!(ind.fitness(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Individual {
    path: Vec<usize>,
    fitness: f64,
}

impl Individual {
    /// Creates an individual and evaluates its path.
    pub fn new<D: DistanceSource + ?Sized>(path: Vec<usize>, distances: &D) -> Self {
        let fitness = tour_length(&path, distances);
        Self { path, fitness }
    }

    /// The visiting order.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Closed tour length of [`path`](Self::path).
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Number of cities in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns true if the path has no cities.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Consumes the individual, returning its path.
    pub fn into_path(self) -> Vec<usize> {
        self.path
    }
}
