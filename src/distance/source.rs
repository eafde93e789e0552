//! Distance lookup capability.

use crate::models::Point;

/// Floor applied to edge lengths wherever their reciprocal is taken.
///
/// Duplicate coordinates produce zero-length edges; clamping keeps the ACO
/// visibility `(1/d)^beta` and pheromone deposit `1/d` finite.
pub const MIN_EDGE_DISTANCE: f64 = 1e-10;

/// Anything that can report the distance between two city indices.
///
/// Tour evaluation only needs this capability, so it works the same on a
/// precomputed [`DistanceMatrix`](super::DistanceMatrix) or directly on a
/// slice of points.
///
/// # Examples
///
/// ```
/// use tsp3d::distance::{DistanceMatrix, DistanceSource};
/// use tsp3d::models::points_from_coords;
///
/// let points = points_from_coords(&[[0.0, 0.0, 0.0], [3.0, 4.0, 0.0]]);
/// let dm = DistanceMatrix::from_points(&points);
/// assert_eq!(dm.distance(0, 1), points.distance(0, 1));
/// assert_eq!(points.size(), 2);
/// ```
pub trait DistanceSource {
    /// Number of cities.
    fn size(&self) -> usize;

    /// Distance between city `from` and city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    fn distance(&self, from: usize, to: usize) -> f64;
}

impl DistanceSource for [Point] {
    fn size(&self) -> usize {
        self.len()
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self[from].distance_to(&self[to])
    }
}

impl DistanceSource for Vec<Point> {
    fn size(&self) -> usize {
        self.len()
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.as_slice().distance(from, to)
    }
}

impl<T: DistanceSource + ?Sized> DistanceSource for &T {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        (**self).distance(from, to)
    }
}
