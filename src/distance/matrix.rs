//! Dense distance matrix.

use crate::models::Point;

use super::DistanceSource;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per point set and read-only afterwards. Entries computed from
/// points are Euclidean, symmetric, and zero on the diagonal.
///
/// # Examples
///
/// ```
/// use tsp3d::models::points_from_coords;
/// use tsp3d::distance::DistanceMatrix;
///
/// let points = points_from_coords(&[
///     [0.0, 0.0, 0.0],
///     [3.0, 4.0, 0.0],
///     [3.0, 4.0, 12.0],
/// ]);
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.get(0, 2) - 13.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes the Euclidean distance matrix of a point set.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        is_symmetric_within(&self.data, self.size, tol)
    }
}

/// Checks a row-major `size`×`size` grid for symmetry within `tol`.
pub(crate) fn is_symmetric_within(data: &[f64], size: usize, tol: f64) -> bool {
    (0..size).all(|i| {
        ((i + 1)..size).all(|j| (data[i * size + j] - data[j * size + i]).abs() <= tol)
    })
}

impl DistanceSource for DistanceMatrix {
    fn size(&self) -> usize {
        self.size
    }

    fn distance(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}
