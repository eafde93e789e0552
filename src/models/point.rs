//! 3D point type.

use serde::{Deserialize, Serialize};

/// A location in 3D space.
///
/// The `id` is the point's position in the input sequence, so tour indices
/// and point ids coincide for point sets produced by the loader.
///
/// # Examples
///
/// ```
/// use tsp3d::models::Point;
///
/// let a = Point::new(0, 0.0, 0.0, 0.0);
/// let b = Point::new(1, 1.0, 2.0, 2.0);
/// assert!((a.distance_to(&b) - 3.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
    z: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, x: f64, y: f64, z: f64) -> Self {
        Self { id, x, y, z }
    }

    /// Input-order identifier.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z-coordinate.
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Builds points from raw coordinates, assigning ids in sequence order.
///
/// ```
/// use tsp3d::models::points_from_coords;
///
/// let pts = points_from_coords(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]);
/// assert_eq!(pts[1].id(), 1);
/// ```
pub fn points_from_coords(coords: &[[f64; 3]]) -> Vec<Point> {
    coords
        .iter()
        .enumerate()
        .map(|(id, &[x, y, z])| Point::new(id, x, y, z))
        .collect()
}
