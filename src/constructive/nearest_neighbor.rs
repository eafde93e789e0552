//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a fixed city, always move to the
//! nearest unvisited city, then close the loop back to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! The simplest TSP construction heuristic. Tours typically land 20-25%
//! above optimal, which makes it a useful baseline for the metaheuristics.

use crate::distance::DistanceSource;
use crate::models::Tour;

/// Constructs a tour with the nearest-neighbor heuristic starting at city 0.
///
/// Returns an empty tour for an empty instance.
///
/// # Examples
///
/// ```
/// use tsp3d::models::points_from_coords;
/// use tsp3d::distance::DistanceMatrix;
/// use tsp3d::constructive::nearest_neighbor;
///
/// let points = points_from_coords(&[
///     [0.0, 0.0, 0.0],
///     [3.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [2.0, 0.0, 0.0],
/// ]);
/// let dm = DistanceMatrix::from_points(&points);
/// let tour = nearest_neighbor(&dm);
/// assert_eq!(tour.cities(), &[0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor<D: DistanceSource + ?Sized>(distances: &D) -> Tour {
    nearest_neighbor_from(distances, 0)
}

/// Constructs a nearest-neighbor tour starting at `start`.
///
/// Ties between equally distant cities go to the lowest index.
///
/// # Panics
///
/// Panics if the instance is non-empty and `start` is out of bounds.
pub fn nearest_neighbor_from<D: DistanceSource + ?Sized>(distances: &D, start: usize) -> Tour {
    let n = distances.size();
    let mut cities = Vec::with_capacity(n);
    if n > 0 {
        let mut visited = vec![false; n];
        let mut current = start;
        visited[current] = true;
        cities.push(current);

        for _ in 1..n {
            let mut best: Option<(usize, f64)> = None;
            for (i, &seen) in visited.iter().enumerate() {
                if seen {
                    continue;
                }
                let d = distances.distance(current, i);
                match best {
                    Some((_, bd)) if d >= bd => {}
                    _ => best = Some((i, d)),
                }
            }
            let Some((next, _)) = best else { break };
            visited[next] = true;
            cities.push(next);
            current = next;
        }
    }

    Tour::from_valid(cities)
}
