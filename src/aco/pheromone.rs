//! Pheromone trail matrix.

use crate::distance::{is_symmetric_within, DistanceSource, MIN_EDGE_DISTANCE};

/// Initial trail strength on every edge.
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// A dense symmetric n×n matrix of trail strengths.
///
/// Every entry starts at [`INITIAL_PHEROMONE`]. Deposits are always applied
/// to both `(i, j)` and `(j, i)`, so the matrix stays symmetric.
///
/// # Examples
///
/// ```
/// use tsp3d::aco::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(3);
/// tau.deposit(0, 2, 0.5);
/// assert_eq!(tau.get(0, 2), 1.5);
/// assert_eq!(tau.get(2, 0), 1.5);
/// tau.evaporate(0.5);
/// assert_eq!(tau.get(1, 2), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a uniform matrix for `size` cities.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![INITIAL_PHEROMONE; size * size],
            size,
        }
    }

    /// Trail strength on edge `(from, to)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Adds `amount` to both directions of edge `(a, b)`.
    pub fn deposit(&mut self, a: usize, b: usize, amount: f64) {
        self.data[a * self.size + b] += amount;
        if a != b {
            self.data[b * self.size + a] += amount;
        }
    }

    /// Scales every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for v in &mut self.data {
            *v *= keep;
        }
    }

    /// Applies one iteration's update: reinforcement, then evaporation.
    ///
    /// Each consecutive pair `(i, j)` of every tour receives `1 / d(i, j)`
    /// on both directions. The deposit is not scaled by total tour length,
    /// and the closing edge from last to first city is not reinforced.
    /// Once all tours are deposited the whole matrix decays by
    /// `evaporation_rate`.
    pub fn update<'t, I, D>(&mut self, tours: I, distances: &D, evaporation_rate: f64)
    where
        I: IntoIterator<Item = &'t [usize]>,
        D: DistanceSource + ?Sized,
    {
        for tour in tours {
            for leg in tour.windows(2) {
                let (a, b) = (leg[0], leg[1]);
                let d = distances.distance(a, b).max(MIN_EDGE_DISTANCE);
                self.deposit(a, b, 1.0 / d);
            }
        }
        self.evaporate(evaporation_rate);
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        is_symmetric_within(&self.data, self.size, tol)
    }

    /// Smallest trail strength in the matrix, or `None` if it is empty.
    pub fn min_value(&self) -> Option<f64> {
        self.data.iter().copied().reduce(f64::min)
    }
}
