//! ACO driver: iterated construction and pheromone update.

use rand::Rng;
use serde::Serialize;

use crate::distance::DistanceSource;
use crate::error::{Result, TspError};
use crate::evaluation::tour_length;
use crate::models::Tour;

use super::{AcoConfig, Ant, PheromoneMatrix};

/// Outcome of an ACO run.
#[derive(Debug, Clone, Serialize)]
pub struct AcoResult {
    /// Best tour found.
    pub tour: Tour,
    /// Closed length of `tour`.
    pub length: f64,
    /// Iterations performed.
    pub iterations: usize,
}

/// An ant colony bound to one problem instance.
///
/// Owns the pheromone matrix and the best-so-far tour, so independent
/// colonies can run side by side in one process.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp3d::aco::{AcoConfig, AntColony};
/// use tsp3d::distance::DistanceMatrix;
/// use tsp3d::models::points_from_coords;
///
/// let points = points_from_coords(&[
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [1.0, 1.0, 0.0],
///     [0.0, 1.0, 0.0],
/// ]);
/// let dm = DistanceMatrix::from_points(&points);
/// let colony = AntColony::new(&dm, AcoConfig::default()).unwrap();
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let result = colony.run(&mut rng);
/// assert_eq!(result.length, 4.0);
/// ```
pub struct AntColony<'a, D: DistanceSource + ?Sized> {
    distances: &'a D,
    config: AcoConfig,
    pheromones: PheromoneMatrix,
    best_tour: Vec<usize>,
    best_length: f64,
    iteration: usize,
}

impl<'a, D: DistanceSource + ?Sized> AntColony<'a, D> {
    /// Creates a colony with uniform trails.
    ///
    /// Fails if the config is out of range or the instance has no cities.
    pub fn new(distances: &'a D, config: AcoConfig) -> Result<Self> {
        config.validate()?;
        let n = distances.size();
        if n == 0 {
            return Err(TspError::EmptyInstance);
        }
        Ok(Self {
            distances,
            config,
            pheromones: PheromoneMatrix::new(n),
            best_tour: (0..n).collect(),
            best_length: f64::INFINITY,
            iteration: 0,
        })
    }

    /// Current trail matrix.
    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// Best tour so far. Meaningless until the first iteration has run.
    pub fn best_tour(&self) -> &[usize] {
        &self.best_tour
    }

    /// Length of the best tour so far; infinite before the first iteration.
    pub fn best_length(&self) -> f64 {
        self.best_length
    }

    /// Iterations completed so far.
    pub fn iterations(&self) -> usize {
        self.iteration
    }

    /// Runs one iteration and returns the length of its best ant.
    ///
    /// Every ant builds a full tour against the same trail snapshot; the
    /// best-so-far is replaced only on strict improvement; the trails are
    /// then updated with all of this iteration's tours.
    pub fn iterate<R: Rng>(&mut self, rng: &mut R) -> f64 {
        let n = self.distances.size();
        let AcoConfig {
            num_ants,
            alpha,
            beta,
            evaporation_rate,
            ..
        } = self.config;

        let mut ants = Vec::with_capacity(num_ants);
        for _ in 0..num_ants {
            let mut ant = Ant::place(n, rng);
            ant.construct(&self.pheromones, self.distances, alpha, beta, rng);
            ants.push(ant);
        }

        let mut iteration_best = f64::INFINITY;
        for ant in &ants {
            let length = tour_length(ant.tour(), self.distances);
            iteration_best = iteration_best.min(length);
            if length < self.best_length {
                self.best_length = length;
                self.best_tour = ant.tour().to_vec();
                tracing::info!(
                    iteration = self.iteration,
                    best = self.best_length,
                    "aco improved best tour"
                );
            }
        }

        self.pheromones
            .update(ants.iter().map(Ant::tour), self.distances, evaporation_rate);
        tracing::debug!(
            iteration = self.iteration,
            iteration_best,
            best = self.best_length,
            "aco iteration"
        );
        self.iteration += 1;
        iteration_best
    }

    /// Runs the configured number of iterations and returns the best tour.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> AcoResult {
        for _ in 0..self.config.num_iterations {
            self.iterate(rng);
        }
        tracing::info!(
            iterations = self.iteration,
            length = self.best_length,
            "aco finished"
        );
        AcoResult {
            tour: Tour::from_valid(self.best_tour),
            length: self.best_length,
            iterations: self.iteration,
        }
    }
}

/// Builds a colony and runs it to completion.
pub fn solve<D, R>(distances: &D, config: AcoConfig, rng: &mut R) -> Result<AcoResult>
where
    D: DistanceSource + ?Sized,
    R: Rng,
{
    Ok(AntColony::new(distances, config)?.run(rng))
}
