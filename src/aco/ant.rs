//! Ant tour construction.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::distance::{DistanceSource, MIN_EDGE_DISTANCE};

use super::PheromoneMatrix;

/// Desirability of moving along an edge with the given trail and length:
/// `pheromone^alpha * (1 / distance)^beta`.
///
/// Distances below [`MIN_EDGE_DISTANCE`] are clamped, so a zero-length edge
/// never divides by zero. Large exponents can still overflow the product
/// to `+inf`; [`choose_next_city`] samples from [`log_transition_weight`]
/// instead.
///
/// ```
/// use tsp3d::aco::transition_weight;
///
/// assert_eq!(transition_weight(2.0, 0.5, 1.0, 2.0), 8.0);
/// assert!(transition_weight(1.0, 0.0, 1.0, 2.0).is_finite());
/// assert_eq!(transition_weight(1.0, 0.0, 1.0, 40.0), f64::INFINITY);
/// ```
pub fn transition_weight(pheromone: f64, distance: f64, alpha: f64, beta: f64) -> f64 {
    let visibility = 1.0 / distance.max(MIN_EDGE_DISTANCE);
    pheromone.powf(alpha) * visibility.powf(beta)
}

/// Natural log of [`transition_weight`], finite for any finite exponents
/// and positive finite trail.
///
/// A zero exponent contributes nothing, matching `x^0 = 1`. A zero trail
/// with positive `alpha` yields `-inf` (weight zero).
///
/// ```
/// use tsp3d::aco::{log_transition_weight, transition_weight};
///
/// let w = transition_weight(3.0, 0.5, 1.0, 2.0);
/// assert!((log_transition_weight(3.0, 0.5, 1.0, 2.0) - w.ln()).abs() < 1e-12);
/// assert!(log_transition_weight(1.0, 0.0, 1.0, 40.0).is_finite());
/// ```
pub fn log_transition_weight(pheromone: f64, distance: f64, alpha: f64, beta: f64) -> f64 {
    let log_trail = if alpha == 0.0 { 0.0 } else { alpha * pheromone.ln() };
    let log_visibility = if beta == 0.0 {
        0.0
    } else {
        -beta * distance.max(MIN_EDGE_DISTANCE).ln()
    };
    log_trail + log_visibility
}

/// Samples the next city among `candidates` from `current`.
///
/// Each candidate is weighted by [`transition_weight`] and one is drawn from
/// the normalized categorical distribution. Weights are computed in log
/// space and shifted by their maximum before exponentiation, so every
/// sampled weight lies in `[0, 1]` and the largest is exactly 1. This keeps
/// the proportions intact even when the raw products would overflow.
///
/// A single candidate is returned without sampling. Candidates whose log
/// weight is `+inf` (an infinite trail) share the choice uniformly; if no
/// weight is usable (all zero or NaN) the choice is uniform over all
/// candidates.
///
/// # Panics
///
/// Panics if `candidates` is empty.
pub fn choose_next_city<D, R>(
    current: usize,
    candidates: &[usize],
    pheromones: &PheromoneMatrix,
    distances: &D,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> usize
where
    D: DistanceSource + ?Sized,
    R: Rng,
{
    if let [only] = candidates {
        return *only;
    }

    let log_weights: Vec<f64> = candidates
        .iter()
        .map(|&c| {
            log_transition_weight(
                pheromones.get(current, c),
                distances.distance(current, c),
                alpha,
                beta,
            )
        })
        .collect();
    let max = log_weights
        .iter()
        .copied()
        .filter(|w| !w.is_nan())
        .fold(f64::NEG_INFINITY, f64::max);

    if max == f64::INFINITY {
        let dominant: Vec<usize> = candidates
            .iter()
            .zip(&log_weights)
            .filter(|&(_, &w)| w == f64::INFINITY)
            .map(|(&c, _)| c)
            .collect();
        tracing::trace!(current, count = dominant.len(), "infinite transition weights");
        return dominant[rng.random_range(0..dominant.len())];
    }
    if max == f64::NEG_INFINITY {
        tracing::trace!(current, "no usable transition weights, choosing uniformly");
        return candidates[rng.random_range(0..candidates.len())];
    }

    let weights = log_weights.iter().map(|&w| {
        if w.is_nan() {
            0.0
        } else {
            (w - max).exp()
        }
    });
    match WeightedIndex::new(weights) {
        Ok(dist) => candidates[dist.sample(rng)],
        Err(err) => {
            tracing::trace!(current, %err, "unusable transition weights, choosing uniformly");
            candidates[rng.random_range(0..candidates.len())]
        }
    }
}

/// A single ant building one tour.
///
/// The ant starts at one city and repeatedly moves to an unvisited city
/// until every city has been visited. The tour is closed implicitly.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp3d::aco::{Ant, PheromoneMatrix};
/// use tsp3d::distance::DistanceMatrix;
/// use tsp3d::models::{is_permutation, points_from_coords};
///
/// let points = points_from_coords(&[
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [1.0, 1.0, 0.0],
/// ]);
/// let dm = DistanceMatrix::from_points(&points);
/// let tau = PheromoneMatrix::new(3);
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let mut ant = Ant::place(3, &mut rng);
/// ant.construct(&tau, &dm, 1.0, 2.0, &mut rng);
/// assert!(ant.is_complete());
/// assert!(is_permutation(ant.tour(), 3));
/// ```
#[derive(Debug, Clone)]
pub struct Ant {
    tour: Vec<usize>,
    visited: Vec<bool>,
}

impl Ant {
    /// Creates an ant at `start` in an instance of `num_cities` cities.
    ///
    /// # Panics
    ///
    /// Panics if `start >= num_cities`.
    pub fn new(start: usize, num_cities: usize) -> Self {
        let mut visited = vec![false; num_cities];
        visited[start] = true;
        let mut tour = Vec::with_capacity(num_cities);
        tour.push(start);
        Self { tour, visited }
    }

    /// Creates an ant at a uniformly random city.
    ///
    /// # Panics
    ///
    /// Panics if `num_cities` is zero.
    pub fn place<R: Rng>(num_cities: usize, rng: &mut R) -> Self {
        Self::new(rng.random_range(0..num_cities), num_cities)
    }

    /// City the ant currently stands on.
    pub fn current(&self) -> usize {
        self.tour[self.tour.len() - 1]
    }

    /// Cities visited so far, in order.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    /// Consumes the ant, returning its tour.
    pub fn into_tour(self) -> Vec<usize> {
        self.tour
    }

    /// Returns `true` once every city has been visited.
    pub fn is_complete(&self) -> bool {
        self.tour.len() == self.visited.len()
    }

    /// Cities not yet visited, in index order.
    pub fn unvisited(&self) -> Vec<usize> {
        self.visited
            .iter()
            .enumerate()
            .filter(|&(_, &seen)| !seen)
            .map(|(c, _)| c)
            .collect()
    }

    /// Moves to one more city. Returns the city moved to, or `None` if the
    /// tour was already complete.
    pub fn step<D, R>(
        &mut self,
        pheromones: &PheromoneMatrix,
        distances: &D,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) -> Option<usize>
    where
        D: DistanceSource + ?Sized,
        R: Rng,
    {
        if self.is_complete() {
            return None;
        }
        let candidates = self.unvisited();
        let next = choose_next_city(
            self.current(),
            &candidates,
            pheromones,
            distances,
            alpha,
            beta,
            rng,
        );
        self.visited[next] = true;
        self.tour.push(next);
        Some(next)
    }

    /// Steps until the tour is complete.
    pub fn construct<D, R>(
        &mut self,
        pheromones: &PheromoneMatrix,
        distances: &D,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) where
        D: DistanceSource + ?Sized,
        R: Rng,
    {
        while self
            .step(pheromones, distances, alpha, beta, rng)
            .is_some()
        {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{is_permutation, points_from_coords};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cloud(n: usize) -> DistanceMatrix {
        let coords: Vec<[f64; 3]> = (0..n)
            .map(|i| {
                let t = i as f64;
                [t.cos() * 10.0, t.sin() * 10.0, t * 0.5]
            })
            .collect();
        DistanceMatrix::from_points(&points_from_coords(&coords))
    }

    #[test]
    fn test_weight_formula() {
        assert!((transition_weight(1.0, 2.0, 1.0, 2.0) - 0.25).abs() < 1e-12);
        assert!((transition_weight(3.0, 1.0, 2.0, 1.0) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_distance_weight_finite() {
        let w = transition_weight(1.0, 0.0, 1.0, 2.0);
        assert!(w.is_finite());
        assert!(w > 1e10);
    }

    #[test]
    fn test_two_city_tour_is_forced() {
        let dm = cloud(2);
        let tau = PheromoneMatrix::new(2);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ant = Ant::place(2, &mut rng);
            let start = ant.current();
            ant.construct(&tau, &dm, 1.0, 2.0, &mut rng);
            assert_eq!(ant.tour(), &[start, 1 - start]);
        }
    }

    #[test]
    fn test_single_city_is_complete_immediately() {
        let dm = cloud(1);
        let tau = PheromoneMatrix::new(1);
        let mut rng = StdRng::seed_from_u64(1);
        let mut ant = Ant::new(0, 1);
        assert!(ant.is_complete());
        assert_eq!(ant.step(&tau, &dm, 1.0, 2.0, &mut rng), None);
        assert_eq!(ant.into_tour(), vec![0]);
    }

    #[test]
    fn test_construct_yields_permutation() {
        let dm = cloud(15);
        let tau = PheromoneMatrix::new(15);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            let mut ant = Ant::place(15, &mut rng);
            ant.construct(&tau, &dm, 1.0, 2.0, &mut rng);
            assert!(is_permutation(ant.tour(), 15));
        }
    }

    #[test]
    fn test_duplicate_points_still_construct() {
        let dm = DistanceMatrix::from_points(&points_from_coords(&[
            [0.0; 3],
            [0.0; 3],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
        ]));
        let tau = PheromoneMatrix::new(4);
        let mut rng = StdRng::seed_from_u64(3);
        let mut ant = Ant::new(0, 4);
        ant.construct(&tau, &dm, 1.0, 2.0, &mut rng);
        assert!(is_permutation(ant.tour(), 4));
        // the coincident twin dominates every other choice
        assert_eq!(ant.tour()[1], 1);
    }

    #[test]
    fn test_choice_biased_towards_near_city() {
        // city 1 at distance 1, city 2 at distance 10: weight ratio 100:1
        let dm = DistanceMatrix::from_points(&points_from_coords(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [-10.0, 0.0, 0.0],
        ]));
        let tau = PheromoneMatrix::new(3);
        let mut rng = StdRng::seed_from_u64(9);
        let near = (0..1000)
            .filter(|_| choose_next_city(0, &[1, 2], &tau, &dm, 1.0, 2.0, &mut rng) == 1)
            .count();
        assert!(near > 950, "near city chosen {near} times");
        assert!(near < 1000, "sampling must stay stochastic");
    }

    fn duplicate_start() -> DistanceMatrix {
        // city 1 coincides with city 0, city 2 is one unit away
        DistanceMatrix::from_points(&points_from_coords(&[
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
        ]))
    }

    #[test]
    fn test_log_weight_matches_weight() {
        let cases = [
            (1.0, 2.0, 1.0, 2.0),
            (0.3, 7.5, 2.0, 0.5),
            (4.0, 1.0, 0.0, 3.0),
        ];
        for (tau, d, alpha, beta) in cases {
            let expected = transition_weight(tau, d, alpha, beta).ln();
            assert!((log_transition_weight(tau, d, alpha, beta) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_log_weight_zero_exponents() {
        assert_eq!(log_transition_weight(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(log_transition_weight(0.0, 1.0, 1.0, 2.0), f64::NEG_INFINITY);
    }

    #[test]
    fn test_duplicate_point_with_large_beta() {
        let dm = duplicate_start();
        let tau = PheromoneMatrix::new(3);
        assert_eq!(transition_weight(1.0, dm.get(0, 1), 1.0, 40.0), f64::INFINITY);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(choose_next_city(0, &[1, 2], &tau, &dm, 1.0, 40.0, &mut rng), 1);
        }
    }

    #[test]
    fn test_overflowing_weights_keep_proportions() {
        // raw weights 100^400 and 50^400 both overflow; their ratio is 2^400
        let dm = DistanceMatrix::from_points(&points_from_coords(&[
            [0.0, 0.0, 0.0],
            [0.01, 0.0, 0.0],
            [-0.02, 0.0, 0.0],
        ]));
        let tau = PheromoneMatrix::new(3);
        assert!(transition_weight(1.0, dm.get(0, 1), 1.0, 400.0).is_infinite());
        assert!(transition_weight(1.0, dm.get(0, 2), 1.0, 400.0).is_infinite());
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            assert_eq!(choose_next_city(0, &[1, 2], &tau, &dm, 1.0, 400.0, &mut rng), 1);
        }
    }

    #[test]
    fn test_tied_overflowing_weights_stay_stochastic() {
        // both candidates coincide with the current city
        let dm =
            DistanceMatrix::from_points(&points_from_coords(&[[2.0; 3], [2.0; 3], [2.0; 3]]));
        let tau = PheromoneMatrix::new(3);
        let mut rng = StdRng::seed_from_u64(12);
        let ones = (0..400)
            .filter(|_| choose_next_city(0, &[1, 2], &tau, &dm, 1.0, 40.0, &mut rng) == 1)
            .count();
        assert!(ones > 100 && ones < 300, "city 1 chosen {ones} times");
    }

    #[test]
    fn test_infinite_trail_dominates() {
        let dm = cloud(4);
        let mut tau = PheromoneMatrix::new(4);
        tau.deposit(0, 3, f64::INFINITY);
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            assert_eq!(choose_next_city(0, &[1, 2, 3], &tau, &dm, 1.0, 2.0, &mut rng), 3);
        }

        tau.deposit(0, 1, f64::INFINITY);
        let picks: Vec<usize> = (0..200)
            .map(|_| choose_next_city(0, &[1, 2, 3], &tau, &dm, 1.0, 2.0, &mut rng))
            .collect();
        assert!(picks.iter().all(|&c| c == 1 || c == 3));
        assert!(picks.contains(&1) && picks.contains(&3));
    }

    #[test]
    fn test_construct_with_large_beta_on_duplicates() {
        let dm = duplicate_start();
        let tau = PheromoneMatrix::new(3);
        let mut rng = StdRng::seed_from_u64(14);
        for _ in 0..20 {
            let mut ant = Ant::place(3, &mut rng);
            ant.construct(&tau, &dm, 1.0, 40.0, &mut rng);
            assert!(is_permutation(ant.tour(), 3));
        }
    }

    #[test]
    fn test_fallback_on_zero_weights() {
        let dm = cloud(3);
        let mut tau = PheromoneMatrix::new(3);
        // drive trails to exactly zero
        tau.evaporate(1.0);
        let mut rng = StdRng::seed_from_u64(5);
        let next = choose_next_city(0, &[1, 2], &tau, &dm, 1.0, 2.0, &mut rng);
        assert!(next == 1 || next == 2);
    }
}
