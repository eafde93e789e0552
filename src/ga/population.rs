//! Population construction and one-generation evolution.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceSource;

use super::operators::{order_crossover, tournament_selection};
use super::{GaConfig, Individual};

/// Children produced by one call to [`evolve_population`].
#[derive(Debug, Clone)]
pub struct Evolution {
    /// Evaluated children in creation order.
    ///
    /// Holds a full population only when `converged` is false.
    pub children: Vec<Individual>,
    /// True if a child beat the target length and generation stopped early.
    pub converged: bool,
}

/// Creates `size` individuals with uniformly shuffled paths.
///
/// With `fixed_start`, every path begins at city 0 and only the remaining
/// cities are shuffled.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp3d::ga::random_population;
/// use tsp3d::models::{is_permutation, points_from_coords};
///
/// let points = points_from_coords(&[[0.0; 3], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]);
/// let mut rng = StdRng::seed_from_u64(3);
/// let pop = random_population(5, points.as_slice(), false, &mut rng);
/// assert_eq!(pop.len(), 5);
/// assert!(pop.iter().all(|ind| is_permutation(ind.path(), 3)));
/// ```
pub fn random_population<D, R>(
    size: usize,
    distances: &D,
    fixed_start: bool,
    rng: &mut R,
) -> Vec<Individual>
where
    D: DistanceSource + ?Sized,
    R: Rng,
{
    let n = distances.size();
    (0..size)
        .map(|_| {
            let mut path: Vec<usize> = (0..n).collect();
            let free = if fixed_start && n > 0 { &mut path[1..] } else { &mut path[..] };
            free.shuffle(rng);
            Individual::new(path, distances)
        })
        .collect()
}

/// The lowest-fitness individual, or `None` for an empty population.
///
/// Ties keep the earliest individual.
pub fn population_best(population: &[Individual]) -> Option<&Individual> {
    population.iter().reduce(|best, ind| {
        if ind.fitness() < best.fitness() {
            ind
        } else {
            best
        }
    })
}

/// Breeds one generation from `population`.
///
/// Each child comes from two tournament-selected parents, order crossover,
/// and `config.mutation` applied with `config.mutation_rate`, and is then
/// evaluated. With `config.fixed_start` the mutation skips position 0. If
/// `config.target_length` is set and a child falls below it, generation
/// stops right there and the partial set of children is returned with
/// `converged = true`.
///
/// # Panics
///
/// Panics if `population` is empty.
pub fn evolve_population<D, R>(
    population: &[Individual],
    distances: &D,
    config: &GaConfig,
    rng: &mut R,
) -> Evolution
where
    D: DistanceSource + ?Sized,
    R: Rng,
{
    let mut children = Vec::with_capacity(config.population_size);
    for _ in 0..config.population_size {
        let parent1 = tournament_selection(population, rng);
        let parent2 = tournament_selection(population, rng);
        let mut path = order_crossover(parent1.path(), parent2.path(), rng);
        let offset = usize::from(config.fixed_start).min(path.len());
        config
            .mutation
            .apply(&mut path[offset..], config.mutation_rate, rng);
        let child = Individual::new(path, distances);

        let hit_target = config
            .target_length
            .is_some_and(|target| child.fitness() < target);
        children.push(child);
        if hit_target {
            return Evolution {
                children,
                converged: true,
            };
        }
    }
    Evolution {
        children,
        converged: false,
    }
}
