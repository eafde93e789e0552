//! Evolutionary operators on tour permutations.
//!
//! - [`tournament_selection`] — Binary tournament, sampled with replacement
//! - [`order_crossover`] — Order crossover (OX) with one inherited block
//! - [`swap_mutation`] — At most one random position swap per call
//! - [`inversion_mutation`] — Reverses one random segment
//! - [`adjacent_swap_mutation`] — One to three swaps of neighbouring positions
//!
//! [`MutationKind`] selects between the three mutations.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TspError;

use super::Individual;

/// Picks two individuals uniformly at random (with replacement) and returns
/// the one with strictly lower fitness; on a tie the second pick wins.
///
/// # Panics
///
/// Panics if `population` is empty.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp3d::ga::{tournament_selection, Individual};
/// use tsp3d::models::points_from_coords;
///
/// let points = points_from_coords(&[[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]]);
/// let pop = vec![Individual::new(vec![0, 1], points.as_slice())];
/// let mut rng = StdRng::seed_from_u64(1);
/// assert_eq!(tournament_selection(&pop, &mut rng).fitness(), 4.0);
/// ```
pub fn tournament_selection<'p, R: Rng>(
    population: &'p [Individual],
    rng: &mut R,
) -> &'p Individual {
    let first = &population[rng.random_range(0..population.len())];
    let second = &population[rng.random_range(0..population.len())];
    if first.fitness() < second.fitness() {
        first
    } else {
        second
    }
}

/// Order crossover with random cut points.
///
/// Draws `start` and `end` uniformly from `0..n` and delegates to
/// [`order_crossover_with_cuts`].
pub fn order_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let n = parent1.len();
    if n == 0 {
        return Vec::new();
    }
    let start = rng.random_range(0..n);
    let end = rng.random_range(0..n);
    order_crossover_with_cuts(parent1, parent2, start, end)
}

/// Order crossover with explicit cut points.
///
/// The child inherits `parent1[start..=end]` at the same positions. The
/// remaining positions are filled left to right, skipping over the
/// inherited block, with the cities of `parent2` in `parent2`'s order,
/// leaving out those already placed. Cut points are swapped if
/// `start > end`.
///
/// If both parents are permutations of `0..n`, so is the child.
///
/// # Panics
///
/// Panics if the parents differ in length or `end` is out of bounds.
///
/// # Examples
///
/// ```
/// use tsp3d::ga::order_crossover_with_cuts;
///
/// let p1 = [0, 1, 2, 3, 4, 5];
/// let p2 = [5, 4, 3, 2, 1, 0];
/// assert_eq!(order_crossover_with_cuts(&p1, &p2, 2, 3), vec![5, 4, 2, 3, 1, 0]);
/// ```
pub fn order_crossover_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    let (start, end) = if start > end { (end, start) } else { (start, end) };

    let mut child = vec![0; n];
    let mut placed = vec![false; n];
    for i in start..=end {
        child[i] = parent1[i];
        placed[parent1[i]] = true;
    }

    let mut index = 0;
    for &city in parent2 {
        if index == start {
            index = end + 1;
        }
        if !placed[city] {
            child[index] = city;
            placed[city] = true;
            index += 1;
        }
    }
    child
}

/// With probability `mutation_rate`, swaps two uniformly random positions.
///
/// Returns `true` if a swap was attempted. Both positions may coincide, in
/// which case the path is unchanged.
pub fn swap_mutation<R: Rng>(path: &mut [usize], mutation_rate: f64, rng: &mut R) -> bool {
    if path.is_empty() || !rng.random_bool(mutation_rate) {
        return false;
    }
    let i = rng.random_range(0..path.len());
    let j = rng.random_range(0..path.len());
    path.swap(i, j);
    true
}

/// With probability `mutation_rate`, reverses the segment between two
/// uniformly random positions (inclusive).
///
/// Returns `true` if an inversion was attempted. Coinciding positions leave
/// the path unchanged.
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp3d::ga::inversion_mutation;
///
/// let mut path = vec![0, 1, 2, 3, 4, 5];
/// let mut rng = StdRng::seed_from_u64(2);
/// assert!(inversion_mutation(&mut path, 1.0, &mut rng));
/// path.sort_unstable();
/// assert_eq!(path, vec![0, 1, 2, 3, 4, 5]);
/// ```
pub fn inversion_mutation<R: Rng>(path: &mut [usize], mutation_rate: f64, rng: &mut R) -> bool {
    if path.is_empty() || !rng.random_bool(mutation_rate) {
        return false;
    }
    let a = rng.random_range(0..path.len());
    let b = rng.random_range(0..path.len());
    let (start, end) = if a > b { (b, a) } else { (a, b) };
    path[start..=end].reverse();
    true
}

/// With probability `mutation_rate`, performs one to three swaps, each of a
/// uniformly random position with its right-hand neighbour.
///
/// Returns `true` if the swaps were attempted. Paths shorter than two
/// cities are never touched.
pub fn adjacent_swap_mutation<R: Rng>(
    path: &mut [usize],
    mutation_rate: f64,
    rng: &mut R,
) -> bool {
    if path.len() < 2 || !rng.random_bool(mutation_rate) {
        return false;
    }
    let swaps = rng.random_range(1..=3);
    for _ in 0..swaps {
        let i = rng.random_range(0..path.len() - 1);
        path.swap(i, i + 1);
    }
    true
}

/// Mutation operator applied to each child.
///
/// Parses from and serializes to `"swap"`, `"inversion"` or
/// `"adjacent_swap"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationKind {
    /// [`swap_mutation`].
    #[default]
    Swap,
    /// [`inversion_mutation`].
    Inversion,
    /// [`adjacent_swap_mutation`].
    AdjacentSwap,
}

impl MutationKind {
    /// Applies this mutation to `path` with probability `mutation_rate`.
    pub fn apply<R: Rng>(self, path: &mut [usize], mutation_rate: f64, rng: &mut R) -> bool {
        match self {
            Self::Swap => swap_mutation(path, mutation_rate, rng),
            Self::Inversion => inversion_mutation(path, mutation_rate, rng),
            Self::AdjacentSwap => adjacent_swap_mutation(path, mutation_rate, rng),
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Swap => "swap",
            Self::Inversion => "inversion",
            Self::AdjacentSwap => "adjacent_swap",
        })
    }
}

impl FromStr for MutationKind {
    type Err = TspError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "swap" => Ok(Self::Swap),
            "inversion" => Ok(Self::Inversion),
            "adjacent_swap" | "adjacent-swap" => Ok(Self::AdjacentSwap),
            other => Err(TspError::InvalidConfig(format!(
                "unknown mutation `{other}` (expected swap, inversion or adjacent_swap)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::models::{is_permutation, points_from_coords};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line(n: usize) -> DistanceMatrix {
        let coords: Vec<[f64; 3]> = (0..n).map(|i| [i as f64, 0.0, 0.0]).collect();
        DistanceMatrix::from_points(&points_from_coords(&coords))
    }

    #[test]
    fn test_tournament_never_returns_worse_of_distinct_pair() {
        let dm = line(5);
        let pop = vec![
            Individual::new(vec![0, 1, 2, 3, 4], &dm),
            Individual::new(vec![0, 2, 1, 3, 4], &dm),
            Individual::new(vec![0, 3, 1, 4, 2], &dm),
        ];
        // 8, 10, 12
        assert!(pop[0].fitness() < pop[1].fitness());
        assert!(pop[1].fitness() < pop[2].fitness());

        for seed in 0..200 {
            let mut probe = StdRng::seed_from_u64(seed);
            let i = probe.random_range(0..pop.len());
            let j = probe.random_range(0..pop.len());

            let mut rng = StdRng::seed_from_u64(seed);
            let picked = tournament_selection(&pop, &mut rng);
            assert_eq!(picked.fitness(), pop[i].fitness().min(pop[j].fitness()));
        }
    }

    #[test]
    fn test_tournament_tie_goes_to_second() {
        // Same fitness, different paths: 0-1-2 and 0-2-1 on a line are equal length.
        let dm = line(3);
        let a = Individual::new(vec![0, 1, 2], &dm);
        let b = Individual::new(vec![0, 2, 1], &dm);
        assert_eq!(a.fitness(), b.fitness());
        let pop = vec![a, b];

        let mut probe = StdRng::seed_from_u64(21);
        let _first = probe.random_range(0..2usize);
        let second = probe.random_range(0..2usize);

        let mut rng = StdRng::seed_from_u64(21);
        let picked = tournament_selection(&pop, &mut rng);
        assert_eq!(picked.path(), pop[second].path());
    }

    #[test]
    fn test_crossover_known_child() {
        let p1 = [0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = [7, 6, 5, 4, 3, 2, 1, 0];
        let child = order_crossover_with_cuts(&p1, &p2, 3, 5);
        assert_eq!(child, vec![7, 6, 2, 3, 4, 5, 1, 0]);
    }

    #[test]
    fn test_crossover_swapped_cuts() {
        let p1 = [0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = [7, 6, 5, 4, 3, 2, 1, 0];
        assert_eq!(
            order_crossover_with_cuts(&p1, &p2, 5, 3),
            order_crossover_with_cuts(&p1, &p2, 3, 5)
        );
    }

    #[test]
    fn test_crossover_full_block_copies_parent1() {
        let p1 = [2, 0, 3, 1];
        let p2 = [0, 1, 2, 3];
        assert_eq!(order_crossover_with_cuts(&p1, &p2, 0, 3), p1.to_vec());
    }

    #[test]
    fn test_crossover_block_at_start() {
        let p1 = [3, 2, 1, 0];
        let p2 = [0, 1, 2, 3];
        assert_eq!(order_crossover_with_cuts(&p1, &p2, 0, 1), vec![3, 2, 0, 1]);
    }

    #[test]
    fn test_crossover_identical_parents() {
        let p = [4, 2, 0, 3, 1];
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p.to_vec());
        }
    }

    #[test]
    fn test_crossover_empty() {
        let mut rng = StdRng::seed_from_u64(8);
        assert!(order_crossover(&[], &[], &mut rng).is_empty());
    }

    #[test]
    fn test_mutation_rate_zero_never_swaps() {
        let mut path = vec![0, 1, 2, 3];
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(!swap_mutation(&mut path, 0.0, &mut rng));
        }
        assert_eq!(path, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_mutation_rate_one_always_attempts() {
        let mut path = vec![0, 1, 2, 3];
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            assert!(swap_mutation(&mut path, 1.0, &mut rng));
        }
        assert!(is_permutation(&path, 4));
    }

    #[test]
    fn test_mutation_changes_at_most_two_positions() {
        let original: Vec<usize> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..50 {
            let mut path = original.clone();
            swap_mutation(&mut path, 1.0, &mut rng);
            let changed = path.iter().zip(&original).filter(|(a, b)| a != b).count();
            assert!(changed == 0 || changed == 2);
        }
    }

    #[test]
    fn test_inversion_reverses_one_segment() {
        let original: Vec<usize> = (0..12).collect();
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..50 {
            let mut path = original.clone();
            inversion_mutation(&mut path, 1.0, &mut rng);
            let first = path.iter().zip(&original).position(|(a, b)| a != b);
            let last = path.iter().zip(&original).rposition(|(a, b)| a != b);
            if let (Some(s), Some(e)) = (first, last) {
                let mut segment = original[s..=e].to_vec();
                segment.reverse();
                assert_eq!(&path[s..=e], segment.as_slice());
            }
        }
    }

    #[test]
    fn test_inversion_rate_zero() {
        let mut path = vec![3, 1, 0, 2];
        let mut rng = StdRng::seed_from_u64(0);
        assert!(!inversion_mutation(&mut path, 0.0, &mut rng));
        assert_eq!(path, vec![3, 1, 0, 2]);
    }

    #[test]
    fn test_adjacent_swap_moves_cities_at_most_three_places() {
        let original: Vec<usize> = (0..15).collect();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut path = original.clone();
            assert!(adjacent_swap_mutation(&mut path, 1.0, &mut rng));
            for (pos, &city) in path.iter().enumerate() {
                assert!(pos.abs_diff(city) <= 3);
            }
        }
    }

    #[test]
    fn test_adjacent_swap_short_paths_untouched() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut single = vec![0];
        assert!(!adjacent_swap_mutation(&mut single, 1.0, &mut rng));
        let mut pair = vec![0, 1];
        assert!(adjacent_swap_mutation(&mut pair, 1.0, &mut rng));
        assert!(is_permutation(&pair, 2));
    }

    #[test]
    fn test_mutation_kind_parse_and_display() {
        for kind in [MutationKind::Swap, MutationKind::Inversion, MutationKind::AdjacentSwap] {
            assert_eq!(kind.to_string().parse::<MutationKind>().ok(), Some(kind));
        }
        assert_eq!("adjacent-swap".parse::<MutationKind>().ok(), Some(MutationKind::AdjacentSwap));
        assert!(matches!("shuffle".parse::<MutationKind>(), Err(TspError::InvalidConfig(_))));
        assert_eq!(MutationKind::default(), MutationKind::Swap);
    }

    #[test]
    fn test_mutation_kind_serde() {
        let json = serde_json::to_string(&MutationKind::AdjacentSwap).expect("serialize");
        assert_eq!(json, "\"adjacent_swap\"");
        let kind: MutationKind = serde_json::from_str("\"inversion\"").expect("deserialize");
        assert_eq!(kind, MutationKind::Inversion);
    }

    fn parents() -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
        (1usize..30).prop_flat_map(|n| {
            let base: Vec<usize> = (0..n).collect();
            (Just(base.clone()).prop_shuffle(), Just(base).prop_shuffle())
        })
    }

    proptest! {
        #[test]
        fn prop_crossover_yields_permutation(
            (p1, p2) in parents(),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let n = p1.len();
            let child = order_crossover_with_cuts(&p1, &p2, a.index(n), b.index(n));
            prop_assert!(is_permutation(&child, n));
        }

        #[test]
        fn prop_crossover_keeps_parent1_block(
            (p1, p2) in parents(),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let n = p1.len();
            let (s, e) = (a.index(n).min(b.index(n)), a.index(n).max(b.index(n)));
            let child = order_crossover_with_cuts(&p1, &p2, s, e);
            prop_assert_eq!(&child[s..=e], &p1[s..=e]);
        }

        #[test]
        fn prop_mutation_yields_permutation((p, _) in parents(), seed in any::<u64>()) {
            let n = p.len();
            let mut path = p;
            let mut rng = StdRng::seed_from_u64(seed);
            swap_mutation(&mut path, 1.0, &mut rng);
            prop_assert!(is_permutation(&path, n));
        }

        #[test]
        fn prop_inversion_yields_permutation((p, _) in parents(), seed in any::<u64>()) {
            let n = p.len();
            let mut path = p;
            let mut rng = StdRng::seed_from_u64(seed);
            inversion_mutation(&mut path, 1.0, &mut rng);
            prop_assert!(is_permutation(&path, n));
        }

        #[test]
        fn prop_adjacent_swap_yields_permutation((p, _) in parents(), seed in any::<u64>()) {
            let n = p.len();
            let mut path = p;
            let mut rng = StdRng::seed_from_u64(seed);
            adjacent_swap_mutation(&mut path, 1.0, &mut rng);
            prop_assert!(is_permutation(&path, n));
        }

        #[test]
        fn prop_mutation_on_tail_keeps_start(
            (p, _) in parents(),
            seed in any::<u64>(),
            kind in prop_oneof![
                Just(MutationKind::Swap),
                Just(MutationKind::Inversion),
                Just(MutationKind::AdjacentSwap),
            ],
        ) {
            let n = p.len();
            let mut path = p;
            let start = path[0];
            let mut rng = StdRng::seed_from_u64(seed);
            kind.apply(&mut path[1..], 1.0, &mut rng);
            prop_assert_eq!(path[0], start);
            prop_assert!(is_permutation(&path, n));
        }
    }
}
