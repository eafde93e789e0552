//! Genetic algorithm for the 3D TSP.
//!
//! - [`Individual`] — Tour permutation with cached closed length
//! - [`tournament_selection`], [`order_crossover`] — Selection and recombination
//! - [`swap_mutation`], [`inversion_mutation`], [`adjacent_swap_mutation`] — Mutations, picked by [`MutationKind`]
//! - [`evolve_population`] — Breeds one generation, short-circuiting on the target length
//! - [`GaRunner`] — Runs generations and tracks the best individual
//!
//! There is no elitism: each generation wholly replaces the previous one.

mod config;
mod individual;
mod operators;
mod population;
mod runner;

pub use config::GaConfig;
pub use individual::Individual;
pub use operators::{
    adjacent_swap_mutation, inversion_mutation, order_crossover, order_crossover_with_cuts,
    swap_mutation, tournament_selection, MutationKind,
};
pub use population::{evolve_population, population_best, random_population, Evolution};
pub use runner::{solve, GaResult, GaRunner};
