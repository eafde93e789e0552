//! GA driver: generations until convergence or the generation cap.

use rand::Rng;
use serde::Serialize;

use crate::distance::DistanceSource;
use crate::error::{Result, TspError};

use super::population::{evolve_population, population_best, random_population};
use super::{GaConfig, Individual};

/// Outcome of a GA run.
#[derive(Debug, Clone, Serialize)]
pub struct GaResult {
    /// Best individual seen at any point in the run, including the child
    /// that triggered convergence.
    pub best: Individual,
    /// Last fully replaced population.
    pub population: Vec<Individual>,
    /// Generations performed (the converging one included).
    pub generations: usize,
    /// True if the run stopped because a child beat the target length.
    pub converged: bool,
}

impl GaResult {
    /// Lowest-fitness individual of the last completed population.
    pub fn population_best(&self) -> &Individual {
        population_best(&self.population).unwrap_or(&self.best)
    }
}

/// A genetic algorithm run bound to one problem instance.
///
/// Owns the current population and the best-so-far individual.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use tsp3d::ga::{GaConfig, GaRunner};
/// use tsp3d::models::points_from_coords;
///
/// let points = points_from_coords(&[
///     [0.0, 0.0, 0.0],
///     [1.0, 0.0, 0.0],
///     [1.0, 1.0, 0.0],
///     [0.0, 1.0, 0.0],
/// ]);
/// let mut rng = StdRng::seed_from_u64(42);
/// let config = GaConfig::default().with_max_generations(200);
/// let runner = GaRunner::new(points.as_slice(), config, &mut rng).unwrap();
/// let result = runner.run(&mut rng);
/// assert_eq!(result.best.fitness(), 4.0);
/// ```
pub struct GaRunner<'a, D: DistanceSource + ?Sized> {
    distances: &'a D,
    config: GaConfig,
    population: Vec<Individual>,
    best: Individual,
    generation: usize,
    converged: bool,
}

impl<'a, D: DistanceSource + ?Sized> GaRunner<'a, D> {
    /// Validates the config and seeds a random initial population.
    pub fn new<R: Rng>(distances: &'a D, config: GaConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        if distances.size() == 0 {
            return Err(TspError::EmptyInstance);
        }
        let population =
            random_population(config.population_size, distances, config.fixed_start, rng);
        let best = population_best(&population)
            .cloned()
            .ok_or_else(|| TspError::InvalidConfig("population_size must be at least 1".into()))?;
        Ok(Self {
            distances,
            config,
            population,
            best,
            generation: 0,
            converged: false,
        })
    }

    /// Current population.
    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    /// Best individual seen so far.
    pub fn best(&self) -> &Individual {
        &self.best
    }

    /// Generations performed so far.
    pub fn generations(&self) -> usize {
        self.generation
    }

    /// Returns true once a child has beaten the target length.
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// Runs one generation. Returns `true` if it converged.
    ///
    /// The population is replaced only by a complete generation; on
    /// convergence the previous population is kept.
    pub fn step<R: Rng>(&mut self, rng: &mut R) -> bool {
        let evo = evolve_population(&self.population, self.distances, &self.config, rng);
        for child in &evo.children {
            if child.fitness() < self.best.fitness() {
                self.best = child.clone();
            }
        }

        let generation = self.generation;
        self.generation += 1;
        if evo.converged {
            self.converged = true;
            tracing::info!(
                generation,
                length = self.best.fitness(),
                target_length = self.config.target_length,
                "ga reached target length"
            );
            return true;
        }

        self.population = evo.children;
        if self.config.log_interval > 0 && generation % self.config.log_interval == 0 {
            let current = population_best(&self.population).map(Individual::fitness);
            tracing::info!(
                generation,
                population_best = current,
                best = self.best.fitness(),
                "ga progress"
            );
        }
        false
    }

    /// Runs until convergence or the generation cap.
    pub fn run<R: Rng>(mut self, rng: &mut R) -> GaResult {
        while !self.converged && self.generation < self.config.max_generations {
            self.step(rng);
        }
        tracing::info!(
            generations = self.generation,
            converged = self.converged,
            length = self.best.fitness(),
            "ga finished"
        );
        GaResult {
            best: self.best,
            population: self.population,
            generations: self.generation,
            converged: self.converged,
        }
    }
}

/// Builds a runner and runs it to completion.
pub fn solve<D, R>(distances: &D, config: GaConfig, rng: &mut R) -> Result<GaResult>
where
    D: DistanceSource + ?Sized,
    R: Rng,
{
    Ok(GaRunner::new(distances, config, rng)?.run(rng))
}
