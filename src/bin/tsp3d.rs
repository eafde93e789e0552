use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use tsp3d::config::SolverConfig;
use tsp3d::constructive::nearest_neighbor;
use tsp3d::distance::DistanceMatrix;
use tsp3d::evaluation::{tour_length, tour_length_str};
use tsp3d::ga::{Individual, MutationKind};
use tsp3d::loader::read_points;
use tsp3d::models::Tour;
use tsp3d::{aco, ga};

#[derive(Parser, Debug)]
#[command(about, version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve with ant colony optimization.
    Aco {
        #[command(flatten)]
        common: Common,
        #[arg(long)]
        ants: Option<usize>,
        #[arg(long)]
        iterations: Option<usize>,
        #[arg(long)]
        alpha: Option<f64>,
        #[arg(long)]
        beta: Option<f64>,
        #[arg(long)]
        evaporation: Option<f64>,
    },
    /// Solve with the genetic algorithm.
    Ga {
        #[command(flatten)]
        common: Common,
        #[arg(long)]
        population: Option<usize>,
        #[arg(long)]
        mutation_rate: Option<f64>,
        #[arg(long)]
        generations: Option<usize>,
        /// Mutation operator: swap, inversion or adjacent_swap.
        #[arg(long)]
        mutation: Option<MutationKind>,
        /// Keep point 0 as the first city of every tour.
        #[arg(long)]
        fixed_start: bool,
        /// Stop once a tour shorter than this is found.
        #[arg(long)]
        target: Option<f64>,
    },
    /// Build the greedy nearest-neighbor tour from point 0.
    Nn {
        #[command(flatten)]
        common: Common,
    },
    /// Evaluate a tour given as whitespace-separated indices.
    Eval {
        #[command(flatten)]
        common: Common,
        tour: String,
    },
}

#[derive(Args, Debug)]
struct Common {
    /// Point file, one `x y z` record per line.
    points: PathBuf,
    /// JSON solver config.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// RNG seed for reproducible runs.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Print the result as JSON.
    #[arg(long)]
    json: bool,
}

impl Common {
    fn load(&self) -> Result<(DistanceMatrix, SolverConfig, StdRng)> {
        let points = read_points(&self.points)
            .with_context(|| format!("loading {}", self.points.display()))?;
        let config = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => SolverConfig::default(),
        };
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok((DistanceMatrix::from_points(&points), config, rng))
    }
}

#[derive(Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    tour: Option<Tour>,
    length: f64,
    /// GA only: best individual of the last completed population.
    #[serde(skip_serializing_if = "Option::is_none")]
    population_best: Option<Box<Report>>,
}

impl Report {
    fn new(tour: Option<Tour>, length: f64) -> Self {
        Self {
            tour,
            length,
            population_best: None,
        }
    }

    fn from_individual(individual: &Individual, size: usize) -> Result<Self> {
        let tour = Tour::from_order(individual.path().to_vec(), size)?;
        Ok(Self::new(Some(tour), individual.fitness()))
    }

    fn print(&self, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(self)?);
            return Ok(());
        }
        if let Some(tour) = &self.tour {
            println!("best tour: {tour}");
        }
        println!("length: {:.6}", self.length);
        if let Some(last) = &self.population_best {
            if let Some(tour) = &last.tour {
                println!("final population best tour: {tour}");
            }
            println!("final population best length: {:.6}", last.length);
        }
        Ok(())
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();

    match Cli::parse().command {
        Command::Aco {
            common,
            ants,
            iterations,
            alpha,
            beta,
            evaporation,
        } => {
            let (dm, config, mut rng) = common.load()?;
            let mut cfg = config.aco;
            cfg.num_ants = ants.unwrap_or(cfg.num_ants);
            cfg.num_iterations = iterations.unwrap_or(cfg.num_iterations);
            cfg.alpha = alpha.unwrap_or(cfg.alpha);
            cfg.beta = beta.unwrap_or(cfg.beta);
            cfg.evaporation_rate = evaporation.unwrap_or(cfg.evaporation_rate);
            let result = aco::solve(&dm, cfg, &mut rng)?;
            Report::new(Some(result.tour), result.length).print(common.json)
        }
        Command::Ga {
            common,
            population,
            mutation_rate,
            generations,
            mutation,
            fixed_start,
            target,
        } => {
            let (dm, config, mut rng) = common.load()?;
            let mut cfg = config.ga;
            cfg.population_size = population.unwrap_or(cfg.population_size);
            cfg.mutation_rate = mutation_rate.unwrap_or(cfg.mutation_rate);
            cfg.max_generations = generations.unwrap_or(cfg.max_generations);
            cfg.mutation = mutation.unwrap_or(cfg.mutation);
            cfg.fixed_start |= fixed_start;
            cfg.target_length = target.or(cfg.target_length);
            let result = ga::solve(&dm, cfg, &mut rng)?;
            let mut report = Report::from_individual(&result.best, dm.size())?;
            let last = Report::from_individual(result.population_best(), dm.size())?;
            report.population_best = Some(Box::new(last));
            report.print(common.json)
        }
        Command::Nn { common } => {
            let (dm, _, _) = common.load()?;
            let tour = nearest_neighbor(&dm);
            let length = tour_length(tour.cities(), &dm);
            Report::new(Some(tour), length).print(common.json)
        }
        Command::Eval { common, tour } => {
            let (dm, _, _) = common.load()?;
            let length = tour_length_str(&tour, &dm)?;
            Report::new(None, length).print(common.json)
        }
    }
}
