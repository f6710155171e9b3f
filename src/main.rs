use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{level_filters::LevelFilter, warn};
use u_evopath::ga::{create_rng, Evolution, GaConfig};
use u_evopath::graph::DistanceMatrix;
use u_evopath::path::{exhaustive_optimum, PathProblem, EXHAUSTIVE_NODE_LIMIT};
use u_evopath::{Error, Result};

#[derive(Parser)]
#[command(name = "evopath")]
#[command(author, version, about = "Genetic-algorithm path search between two fixed nodes")]
struct Cli {
    /// Problem file (JSON) with `distances`, `start`, `end` and an optional `config` block
    input: PathBuf,

    /// Individuals per generation
    #[arg(short, long)]
    population_size: Option<usize>,

    /// Number of generations to run
    #[arg(short, long)]
    generations: Option<usize>,

    /// Per-individual swap mutation probability
    #[arg(short, long)]
    mutation_rate: Option<f64>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate fitness in parallel (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Compare against the exhaustive optimum (small graphs only)
    #[arg(long)]
    verify: bool,

    /// Print the final result as JSON
    #[arg(long)]
    json: bool,

    /// Suppress per-generation progress
    #[arg(short, long)]
    quiet: bool,

    /// Log verbosity, repeat for more
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Deserialize)]
struct ProblemFile {
    distances: Vec<Vec<f64>>,
    start: usize,
    end: usize,
    #[serde(default)]
    config: GaConfig,
}

#[derive(Serialize)]
struct Report {
    path: Vec<usize>,
    length: f64,
    generations: usize,
    optimum: Option<f64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let text = fs::read_to_string(&cli.input)?;
    let file: ProblemFile =
        serde_json::from_str(&text).map_err(|e| Error::Parse(e.to_string()))?;

    let config = apply_overrides(file.config, cli)?;
    let distances = DistanceMatrix::from_rows(&file.distances)?;
    let problem = PathProblem::new(distances, file.start, file.end)?;

    let mut evolution = Evolution::new(&problem, &config, create_rng(config.seed))?;
    while !evolution.is_finished() {
        let stats = evolution.step();
        if !cli.quiet && !cli.json {
            eprintln!(
                "generation {:>5}: best so far {}",
                stats.generation + 1,
                stats.best_so_far
            );
        }
    }
    let result = evolution.finish().ok_or(Error::ZeroGenerations)?;

    let optimum = if cli.verify {
        if problem.node_count() <= EXHAUSTIVE_NODE_LIMIT {
            Some(exhaustive_optimum(&problem).length())
        } else {
            warn!(
                node_count = problem.node_count(),
                limit = EXHAUSTIVE_NODE_LIMIT,
                "graph too large to verify exhaustively"
            );
            None
        }
    } else {
        None
    };

    if cli.json {
        let report = Report {
            path: result.best.nodes().to_vec(),
            length: result.best_fitness,
            generations: result.generations,
            optimum,
        };
        let out =
            serde_json::to_string_pretty(&report).map_err(|e| Error::Output(e.to_string()))?;
        println!("{out}");
    } else {
        println!("best path: {}", result.best);
        println!("length:    {}", result.best_fitness);
        if let Some(opt) = optimum {
            println!("optimum:   {opt} (gap {})", result.best_fitness - opt);
        }
    }
    Ok(())
}

/// Applies command-line values on top of the file's config block.
///
/// A mutation rate outside `[0, 1]` is rejected rather than clamped.
fn apply_overrides(mut config: GaConfig, cli: &Cli) -> Result<GaConfig> {
    if let Some(n) = cli.population_size {
        config = config.with_population_size(n);
    }
    if let Some(n) = cli.generations {
        config = config.with_generations(n);
    }
    if let Some(rate) = cli.mutation_rate {
        if !(0.0..=1.0).contains(&rate) {
            return Err(Error::InvalidMutationRate(rate));
        }
        config = config.with_mutation_rate(rate);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.parallel {
        config = config.with_parallel(true);
    }
    Ok(config)
}
