//! Generational loop execution.
//!
//! [`Evolution`] owns one run's state and advances it a generation at a time:
//! evaluate → track best → select → recombine → mutate → replace.
//! [`GaRunner`] drives an [`Evolution`] through the configured number of
//! generations and returns the best individual seen in any of them.

use super::config::GaConfig;
use super::selection::{fitness_order, truncation_select};
use super::types::{GaProblem, Individual};
use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

/// Summary of one evaluated generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based index of the generation.
    pub generation: usize,

    /// Lowest fitness in this generation.
    pub generation_best: f64,

    /// Lowest fitness seen in this or any earlier generation.
    pub best_so_far: f64,

    /// Mean fitness of this generation.
    pub mean: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations evaluated.
    pub generations: usize,

    /// Best-so-far fitness after each generation. Non-increasing.
    pub fitness_history: Vec<f64>,
}

/// State of a single run, advanced one generation per [`step`](Self::step).
///
/// The population is exclusively owned here and the RNG handle is injected,
/// so two evolutions built from equal inputs and equally seeded generators
/// go through identical populations.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_evopath::ga::{Evolution, GaConfig};
/// use u_evopath::graph::DistanceMatrix;
/// use u_evopath::path::PathProblem;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 1.0, 14.0],
///     vec![7.0, 0.0, 7.0, 8.0],
///     vec![5.0, 1.0, 0.0, 2.0],
///     vec![1.0, 3.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// let problem = PathProblem::new(dm, 0, 3).unwrap();
/// let config = GaConfig::default().with_population_size(10).with_generations(5);
///
/// let mut evolution = Evolution::new(&problem, &config, StdRng::seed_from_u64(1)).unwrap();
/// while !evolution.is_finished() {
///     let stats = evolution.step();
///     assert!(stats.best_so_far <= stats.generation_best);
/// }
/// let result = evolution.finish().unwrap();
/// assert!(result.best_fitness <= 11.0);
/// ```
pub struct Evolution<'a, P: GaProblem, R: Rng> {
    problem: &'a P,
    config: GaConfig,
    rng: R,
    population: Vec<P::Individual>,
    best: Option<P::Individual>,
    generation: usize,
    fitness_history: Vec<f64>,
}

impl<'a, P: GaProblem, R: Rng> Evolution<'a, P, R> {
    /// Validates `config` and creates the initial population.
    pub fn new(problem: &'a P, config: &GaConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        info!(
            population_size = config.population_size,
            generations = config.generations,
            mutation_rate = config.mutation_rate,
            "initializing population"
        );

        let population = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();

        Ok(Self {
            problem,
            config: config.clone(),
            rng,
            population,
            best: None,
            generation: 0,
            fitness_history: Vec::with_capacity(config.generations),
        })
    }

    /// Current population. Fitness values are those of the last evaluation;
    /// individuals bred by the latest step are not evaluated yet.
    pub fn population(&self) -> &[P::Individual] {
        &self.population
    }

    /// Best individual seen so far, `None` before the first step.
    pub fn best(&self) -> Option<&P::Individual> {
        self.best.as_ref()
    }

    /// Number of generations evaluated so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Whether the configured generation budget is used up.
    pub fn is_finished(&self) -> bool {
        self.generation >= self.config.generations
    }

    /// Runs one full generation and returns its statistics.
    ///
    /// Does not check the generation budget; see [`is_finished`](Self::is_finished).
    pub fn step(&mut self) -> GenerationStats {
        evaluate_population(self.problem, &mut self.population, self.config.parallel);

        let stats = self.track_best();
        self.fitness_history.push(stats.best_so_far);
        self.problem.on_generation(&stats);
        debug!(
            generation = stats.generation,
            generation_best = stats.generation_best,
            best_so_far = stats.best_so_far,
            mean = stats.mean,
            "generation evaluated"
        );

        let pool = truncation_select(&self.population, self.config.pool_size());

        let mut next_gen = Vec::with_capacity(self.config.population_size);
        while next_gen.len() < self.config.population_size {
            let p1 = pool[self.rng.random_range(0..pool.len())];
            let p2 = pool[self.rng.random_range(0..pool.len())];
            let child = self.problem.crossover(
                &self.population[p1],
                &self.population[p2],
                &mut self.rng,
            );
            next_gen.push(child);
        }

        for child in &mut next_gen {
            if self.rng.random_range(0.0..1.0) < self.config.mutation_rate {
                self.problem.mutate(child, &mut self.rng);
            }
        }

        self.population = next_gen;
        self.generation += 1;
        stats
    }

    /// Consumes the run and returns its result, `None` if no generation
    /// was evaluated.
    pub fn finish(self) -> Option<GaResult<P::Individual>> {
        let best = self.best?;
        Some(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: self.generation,
            fitness_history: self.fitness_history,
        })
    }

    /// Compares the freshly evaluated generation against best-so-far.
    fn track_best(&mut self) -> GenerationStats {
        let gen_best = find_best(&self.population);
        let generation_best = self.population[gen_best].fitness();

        let improved = match &self.best {
            Some(best) => fitness_order(generation_best, best.fitness()).is_lt(),
            None => true,
        };
        if improved {
            trace!(
                generation = self.generation,
                fitness = generation_best,
                "new best individual"
            );
            self.best = Some(self.population[gen_best].clone());
        }

        let total: f64 = self.population.iter().map(|ind| ind.fitness()).sum();
        GenerationStats {
            generation: self.generation,
            generation_best,
            best_so_far: self
                .best
                .as_ref()
                .map_or(generation_best, |best| best.fitness()),
            mean: total / self.population.len() as f64,
        }
    }
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = PathProblem::new(matrix, start, end)?;
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("best length: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from `config.seed`, or a random seed.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        let mut rng = create_rng(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>> {
        let mut evolution = Evolution::new(problem, config, rng)?;
        while !evolution.is_finished() {
            evolution.step();
        }
        let result = evolution.finish().ok_or(Error::ZeroGenerations)?;

        info!(
            generations = result.generations,
            best_fitness = result.best_fitness,
            "run finished"
        );
        Ok(result)
    }
}

/// Creates the run's random generator, seeded with `seed` or a random seed.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

#[cfg(feature = "parallel")]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    parallel: bool,
) {
    use rayon::prelude::*;

    if parallel {
        population.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        evaluate_sequential(problem, population);
    }
}

#[cfg(not(feature = "parallel"))]
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut [P::Individual],
    _parallel: bool,
) {
    evaluate_sequential(problem, population);
}

fn evaluate_sequential<P: GaProblem>(problem: &P, population: &mut [P::Individual]) {
    for ind in population.iter_mut() {
        let f = problem.evaluate(ind);
        ind.set_fitness(f);
    }
}

/// Index of the individual with the lowest fitness; the first one on ties.
/// NaN fitness is only chosen when every individual has it.
fn find_best<I: Individual>(population: &[I]) -> usize {
    let mut best = 0;
    for (i, ind) in population.iter().enumerate().skip(1) {
        if fitness_order(ind.fitness(), population[best].fitness()).is_lt() {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
