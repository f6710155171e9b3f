//! Core trait definitions for the GA engine.
//!
//! The two central traits — [`Individual`] and [`GaProblem`] — define the
//! contract between the generational driver and a concrete problem such as
//! [`PathProblem`](crate::path::PathProblem).

use rand::Rng;

use super::runner::GenerationStats;

/// A candidate solution in the GA population.
///
/// Individuals carry the fitness computed for them in the current
/// generation. The driver calls [`GaProblem::evaluate`] every generation and
/// stores the result via [`set_fitness`](Individual::set_fitness).
///
/// Fitness is a plain `f64`; lower is better.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<usize>,
///     fitness: f64,
/// }
///
/// impl Individual for MySolution {
///     fn fitness(&self) -> f64 { self.fitness }
///     fn set_fitness(&mut self, f: f64) { self.fitness = f; }
/// }
/// ```
pub trait Individual: Clone + Send + Sync {
    /// Returns the fitness stored by the last evaluation.
    fn fitness(&self) -> f64;

    /// Stores a freshly computed fitness.
    fn set_fitness(&mut self, fitness: f64);
}

/// Defines a GA optimization problem.
///
/// 1. **Initialization**: how to create a random valid individual
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to build one child from two parents
/// 4. **Mutation**: how to perturb an individual in place
///
/// Every method receives the RNG explicitly; implementations must not reach
/// for a thread-local or global generator, otherwise seeded runs stop being
/// reproducible.
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the driver may evaluate
/// individuals in parallel using rayon (`parallel` feature).
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random valid individual.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Lower is better.
    ///
    /// Must be pure: it may run concurrently for different individuals.
    fn evaluate(&self, individual: &Self::Individual) -> f64;

    /// Produces a single child by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called once per generation after best-so-far has been updated.
    ///
    /// Useful for progress reporting. The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}
