//! GA problem definition for fixed-endpoint path search.
//!
//! Implements the [`GaProblem`] trait over a
//! [`DistanceMatrix`] with a designated start and end node.
//!
//! # Operators
//!
//! - **Initialization**: start + Fisher–Yates shuffled interior + end
//! - **Evaluation**: sum of edge weights along the path
//! - **Crossover**: prefix order crossover with end-node-aware repair
//! - **Mutation**: swap of two interior positions

use rand::Rng;

use crate::error::{Error, Result};
use crate::ga::operators::{interior_swap_mutation, prefix_order_crossover, random_path};
use crate::ga::GaProblem;
use crate::graph::DistanceMatrix;

use super::chromosome::Path;

/// GA problem for the shortest path from `start` to `end` visiting every node.
///
/// # Examples
///
/// ```
/// use u_evopath::graph::DistanceMatrix;
/// use u_evopath::path::PathProblem;
/// use u_evopath::ga::{GaConfig, GaRunner};
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0.0, 2.0, 1.0, 14.0],
///     vec![7.0, 0.0, 7.0, 8.0],
///     vec![5.0, 1.0, 0.0, 2.0],
///     vec![1.0, 3.0, 5.0, 0.0],
/// ])
/// .unwrap();
/// let problem = PathProblem::new(dm, 0, 3).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(30)
///     .with_seed(42);
///
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert_eq!(result.best.nodes(), &[0, 2, 1, 3]);
/// assert_eq!(result.best_fitness, 10.0);
/// ```
#[derive(Debug, Clone)]
pub struct PathProblem {
    distances: DistanceMatrix,
    start: usize,
    end: usize,
}

impl PathProblem {
    /// Creates a path problem.
    ///
    /// Fails if the graph has fewer than two nodes, if either endpoint is
    /// out of range, or if `start == end`.
    pub fn new(distances: DistanceMatrix, start: usize, end: usize) -> Result<Self> {
        let node_count = distances.size();
        if node_count < 2 {
            return Err(Error::TooFewNodes(node_count));
        }
        for node in [start, end] {
            if node >= node_count {
                return Err(Error::NodeOutOfRange { node, node_count });
            }
        }
        if start == end {
            return Err(Error::SameEndpoints(start));
        }
        Ok(Self {
            distances,
            start,
            end,
        })
    }

    /// The edge-weight matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Number of nodes every path visits.
    pub fn node_count(&self) -> usize {
        self.distances.size()
    }

    /// First node of every path.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last node of every path.
    pub fn end(&self) -> usize {
        self.end
    }
}

impl GaProblem for PathProblem {
    type Individual = Path;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Path {
        Path::new(random_path(self.node_count(), self.start, self.end, rng))
    }

    fn evaluate(&self, individual: &Path) -> f64 {
        self.distances.path_length(individual.nodes())
    }

    fn crossover<R: Rng>(&self, parent1: &Path, parent2: &Path, rng: &mut R) -> Path {
        Path::new(prefix_order_crossover(
            parent1.nodes(),
            parent2.nodes(),
            rng,
        ))
    }

    fn mutate<R: Rng>(&self, individual: &mut Path, rng: &mut R) {
        interior_swap_mutation(individual.nodes_mut(), rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::operators::is_valid_path;
    use crate::ga::{GaConfig, GaRunner, Individual};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scenario() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            [0.0, 2.0, 1.0, 14.0],
            [7.0, 0.0, 7.0, 8.0],
            [5.0, 1.0, 0.0, 2.0],
            [1.0, 3.0, 5.0, 0.0],
        ])
        .expect("square")
    }

    #[test]
    fn test_new_rejects_degenerate_inputs() {
        assert!(matches!(
            PathProblem::new(DistanceMatrix::new(1), 0, 0),
            Err(Error::TooFewNodes(1))
        ));
        assert!(matches!(
            PathProblem::new(scenario(), 0, 4),
            Err(Error::NodeOutOfRange {
                node: 4,
                node_count: 4
            })
        ));
        assert!(matches!(
            PathProblem::new(scenario(), 9, 1),
            Err(Error::NodeOutOfRange { node: 9, .. })
        ));
        assert!(matches!(
            PathProblem::new(scenario(), 2, 2),
            Err(Error::SameEndpoints(2))
        ));
    }

    #[test]
    fn test_accessors() {
        let problem = PathProblem::new(scenario(), 1, 2).expect("valid");
        assert_eq!(problem.start(), 1);
        assert_eq!(problem.end(), 2);
        assert_eq!(problem.node_count(), 4);
        assert_eq!(problem.distances().get(1, 2), 7.0);
    }

    #[test]
    fn test_create_individual() {
        let problem = PathProblem::new(scenario(), 3, 0).expect("valid");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let ind = problem.create_individual(&mut rng);
            assert!(is_valid_path(ind.nodes(), 4, 3, 0), "{ind:?}");
            assert_eq!(ind.fitness(), f64::INFINITY);
        }
    }

    #[test]
    fn test_evaluate() {
        let problem = PathProblem::new(scenario(), 0, 3).expect("valid");
        assert_eq!(problem.evaluate(&Path::new(vec![0, 1, 2, 3])), 11.0);
        assert_eq!(problem.evaluate(&Path::new(vec![0, 2, 1, 3])), 10.0);
    }

    #[test]
    fn test_evaluate_is_directional() {
        let problem = PathProblem::new(scenario(), 3, 0).expect("valid");
        // 3→1→2→0 = 3 + 7 + 5
        assert_eq!(problem.evaluate(&Path::new(vec![3, 1, 2, 0])), 15.0);
    }

    #[test]
    fn test_crossover_and_mutate_keep_paths_valid() {
        let dm = DistanceMatrix::new(9);
        let problem = PathProblem::new(dm, 5, 2).expect("valid");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let p1 = problem.create_individual(&mut rng);
            let p2 = problem.create_individual(&mut rng);
            let mut child = problem.crossover(&p1, &p2, &mut rng);
            assert!(is_valid_path(child.nodes(), 9, 5, 2));
            problem.mutate(&mut child, &mut rng);
            assert!(is_valid_path(child.nodes(), 9, 5, 2));
        }
    }

    #[test]
    fn test_two_node_graph() {
        let dm = DistanceMatrix::from_rows(&[[0.0, 4.0], [6.0, 0.0]]).expect("square");
        let problem = PathProblem::new(dm, 1, 0).expect("valid");
        let config = GaConfig::default()
            .with_population_size(4)
            .with_generations(3)
            .with_seed(1);
        let result = GaRunner::run(&problem, &config).expect("valid");
        assert_eq!(result.best.nodes(), &[1, 0]);
        assert_eq!(result.best_fitness, 6.0);
    }

    #[test]
    fn test_ga_runner_finds_scenario_optimum() {
        let problem = PathProblem::new(scenario(), 0, 3).expect("valid");
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(30)
            .with_seed(42);
        let result = GaRunner::run(&problem, &config).expect("valid");
        assert_eq!(result.best.nodes(), &[0, 2, 1, 3]);
        assert_eq!(result.best_fitness, 10.0);
    }
}
