//! Evolutionary path search.
//!
//! Finds a short route between two designated nodes of a complete, possibly
//! asymmetric, weighted graph. Every candidate route visits all nodes exactly
//! once, starting at the start node and ending at the end node, and a
//! generational genetic algorithm searches that permutation space instead of
//! running an exact shortest-path computation.
//!
//! - [`graph`] — Dense edge-weight matrix
//! - [`ga`] — Generic GA engine: traits, configuration, truncation selection,
//!   permutation operators, and the generational driver
//! - [`path`] — Path chromosome, the path [`GaProblem`](ga::GaProblem), and an
//!   exhaustive reference solver
//! - [`error`] — Input-validation errors
//!
//! The result is a heuristic: the best path seen in any generation, not a
//! guaranteed optimum.
//!
//! ```
//! use u_evopath::ga::{GaConfig, GaRunner};
//! use u_evopath::graph::DistanceMatrix;
//! use u_evopath::path::PathProblem;
//!
//! let dm = DistanceMatrix::from_rows(&[
//!     vec![0.0, 2.0, 1.0, 14.0],
//!     vec![7.0, 0.0, 7.0, 8.0],
//!     vec![5.0, 1.0, 0.0, 2.0],
//!     vec![1.0, 3.0, 5.0, 0.0],
//! ])?;
//! let problem = PathProblem::new(dm, 0, 3)?;
//! let result = GaRunner::run(&problem, &GaConfig::fast().with_seed(42))?;
//! assert_eq!(result.best_fitness, 10.0);
//! # Ok::<(), u_evopath::error::Error>(())
//! ```

pub mod error;
pub mod ga;
pub mod graph;
pub mod path;

pub use error::{Error, Result};
