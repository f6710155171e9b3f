//! Fixed-endpoint path search.
//!
//! - [`Path`] — Node-sequence chromosome from start to end
//! - [`PathProblem`] — [`GaProblem`](crate::ga::GaProblem) implementation over a
//!   [`DistanceMatrix`](crate::graph::DistanceMatrix)
//! - [`exhaustive_optimum`] — Exact optimum by enumeration, for small graphs

mod chromosome;
mod exhaustive;
mod problem;

pub use chromosome::Path;
pub use exhaustive::{exhaustive_optimum, EXHAUSTIVE_NODE_LIMIT};
pub use problem::PathProblem;
