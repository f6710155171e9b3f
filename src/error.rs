//! Crate error type.
//!
//! Every library variant describes an input-validation failure detected
//! before the generational loop starts. Once a run has begun, no operation
//! can fail.

/// Errors reported while building a problem, validating a configuration,
/// or loading input for the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("distance matrix has no rows")]
    EmptyMatrix,

    #[error("distance matrix must be square: row {row} has {len} entries, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("graph needs at least 2 nodes, got {0}")]
    TooFewNodes(usize),

    #[error("node {node} is out of range for a graph of {node_count} nodes")]
    NodeOutOfRange { node: usize, node_count: usize },

    #[error("start and end node must differ, both are {0}")]
    SameEndpoints(usize),

    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error("mutation_rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse input: {0}")]
    Parse(String),

    #[error("failed to write output: {0}")]
    Output(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
