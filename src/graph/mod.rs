//! Weighted complete graphs.
//!
//! Provides the dense, possibly asymmetric edge-weight matrix that paths are
//! scored against.

mod matrix;

pub use matrix::DistanceMatrix;
