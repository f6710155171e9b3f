//! Genetic Algorithm engine.
//!
//! A generic generational GA built on trait-based abstractions. Problems plug
//! in by implementing [`GaProblem`], which specifies how to create, evaluate,
//! recombine, and mutate individuals. The engine fixes the pipeline:
//!
//! evaluate → track best-so-far → truncation select → recombine → mutate
//!
//! repeated for a fixed number of generations, with the best individual of
//! any generation reported at the end.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its fitness
//! - [`GaProblem`]: Problem definition — initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Population size, generation budget, mutation rate, seed
//! - [`Evolution`]: Stepwise run state (one generation per call)
//! - [`GaRunner`]: Runs an [`Evolution`] to completion
//! - [`GaResult`]: Best individual and best-so-far history
//!
//! # Submodules
//!
//! - [`operators`]: Fixed-endpoint permutation operators (shuffle, prefix OX, swap)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{create_rng, Evolution, GaResult, GaRunner, GenerationStats};
pub use selection::truncation_select;
pub use types::{GaProblem, Individual};
