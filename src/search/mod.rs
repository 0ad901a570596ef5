//! Evolutionary search for approximate subgraph isomorphism.
//!
//! The search looks for an ordered subset of host-graph nodes whose
//! induced edge structure matches a small directed target graph.
//! Candidates are scored by mismatch count (zero on an exact match), and
//! a genetic loop of fitness-proportionate selection, crossover, and
//! culling drives the population toward zero.
//!
//! # Key Types
//!
//! - [`SearchConfig`]: loop parameters (population size, children per
//!   generation, crossover tries, generation budget, worker count)
//! - [`Candidate`] / [`ScoredCandidate`] / [`Population`]: the solution
//!   representation
//! - [`SearchResult`] / [`Termination`]: outcome of a run
//!
//! # Entry Point
//!
//! [`run_search`] validates the configuration, scores in parallel over a
//! fixed-size worker pool, and returns the best mapping found together
//! with its score, elapsed time, and per-generation history.
//!
//! # Submodules
//!
//! - [`scorer`]: the mismatch count
//! - [`selection`]: rejection-sampled fitness-proportionate parent choice
//! - [`breeder`]: crossover and best-of-batch child construction
//! - [`evaluator`]: the batch scoring seam, thread-pool and serial

pub mod breeder;
mod config;
pub mod evaluator;
mod runner;
pub mod scorer;
pub mod selection;
mod types;

pub use config::SearchConfig;
pub use evaluator::{Evaluator, SerialEvaluator, ThreadPoolEvaluator};
pub use runner::{run_search, SearchResult, SearchRunner, Termination};
pub use types::{Candidate, Population, ScoredCandidate};
