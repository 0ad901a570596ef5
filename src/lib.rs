//! Approximate subgraph isomorphism via evolutionary search.
//!
//! Given a small directed target graph and a larger directed host graph,
//! this crate searches for an ordered subset of host nodes whose induced
//! edge structure most closely matches the target. The search is a
//! genetic algorithm: candidates are scored by a mismatch count that
//! reaches zero on an exact structural match, parents are sampled in
//! proportion to fitness, and each generation's offspring are bred as
//! the best of a batch of crossover attempts, scored in parallel over a
//! fixed worker pool.
//!
//! This is an approximation, not a decision procedure: a run that ends
//! without reaching score zero reports its best mapping as a normal
//! best-effort outcome.
//!
//! # Quick Start
//!
//! ```
//! use evomatch::graph::generate::random_graph;
//! use evomatch::search::{run_search, SearchConfig, Termination};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let host = random_graph(60, 5, &mut rng);
//! let target = random_graph(6, 2, &mut rng);
//!
//! let config = SearchConfig::default()
//!     .with_population_size(40)
//!     .with_children_count(10)
//!     .with_child_tries(5)
//!     .with_generation_count(20)
//!     .with_worker_count(2)
//!     .with_seed(42);
//!
//! let result = run_search(&host, &target, &config);
//! match result.termination {
//!     Termination::Converged => println!("exact match: {:?}", result.best.candidate),
//!     Termination::Exhausted => println!("best effort, {} mismatches", result.best.score),
//! }
//! ```
//!
//! # Modules
//!
//! - [`graph`]: the directed graph primitive and a random generator
//! - [`search`]: the evolutionary engine and its entry point

pub mod graph;
pub mod search;
