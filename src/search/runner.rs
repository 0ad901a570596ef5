//! Generation loop execution.
//!
//! [`SearchRunner`] orchestrates the complete search:
//! initialization, breeding, merge and truncation, termination.

use super::breeder;
use super::config::SearchConfig;
use super::evaluator::{Evaluator, ThreadPoolEvaluator};
use super::types::{Candidate, Population, ScoredCandidate};
use crate::graph::DiGraph;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// A zero-mismatch candidate was found.
    Converged,
    /// The generation budget ran out. A best-effort outcome, not an error.
    Exhausted,
}

/// Result of a search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// The best candidate found, with its score.
    pub best: ScoredCandidate,

    /// Number of generations executed.
    pub generations: usize,

    /// How the run ended.
    pub termination: Termination,

    /// Wall-clock time of the whole run.
    pub elapsed: Duration,

    /// Best score after initialization and after each generation.
    pub score_history: Vec<usize>,
}

/// Searches `host` for the closest structural match to `target`.
///
/// The single entry point for callers: validates the configuration,
/// builds a scoring pool of `config.worker_count` threads, and runs the
/// generation loop. See [`SearchRunner::run_with_evaluator`] to supply a
/// different evaluation strategy.
///
/// # Panics
/// Panics if the configuration is invalid (call
/// [`SearchConfig::validate`] first for a descriptive error), if the
/// target has more nodes than the host, or if a scoring task panics.
pub fn run_search(host: &DiGraph, target: &DiGraph, config: &SearchConfig) -> SearchResult {
    SearchRunner::run(host, target, config)
}

/// Executes the evolutionary search loop.
///
/// # Usage
///
/// ```
/// use evomatch::graph::generate::random_graph;
/// use evomatch::search::{SearchConfig, SearchRunner};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let host = random_graph(40, 4, &mut rng);
/// let target = random_graph(5, 2, &mut rng);
///
/// let config = SearchConfig::default()
///     .with_population_size(30)
///     .with_children_count(8)
///     .with_child_tries(5)
///     .with_generation_count(15)
///     .with_worker_count(2)
///     .with_seed(42);
///
/// let result = SearchRunner::run(&host, &target, &config);
/// assert!(result.generations >= 1);
/// assert_eq!(result.best.candidate.len(), 5);
/// ```
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search with a thread-pool evaluator sized by
    /// `config.worker_count`.
    ///
    /// # Panics
    /// See [`run_search`].
    pub fn run(host: &DiGraph, target: &DiGraph, config: &SearchConfig) -> SearchResult {
        config.validate().expect("invalid SearchConfig");
        let evaluator = ThreadPoolEvaluator::new(config.worker_count);
        Self::run_with_evaluator(host, target, config, &evaluator)
    }

    /// Runs the search with a caller-supplied evaluation strategy.
    ///
    /// # Panics
    /// See [`run_search`].
    pub fn run_with_evaluator<E>(
        host: &DiGraph,
        target: &DiGraph,
        config: &SearchConfig,
        evaluator: &E,
    ) -> SearchResult
    where
        E: Evaluator + ?Sized,
    {
        config.validate().expect("invalid SearchConfig");
        let k = target.node_count();
        assert!(
            k <= host.node_count(),
            "target ({k} nodes) cannot be larger than host ({} nodes)",
            host.node_count()
        );

        let start = Instant::now();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        // Initial population: random k-subsets of the host's nodes.
        let initial: Vec<Candidate> = (0..config.population_size)
            .map(|_| Candidate::random(host.node_count(), k, &mut rng))
            .collect();
        let mut population =
            Population::from_scored(evaluator.score_batch(initial, host, target));

        let mut score_history = Vec::with_capacity(config.generation_count + 1);
        score_history.push(population.best().score);

        for generation in 1..=config.generation_count {
            let children = breeder::make_children(
                &population,
                config.children_count,
                config.child_tries,
                evaluator,
                host,
                target,
                &mut rng,
            );
            population = population.next_generation(children);
            score_history.push(population.best().score);

            if population.best().score == 0 {
                return SearchResult {
                    best: population.best().clone(),
                    generations: generation,
                    termination: Termination::Converged,
                    elapsed: start.elapsed(),
                    score_history,
                };
            }
        }

        SearchResult {
            best: population.best().clone(),
            generations: config.generation_count,
            termination: Termination::Exhausted,
            elapsed: start.elapsed(),
            score_history,
        }
    }
}
