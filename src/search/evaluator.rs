//! Batch scoring across a bounded worker pool.

use super::scorer;
use super::types::{Candidate, ScoredCandidate};
use crate::graph::DiGraph;
use rayon::prelude::*;

/// Scores batches of candidates.
///
/// Scoring is a pure function of `(candidate, host, target)`, so
/// implementations are free to schedule the work however they like;
/// every returned score stays attached to its candidate instead of being
/// matched back up by batch position. A failure in any single scoring
/// task is fatal for the whole batch, since a generation cannot be formed
/// from partial results.
pub trait Evaluator: Send + Sync {
    /// Scores every candidate in the batch against `host`/`target`.
    fn score_batch(
        &self,
        candidates: Vec<Candidate>,
        host: &DiGraph,
        target: &DiGraph,
    ) -> Vec<ScoredCandidate>;
}

/// Evaluates batches on an owned thread pool of fixed size.
///
/// The pool is created once and reused across all batches of a run.
/// Workers share nothing mutable: each task reads the graphs through
/// shared references and returns a value.
pub struct ThreadPoolEvaluator {
    pool: rayon::ThreadPool,
}

impl ThreadPoolEvaluator {
    /// Builds an evaluator with `worker_count` worker threads.
    ///
    /// # Panics
    /// Panics if the thread pool cannot be created.
    pub fn new(worker_count: usize) -> Self {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(worker_count)
            .build()
            .expect("failed to build scoring thread pool");
        Self { pool }
    }
}

impl Evaluator for ThreadPoolEvaluator {
    fn score_batch(
        &self,
        candidates: Vec<Candidate>,
        host: &DiGraph,
        target: &DiGraph,
    ) -> Vec<ScoredCandidate> {
        // A panic inside any task resurfaces here at the join barrier.
        self.pool.install(|| {
            candidates
                .into_par_iter()
                .map(|candidate| {
                    let score = scorer::score(&candidate, host, target);
                    ScoredCandidate { candidate, score }
                })
                .collect()
        })
    }
}

/// Evaluates batches on the calling thread.
///
/// The degenerate strategy: same contract, no parallelism. Used by tests
/// and wherever a worker pool is not wanted.
pub struct SerialEvaluator;

impl Evaluator for SerialEvaluator {
    fn score_batch(
        &self,
        candidates: Vec<Candidate>,
        host: &DiGraph,
        target: &DiGraph,
    ) -> Vec<ScoredCandidate> {
        candidates
            .into_iter()
            .map(|candidate| {
                let score = scorer::score(&candidate, host, target);
                ScoredCandidate { candidate, score }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate::random_graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixtures() -> (DiGraph, DiGraph, Vec<Candidate>) {
        let mut rng = StdRng::seed_from_u64(17);
        let host = random_graph(40, 6, &mut rng);
        let target = random_graph(7, 3, &mut rng);
        let candidates = (0..25)
            .map(|_| Candidate::random(40, 7, &mut rng))
            .collect();
        (host, target, candidates)
    }

    #[test]
    fn test_parallel_matches_serial() {
        let (host, target, candidates) = fixtures();

        let serial = SerialEvaluator.score_batch(candidates.clone(), &host, &target);
        let parallel =
            ThreadPoolEvaluator::new(4).score_batch(candidates, &host, &target);

        assert_eq!(serial.len(), parallel.len());
        for scored in &parallel {
            let reference = serial
                .iter()
                .find(|s| s.candidate == scored.candidate)
                .expect("candidate missing from serial batch");
            assert_eq!(scored.score, reference.score);
        }
    }

    #[test]
    fn test_scores_stay_attached_to_their_candidate() {
        let (host, target, candidates) = fixtures();
        let scored = ThreadPoolEvaluator::new(3).score_batch(candidates, &host, &target);

        for s in &scored {
            assert_eq!(s.score, scorer::score(&s.candidate, &host, &target));
        }
    }

    #[test]
    fn test_single_worker_pool() {
        let (host, target, candidates) = fixtures();
        let n = candidates.len();
        let scored = ThreadPoolEvaluator::new(1).score_batch(candidates, &host, &target);
        assert_eq!(scored.len(), n);
    }

    #[test]
    fn test_empty_batch() {
        let (host, target, _) = fixtures();
        let scored = SerialEvaluator.score_batch(Vec::new(), &host, &target);
        assert!(scored.is_empty());
    }
}
