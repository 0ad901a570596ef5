//! Offspring construction.
//!
//! [`crossover`] recombines two parents into one candidate;
//! [`make_child`] turns a batch of crossover attempts into one finished,
//! scored child; [`make_children`] repeats that for a whole generation.

use super::evaluator::Evaluator;
use super::selection::select_parent;
use super::types::{Candidate, Population, ScoredCandidate};
use crate::graph::{DiGraph, NodeId};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

/// Recombines two parents into one child.
///
/// The child takes the first `k` distinct ids (k = the parents' length)
/// from the shuffled pool of both parents' ids. Ids present in both
/// parents get two chances to be drawn early, which is the recombination
/// bias; the duplicate draw itself is skipped so the child keeps the
/// distinct-id invariant. Each parent alone holds `k` distinct ids, so
/// the pool always suffices and the child always reaches full length.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn crossover<R: Rng>(a: &Candidate, b: &Candidate, rng: &mut R) -> Candidate {
    let k = a.len();
    assert_eq!(k, b.len(), "parents must have equal length");

    let mut pool: Vec<NodeId> = a.nodes().iter().chain(b.nodes()).copied().collect();
    pool.shuffle(rng);

    let mut seen = HashSet::with_capacity(k);
    let mut child = Vec::with_capacity(k);
    for id in pool {
        if seen.insert(id) {
            child.push(id);
            if child.len() == k {
                break;
            }
        }
    }
    Candidate::new(child)
}

/// Builds one child for the next generation.
///
/// Runs `tries` independent crossovers, each drawing its own two parents
/// from the population, scores the whole batch through the evaluator, and
/// keeps the lowest-scoring attempt.
///
/// # Panics
/// Panics if `tries` is zero.
pub fn make_child<E, R>(
    population: &Population,
    tries: usize,
    evaluator: &E,
    host: &DiGraph,
    target: &DiGraph,
    rng: &mut R,
) -> ScoredCandidate
where
    E: Evaluator + ?Sized,
    R: Rng,
{
    let best_score = population.best().score;
    let attempts: Vec<Candidate> = (0..tries)
        .map(|_| {
            let first = select_parent(population, best_score, rng);
            let second = select_parent(population, best_score, rng);
            crossover(&first.candidate, &second.candidate, rng)
        })
        .collect();

    evaluator
        .score_batch(attempts, host, target)
        .into_iter()
        .min_by_key(|scored| scored.score)
        .expect("tries must be positive")
}

/// Produces `children_count` scored children, one [`make_child`] at a time.
pub fn make_children<E, R>(
    population: &Population,
    children_count: usize,
    tries: usize,
    evaluator: &E,
    host: &DiGraph,
    target: &DiGraph,
    rng: &mut R,
) -> Vec<ScoredCandidate>
where
    E: Evaluator + ?Sized,
    R: Rng,
{
    (0..children_count)
        .map(|_| make_child(population, tries, evaluator, host, target, rng))
        .collect()
}
