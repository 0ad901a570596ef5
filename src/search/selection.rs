//! Parent selection.
//!
//! Fitness-proportionate sampling by rejection: a member drawn uniformly
//! at random is kept with probability `best_score / member_score`. Lower
//! scores are fitter, so acceptance decays as a member falls behind the
//! current best, and a member tied with the best is always kept.

use super::types::{Population, ScoredCandidate};
use rand::Rng;

/// Draws one parent from the population, biased toward low scores.
///
/// `best_score` is the population's current best, passed in by the caller
/// so a whole brood of children is selected against one fixed reference.
///
/// A member with score zero is accepted unconditionally. It is already a
/// perfect match, and the ratio test would otherwise divide by zero; such
/// a member can be encountered here when a zero score appears mid-way
/// through a generation, before the loop's termination check runs.
///
/// The loop terminates with probability 1: the best member passes its own
/// ratio test on every draw.
pub fn select_parent<'a, R: Rng>(
    population: &'a Population,
    best_score: usize,
    rng: &mut R,
) -> &'a ScoredCandidate {
    let members = population.members();
    loop {
        let member = &members[rng.random_range(0..members.len())];
        if member.score == 0 {
            return member;
        }
        let threshold: f64 = rng.random_range(0.0..1.0);
        if best_score as f64 / member.score as f64 >= threshold {
            return member;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::types::Candidate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population(scores: &[usize]) -> Population {
        Population::from_scored(
            scores
                .iter()
                .enumerate()
                .map(|(i, &score)| ScoredCandidate {
                    candidate: Candidate::new(vec![i]),
                    score,
                })
                .collect(),
        )
    }

    #[test]
    fn test_zero_score_member_dominates() {
        // One perfect member among positive scores: with best_score 0,
        // every non-zero member has acceptance ratio 0, so only the
        // perfect member can be returned. No division fault, no hang.
        let pop = population(&[0, 5, 9, 14]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..2000 {
            let parent = select_parent(&pop, pop.best().score, &mut rng);
            assert_eq!(parent.score, 0);
        }
    }

    #[test]
    fn test_all_zero_scores_no_fault() {
        let pop = population(&[0, 0, 0]);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(select_parent(&pop, 0, &mut rng).score, 0);
        }
    }

    #[test]
    fn test_bias_toward_low_scores() {
        let pop = population(&[2, 4, 16]);
        let mut rng = StdRng::seed_from_u64(7);

        let mut counts = [0u32; 3];
        let n = 20_000;
        for _ in 0..n {
            let parent = select_parent(&pop, pop.best().score, &mut rng);
            let idx = pop
                .members()
                .iter()
                .position(|m| m.score == parent.score)
                .unwrap();
            counts[idx] += 1;
        }

        // Acceptance ratios are 1, 1/2 and 1/8, so expected frequencies
        // are proportional to those. Generous margins keep this stable.
        assert!(
            counts[0] > counts[1] && counts[1] > counts[2],
            "expected monotone bias, got {counts:?}"
        );
        assert!(
            counts[0] > 3 * counts[2],
            "best should dwarf the worst: {counts:?}"
        );
    }

    #[test]
    fn test_equal_scores_roughly_uniform() {
        let pop = population(&[6, 6, 6, 6]);
        let mut rng = StdRng::seed_from_u64(13);

        let mut by_id = [0u32; 4];
        let n = 20_000;
        for _ in 0..n {
            let parent = select_parent(&pop, 6, &mut rng);
            by_id[parent.candidate.nodes()[0]] += 1;
        }
        for &c in &by_id {
            assert!(c > 3500, "expected roughly uniform, got {by_id:?}");
        }
    }

    #[test]
    fn test_single_member_population() {
        let pop = population(&[11]);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(select_parent(&pop, 11, &mut rng).score, 11);
    }
}
