//! Solution and population types.
//!
//! Named structures instead of ad hoc tuples: [`Candidate`] is the
//! chromosome, [`ScoredCandidate`] pairs it with its mismatch score, and
//! [`Population`] is the score-sorted pool the generation loop works on.

use crate::graph::NodeId;
use rand::Rng;
use std::collections::HashSet;

/// An ordered selection of host-graph nodes.
///
/// Position `i` stands in for target-graph node `i`, so a candidate of
/// length `k` maps an entire `k`-node target into the host. The ids are
/// always pairwise distinct: a candidate denotes an injective mapping,
/// and the scorer relies on positions being unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    nodes: Vec<NodeId>,
}

impl Candidate {
    /// Wraps an id sequence as a candidate.
    ///
    /// # Panics
    /// Panics if the ids are not pairwise distinct.
    pub fn new(nodes: Vec<NodeId>) -> Self {
        let mut seen = HashSet::with_capacity(nodes.len());
        assert!(
            nodes.iter().all(|&n| seen.insert(n)),
            "candidate ids must be distinct"
        );
        Self { nodes }
    }

    /// Draws a uniform random `k`-subset of `0..host_node_count`, in
    /// random order.
    ///
    /// # Panics
    /// Panics if `k > host_node_count`.
    pub fn random<R: Rng>(host_node_count: usize, k: usize, rng: &mut R) -> Self {
        let nodes = rand::seq::index::sample(rng, host_node_count, k).into_vec();
        Self { nodes }
    }

    /// Number of mapped positions (the target's node count).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the candidate maps no positions at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The host ids in position order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }
}

/// A candidate together with its mismatch score.
///
/// Zero means the host subgraph induced by the candidate is
/// edge-identical to the target under the position mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    /// The node mapping.
    pub candidate: Candidate,
    /// Mismatch count, lower is better.
    pub score: usize,
}

/// A fixed-capacity pool of scored candidates, sorted ascending by score.
///
/// The generation loop replaces the population wholesale each generation
/// via [`next_generation`](Population::next_generation); nothing mutates
/// it concurrently.
#[derive(Debug, Clone)]
pub struct Population {
    members: Vec<ScoredCandidate>,
}

impl Population {
    /// Builds a population from freshly scored members.
    ///
    /// # Panics
    /// Panics if `members` is empty.
    pub fn from_scored(mut members: Vec<ScoredCandidate>) -> Self {
        assert!(!members.is_empty(), "population must not be empty");
        members.sort_by_key(|m| m.score);
        Self { members }
    }

    /// The best (lowest-scoring) member.
    pub fn best(&self) -> &ScoredCandidate {
        &self.members[0]
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always `false`: a population holds at least one member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// All members, best first.
    pub fn members(&self) -> &[ScoredCandidate] {
        &self.members
    }

    /// Forms the next generation: the best `len() - children.len()`
    /// current members survive, the children are merged in, and the
    /// ascending order is restored. Capacity is unchanged.
    ///
    /// # Panics
    /// Panics if there are more children than the population holds.
    pub fn next_generation(&self, children: Vec<ScoredCandidate>) -> Self {
        assert!(
            children.len() <= self.members.len(),
            "children ({}) exceed population capacity ({})",
            children.len(),
            self.members.len()
        );
        let survivors = self.members.len() - children.len();
        let mut members = self.members[..survivors].to_vec();
        members.extend(children);
        members.sort_by_key(|m| m.score);
        Self { members }
    }
}
