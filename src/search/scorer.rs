//! Mismatch scoring of a candidate against the target graph.

use super::types::Candidate;
use crate::graph::{DiGraph, NodeId};
use std::collections::HashMap;

/// Counts the structural mismatch between the host subgraph induced by
/// `candidate` and the target graph.
///
/// Position `i` of the candidate stands in for target node `i`. Every
/// host edge between two selected nodes becomes a comparison edge between
/// their positions; the score is the number of comparison edges absent
/// from the target plus the number of target edges absent from the
/// comparison. Zero exactly when the induced structure matches the target
/// edge for edge.
///
/// Pure and deterministic. O(k * d) over candidate length `k` and host
/// out-degree `d`: positions are looked up through an exact index built
/// once per call, and target membership is O(1), so the symmetric
/// difference is obtained by counting matches rather than scanning edge
/// lists against each other.
///
/// # Panics
/// Panics if the candidate's length differs from the target's node count.
pub fn score(candidate: &Candidate, host: &DiGraph, target: &DiGraph) -> usize {
    assert_eq!(
        candidate.len(),
        target.node_count(),
        "candidate length must equal target node count"
    );

    // Positions are unambiguous: candidate ids are distinct by construction.
    let position: HashMap<NodeId, usize> = candidate
        .nodes()
        .iter()
        .enumerate()
        .map(|(i, &n)| (n, i))
        .collect();

    let mut comparison_edges = 0usize;
    let mut matched = 0usize;
    for (i, &h) in candidate.nodes().iter().enumerate() {
        for &v in host.neighbors(h) {
            if let Some(&j) = position.get(&v) {
                comparison_edges += 1;
                if target.has_edge(i, j) {
                    matched += 1;
                }
            }
        }
    }

    (comparison_edges - matched) + (target.edge_count() - matched)
}
