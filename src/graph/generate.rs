//! Random graph generation for experiments and tests.

use super::{DiGraph, NodeId};
use rand::Rng;

/// Generates a random directed graph in which every node has out-degree
/// at least `min_out_degree`.
///
/// Each node draws uniformly random targets, discarding draws of itself,
/// until its out-degree reaches the minimum. Duplicate draws land on the
/// same edge and leave the degree unchanged, so the result has no
/// parallel edges and no self-loops.
///
/// # Panics
/// Panics if `min_out_degree >= node_count`: a node has only
/// `node_count - 1` distinct non-self targets available.
pub fn random_graph<R: Rng>(node_count: usize, min_out_degree: usize, rng: &mut R) -> DiGraph {
    assert!(
        min_out_degree < node_count,
        "min_out_degree ({min_out_degree}) must be less than node_count ({node_count})"
    );

    let mut graph = DiGraph::new(node_count);
    for node in 0..node_count {
        while graph.out_degree(node) < min_out_degree {
            let target: NodeId = rng.random_range(0..node_count);
            if target != node {
                graph.add_edge(node, target);
            }
        }
    }
    graph
}
