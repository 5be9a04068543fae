//! Partition quality scores.
//!
//! Two complementary measures of how well a partition fits a graph:
//!
//! | Metric | Range | Best | Measures |
//! |--------|-------|------|----------|
//! | [`performance`] | [0, 1] | 1 | Node pairs classified correctly |
//! | [`modularity`] | [-1/2, 1] | high | Intra-cluster weight vs. null model |
//!
//! [`performance`] counts edge *existence* only; [`modularity`] uses edge
//! weights and the degree-sequence null model. Both treat the partition
//! as given and do not check the disjoint-cover invariant; see
//! [`validate_partition`](crate::partition::validate_partition) for that.
//!
//! # References
//!
//! - Fortunato (2010). "Community detection in graphs." Physics Reports 486.
//! - Newman & Girvan (2004). "Finding and evaluating community structure
//!   in networks."

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

use crate::graph::{EdgeWeight, NodeSet};

/// Distinct node pairs joined by at least one edge, self-loops excluded.
pub(crate) fn edge_pairs<N, E>(graph: &UnGraph<N, E>) -> HashSet<(NodeIndex, NodeIndex)> {
    let mut pairs = HashSet::new();
    for edge in graph.edge_references() {
        let (a, b) = (edge.source(), edge.target());
        if a == b {
            continue;
        }
        let key = if a < b { (a, b) } else { (b, a) };
        let _ = pairs.insert(key);
    }
    pairs
}

/// Fraction of node pairs the partition classifies correctly.
///
/// A pair is correct when it is intra-cluster and joined by an edge, or
/// inter-cluster with no edge between it. The score is the correct
/// fraction of all `n * (n - 1) / 2` pairs. Edge weights and self-loops
/// are ignored; only existence matters. A graph with fewer than two
/// nodes scores 1.
pub fn performance<N, E>(graph: &UnGraph<N, E>, partition: &[NodeSet]) -> f64 {
    performance_of(graph.node_count(), &edge_pairs(graph), partition)
}

/// [`performance`] against a precomputed edge-pair set.
///
/// Lets callers score many candidate partitions of the same graph
/// without re-walking its edges.
pub(crate) fn performance_of(
    n: usize,
    edge_pairs: &HashSet<(NodeIndex, NodeIndex)>,
    partition: &[NodeSet],
) -> f64 {
    if n < 2 {
        return 1.0;
    }
    let total_pairs = n * (n - 1) / 2;

    let mut cluster_of: HashMap<NodeIndex, usize> = HashMap::new();
    for (c, set) in partition.iter().enumerate() {
        for &node in set {
            let _ = cluster_of.insert(node, c);
        }
    }

    let intra_pairs: usize = partition
        .iter()
        .map(|s| s.len() * s.len().saturating_sub(1) / 2)
        .sum();

    let mut intra_edges = 0usize;
    for (a, b) in edge_pairs {
        if let (Some(ca), Some(cb)) = (cluster_of.get(a), cluster_of.get(b)) {
            if ca == cb {
                intra_edges += 1;
            }
        }
    }

    let inter_pairs = total_pairs - intra_pairs;
    let inter_edges = edge_pairs.len() - intra_edges;
    let correct = intra_edges + (inter_pairs - inter_edges);

    correct as f64 / total_pairs as f64
}

/// Weighted Newman modularity Q of a partition.
///
/// `Q = sum_c [ w_c / m - (d_c / 2m)^2 ]` where `w_c` is the
/// intra-cluster edge weight of cluster c, `d_c` its total weighted
/// degree, and m the graph's total edge weight. Zero for an edgeless
/// graph. Positive Q means denser clusters than the degree-sequence
/// null model predicts.
pub fn modularity<N, E: EdgeWeight>(graph: &UnGraph<N, E>, partition: &[NodeSet]) -> f64 {
    let mut cluster_of: HashMap<NodeIndex, usize> = HashMap::new();
    for (c, set) in partition.iter().enumerate() {
        for &node in set {
            let _ = cluster_of.insert(node, c);
        }
    }

    let mut intra = vec![0.0; partition.len()];
    let mut degree = vec![0.0; partition.len()];
    let mut m = 0.0;

    for edge in graph.edge_references() {
        let w = edge.weight().weight();
        m += w;
        if let (Some(&ca), Some(&cb)) = (
            cluster_of.get(&edge.source()),
            cluster_of.get(&edge.target()),
        ) {
            degree[ca] += w;
            degree[cb] += w;
            if ca == cb {
                intra[ca] += w;
            }
        }
    }

    if m == 0.0 {
        return 0.0;
    }

    let mut q = 0.0;
    for c in 0..partition.len() {
        q += intra[c] / m - (degree[c] / (2.0 * m)).powi(2);
    }
    q
}
