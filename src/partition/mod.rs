//! Graph partitioning by modularity maximization.
//!
//! Given an undirected weighted graph, split its nodes into exactly k
//! disjoint clusters such that nodes within a cluster are densely
//! connected relative to a random-graph null model.
//!
//! ## The Modularity Matrix
//!
//! For a (sub)graph with adjacency A, weighted degrees d and total edge
//! weight m, the modularity matrix is
//!
//! ```text
//! B_ij = A_ij - (d_i * d_j) / (2m)
//! ```
//!
//! Each entry compares the observed weight between i and j to the weight
//! expected if edges were rewired at random while preserving degrees. B
//! is real and symmetric, so it has a full set of real eigenvalues and
//! orthonormal eigenvectors.
//!
//! ## Spectral Bisection
//!
//! The eigenvector of B with the largest eigenvalue is a continuous
//! relaxation of the best modularity bipartition: nodes whose component
//! is negative go to one side, the rest to the other ([`bisect`]). A
//! subgraph with no community structure yields a one-signed eigenvector
//! and a one-sided (degenerate) split.
//!
//! ## Reaching arbitrary k
//!
//! [`SpectralBisection`] first doubles the cluster count `⌊log2 k⌋`
//! times by bisecting every cluster ([`bisect_all`]). When k is not a
//! power of two, it then grows the partition one cluster at a time,
//! splitting whichever cluster's bisection scores best under
//! [`performance`](crate::quality::performance).
//!
//! ## Usage
//!
//! ```rust
//! use petgraph::graph::UnGraph;
//! use cleave::{GraphPartition, SpectralBisection};
//!
//! // Two triangles with no edges between them.
//! let mut graph = UnGraph::<(), ()>::new_undirected();
//! let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
//! for &(a, b) in &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)] {
//!     graph.add_edge(nodes[a], nodes[b], ());
//! }
//!
//! let clusters = SpectralBisection::new(2).partition(&graph).unwrap();
//! assert_eq!(clusters.len(), 2);
//! let first = clusters.iter().find(|c| c.contains(&nodes[0])).unwrap();
//! assert!(first.contains(&nodes[1]) && first.contains(&nodes[2]));
//! ```
//!
//! ## References
//!
//! - Newman (2006). "Modularity and community structure in networks."
//!   PNAS 103 (23).
//! - Newman (2006). "Finding community structure in networks using the
//!   eigenvectors of matrices." Physical Review E 74, 036104.

mod bisect;
mod spectral;
mod traits;

pub use bisect::{bisect, bisect_all};
pub use spectral::SpectralBisection;
pub use traits::GraphPartition;

use crate::error::{Error, Result};
use crate::graph::NodeSet;
use petgraph::graph::UnGraph;

/// Check the disjoint-cover invariant: the sets of `partition` are
/// pairwise disjoint and their union is exactly the node set of `graph`.
///
/// Empty sets are permitted; they contribute nothing to the cover.
pub fn validate_partition<N, E>(graph: &UnGraph<N, E>, partition: &[NodeSet]) -> Result<()> {
    let mut seen = NodeSet::new();
    let mut total = 0usize;
    for set in partition {
        total += set.len();
        seen.extend(set.iter().copied());
    }

    if seen.len() != total {
        return Err(Error::InvalidPartition {
            reason: "clusters overlap".to_string(),
        });
    }
    if total != graph.node_count() {
        return Err(Error::InvalidPartition {
            reason: format!(
                "{} nodes assigned, graph has {}",
                total,
                graph.node_count()
            ),
        });
    }
    for node in graph.node_indices() {
        if !seen.contains(&node) {
            return Err(Error::InvalidPartition {
                reason: format!("node {} is not assigned to any cluster", node.index()),
            });
        }
    }
    Ok(())
}

/// Cluster label for each node, indexed by `NodeIndex::index()`.
///
/// Labels follow partition order: nodes in `partition[c]` get label c.
/// The partition is validated first.
pub fn membership<N, E>(graph: &UnGraph<N, E>, partition: &[NodeSet]) -> Result<Vec<usize>> {
    validate_partition(graph, partition)?;

    let mut labels = vec![0usize; graph.node_count()];
    for (c, set) in partition.iter().enumerate() {
        for &node in set {
            labels[node.index()] = c;
        }
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Partition;

    fn path_graph(n: usize) -> UnGraph<(), ()> {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..n).map(|_| graph.add_node(())).collect();
        for w in nodes.windows(2) {
            let _ = graph.add_edge(w[0], w[1], ());
        }
        graph
    }

    #[test]
    fn test_validate_accepts_exact_cover() {
        let graph = path_graph(4);
        let nodes: Vec<_> = graph.node_indices().collect();
        let partition: Partition = vec![
            nodes[..2].iter().copied().collect(),
            nodes[2..].iter().copied().collect(),
        ];
        assert!(validate_partition(&graph, &partition).is_ok());
    }

    #[test]
    fn test_validate_accepts_empty_sets() {
        let graph = path_graph(3);
        let all: NodeSet = graph.node_indices().collect();
        let partition: Partition = vec![all, NodeSet::new()];
        assert!(validate_partition(&graph, &partition).is_ok());
    }

    #[test]
    fn test_validate_rejects_overlap() {
        let graph = path_graph(3);
        let nodes: Vec<_> = graph.node_indices().collect();
        let partition: Partition = vec![
            nodes[..2].iter().copied().collect(),
            nodes[1..].iter().copied().collect(),
        ];
        assert!(matches!(
            validate_partition(&graph, &partition),
            Err(Error::InvalidPartition { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_missing_nodes() {
        let graph = path_graph(3);
        let nodes: Vec<_> = graph.node_indices().collect();
        let partition: Partition = vec![nodes[..2].iter().copied().collect()];
        assert!(matches!(
            validate_partition(&graph, &partition),
            Err(Error::InvalidPartition { .. })
        ));
    }

    #[test]
    fn test_membership_labels_follow_partition_order() {
        let graph = path_graph(4);
        let nodes: Vec<_> = graph.node_indices().collect();
        let partition: Partition = vec![
            nodes[2..].iter().copied().collect(),
            nodes[..2].iter().copied().collect(),
        ];

        let labels = membership(&graph, &partition).unwrap();
        assert_eq!(labels, vec![1, 1, 0, 0]);
    }

    #[test]
    fn test_membership_rejects_invalid_partition() {
        let graph = path_graph(3);
        let partition: Partition = vec![NodeSet::new()];
        assert!(membership(&graph, &partition).is_err());
    }
}
