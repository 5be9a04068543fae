//! Spectral bisection of a node set via its modularity matrix.
//!
//! A single bisection:
//!
//! 1. Build the modularity matrix `B_ij = A_ij - d_i * d_j / 2m` of the
//!    induced subgraph.
//! 2. Take the eigenvector of B with the largest eigenvalue.
//! 3. Put nodes with a negative component on one side, the rest on the
//!    other.
//!
//! Components that are exactly zero land on the non-negative side. When
//! every component shares one sign the split is one-sided and the other
//! set comes back empty; that is a legal, if degenerate, result and is
//! left to callers to tolerate or reject.
//!
//! ## References
//!
//! Newman (2006). "Modularity and community structure in networks."
//! PNAS 103 (23), 8577-8582.

use nalgebra::SymmetricEigen;
use petgraph::graph::UnGraph;

use crate::error::{Error, Result};
use crate::graph::{EdgeWeight, NodeSet, Partition, Subgraph};

/// Split a node subset in two along the leading eigenvector of its
/// modularity matrix.
///
/// The returned sets are disjoint and together equal `members`. Either
/// side may be empty when the leading eigenvector is one-signed. Pure
/// function of the graph and subset; the matrix is rebuilt fresh on
/// every call.
///
/// # Errors
///
/// [`Error::DegenerateSubgraph`] if `members` has fewer than 2 nodes.
pub fn bisect<N, E: EdgeWeight>(
    graph: &UnGraph<N, E>,
    members: &NodeSet,
) -> Result<(NodeSet, NodeSet)> {
    if members.len() < 2 {
        return Err(Error::DegenerateSubgraph {
            nodes: members.len(),
        });
    }

    let sub = Subgraph::induced(graph, members);
    let eigen = SymmetricEigen::new(sub.modularity_matrix());

    // First index attaining the maximum eigenvalue.
    let mut lead = 0;
    for i in 1..eigen.eigenvalues.len() {
        if eigen.eigenvalues[i] > eigen.eigenvalues[lead] {
            lead = i;
        }
    }

    let mut negative = NodeSet::new();
    let mut non_negative = NodeSet::new();
    for (i, &node) in sub.nodes.iter().enumerate() {
        if eigen.eigenvectors[(i, lead)] < 0.0 {
            let _ = negative.insert(node);
        } else {
            let _ = non_negative.insert(node);
        }
    }

    Ok((negative, non_negative))
}

/// Bisect every set in a partition, doubling its length.
///
/// Pure fan-out of [`bisect`]: each input set is replaced, in order, by
/// its two halves. Any degenerate-subgraph error propagates unchanged.
pub fn bisect_all<N, E: EdgeWeight>(
    graph: &UnGraph<N, E>,
    partition: &[NodeSet],
) -> Result<Partition> {
    let mut next = Partition::with_capacity(partition.len() * 2);
    for set in partition {
        let (left, right) = bisect(graph, set)?;
        next.push(left);
        next.push(right);
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::NodeIndex;

    fn two_triangles() -> (UnGraph<(), ()>, Vec<NodeIndex>) {
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let nodes: Vec<_> = (0..6).map(|_| graph.add_node(())).collect();
        for &(a, b) in &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)] {
            let _ = graph.add_edge(nodes[a], nodes[b], ());
        }
        (graph, nodes)
    }

    #[test]
    fn test_bisect_separates_disconnected_triangles() {
        let (graph, nodes) = two_triangles();
        let all: NodeSet = nodes.iter().copied().collect();

        let (left, right) = bisect(&graph, &all).unwrap();

        let first: NodeSet = nodes[..3].iter().copied().collect();
        let second: NodeSet = nodes[3..].iter().copied().collect();
        assert!(
            (left == first && right == second) || (left == second && right == first),
            "split should recover the two triangles"
        );
    }

    #[test]
    fn test_bisect_union_and_disjointness() {
        let (graph, nodes) = two_triangles();
        let all: NodeSet = nodes.iter().copied().collect();

        let (left, right) = bisect(&graph, &all).unwrap();

        assert!(left.is_disjoint(&right));
        let union: NodeSet = left.union(&right).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn test_bisect_weighted_cut_at_light_edge() {
        // Two heavy pairs joined by a light bridge: 0=1 -- 2=3.
        let mut graph = UnGraph::<(), f64>::new_undirected();
        let nodes: Vec<_> = (0..4).map(|_| graph.add_node(())).collect();
        let _ = graph.add_edge(nodes[0], nodes[1], 10.0);
        let _ = graph.add_edge(nodes[2], nodes[3], 10.0);
        let _ = graph.add_edge(nodes[1], nodes[2], 0.1);

        let all: NodeSet = nodes.iter().copied().collect();
        let (left, right) = bisect(&graph, &all).unwrap();

        let first: NodeSet = nodes[..2].iter().copied().collect();
        let second: NodeSet = nodes[2..].iter().copied().collect();
        assert!(
            (left == first && right == second) || (left == second && right == first),
            "split should cut the light bridge"
        );
    }

    #[test]
    fn test_bisect_rejects_small_subsets() {
        let (graph, nodes) = two_triangles();

        let singleton: NodeSet = [nodes[0]].into_iter().collect();
        assert_eq!(
            bisect(&graph, &singleton),
            Err(Error::DegenerateSubgraph { nodes: 1 })
        );

        let empty = NodeSet::new();
        assert_eq!(
            bisect(&graph, &empty),
            Err(Error::DegenerateSubgraph { nodes: 0 })
        );
    }

    #[test]
    fn test_bisect_zero_components_share_the_non_negative_side() {
        // No edges at all: the modularity matrix is zero and every
        // eigenvector component is 0 or 1, never negative.
        let mut graph = UnGraph::<(), ()>::new_undirected();
        let a = graph.add_node(());
        let b = graph.add_node(());

        let members: NodeSet = [a, b].into_iter().collect();
        let (negative, non_negative) = bisect(&graph, &members).unwrap();

        assert!(negative.is_empty());
        assert_eq!(non_negative, members);
    }

    #[test]
    fn test_bisect_all_doubles_the_partition() {
        let (graph, nodes) = two_triangles();
        let all: NodeSet = nodes.iter().copied().collect();

        let doubled = bisect_all(&graph, &[all.clone()]).unwrap();
        assert_eq!(doubled.len(), 2);

        let union: NodeSet = doubled.iter().flatten().copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn test_bisect_all_propagates_degenerate_error() {
        let (graph, nodes) = two_triangles();
        let singleton: NodeSet = [nodes[0]].into_iter().collect();
        let rest: NodeSet = nodes[1..].iter().copied().collect();

        let result = bisect_all(&graph, &[rest, singleton]);
        assert_eq!(result, Err(Error::DegenerateSubgraph { nodes: 1 }));
    }

    #[test]
    fn test_bisect_does_not_mutate_the_graph() {
        let (graph, nodes) = two_triangles();
        let all: NodeSet = nodes.iter().copied().collect();
        let (n_before, e_before) = (graph.node_count(), graph.edge_count());

        let _ = bisect(&graph, &all).unwrap();

        assert_eq!(graph.node_count(), n_before);
        assert_eq!(graph.edge_count(), e_before);
    }
}
