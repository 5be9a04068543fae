//! Weighted-graph access for the bisection routines.
//!
//! Partitioning operates on `petgraph::graph::UnGraph` directly. Edge
//! weights are read through the [`EdgeWeight`] trait so that unweighted
//! graphs (`UnGraph<N, ()>`) and weighted graphs (`UnGraph<N, f64>`)
//! both work unmodified.

use nalgebra::DMatrix;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use std::collections::{HashMap, HashSet};

/// A set of node identifiers forming one cluster.
pub type NodeSet = HashSet<NodeIndex>;

/// An ordered sequence of disjoint node sets; its length is the cluster count.
pub type Partition = Vec<NodeSet>;

/// Edge weight extraction.
///
/// Weights must be non-negative. The unit edge type `()` weighs 1, so
/// graphs built without explicit weights behave as unweighted.
pub trait EdgeWeight {
    /// The weight of this edge.
    fn weight(&self) -> f64;
}

impl EdgeWeight for () {
    fn weight(&self) -> f64 {
        1.0
    }
}

impl EdgeWeight for f32 {
    fn weight(&self) -> f64 {
        f64::from(*self)
    }
}

impl EdgeWeight for f64 {
    fn weight(&self) -> f64 {
        *self
    }
}

/// Read-only view of the subgraph induced by a node subset.
///
/// Nodes are held in ascending index order; that order fixes the row and
/// column layout of the adjacency and modularity matrices, so eigenvector
/// component i always refers to `nodes[i]`. Built fresh for every
/// bisection; never mutates the parent graph.
pub(crate) struct Subgraph {
    /// Subset nodes, ascending by index.
    pub nodes: Vec<NodeIndex>,
    /// Dense weighted adjacency restricted to the subset.
    pub adjacency: DMatrix<f64>,
    /// Weighted degree of each node within the subset.
    pub degrees: Vec<f64>,
    /// Total edge weight within the subset (m in the modularity formula).
    pub total_weight: f64,
}

impl Subgraph {
    /// Restrict `graph` to `members`, keeping only edges with both
    /// endpoints inside the subset.
    ///
    /// Parallel edges accumulate weight. A self-loop contributes twice
    /// its weight to the node's diagonal entry and degree, so row sums
    /// equal degrees throughout.
    pub fn induced<N, E: EdgeWeight>(graph: &UnGraph<N, E>, members: &NodeSet) -> Self {
        let mut nodes: Vec<NodeIndex> = members.iter().copied().collect();
        nodes.sort_unstable();

        let index_of: HashMap<NodeIndex, usize> =
            nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();

        let n = nodes.len();
        let mut adjacency = DMatrix::zeros(n, n);
        for edge in graph.edge_references() {
            if let (Some(&i), Some(&j)) = (
                index_of.get(&edge.source()),
                index_of.get(&edge.target()),
            ) {
                let w = edge.weight().weight();
                if i == j {
                    adjacency[(i, i)] += 2.0 * w;
                } else {
                    adjacency[(i, j)] += w;
                    adjacency[(j, i)] += w;
                }
            }
        }

        let degrees: Vec<f64> = (0..n).map(|i| adjacency.row(i).sum()).collect();
        let total_weight = degrees.iter().sum::<f64>() / 2.0;

        Self {
            nodes,
            adjacency,
            degrees,
            total_weight,
        }
    }

    /// Number of nodes in the view.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The modularity matrix `B_ij = A_ij - d_i * d_j / 2m`.
    ///
    /// An edgeless subset has no null model; B degenerates to the (zero)
    /// adjacency.
    pub fn modularity_matrix(&self) -> DMatrix<f64> {
        let n = self.node_count();
        let two_m = 2.0 * self.total_weight;
        let mut b = self.adjacency.clone();
        if two_m > 0.0 {
            for i in 0..n {
                for j in 0..n {
                    b[(i, j)] -= self.degrees[i] * self.degrees[j] / two_m;
                }
            }
        }
        b
    }
}
