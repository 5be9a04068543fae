//! Graph partitioning traits.

use crate::error::Result;
use crate::graph::{EdgeWeight, Partition};
use petgraph::graph::UnGraph;

/// Trait for algorithms that split a graph into a fixed number of clusters.
pub trait GraphPartition {
    /// Partition the graph's nodes into disjoint clusters.
    ///
    /// Returns the clusters as node sets; together they cover every node
    /// of the graph exactly once.
    fn partition<N, E: EdgeWeight>(&self, graph: &UnGraph<N, E>) -> Result<Partition>;

    /// The number of clusters this algorithm produces.
    fn k(&self) -> usize;
}
