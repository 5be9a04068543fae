//! # cleave
//!
//! Spectral graph partitioning by recursive modularity-matrix bisection.
//!
//! Splits an undirected weighted graph into exactly k disjoint clusters:
//! each bisection builds the modularity matrix of a node subset, takes
//! the eigenvector of its largest eigenvalue, and separates nodes by the
//! sign of their component. Repeated doubling reaches the largest power
//! of two below k; the remaining clusters are grown one at a time,
//! guided by a partition-quality score.
//!
//! Graphs are `petgraph::graph::UnGraph` values; edge weights are read
//! through [`EdgeWeight`], so both `()` (unit weight) and float edge
//! types work. The whole computation is deterministic, sequential, and
//! free of side effects on the input graph.

/// Error types used across `cleave`.
pub mod error;
pub mod graph;
pub mod partition;
pub mod quality;

pub use error::{Error, Result};
pub use graph::{EdgeWeight, NodeSet, Partition};
pub use partition::{
    bisect, bisect_all, membership, validate_partition, GraphPartition, SpectralBisection,
};
pub use quality::{modularity, performance};
