use core::fmt;

/// Result alias for `cleave`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the partitioning primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input graph had no nodes.
    EmptyInput,

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of nodes available.
        n_items: usize,
    },

    /// A bisection was attempted on a subset too small to split.
    DegenerateSubgraph {
        /// Number of nodes in the subset.
        nodes: usize,
    },

    /// A partition violated the disjoint-cover invariant.
    InvalidPartition {
        /// What was wrong with it.
        reason: String,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} items")
            }
            Error::DegenerateSubgraph { nodes } => {
                write!(f, "cannot bisect a subgraph with {nodes} nodes")
            }
            Error::InvalidPartition { reason } => {
                write!(f, "invalid partition: {reason}")
            }
        }
    }
}

impl std::error::Error for Error {}
