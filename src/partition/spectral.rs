//! Recursive spectral bisection to a fixed cluster count.
//!
//! The partitioner reaches k clusters in two phases:
//!
//! 1. **Doubling**: `⌊log2 k⌋` rounds of bisecting every cluster, so the
//!    cluster count runs 1, 2, 4, ... up to the largest power of two not
//!    exceeding k.
//! 2. **Remainder**: if k is not a power of two, grow the partition one
//!    cluster at a time. Each step splits every existing cluster in
//!    turn, scores the resulting candidate partitions with
//!    [`performance`](crate::quality::performance), and keeps the best;
//!    the next step builds on the winner.
//!
//! Both phases produce new partitions rather than mutating the working
//! one, and the disjoint-cover invariant is checked after every stage in
//! debug builds.

use petgraph::graph::UnGraph;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::bisect::{bisect, bisect_all};
use super::traits::GraphPartition;
use super::validate_partition;
use crate::error::{Error, Result};
use crate::graph::{EdgeWeight, Partition};
use crate::quality::{edge_pairs, performance_of};

/// Recursive spectral-bisection partitioner.
///
/// Produces exactly `k` clusters by repeated modularity-matrix
/// bisection. Deterministic for a given graph and k; the input graph is
/// never mutated.
#[derive(Debug, Clone)]
pub struct SpectralBisection {
    /// Number of clusters to produce.
    k: usize,
}

impl SpectralBisection {
    /// Create a partitioner producing `k` clusters.
    pub fn new(k: usize) -> Self {
        Self { k }
    }

    /// One remainder step: grow the partition by a single cluster.
    ///
    /// Every current cluster is split in turn; the candidate partition
    /// scoring highest wins, with ties keeping the earliest candidate.
    fn grow_by_one<N, E: EdgeWeight>(
        &self,
        graph: &UnGraph<N, E>,
        partition: &Partition,
    ) -> Result<Partition> {
        let mut candidates = Vec::with_capacity(partition.len());
        for (i, set) in partition.iter().enumerate() {
            let (left, right) = bisect(graph, set)?;
            let mut candidate = Partition::with_capacity(partition.len() + 1);
            for (j, other) in partition.iter().enumerate() {
                if j != i {
                    candidate.push(other.clone());
                }
            }
            candidate.push(left);
            candidate.push(right);
            candidates.push(candidate);
        }

        let n = graph.node_count();
        let pairs = edge_pairs(graph);

        #[cfg(feature = "parallel")]
        let scores: Vec<f64> = candidates
            .par_iter()
            .map(|c| performance_of(n, &pairs, c))
            .collect();
        #[cfg(not(feature = "parallel"))]
        let scores: Vec<f64> = candidates
            .iter()
            .map(|c| performance_of(n, &pairs, c))
            .collect();

        let mut best = 0;
        for i in 1..scores.len() {
            if scores[i] > scores[best] {
                best = i;
            }
        }
        log::debug!(
            "remainder step: split cluster {} of {} (performance {:.6})",
            best,
            candidates.len(),
            scores[best]
        );

        Ok(candidates.swap_remove(best))
    }
}

impl GraphPartition for SpectralBisection {
    fn partition<N, E: EdgeWeight>(&self, graph: &UnGraph<N, E>) -> Result<Partition> {
        let n = graph.node_count();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k == 0 {
            return Err(Error::InvalidClusterCount {
                requested: 0,
                n_items: n,
            });
        }

        let mut partition: Partition = vec![graph.node_indices().collect()];

        // Doubling rounds up to the largest power of two <= k.
        let rounds = self.k.ilog2();
        for round in 0..rounds {
            partition = bisect_all(graph, &partition)?;
            debug_assert!(validate_partition(graph, &partition).is_ok());
            log::debug!("bisection round {}: {} clusters", round + 1, partition.len());
        }

        // One-at-a-time growth for the remainder.
        let remainder = self.k - (1usize << rounds);
        for _ in 0..remainder {
            partition = self.grow_by_one(graph, &partition)?;
            debug_assert!(validate_partition(graph, &partition).is_ok());
        }

        Ok(partition)
    }

    fn k(&self) -> usize {
        self.k
    }
}
