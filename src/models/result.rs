//! Top-level output of a clustering pass.

use serde::{Deserialize, Serialize};

use super::{Cluster, GeoTicket};

/// Label reported in [`AlgorithmStats::method`].
pub const METHOD_LABEL: &str = "Greedy Geographic Clustering";

/// Diagnostics for one clustering pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlgorithmStats {
    /// Wall-clock duration of the pass, as measured by the injected clock.
    pub execution_time_ms: u64,
    /// Seed visits, counting seeds skipped because they were already used.
    pub iterations: usize,
    pub method: String,
}

impl AlgorithmStats {
    /// Creates stats with the standard method label.
    pub fn new(execution_time_ms: u64, iterations: usize) -> Self {
        Self {
            execution_time_ms,
            iterations,
            method: METHOD_LABEL.to_string(),
        }
    }
}

/// Clusters and leftovers of a single pass.
///
/// Every input ticket is either a member of exactly one cluster or listed
/// in `unclustered_tickets`, never both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusteringResult<T> {
    pub clusters: Vec<Cluster<T>>,
    /// Tickets absorbed by no cluster, in original input order.
    pub unclustered_tickets: Vec<T>,
    pub total_clusters: usize,
    pub total_tickets_clustered: usize,
    /// Percentage of input tickets that ended up in a cluster, one decimal.
    pub clustering_efficiency: f64,
    pub algorithm_stats: AlgorithmStats,
}

impl<T: GeoTicket> ClusteringResult<T> {
    /// An empty result for an empty input.
    pub fn empty(stats: AlgorithmStats) -> Self {
        Self {
            clusters: Vec::new(),
            unclustered_tickets: Vec::new(),
            total_clusters: 0,
            total_tickets_clustered: 0,
            clustering_efficiency: 0.0,
            algorithm_stats: stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ticket;

    #[test]
    fn test_stats_label() {
        let s = AlgorithmStats::new(3, 10);
        assert_eq!(s.method, "Greedy Geographic Clustering");
        assert_eq!(s.iterations, 10);
    }

    #[test]
    fn test_empty_result() {
        let r: ClusteringResult<Ticket> = ClusteringResult::empty(AlgorithmStats::new(0, 0));
        assert_eq!(r.total_clusters, 0);
        assert_eq!(r.total_tickets_clustered, 0);
        assert_eq!(r.clustering_efficiency, 0.0);
        assert_eq!(r.algorithm_stats.iterations, 0);
    }

    #[test]
    fn test_result_serialization_shape() {
        let r: ClusteringResult<Ticket> = ClusteringResult::empty(AlgorithmStats::new(7, 0));
        let v = serde_json::to_value(&r).expect("serialize");
        assert_eq!(v["clusters"], serde_json::json!([]));
        assert_eq!(v["unclustered_tickets"], serde_json::json!([]));
        assert_eq!(v["total_clusters"], 0);
        assert_eq!(v["clustering_efficiency"], 0.0);
        assert_eq!(v["algorithm_stats"]["execution_time_ms"], 7);
        assert_eq!(
            v["algorithm_stats"]["method"],
            "Greedy Geographic Clustering"
        );
    }
}
