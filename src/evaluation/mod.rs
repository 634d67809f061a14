//! Cluster metrics: centre point, spread, and overall efficiency.

mod evaluator;

pub use evaluator::{center_of, clustering_efficiency, ClusterEvaluator};
