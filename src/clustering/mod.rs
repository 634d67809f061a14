//! Greedy geographic clustering of tickets.
//!
//! - [`rank_seeds`] — Priority ordering of seed candidates, O(n log n)
//! - [`SizePolicy`] — Precise, min/max, legacy and default sizing
//! - [`GreedyClusterer`] — Seed-based single-pass grouping, O(n²)
//! - [`auto_cluster`] — One-call convenience over [`GreedyClusterer`]

mod greedy;
mod options;
mod policy;
mod ranking;

pub use greedy::{auto_cluster, GreedyClusterer};
pub use options::ClusteringOptions;
pub use policy::{SizePolicy, DEFAULT_MAX_SIZE, DEFAULT_MIN_SIZE};
pub use ranking::rank_seeds;
