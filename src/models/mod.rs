//! Domain model types for ticket clustering.
//!
//! Provides the input ticket abstraction (a trait plus a concrete serde
//! record that carries arbitrary extra fields), priorities, committed
//! clusters, and the result of a clustering pass.

mod cluster;
mod result;
mod ticket;

pub use cluster::{CenterPoint, Cluster};
pub use result::{AlgorithmStats, ClusteringResult, METHOD_LABEL};
pub use ticket::{GeoTicket, Priority, Ticket};
