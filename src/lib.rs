//! # u-geocluster
//!
//! Greedy geographic clustering of field-service tickets for engineer
//! scheduling: haversine distance, priority-ranked seeding, and precise or
//! min/max cluster sizing.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Ticket, Priority, Cluster, ClusteringResult)
//! - [`distance`] — Haversine great-circle distance
//! - [`clustering`] — Seed ranking, sizing policies, and the greedy clusterer
//! - [`evaluation`] — Cluster centre, spread, and efficiency metrics
//! - [`clock`] — Injectable time sources for execution timing
//! - [`request`] — Request payload validation and JSON/FFI/WASM entry points
//! - [`error`] — Validation error type
//!
//! ## Example
//!
//! ```
//! use u_geocluster::clustering::{ClusteringOptions, GreedyClusterer};
//! use u_geocluster::models::Ticket;
//!
//! let tickets = vec![
//!     Ticket::new("FS-1", 51.5074, -0.1278).with_priority("Critical"),
//!     Ticket::new("FS-2", 51.5080, -0.1280),
//!     Ticket::new("FS-3", 51.5090, -0.1300),
//!     Ticket::new("FS-4", 55.9533, -3.1883),
//! ];
//! let options = ClusteringOptions::new(2.0).with_size_range(2, 4);
//! let result = GreedyClusterer::new(options).cluster(&tickets);
//!
//! assert_eq!(result.total_clusters, 1);
//! assert_eq!(result.clusters[0].seed_id, "FS-1");
//! assert_eq!(result.unclustered_tickets.len(), 1);
//! ```

pub mod clock;
pub mod clustering;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod request;

pub use error::{ClusterError, Result};
