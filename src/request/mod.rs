//! The calling boundary: request decoding, validation, and bindings.
//!
//! - [`AutoClusterRequest`] — Serde payload with the dashboard's field names
//! - [`auto_cluster_json`] — JSON in, JSON out
//! - `ffi` (feature `ffi`) — C ABI over the JSON entry point
//! - `wasm` (feature `wasm`) — `autoCluster` for JavaScript callers

mod payload;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use payload::{
    auto_cluster_json, error_json, AutoClusterRequest, MAX_CLUSTER_SIZE, MAX_RADIUS_KM,
    MIN_CLUSTER_SIZE, MIN_RADIUS_KM,
};
