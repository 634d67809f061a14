//! Geodesic distance between latitude/longitude points.
//!
//! Provides the haversine great-circle distance used for both candidate
//! selection and cluster spread metrics.

mod haversine;

pub use haversine::{haversine_km, round_to, ticket_distance_km, EARTH_RADIUS_KM};
