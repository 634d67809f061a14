//! Great-circle distance on a spherical Earth.
//!
//! # Formula
//!
//! ```text
//! a = sin²(Δφ/2) + cos φ1 · cos φ2 · sin²(Δλ/2)
//! c = 2 · atan2(√a, √(1−a))
//! d = R · c
//! ```
//!
//! with R = 6371 km. Inputs are not validated: out-of-range or non-finite
//! coordinates produce a defined but meaningless number.

use crate::models::GeoTicket;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two points in decimal degrees.
///
/// # Examples
///
/// ```
/// use u_geocluster::distance::haversine_km;
///
/// // London to Paris
/// let d = haversine_km(51.5074, -0.1278, 48.8566, 2.3522);
/// assert!((d - 343.5).abs() < 1.0);
/// assert_eq!(haversine_km(10.0, 20.0, 10.0, 20.0), 0.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    let a = half_lat * half_lat
        + lat1.to_radians().cos() * lat2.to_radians().cos() * half_lon * half_lon;
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Haversine distance between two tickets.
pub fn ticket_distance_km<A: GeoTicket, B: GeoTicket>(a: &A, b: &B) -> f64 {
    haversine_km(a.lat(), a.lng(), b.lat(), b.lng())
}

/// Rounds half away from zero to the given number of decimals.
///
/// # Examples
///
/// ```
/// use u_geocluster::distance::round_to;
///
/// assert_eq!(round_to(1.23456, 2), 1.23);
/// assert_eq!(round_to(66.66666, 1), 66.7);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
