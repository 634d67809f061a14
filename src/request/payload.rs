//! The auto-cluster request payload and its validation.

use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::clock::{Clock, MonotonicClock};
use crate::clustering::{ClusteringOptions, GreedyClusterer, SizePolicy};
use crate::error::{ClusterError, Result};
use crate::models::{ClusteringResult, Ticket};

/// Smallest radius accepted at the request boundary, km.
pub const MIN_RADIUS_KM: f64 = 1.0;

/// Largest radius accepted at the request boundary, km.
pub const MAX_RADIUS_KM: f64 = 500.0;

/// Smallest size parameter accepted at the request boundary.
pub const MIN_CLUSTER_SIZE: usize = 2;

/// Largest size parameter accepted at the request boundary.
pub const MAX_CLUSTER_SIZE: usize = 10;

/// An auto-cluster request as sent by the dashboard.
///
/// At most one sizing style is meant to be used; when several are present
/// precedence is `precise_cluster_size`, then `min_cluster_size` /
/// `max_cluster_size`, then the legacy `cluster_size`.
///
/// Size fields accept any JSON number with no fractional part, so `3` and
/// `3.0` decode alike. Fractional or negative sizes are malformed.
///
/// # Examples
///
/// ```
/// use u_geocluster::request::AutoClusterRequest;
///
/// let req: AutoClusterRequest = serde_json::from_str(r#"{
///     "tickets": [
///         {"id": "FS-1", "lat": 53.4808, "lng": -2.2426, "priority": "High"},
///         {"id": "FS-2", "lat": 53.4810, "lng": -2.2430},
///         {"id": "FS-3", "lat": 53.4812, "lng": -2.2420, "title": "Meter swap"}
///     ],
///     "radius_km": 5,
///     "precise_cluster_size": 3
/// }"#).unwrap();
///
/// let result = req.run().unwrap();
/// assert_eq!(result.total_clusters, 1);
/// assert_eq!(result.clusters[0].tickets[0].id, "FS-1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoClusterRequest {
    pub tickets: Vec<Ticket>,
    pub radius_km: f64,
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub cluster_size: Option<usize>,
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_cluster_size: Option<usize>,
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_cluster_size: Option<usize>,
    #[serde(
        default,
        deserialize_with = "whole_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub precise_cluster_size: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prioritize_high_priority: Option<bool>,
}

/// Decodes an optional size from any integral number.
fn whole_number<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        // `as` saturates, so huge sizes still fail the range check
        Some(n) if n >= 0.0 && n.fract() == 0.0 => Ok(Some(n as usize)),
        Some(n) => Err(D::Error::invalid_value(
            Unexpected::Float(n),
            &"a non-negative whole number",
        )),
    }
}

impl AutoClusterRequest {
    /// A request with the given tickets and radius and no sizing parameters.
    pub fn new(tickets: Vec<Ticket>, radius_km: f64) -> Self {
        Self {
            tickets,
            radius_km,
            cluster_size: None,
            min_cluster_size: None,
            max_cluster_size: None,
            precise_cluster_size: None,
            prioritize_high_priority: None,
        }
    }

    /// Checks the request against the boundary rules: at least one ticket,
    /// every ticket identified and positioned, radius within
    /// [`MIN_RADIUS_KM`]..=[`MAX_RADIUS_KM`], every supplied size within
    /// [`MIN_CLUSTER_SIZE`]..=[`MAX_CLUSTER_SIZE`], and min not above max.
    pub fn validate(&self) -> Result<()> {
        if self.tickets.is_empty() {
            return Err(ClusterError::EmptyTickets);
        }
        for (index, ticket) in self.tickets.iter().enumerate() {
            if ticket.id.is_empty() {
                return Err(ClusterError::InvalidTicket {
                    index,
                    reason: "id is required".to_string(),
                });
            }
            if !ticket.lat.is_finite() || !ticket.lng.is_finite() {
                return Err(ClusterError::InvalidTicket {
                    index,
                    reason: format!("lat and lng must be finite numbers (ticket {})", ticket.id),
                });
            }
        }

        if !self.radius_km.is_finite() {
            return Err(ClusterError::InvalidRadius(self.radius_km));
        }
        if !(MIN_RADIUS_KM..=MAX_RADIUS_KM).contains(&self.radius_km) {
            return Err(ClusterError::RadiusOutOfRange {
                value: self.radius_km,
                min: MIN_RADIUS_KM,
                max: MAX_RADIUS_KM,
            });
        }

        let sizes = [
            ("cluster_size", self.cluster_size),
            ("min_cluster_size", self.min_cluster_size),
            ("max_cluster_size", self.max_cluster_size),
            ("precise_cluster_size", self.precise_cluster_size),
        ];
        for (field, value) in sizes {
            if let Some(value) = value {
                if !(MIN_CLUSTER_SIZE..=MAX_CLUSTER_SIZE).contains(&value) {
                    return Err(ClusterError::SizeOutOfRange {
                        field,
                        value,
                        min: MIN_CLUSTER_SIZE,
                        max: MAX_CLUSTER_SIZE,
                    });
                }
            }
        }

        self.options().validate()
    }

    /// The sizing policy this request resolves to.
    pub fn policy(&self) -> SizePolicy {
        SizePolicy::resolve(
            self.precise_cluster_size,
            self.min_cluster_size,
            self.max_cluster_size,
            self.cluster_size,
        )
    }

    /// Converts the request parameters into clustering options.
    pub fn options(&self) -> ClusteringOptions {
        ClusteringOptions::new(self.radius_km)
            .with_policy(self.policy())
            .with_priority_ranking(self.prioritize_high_priority.unwrap_or(true))
    }

    /// Validates and clusters, timed by the system clock.
    pub fn run(&self) -> Result<ClusteringResult<Ticket>> {
        self.run_with_clock(MonotonicClock::new())
    }

    /// Validates and clusters, timed by the given clock.
    pub fn run_with_clock<C: Clock>(&self, clock: C) -> Result<ClusteringResult<Ticket>> {
        if let Err(err) = self.validate() {
            warn!(error = %err, tickets = self.tickets.len(), "rejected auto-cluster request");
            return Err(err);
        }
        Ok(GreedyClusterer::with_clock_source(self.options(), clock).cluster(&self.tickets))
    }
}

/// JSON in, JSON out: decodes an [`AutoClusterRequest`], validates it,
/// clusters, and encodes the [`ClusteringResult`].
///
/// # Examples
///
/// ```
/// use u_geocluster::request::auto_cluster_json;
///
/// let out = auto_cluster_json(r#"{"tickets": [
///     {"id": "a", "lat": 0.0, "lng": 0.0},
///     {"id": "b", "lat": 1.0, "lng": 1.0}
/// ], "radius_km": 10}"#).unwrap();
/// let v: serde_json::Value = serde_json::from_str(&out).unwrap();
/// assert_eq!(v["total_clusters"], 0);
/// assert_eq!(v["unclustered_tickets"].as_array().unwrap().len(), 2);
///
/// assert!(auto_cluster_json(r#"{"tickets": [], "radius_km": 10}"#).is_err());
/// ```
pub fn auto_cluster_json(input: &str) -> Result<String> {
    let request: AutoClusterRequest = serde_json::from_str(input).map_err(|err| {
        warn!(error = %err, "malformed auto-cluster payload");
        ClusterError::from(err)
    })?;
    let result = request.run()?;
    Ok(serde_json::to_string(&result)?)
}

/// Encodes an error as the `{"error": "..."}` body returned to callers.
pub fn error_json(err: &ClusterError) -> String {
    serde_json::json!({ "error": err.to_string() }).to_string()
}
