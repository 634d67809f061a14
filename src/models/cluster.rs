//! Committed clusters and their centre point.

use serde::{Deserialize, Serialize};

/// Arithmetic mean of member coordinates.
///
/// This is a plain coordinate average, not a spherical centroid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CenterPoint {
    pub lat: f64,
    pub lng: f64,
}

impl CenterPoint {
    /// Creates a centre point.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A group of tickets committed by one seed of the greedy pass.
///
/// Members are stored in selection order: ascending distance to the seed.
///
/// # Examples
///
/// ```
/// use u_geocluster::models::{CenterPoint, Cluster, Ticket};
///
/// let cluster = Cluster {
///     cluster_id: "auto-cluster-1".to_string(),
///     seed_id: "A".to_string(),
///     tickets: vec![Ticket::new("A", 0.0, 0.0), Ticket::new("B", 0.0, 0.0)],
///     center_point: CenterPoint::new(0.0, 0.0),
///     max_distance_km: 0.0,
///     total_distance_km: 0.0,
/// };
/// assert_eq!(cluster.len(), 2);
/// assert!(cluster.contains("B"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster<T> {
    /// Sequential id in commit order: `auto-cluster-1`, `auto-cluster-2`, ...
    pub cluster_id: String,
    /// Id of the seed ticket that anchored this cluster.
    #[serde(skip)]
    pub seed_id: String,
    /// Member tickets, closest to the seed first.
    pub tickets: Vec<T>,
    pub center_point: CenterPoint,
    /// Largest member distance to the centre, km, two decimals.
    pub max_distance_km: f64,
    /// Sum of member distances to the centre, km, two decimals.
    pub total_distance_km: f64,
}

impl<T: crate::models::GeoTicket> Cluster<T> {
    /// Number of member tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns `true` if the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// Returns `true` if a ticket with the given id is a member.
    pub fn contains(&self, id: &str) -> bool {
        self.tickets.iter().any(|t| t.id() == id)
    }

    /// Member ids in selection order.
    pub fn ticket_ids(&self) -> Vec<&str> {
        self.tickets.iter().map(|t| t.id()).collect()
    }

    /// The seed ticket, if it is among the members.
    pub fn seed(&self) -> Option<&T> {
        self.tickets.iter().find(|t| t.id() == self.seed_id)
    }
}
