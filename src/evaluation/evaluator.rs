//! Cluster evaluator that computes centre and spread metrics.

use crate::distance::{haversine_km, round_to};
use crate::models::{CenterPoint, Cluster, GeoTicket};

/// Decimal places kept for per-cluster distances.
const DISTANCE_DECIMALS: i32 = 2;

/// Decimal places kept for the clustering efficiency percentage.
const EFFICIENCY_DECIMALS: i32 = 1;

/// Arithmetic mean of member coordinates.
///
/// Returns `None` for an empty member list.
///
/// # Examples
///
/// ```
/// use u_geocluster::models::Ticket;
/// use u_geocluster::evaluation::center_of;
///
/// let members = vec![Ticket::new("a", 10.0, 20.0), Ticket::new("b", 12.0, 24.0)];
/// let c = center_of(&members).unwrap();
/// assert_eq!((c.lat, c.lng), (11.0, 22.0));
/// ```
pub fn center_of<T: GeoTicket>(members: &[T]) -> Option<CenterPoint> {
    if members.is_empty() {
        return None;
    }
    let n = members.len() as f64;
    let (sum_lat, sum_lng) = members
        .iter()
        .fold((0.0, 0.0), |(lat, lng), t| (lat + t.lat(), lng + t.lng()));
    Some(CenterPoint::new(sum_lat / n, sum_lng / n))
}

/// Percentage of tickets that were clustered, rounded to one decimal.
///
/// Defined as 0 when there are no tickets at all.
///
/// # Examples
///
/// ```
/// use u_geocluster::evaluation::clustering_efficiency;
///
/// assert_eq!(clustering_efficiency(2, 3), 66.7);
/// assert_eq!(clustering_efficiency(0, 0), 0.0);
/// ```
pub fn clustering_efficiency(clustered: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to(
        clustered as f64 / total as f64 * 100.0,
        EFFICIENCY_DECIMALS,
    )
}

/// Builds committed clusters from member indices into a ticket slice.
///
/// # Examples
///
/// ```
/// use u_geocluster::models::Ticket;
/// use u_geocluster::evaluation::ClusterEvaluator;
///
/// let tickets = vec![
///     Ticket::new("a", 40.7128, -74.0060),
///     Ticket::new("b", 40.7130, -74.0058),
///     Ticket::new("c", 41.0, -74.0),
/// ];
/// let evaluator = ClusterEvaluator::new(&tickets);
/// let cluster = evaluator.build_cluster("auto-cluster-1", 0, &[0, 1]).unwrap();
/// assert_eq!(cluster.len(), 2);
/// assert_eq!(cluster.seed_id, "a");
/// assert!(cluster.max_distance_km < 0.1);
/// ```
pub struct ClusterEvaluator<'a, T> {
    tickets: &'a [T],
}

impl<'a, T: GeoTicket + Clone> ClusterEvaluator<'a, T> {
    /// Creates an evaluator over the pass's input tickets.
    pub fn new(tickets: &'a [T]) -> Self {
        Self { tickets }
    }

    /// Clones the members (in the given order) into a cluster and computes
    /// its centre, maximum and total member-to-centre distance.
    ///
    /// Returns `None` if `members` is empty.
    ///
    /// # Panics
    ///
    /// Panics if `seed` or any member index is out of bounds.
    pub fn build_cluster(
        &self,
        cluster_id: impl Into<String>,
        seed: usize,
        members: &[usize],
    ) -> Option<Cluster<T>> {
        let tickets: Vec<T> = members.iter().map(|&i| self.tickets[i].clone()).collect();
        let center = center_of(&tickets)?;

        let distances: Vec<f64> = tickets
            .iter()
            .map(|t| haversine_km(center.lat, center.lng, t.lat(), t.lng()))
            .collect();
        let max_distance = distances.iter().copied().fold(0.0, f64::max);
        let total_distance: f64 = distances.iter().sum();

        Some(Cluster {
            cluster_id: cluster_id.into(),
            seed_id: self.tickets[seed].id().to_string(),
            tickets,
            center_point: center,
            max_distance_km: round_to(max_distance, DISTANCE_DECIMALS),
            total_distance_km: round_to(total_distance, DISTANCE_DECIMALS),
        })
    }
}
