//! Greedy geographic clustering.
//!
//! # Algorithm
//!
//! Tickets are visited once each as potential seeds, in priority-ranked
//! order. For every seed not yet absorbed by an earlier cluster:
//!
//! 1. Collect every unused ticket within `radius_km` of the seed (the seed
//!    itself always qualifies at distance 0).
//! 2. If fewer than the sizing policy's minimum qualify, the seed commits
//!    nothing and stays available as a member for later seeds.
//! 3. Otherwise sort the candidates by distance to the seed (stable, so ties
//!    keep ranked order) and commit the closest `k` as one cluster.
//!
//! Assignment is first-come-first-served: a ticket within reach of two
//! seeds goes to whichever is visited first. No global optimisation is
//! attempted.
//!
//! # Complexity
//!
//! O(n²) distance evaluations in the worst case; each seed scans the whole
//! remaining pool.

use tracing::{debug, trace};

use super::{rank_seeds, ClusteringOptions};
use crate::clock::{Clock, MonotonicClock};
use crate::distance::ticket_distance_km;
use crate::evaluation::{clustering_efficiency, ClusterEvaluator};
use crate::models::{AlgorithmStats, ClusteringResult, GeoTicket};

/// A committed group: the seed index and member indices in selection order.
#[derive(Debug, Clone, PartialEq)]
struct Group {
    seed: usize,
    members: Vec<usize>,
}

/// State threaded through the seed fold.
#[derive(Debug)]
struct Pass {
    used: Vec<bool>,
    groups: Vec<Group>,
    iterations: usize,
}

impl Pass {
    fn new(n: usize) -> Self {
        Self {
            used: vec![false; n],
            groups: Vec::new(),
            iterations: 0,
        }
    }

    /// Visits one seed, committing a group if it can gather enough tickets.
    fn visit<T: GeoTicket>(
        mut self,
        seed: usize,
        tickets: &[T],
        order: &[usize],
        options: &ClusteringOptions,
    ) -> Self {
        self.iterations += 1;
        if self.used[seed] {
            return self;
        }

        match attempt(seed, tickets, order, &self.used, options) {
            Some(members) => {
                for &i in &members {
                    self.used[i] = true;
                }
                debug!(
                    cluster = self.groups.len() + 1,
                    seed = tickets[seed].id(),
                    size = members.len(),
                    "committed cluster"
                );
                self.groups.push(Group { seed, members });
            }
            None => {
                trace!(seed = tickets[seed].id(), "seed gathered too few tickets");
            }
        }
        self
    }
}

/// Tries to build a cluster around `seed` from the tickets not in `used`.
///
/// Candidates are scanned in `order` so the stable distance sort breaks
/// ties by seed rank. Returns the selected indices, closest first, or
/// `None` when the sizing policy rejects the candidate count.
fn attempt<T: GeoTicket>(
    seed: usize,
    tickets: &[T],
    order: &[usize],
    used: &[bool],
    options: &ClusteringOptions,
) -> Option<Vec<usize>> {
    let origin = &tickets[seed];
    let mut candidates: Vec<(usize, f64)> = order
        .iter()
        .copied()
        .filter(|&i| !used[i])
        .filter_map(|i| {
            if i == seed {
                return Some((i, 0.0));
            }
            let d = ticket_distance_km(origin, &tickets[i]);
            (d <= options.radius_km).then_some((i, d))
        })
        .collect();

    let k = options.policy.take(candidates.len())?;
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    Some(candidates.into_iter().take(k).map(|(i, _)| i).collect())
}

/// Greedy seed-based clusterer.
///
/// Holds the pass parameters and the clock used to time each pass. Every
/// call to [`cluster`](Self::cluster) is independent and deterministic for a
/// given input order.
///
/// # Examples
///
/// ```
/// use u_geocluster::models::Ticket;
/// use u_geocluster::clustering::{ClusteringOptions, GreedyClusterer};
///
/// let tickets = vec![
///     Ticket::new("A", 40.7128, -74.0060),
///     Ticket::new("B", 40.7130, -74.0058),
///     Ticket::new("C", 40.7132, -74.0056),
///     Ticket::new("far", 41.8781, -87.6298),
/// ];
/// let opts = ClusteringOptions::new(1.0).with_precise_size(3);
/// let result = GreedyClusterer::new(opts).cluster(&tickets);
///
/// assert_eq!(result.total_clusters, 1);
/// assert_eq!(result.clusters[0].cluster_id, "auto-cluster-1");
/// assert_eq!(result.unclustered_tickets[0].id, "far");
/// assert_eq!(result.clustering_efficiency, 75.0);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyClusterer<C = MonotonicClock> {
    options: ClusteringOptions,
    clock: C,
}

impl GreedyClusterer<MonotonicClock> {
    /// Creates a clusterer timed by the system monotonic clock.
    ///
    /// Reads [`std::time::Instant`] immediately, so targets without a system
    /// clock (`wasm32-unknown-unknown`) must use
    /// [`with_clock_source`](GreedyClusterer::with_clock_source) instead.
    pub fn new(options: ClusteringOptions) -> Self {
        Self::with_clock_source(options, MonotonicClock::new())
    }
}

impl<C: Clock> GreedyClusterer<C> {
    /// Creates a clusterer timed by `clock`. No other time source is read.
    pub fn with_clock_source(options: ClusteringOptions, clock: C) -> Self {
        Self { options, clock }
    }

    /// Replaces the clock used to measure execution time.
    pub fn with_clock<D: Clock>(self, clock: D) -> GreedyClusterer<D> {
        GreedyClusterer::with_clock_source(self.options, clock)
    }

    /// Runs one greedy pass over `tickets`.
    ///
    /// Never fails: degenerate inputs (no tickets, one ticket, a radius too
    /// small to reach any neighbour) simply yield no clusters.
    pub fn cluster<T: GeoTicket + Clone>(&self, tickets: &[T]) -> ClusteringResult<T> {
        let start = self.clock.now();
        if tickets.is_empty() {
            debug!("no tickets to cluster");
            return ClusteringResult::empty(AlgorithmStats::new(self.clock.elapsed_ms(start), 0));
        }

        let order = rank_seeds(tickets, self.options.prioritize_high_priority);
        let pass = order.iter().fold(Pass::new(tickets.len()), |pass, &seed| {
            pass.visit(seed, tickets, &order, &self.options)
        });

        let evaluator = ClusterEvaluator::new(tickets);
        let clusters: Vec<_> = pass
            .groups
            .iter()
            .enumerate()
            .filter_map(|(i, g)| {
                evaluator.build_cluster(format!("auto-cluster-{}", i + 1), g.seed, &g.members)
            })
            .collect();

        let elapsed_ms = self.clock.elapsed_ms(start);

        let total_tickets_clustered: usize = clusters.iter().map(|c| c.len()).sum();
        let unclustered_tickets: Vec<T> = tickets
            .iter()
            .enumerate()
            .filter(|&(i, _)| !pass.used[i])
            .map(|(_, t)| t.clone())
            .collect();
        let efficiency = clustering_efficiency(total_tickets_clustered, tickets.len());

        debug!(
            clusters = clusters.len(),
            clustered = total_tickets_clustered,
            unclustered = unclustered_tickets.len(),
            efficiency,
            iterations = pass.iterations,
            elapsed_ms,
            "clustering pass finished"
        );

        ClusteringResult {
            total_clusters: clusters.len(),
            clusters,
            unclustered_tickets,
            total_tickets_clustered,
            clustering_efficiency: efficiency,
            algorithm_stats: AlgorithmStats::new(elapsed_ms, pass.iterations),
        }
    }
}

/// Clusters `tickets` with `options`, timed by the system clock.
///
/// # Examples
///
/// ```
/// use u_geocluster::models::Ticket;
/// use u_geocluster::clustering::{auto_cluster, ClusteringOptions};
///
/// let tickets: Vec<Ticket> = Vec::new();
/// let result = auto_cluster(&tickets, &ClusteringOptions::new(5.0));
/// assert!(result.clusters.is_empty());
/// assert_eq!(result.clustering_efficiency, 0.0);
/// ```
pub fn auto_cluster<T: GeoTicket + Clone>(
    tickets: &[T],
    options: &ClusteringOptions,
) -> ClusteringResult<T> {
    GreedyClusterer::new(*options).cluster(tickets)
}
