//! End-to-end clustering scenarios over realistic ticket layouts.

use std::collections::HashSet;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_geocluster::clock::FixedClock;
use u_geocluster::clustering::{ClusteringOptions, GreedyClusterer};
use u_geocluster::distance::haversine_km;
use u_geocluster::models::{ClusteringResult, Ticket};
use u_geocluster::request::AutoClusterRequest;

fn run(tickets: &[Ticket], options: ClusteringOptions) -> ClusteringResult<Ticket> {
    GreedyClusterer::new(options)
        .with_clock(FixedClock(Duration::ZERO))
        .cluster(tickets)
}

fn ids(tickets: &[Ticket]) -> Vec<&str> {
    tickets.iter().map(|t| t.id.as_str()).collect()
}

#[test]
fn scenario_colocated_precise_three() {
    let tickets = vec![
        Ticket::new("a", 52.2053, 0.1218),
        Ticket::new("b", 52.2053, 0.1218),
        Ticket::new("c", 52.2053, 0.1218),
    ];
    let opts = ClusteringOptions::new(1.0)
        .with_precise_size(3)
        .with_priority_ranking(false);
    let result = run(&tickets, opts);

    assert_eq!(result.total_clusters, 1);
    assert_eq!(result.clusters[0].len(), 3);
    assert_eq!(result.clusters[0].max_distance_km, 0.0);
    assert_eq!(result.clusters[0].total_distance_km, 0.0);
    assert!(result.unclustered_tickets.is_empty());
    assert_eq!(result.clustering_efficiency, 100.0);
}

#[test]
fn scenario_two_tickets_far_apart() {
    // 0.45° of latitude is ~50 km
    let tickets = vec![
        Ticket::new("north", 51.45, -2.59),
        Ticket::new("south", 51.00, -2.59),
    ];
    assert!((haversine_km(51.45, -2.59, 51.00, -2.59) - 50.0).abs() < 0.5);

    let result = run(&tickets, ClusteringOptions::new(10.0));
    assert_eq!(result.total_clusters, 0);
    assert_eq!(ids(&result.unclustered_tickets), vec!["north", "south"]);
    assert_eq!(result.clustering_efficiency, 0.0);
}

#[test]
fn scenario_tight_group_with_outlier() {
    let tickets = vec![
        Ticket::new("t1", 48.8566, 2.3522),
        Ticket::new("t2", 48.8570, 2.3530),
        Ticket::new("t3", 48.8580, 2.3510),
        Ticket::new("t4", 48.8550, 2.3540),
        Ticket::new("t5", 48.8600, 2.3600),
        Ticket::new("outlier", 49.2583, 4.0317),
    ];
    let opts = ClusteringOptions::new(2.0).with_size_range(2, 4);
    let result = run(&tickets, opts);

    assert_eq!(result.total_clusters, 1);
    let cluster = &result.clusters[0];
    assert_eq!(cluster.len(), 4);
    assert_eq!(cluster.seed_id, "t1");
    // t5 is the farthest of the tight group from t1
    assert!(!cluster.contains("t5"));
    assert_eq!(ids(&result.unclustered_tickets), vec!["t5", "outlier"]);
    assert_eq!(result.total_tickets_clustered, 4);
    assert_eq!(result.clustering_efficiency, 66.7);
}

#[test]
fn scenario_empty_input() {
    let tickets: Vec<Ticket> = Vec::new();
    let result = run(&tickets, ClusteringOptions::new(5.0).with_precise_size(3));
    assert!(result.clusters.is_empty());
    assert!(result.unclustered_tickets.is_empty());
    assert_eq!(result.total_clusters, 0);
    assert_eq!(result.total_tickets_clustered, 0);
    assert_eq!(result.clustering_efficiency, 0.0);
}

#[test]
fn scenario_critical_seeds_colocated_group() {
    let tickets = vec![
        Ticket::new("low-1", 41.3874, 2.1686).with_priority("Low"),
        Ticket::new("low-2", 41.3874, 2.1686).with_priority("Low"),
        Ticket::new("low-3", 41.3874, 2.1686).with_priority("Low"),
        Ticket::new("crit", 41.3874, 2.1686).with_priority("Critical"),
    ];
    let result = run(&tickets, ClusteringOptions::new(1.0).with_precise_size(4));

    assert_eq!(result.total_clusters, 1);
    let cluster = &result.clusters[0];
    assert_eq!(cluster.seed_id, "crit");
    assert!(cluster.contains("crit"));
    assert_eq!(cluster.tickets[0].id, "crit");
    assert_eq!(cluster.len(), 4);
}

#[test]
fn scenario_critical_claims_contested_ticket() {
    // "shared" is within reach of both seeds; the Critical seed is visited
    // first and takes it, leaving the Low seed short.
    let tickets = vec![
        Ticket::new("low", 0.0, 0.0).with_priority("Low"),
        Ticket::new("shared", 0.0, 0.006),
        Ticket::new("crit", 0.0, 0.012).with_priority("Critical"),
    ];
    let opts = ClusteringOptions::new(1.0).with_precise_size(2);
    let result = run(&tickets, opts);
    assert_eq!(result.total_clusters, 1);
    assert_eq!(result.clusters[0].ticket_ids(), vec!["crit", "shared"]);
    assert_eq!(ids(&result.unclustered_tickets), vec!["low"]);

    let result = run(&tickets, opts.with_priority_ranking(false));
    assert_eq!(result.clusters[0].ticket_ids(), vec!["low", "shared"]);
    assert_eq!(ids(&result.unclustered_tickets), vec!["crit"]);
}

#[test]
fn scenario_sequential_cluster_ids() {
    let tickets: Vec<Ticket> = (0..4)
        .flat_map(|city| {
            let lat = 50.0 + city as f64;
            (0..3).map(move |k| {
                Ticket::new(format!("c{city}-{k}"), lat + k as f64 * 0.001, 8.0)
            })
        })
        .collect();
    let result = run(&tickets, ClusteringOptions::new(5.0).with_precise_size(3));
    let cluster_ids: Vec<&str> = result
        .clusters
        .iter()
        .map(|c| c.cluster_id.as_str())
        .collect();
    assert_eq!(
        cluster_ids,
        vec!["auto-cluster-1", "auto-cluster-2", "auto-cluster-3", "auto-cluster-4"]
    );
    assert_eq!(result.clustering_efficiency, 100.0);
}

#[test]
fn scenario_random_depots_hold_invariants() {
    let mut rng = StdRng::seed_from_u64(42);
    let centres = [(53.4808, -2.2426), (52.4862, -1.8904), (51.4545, -2.5879)];
    let labels = ["Critical", "High", "Medium", "Low", "Triage"];

    let tickets: Vec<Ticket> = (0..150)
        .map(|i| {
            let (lat, lng) = centres[i % centres.len()];
            Ticket::new(
                format!("FS-{i}"),
                lat + rng.random_range(-0.05..0.05),
                lng + rng.random_range(-0.05..0.05),
            )
            .with_priority(labels[rng.random_range(0..labels.len())])
        })
        .collect();

    let radius = 3.0;
    let result = run(&tickets, ClusteringOptions::new(radius).with_size_range(3, 6));

    let mut seen = HashSet::new();
    for cluster in &result.clusters {
        assert!((3..=6).contains(&cluster.len()));
        let seed = cluster.seed().expect("seed is a member");
        for t in &cluster.tickets {
            assert!(seen.insert(t.id.clone()), "{} clustered twice", t.id);
            assert!(haversine_km(seed.lat, seed.lng, t.lat, t.lng) <= radius);
        }
    }
    for t in &result.unclustered_tickets {
        assert!(seen.insert(t.id.clone()), "{} both clustered and not", t.id);
    }
    assert_eq!(seen.len(), tickets.len());
    assert_eq!(result.algorithm_stats.iterations, tickets.len());
    assert!(result.clustering_efficiency > 0.0 && result.clustering_efficiency <= 100.0);
}

#[test]
fn scenario_request_boundary_from_dashboard_payload() {
    let payload = serde_json::json!({
        "tickets": [
            {"id": "FS-1", "lat": 40.7128, "lng": -74.0060, "title": "Ticket 1", "priority": "High"},
            {"id": "FS-2", "lat": 40.7130, "lng": -74.0058, "title": "Ticket 2", "priority": "Medium"},
            {"id": "FS-3", "lat": 40.7132, "lng": -74.0056, "title": "Ticket 3", "priority": "Low"},
            {"id": "FS-4", "lat": 40.7134, "lng": -74.0054, "title": "Ticket 4", "priority": "High"}
        ],
        "radius_km": 1,
        "min_cluster_size": 2,
        "max_cluster_size": 3
    });
    let request: AutoClusterRequest = serde_json::from_value(payload).expect("valid payload");
    let result = request
        .run_with_clock(FixedClock(Duration::ZERO))
        .expect("valid request");

    assert_eq!(result.total_clusters, 1);
    assert_eq!(result.clusters[0].ticket_ids(), vec!["FS-1", "FS-2", "FS-3"]);
    assert_eq!(result.clusters[0].tickets[2].extra["title"], "Ticket 3");
    assert_eq!(ids(&result.unclustered_tickets), vec!["FS-4"]);
    assert_eq!(result.clustering_efficiency, 75.0);
}
