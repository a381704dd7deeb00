//! Integration test: phi-driven membership.
//!
//! Heartbeats feed per-peer failure detectors; a silent peer crosses
//! the threshold, gets evicted from the ring, and only its keys remap.

use murre_integration_tests::{TestCluster, routing_keys};

const ALL: &[&str] = &["alpha", "bravo", "casper"];

fn cluster() -> TestCluster {
    TestCluster::new(
        &[("alpha", 1 << 61), ("bravo", 4 << 61), ("casper", 6 << 61)],
        8.0,
    )
}

#[test]
fn test_silent_peer_crosses_threshold() {
    let mut cluster = cluster();

    // Everyone settles into a 500 ms cadence.
    cluster.heartbeat(ALL);
    for _ in 0..20 {
        cluster.advance(500.0);
        cluster.heartbeat(ALL);
    }
    assert_eq!(cluster.available(), ALL);

    // casper goes dark; the others keep beating.
    for _ in 0..20 {
        cluster.advance(500.0);
        cluster.heartbeat(&["alpha", "bravo"]);
    }

    assert_eq!(cluster.available(), ["alpha", "bravo"]);
}

#[test]
fn test_eviction_remaps_only_the_dead_nodes_keys() {
    let mut cluster = cluster();
    let keys = routing_keys(500, 9);

    cluster.heartbeat(ALL);
    for _ in 0..10 {
        cluster.advance(500.0);
        cluster.heartbeat(ALL);
    }

    let before: Vec<(u64, String)> = keys
        .iter()
        .map(|&key| (key, cluster.owner_of(key).expect("populated ring").to_string()))
        .collect();

    // casper stops heartbeating long enough to be suspected.
    for _ in 0..20 {
        cluster.advance(500.0);
        cluster.heartbeat(&["alpha", "bravo"]);
    }
    assert_eq!(cluster.evict_unavailable(), ["casper"]);

    for (key, owner) in &before {
        let after = cluster.owner_of(*key).expect("two nodes remain");
        if owner.as_str() == "casper" {
            assert_eq!(after, "bravo", "orphaned keys fall to the predecessor");
        } else {
            assert_eq!(after, owner.as_str(), "unaffected key changed owner");
        }
    }
}
