//! Integration test: key routing over the ring.
//!
//! Remapping on membership change must stay confined to the keys the
//! departed or arrived node covers; everything else keeps its owner.

use murre_bloom::BloomFilter;
use murre_integration_tests::{TestCluster, routing_keys};
use murre_ring::Node;

const LABELS: &[&str] = &["alpha", "bravo", "casper", "delta", "echo"];

fn spread_cluster() -> TestCluster {
    TestCluster::new(
        &[
            ("alpha", 1 << 61),
            ("bravo", 2 << 61),
            ("casper", 3 << 61),
            ("delta", 5 << 61),
            ("echo", 7 << 61),
        ],
        8.0,
    )
}

#[test]
fn test_every_key_has_an_owner() {
    let cluster = spread_cluster();
    for key in routing_keys(1000, 1) {
        assert!(cluster.owner_of(key).is_some());
    }
}

#[test]
fn test_removal_remaps_only_the_lost_nodes_keys() {
    let mut cluster = spread_cluster();
    let keys = routing_keys(1000, 2);

    let before: Vec<(u64, String)> = keys
        .iter()
        .map(|&key| (key, cluster.owner_of(key).expect("populated ring").to_string()))
        .collect();

    let departed = cluster.peer("casper").node.clone();
    assert!(cluster.ring.remove_node(&departed));

    let mut remapped = 0;
    for (key, owner) in &before {
        let after = cluster.owner_of(*key).expect("four nodes remain");
        if owner.as_str() == "casper" {
            remapped += 1;
            assert_eq!(after, "bravo", "orphaned keys fall to the predecessor");
        } else {
            assert_eq!(after, owner.as_str(), "unaffected key changed owner");
        }
    }
    assert!(remapped > 0, "seeded keys must cover the departed node");
}

#[test]
fn test_addition_steals_from_a_single_range() {
    let mut cluster = spread_cluster();
    let keys = routing_keys(1000, 3);

    let before: Vec<(u64, String)> = keys
        .iter()
        .map(|&key| (key, cluster.owner_of(key).expect("populated ring").to_string()))
        .collect();

    // A new node lands between casper and delta.
    cluster.ring.add_node(Node::with_id("foxtrot", 4 << 61));

    for (key, owner) in &before {
        let after = cluster.owner_of(*key).expect("six nodes now");
        if after != owner.as_str() {
            assert_eq!(after, "foxtrot", "only the new node may capture keys");
            assert_eq!(
                owner.as_str(),
                "casper",
                "captured keys must come from the split range"
            );
        }
    }
}

#[test]
fn test_routed_keys_tracked_per_owner() {
    let mut cluster = spread_cluster();
    let keys = routing_keys(200, 5);

    let owners: Vec<String> = keys.iter().map(|&key| cluster.route(key)).collect();

    // Every routed key is visible in its owner's filter.
    for (key, owner) in keys.iter().zip(&owners) {
        assert!(
            cluster.peer(owner).routed.might_contain(&key.to_le_bytes()),
            "owner {owner} lost key {key}"
        );
    }

    // Keys routed elsewhere stay almost entirely invisible.
    let mut foreign_probes = 0u32;
    let mut foreign_hits = 0u32;
    for (key, owner) in keys.iter().zip(&owners) {
        for &label in LABELS {
            if label != owner.as_str() {
                foreign_probes += 1;
                if cluster.peer(label).routed.might_contain(&key.to_le_bytes()) {
                    foreign_hits += 1;
                }
            }
        }
    }
    assert!(
        foreign_hits * 20 < foreign_probes,
        "false-positive rate out of range: {foreign_hits}/{foreign_probes}"
    );
}
