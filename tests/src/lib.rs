//! Shared harness for cross-crate integration tests.
//!
//! Provides [`TestCluster`]: a small labeled membership set wired the
//! way a routing layer wires these primitives together. A ring places
//! keys on peers, each peer tracks its routed keys in a bloom filter,
//! and each peer's liveness is scored by a failure detector driven
//! from one shared manual clock.

use std::collections::BTreeMap;
use std::sync::Arc;

use murre_bloom::{BloomFilter, NaiveBloomFilter};
use murre_hash::XorShift64;
use murre_phi::PhiAccrualDetector;
use murre_ring::{ConsistentHashRing, Node};
use murre_types::ManualTimeSource;

/// Epoch the shared test clock starts at.
pub const START_MS: f64 = 1_700_000_000_000.0;

/// One member of the cluster under test.
pub struct Peer {
    pub node: Node,
    pub detector: PhiAccrualDetector,
    pub routed: NaiveBloomFilter,
}

/// A membership set combining ring placement, per-peer key tracking,
/// and per-peer liveness scoring over one manual clock.
pub struct TestCluster {
    pub clock: Arc<ManualTimeSource>,
    pub ring: ConsistentHashRing<Node>,
    peers: BTreeMap<String, Peer>,
}

impl TestCluster {
    /// Build a cluster of labeled peers with pinned identities.
    pub fn new(members: &[(&str, u64)], threshold: f64) -> Self {
        let clock = Arc::new(ManualTimeSource::new(START_MS));
        let mut ring = ConsistentHashRing::new();
        let mut peers = BTreeMap::new();

        for &(label, identity) in members {
            let node = Node::with_id(label, identity);
            ring.add_node(node.clone());
            peers.insert(
                label.to_string(),
                Peer {
                    node,
                    detector: PhiAccrualDetector::new(threshold, clock.clone()),
                    routed: NaiveBloomFilter::default(),
                },
            );
        }

        Self { clock, ring, peers }
    }

    /// Advance the shared clock.
    pub fn advance(&self, delta_ms: f64) {
        self.clock.advance(delta_ms);
    }

    /// Record a heartbeat from every peer in `labels`.
    pub fn heartbeat(&mut self, labels: &[&str]) {
        for label in labels {
            self.peer_mut(label).detector.heartbeat();
        }
    }

    /// Labels of the peers currently judged available, in label order.
    pub fn available(&self) -> Vec<&str> {
        self.peers
            .iter()
            .filter(|(_, peer)| peer.detector.is_available())
            .map(|(label, _)| label.as_str())
            .collect()
    }

    /// Drop every unavailable peer from the ring, returning the labels
    /// that were evicted.
    pub fn evict_unavailable(&mut self) -> Vec<String> {
        let dead: Vec<String> = self
            .peers
            .iter()
            .filter(|(_, peer)| !peer.detector.is_available())
            .map(|(label, _)| label.clone())
            .collect();
        for label in &dead {
            let node = self.peers[label].node.clone();
            self.ring.remove_node(&node);
        }
        dead
    }

    /// Owner label for a routing key.
    pub fn owner_of(&self, key: u64) -> Option<&str> {
        self.ring.get_node(&key).map(|node| node.label())
    }

    /// Route `key` to its owner and record it in the owner's filter.
    pub fn route(&mut self, key: u64) -> String {
        let label = self.owner_of(key).expect("ring is empty").to_string();
        self.peer_mut(&label).routed.put(&key.to_le_bytes());
        label
    }

    /// Shared view of one peer.
    pub fn peer(&self, label: &str) -> &Peer {
        self.peers.get(label).expect("unknown peer label")
    }

    fn peer_mut(&mut self, label: &str) -> &mut Peer {
        self.peers.get_mut(label).expect("unknown peer label")
    }
}

/// Deterministic routing keys for a test scenario.
pub fn routing_keys(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = XorShift64::new(seed);
    (0..count).map(|_| rng.next_u64()).collect()
}
