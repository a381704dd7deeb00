//! Consistent hashing ring.

use murre_types::StableHashable;
use tracing::debug;

use crate::search;

/// An ordered, deduplicated set of nodes keyed by stable identity.
///
/// An item maps to the node with the largest identity not exceeding the
/// item's own. An item below the whole ring takes the first node; an
/// item past the last node saturates there instead of wrapping back to
/// the smallest identity.
///
/// The ring is plain data and does no internal locking. Mutation takes
/// `&mut self`; callers sharing a ring across threads put it behind a
/// reader/writer lock or swap whole-ring snapshots, and should expect
/// lookups to vastly outnumber membership changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsistentHashRing<N: StableHashable> {
    /// Ascending by identity, one node per identity.
    nodes: Vec<N>,
}

impl<N: StableHashable> ConsistentHashRing<N> {
    /// Create an empty ring.
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Add a node, keeping the set ordered. Adding a node whose
    /// identity is already present is a no-op.
    pub fn add_node(&mut self, node: N) {
        let identity = node.identity();
        if let Err(insert_at) = self.position(identity) {
            self.nodes.insert(insert_at, node);
            debug!(identity, "added node to ring");
        }
    }

    /// Remove the node sharing `node`'s identity. Returns `false` when
    /// no such node is on the ring.
    pub fn remove_node(&mut self, node: &N) -> bool {
        let identity = node.identity();
        match self.position(identity) {
            Ok(at) => {
                self.nodes.remove(at);
                debug!(identity, "removed node from ring");
                true
            }
            Err(_) => false,
        }
    }

    /// Find the node that owns `item`, or `None` on an empty ring.
    pub fn get_node(&self, item: &impl StableHashable) -> Option<&N> {
        search::floor_or_first(&self.nodes, item.identity(), |node| node.identity())
    }

    /// Number of nodes on the ring.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the ring has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The nodes in ascending identity order.
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    fn position(&self, identity: u64) -> Result<usize, usize> {
        self.nodes
            .binary_search_by_key(&identity, |node| node.identity())
    }
}

impl<N: StableHashable> Default for ConsistentHashRing<N> {
    fn default() -> Self {
        Self::new()
    }
}
