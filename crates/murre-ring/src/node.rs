//! Ring membership: nodes and their identities.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use murre_hash::Murmur3;
use murre_types::StableHashable;
use serde::{Deserialize, Serialize};

/// Default modulus for label-derived identities.
pub const DEFAULT_POINT_SPACE: u64 = 1 << 63;

/// A ring member: an opaque label plus the identity that places it.
///
/// The identity is fixed at construction, either derived from the label
/// ([`Node::new`], [`Node::with_point_space`]) or supplied verbatim
/// ([`Node::with_id`]). Equality, ordering, and hashing all follow the
/// identity alone; the label is display metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    label: String,
    identity: u64,
}

impl Node {
    /// Create a node whose identity derives from `label` under the
    /// default point space.
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_point_space(label, DEFAULT_POINT_SPACE)
    }

    /// Create a node whose identity is `point_space % Murmur3(label)`.
    pub fn with_point_space(label: impl Into<String>, point_space: u64) -> Self {
        let label = label.into();
        // A zero digest would leave the modulus undefined.
        let digest = Murmur3::hash64(label.as_bytes()).max(1);
        Self {
            identity: point_space % digest,
            label,
        }
    }

    /// Create a node with an explicitly pinned identity.
    pub fn with_id(label: impl Into<String>, id: u64) -> Self {
        Self {
            label: label.into(),
            identity: id,
        }
    }

    /// The node's display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl StableHashable for Node {
    fn identity(&self) -> u64 {
        self.identity
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.identity == other.identity
    }
}

impl Eq for Node {}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        self.identity.cmp(&other.identity)
    }
}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity.hash(state);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.label, self.identity)
    }
}
