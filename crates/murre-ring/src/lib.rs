//! Consistent hashing ring for key-to-node placement.
//!
//! - [`Node`]: a ring member, an opaque label plus a stable 64-bit
//!   identity.
//! - [`ConsistentHashRing`]: an ordered, deduplicated node set that maps
//!   each item to its owning node by identity.
//! - [`search`]: the ordered-slice lookup underlying ring placement.
//!
//! Placement only moves when membership changes, and only for the keys
//! the departed or arrived node covers; everything else keeps its owner.

pub mod search;

mod node;
mod ring;

pub use node::{DEFAULT_POINT_SPACE, Node};
pub use ring::ConsistentHashRing;
