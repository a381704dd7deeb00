//! Deterministic 64-bit hash functions.
//!
//! Native hash codes are implementation-defined and unstable across
//! process restarts, so anything that needs a reproducible identity
//! hashes through this crate instead:
//!
//! - [`Murmur3`]: one-shot block hash, the default for label-derived
//!   ring identities.
//! - [`XxHash64`] / [`Xx64Hasher`]: one-shot and streaming forms of the
//!   four-lane hash backing bloom-filter index derivation.
//! - [`XorShift64`]: a tiny deterministic generator for test and bench
//!   data.
//!
//! Digests never change between versions; they are treated as persisted
//! values by everything downstream.

mod murmur3;
mod traits;
mod xorshift;
mod xx64;

pub use murmur3::Murmur3;
pub use traits::HashFunction;
pub use xorshift::XorShift64;
pub use xx64::{Xx64Hasher, XxHash64};
