//! Probabilistic set-membership filters.
//!
//! Two implementations of the same [`BloomFilter`] contract share one
//! index derivation: a single [`XxHash64`] digest split into 32-bit
//! halves, combined per round as `lower + upper * round` (the Kirsch
//! and Mitzenmacher double-hashing construction).
//!
//! - [`NaiveBloomFilter`]: walks the hashing rounds in a plain loop.
//! - [`LaneBloomFilter`]: derives all candidate indices in one pass
//!   over a fixed 16-lane block, a shape the auto-vectorizer lowers to
//!   SIMD multiply-adds.
//!
//! The two variants set identical bit patterns for identical input and
//! parameters. Filters are monotonic: bits are only ever set, never
//! cleared, so inserted items can never test negative.
//!
//! [`XxHash64`]: murre_hash::XxHash64

mod bits;
mod lane;
mod naive;
mod traits;

pub use lane::{LANES, LaneBloomFilter};
pub use naive::NaiveBloomFilter;
pub use traits::{BloomFilter, DEFAULT_HASHING_ROUNDS, DEFAULT_WIDTH_BITS};
