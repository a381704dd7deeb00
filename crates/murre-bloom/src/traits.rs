//! Bloom filter contract and shared defaults.

/// Default filter width in bits.
pub const DEFAULT_WIDTH_BITS: u64 = 4096;

/// Default number of hashing rounds.
///
/// A filter targeting false-positive probability `p` wants about
/// `-log2(p)` rounds; 16 suits the small membership sets these filters
/// track.
pub const DEFAULT_HASHING_ROUNDS: u32 = 16;

/// Append-only probabilistic set membership.
///
/// [`put`] only ever sets bits, so a filter can grow but never forget:
/// [`might_contain`] answers `true` for every item ever inserted, and
/// occasionally for items never inserted. After `n` insertions into
/// `m` bits with `k` rounds the false-positive rate is about
/// `(1 - e^(-kn/m))^k`.
///
/// [`put`]: BloomFilter::put
/// [`might_contain`]: BloomFilter::might_contain
pub trait BloomFilter {
    /// Insert an item.
    fn put(&mut self, item: &[u8]);

    /// Whether `item` may have been inserted. `false` is definitive.
    fn might_contain(&self, item: &[u8]) -> bool;
}
