//! Scalar bloom filter.

use murre_hash::XxHash64;

use crate::bits::BitArray;
use crate::traits::{BloomFilter, DEFAULT_HASHING_ROUNDS, DEFAULT_WIDTH_BITS};

/// Bloom filter that walks its hashing rounds in a plain loop.
///
/// One [`XxHash64`] digest per operation; round `i` touches bit
/// `(lower + upper * i) mod width`, where `lower` and `upper` are the
/// digest's 32-bit halves.
#[derive(Debug, Clone)]
pub struct NaiveBloomFilter {
    bits: BitArray,
    rounds: u32,
}

impl NaiveBloomFilter {
    /// Create a filter with `width_bits` bits of storage and `rounds`
    /// hashing rounds per operation.
    ///
    /// # Panics
    ///
    /// Panics if `width_bits` or `rounds` is zero.
    pub fn new(width_bits: u64, rounds: u32) -> Self {
        assert!(rounds > 0, "at least one hashing round is required");
        Self {
            bits: BitArray::new(width_bits),
            rounds,
        }
    }

    /// Filter width in bits.
    pub fn width_bits(&self) -> u64 {
        self.bits.width()
    }

    /// Hashing rounds per operation.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub(crate) fn words(&self) -> &[u64] {
        self.bits.words()
    }
}

impl Default for NaiveBloomFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH_BITS, DEFAULT_HASHING_ROUNDS)
    }
}

impl BloomFilter for NaiveBloomFilter {
    fn put(&mut self, item: &[u8]) {
        let (lower, upper) = split_digest(item);
        let width = self.bits.width();
        for round in 1..=u64::from(self.rounds) {
            self.bits.set((lower + upper * round) % width);
        }
    }

    fn might_contain(&self, item: &[u8]) -> bool {
        let (lower, upper) = split_digest(item);
        let width = self.bits.width();
        (1..=u64::from(self.rounds)).all(|round| self.bits.get((lower + upper * round) % width))
    }
}

/// One base digest split into 32-bit halves for double hashing.
#[inline]
fn split_digest(item: &[u8]) -> (u64, u64) {
    let digest = XxHash64::hash64(item);
    (digest & 0xFFFF_FFFF, (digest >> 32) & 0xFFFF_FFFF)
}
