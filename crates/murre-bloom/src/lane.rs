//! Lane-batched bloom filter.

use murre_hash::XxHash64;

use crate::bits::BitArray;
use crate::traits::{BloomFilter, DEFAULT_HASHING_ROUNDS, DEFAULT_WIDTH_BITS};

/// Width of the index batch computed per operation.
pub const LANES: usize = 16;

/// Bloom filter that derives all candidate indices as one batch.
///
/// The per-round multiply-add runs over a fixed [`LANES`]-wide block
/// with no branching, a shape the auto-vectorizer lowers to SIMD on
/// targets that have it. Index derivation matches
/// [`NaiveBloomFilter`] bit for bit, so the two variants fill
/// identical bit patterns for identical input and parameters.
///
/// [`NaiveBloomFilter`]: crate::NaiveBloomFilter
#[derive(Debug, Clone)]
pub struct LaneBloomFilter {
    bits: BitArray,
    rounds: u32,
}

impl LaneBloomFilter {
    /// Create a filter with `width_bits` bits of storage and `rounds`
    /// hashing rounds per operation.
    ///
    /// # Panics
    ///
    /// Panics if `width_bits` or `rounds` is zero, or if `rounds`
    /// exceeds [`LANES`].
    pub fn new(width_bits: u64, rounds: u32) -> Self {
        assert!(rounds > 0, "at least one hashing round is required");
        assert!(
            rounds as usize <= LANES,
            "hashing rounds capped at {LANES} by the lane width"
        );
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

    /// All [`LANES`] candidate indices for `item`, in round order.
    fn index_block(&self, item: &[u8]) -> [u64; LANES] {
        let digest = XxHash64::hash64(item);
        let lower = digest & 0xFFFF_FFFF;
        let upper = (digest >> 32) & 0xFFFF_FFFF;
        let width = self.bits.width();

        let mut block = [0u64; LANES];
        for (i, slot) in block.iter_mut().enumerate() {
            *slot = (lower + upper * (i as u64 + 1)) % width;
        }
        block
    }
}

impl Default for LaneBloomFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH_BITS, DEFAULT_HASHING_ROUNDS)
    }
}

impl BloomFilter for LaneBloomFilter {
    fn put(&mut self, item: &[u8]) {
        let block = self.index_block(item);
        for &index in &block[..self.rounds as usize] {
            self.bits.set(index);
        }
    }

    fn might_contain(&self, item: &[u8]) -> bool {
        let block = self.index_block(item);
        block[..self.rounds as usize]
            .iter()
            .all(|&index| self.bits.get(index))
    }
}
