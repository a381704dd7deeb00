//! Murmur-style 64-bit block hash.

use crate::traits::HashFunction;

const C1: u64 = 0x87c3_7b91_1142_53d5;
const C2: u64 = 0x4cf5_ad43_2745_937f;

/// One-shot Murmur-style block hash.
///
/// Processes input in 8-byte little-endian blocks with a 1 to 7 byte
/// tail, then finishes with the `fmix64` avalanche. There is no
/// streaming state; hashing is a single pass over a complete buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Murmur3;

impl Murmur3 {
    /// Seed used by [`Murmur3::hash64`].
    pub const DEFAULT_SEED: u64 = 104_729;

    /// Hash `data` with the default seed.
    pub fn hash64(data: &[u8]) -> u64 {
        Self::hash64_with_seed(data, Self::DEFAULT_SEED)
    }

    /// Hash `data` with an explicit seed.
    pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
        let mut hash = seed;

        let mut blocks = data.chunks_exact(8);
        for block in &mut blocks {
            let mut k = u64::from_le_bytes(block.try_into().expect("8-byte block"));
            k = k.wrapping_mul(C1);
            k = k.rotate_left(31);
            k = k.wrapping_mul(C2);
            hash ^= k;
            hash = hash.rotate_left(27).wrapping_mul(5).wrapping_add(0x52dc_e729);
        }

        let tail = blocks.remainder();
        if !tail.is_empty() {
            let mut k = 0u64;
            for (i, &byte) in tail.iter().enumerate().rev() {
                k ^= u64::from(byte) << (8 * i);
            }
            k = k.wrapping_mul(C1);
            k = k.rotate_left(31);
            k = k.wrapping_mul(C2);
            hash ^= k;
        }

        hash ^= data.len() as u64;
        fmix64(hash)
    }
}

impl HashFunction for Murmur3 {
    fn hash(&self, data: &[u8]) -> u64 {
        Self::hash64(data)
    }

    fn hash_with_seed(&self, data: &[u8], seed: u64) -> u64 {
        Self::hash64_with_seed(data, seed)
    }
}

/// Finalization avalanche: flips of a single input bit spread across
/// every output bit.
#[inline]
fn fmix64(mut x: u64) -> u64 {
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x = x.wrapping_mul(0xc4ce_b9fe_1a85_ec53);
    x ^= x >> 33;
    x
}
