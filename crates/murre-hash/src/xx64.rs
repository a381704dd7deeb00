//! Streaming 64-bit hash with four accumulator lanes.

use crate::traits::HashFunction;

const P1: u64 = 0x9e37_79b1_85eb_ca87;
const P2: u64 = 0xc2b2_ae3d_27d4_eb4f;
const P3: u64 = 0x1656_67b1_9e37_79f9;
const P4: u64 = 0x85eb_ca77_c2b2_ae63;
const P5: u64 = 0x27d4_eb2f_1656_67c5;

/// One-shot form of the streaming hash.
///
/// Convenience facade over [`Xx64Hasher`]; both produce identical
/// digests for identical bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct XxHash64;

impl XxHash64 {
    /// Seed used by [`XxHash64::hash64`].
    pub const DEFAULT_SEED: u64 = 0;

    /// Hash `data` with the default seed.
    pub fn hash64(data: &[u8]) -> u64 {
        Self::hash64_with_seed(data, Self::DEFAULT_SEED)
    }

    /// Hash `data` with an explicit seed.
    pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
        let mut hasher = Xx64Hasher::with_seed(seed);
        hasher.update(data);
        hasher.digest()
    }
}

impl HashFunction for XxHash64 {
    fn hash(&self, data: &[u8]) -> u64 {
        Self::hash64(data)
    }

    fn hash_with_seed(&self, data: &[u8], seed: u64) -> u64 {
        Self::hash64_with_seed(data, seed)
    }
}

/// Incremental hashing state.
///
/// Input is consumed in 32-byte stripes across four accumulator lanes;
/// a partial stripe is buffered between [`update`] calls, so any split
/// of the same bytes produces the same digest. [`digest`] finalizes a
/// copy of the state and can be called at any point without consuming
/// the hasher.
///
/// [`update`]: Xx64Hasher::update
/// [`digest`]: Xx64Hasher::digest
#[derive(Debug, Clone)]
pub struct Xx64Hasher {
    lanes: [u64; 4],
    buf: [u8; 32],
    buf_len: usize,
    total_len: u64,
    seed: u64,
}

impl Xx64Hasher {
    /// Create a hasher with the default seed.
    pub fn new() -> Self {
        Self::with_seed(XxHash64::DEFAULT_SEED)
    }

    /// Create a hasher with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            lanes: [
                seed.wrapping_add(P1).wrapping_add(P2),
                seed.wrapping_add(P2),
                seed,
                seed.wrapping_sub(P1),
            ],
            buf: [0u8; 32],
            buf_len: 0,
            total_len: 0,
            seed,
        }
    }

    /// Feed bytes into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.total_len += data.len() as u64;
        let mut input = data;

        // Top up a partial stripe left over from the previous call.
        if self.buf_len > 0 {
            let take = (32 - self.buf_len).min(input.len());
            self.buf[self.buf_len..self.buf_len + take].copy_from_slice(&input[..take]);
            self.buf_len += take;
            input = &input[take..];

            if self.buf_len < 32 {
                return;
            }
            let stripe = self.buf;
            self.consume_stripe(&stripe);
            self.buf_len = 0;
        }

        let mut stripes = input.chunks_exact(32);
        for stripe in &mut stripes {
            self.consume_stripe(stripe.try_into().expect("32-byte stripe"));
        }

        let rest = stripes.remainder();
        self.buf[..rest.len()].copy_from_slice(rest);
        self.buf_len = rest.len();
    }

    /// Digest of all bytes fed so far. The hasher stays usable; more
    /// `update` calls simply extend the stream.
    pub fn digest(&self) -> u64 {
        let mut hash = if self.total_len >= 32 {
            let [v1, v2, v3, v4] = self.lanes;
            let mut acc = v1
                .rotate_left(1)
                .wrapping_add(v2.rotate_left(7))
                .wrapping_add(v3.rotate_left(12))
                .wrapping_add(v4.rotate_left(18));
            for lane in self.lanes {
                acc = (acc ^ round(0, lane)).wrapping_mul(P1).wrapping_add(P4);
            }
            acc
        } else {
            // No full stripe was ever consumed; the lanes are untouched.
            self.seed.wrapping_add(P5)
        };

        hash = hash.wrapping_add(self.total_len);

        let tail = &self.buf[..self.buf_len];
        let mut words = tail.chunks_exact(8);
        for bytes in &mut words {
            let word = u64::from_le_bytes(bytes.try_into().expect("8-byte word"));
            hash ^= round(0, word);
            hash = hash.rotate_left(27).wrapping_mul(P1).wrapping_add(P4);
        }

        let mut rest = words.remainder();
        if rest.len() >= 4 {
            let word = u64::from(u32::from_le_bytes(rest[..4].try_into().expect("4-byte word")));
            hash ^= word.wrapping_mul(P1);
            hash = hash.rotate_left(23).wrapping_mul(P2).wrapping_add(P3);
            rest = &rest[4..];
        }

        for &byte in rest {
            hash ^= u64::from(byte).wrapping_mul(P5);
            hash = hash.rotate_left(11).wrapping_mul(P1);
        }

        hash ^= hash >> 33;
        hash = hash.wrapping_mul(P2);
        hash ^= hash >> 29;
        hash = hash.wrapping_mul(P3);
        hash ^= hash >> 32;
        hash
    }

    fn consume_stripe(&mut self, stripe: &[u8; 32]) {
        for (lane, bytes) in self.lanes.iter_mut().zip(stripe.chunks_exact(8)) {
            let word = u64::from_le_bytes(bytes.try_into().expect("8-byte lane"));
            *lane = round(*lane, word);
        }
    }
}

impl Default for Xx64Hasher {
    fn default() -> Self {
        Self::new()
    }
}

/// One accumulator step.
#[inline]
fn round(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(P2))
        .rotate_left(31)
        .wrapping_mul(P1)
}
