//! XorShift generator for reproducible data.

/// A 64-bit xorshift pseudo-random generator.
///
/// Deterministic per seed and trivially portable, which is all the
/// workspace needs from it: tests and benches use it to produce input
/// data that is identical on every platform and run. Not a source of
/// cryptographic randomness.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Create a generator from a nonzero seed.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is zero; the all-zero state is a fixed point of
    /// the shift sequence.
    pub fn new(seed: u64) -> Self {
        assert!(seed != 0, "XorShift64 seed must be nonzero");
        Self { state: seed }
    }

    /// Next value in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Fill `buf` with pseudo-random bytes.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
