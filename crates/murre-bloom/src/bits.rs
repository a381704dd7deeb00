//! Packed bit storage backing the filters.

/// A fixed-width array of bits packed into 64-bit words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BitArray {
    words: Vec<u64>,
    width: u64,
}

impl BitArray {
    pub(crate) fn new(width: u64) -> Self {
        assert!(width > 0, "bit array width must be nonzero");
        Self {
            words: vec![0u64; width.div_ceil(64) as usize],
            width,
        }
    }

    /// Number of addressable bits.
    pub(crate) fn width(&self) -> u64 {
        self.width
    }

    pub(crate) fn set(&mut self, index: u64) {
        debug_assert!(index < self.width);
        self.words[(index / 64) as usize] |= 1 << (index % 64);
    }

    pub(crate) fn get(&self, index: u64) -> bool {
        debug_assert!(index < self.width);
        (self.words[(index / 64) as usize] >> (index % 64)) & 1 == 1
    }

    /// Raw backing words, for equivalence checks between filter
    /// variants.
    pub(crate) fn words(&self) -> &[u64] {
        &self.words
    }
}
