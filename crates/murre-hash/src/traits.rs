//! Capability trait for pluggable hash functions.

/// A deterministic 64-bit hash over a byte sequence.
///
/// Implementations are pure: the same input and seed produce the same
/// digest in this process and every other. The trait is object-safe so
/// callers can hold a `&dyn HashFunction` chosen at runtime.
pub trait HashFunction {
    /// Hash `data` with the implementation's default seed.
    fn hash(&self, data: &[u8]) -> u64;

    /// Hash `data` with an explicit seed.
    fn hash_with_seed(&self, data: &[u8], seed: u64) -> u64;
}
