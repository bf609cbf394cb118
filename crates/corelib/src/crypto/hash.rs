//! Generic hash trait and helpers.

/// Width in bytes of every digest produced through [`Hash32`].
pub const DIGEST_LEN: usize = 32;

/// A simple streaming hash trait with fixed-size 32-byte digests.
/// The HEL-420 pipeline is generic over this trait; SHA-256 is the default.
pub trait Hash32 {
    /// Create a new hasher.
    fn new() -> Self
    where
        Self: Sized;
    /// Absorb bytes into the state.
    fn update(&mut self, data: &[u8]);
    /// Finalize and produce a 32-byte digest.
    fn finalize(self) -> [u8; DIGEST_LEN];
}

/// Compute one-shot hash.
pub fn hash_one_shot<H: Hash32>(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut h = H::new();
    h.update(data);
    h.finalize()
}
