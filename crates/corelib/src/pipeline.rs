//! HEL-420 pipeline: digest, mix, digest.

use std::marker::PhantomData;

use tracing::trace;

use crate::config::MixConfig;
use crate::crypto::hash::{hash_one_shot, Hash32};
use crate::crypto::sha256::Sha256;
use crate::digest::Hel420Digest;
use crate::errors::{DigestParseError, MixConfigError};
use crate::mix::mix;

/// Reusable hasher over the digest primitive `H`.
///
/// `Hel420::new()` is the standard construction (SHA-256, three rounds).
/// A hasher holds no mutable state; one instance can be shared across threads.
pub struct Hel420<H: Hash32 = Sha256> {
    config: MixConfig,
    _digest: PhantomData<fn() -> H>,
}

impl Hel420<Sha256> {
    /// SHA-256 with `DEFAULT_ROUNDS` mixing passes.
    pub fn new() -> Self {
        Self {
            config: MixConfig::default(),
            _digest: PhantomData,
        }
    }
}

impl Default for Hel420<Sha256> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Hash32> Hel420<H> {
    /// Hasher with custom mixing; errors when `config.rounds > MAX_ROUNDS`.
    pub fn with_config(config: MixConfig) -> Result<Self, MixConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            _digest: PhantomData,
        })
    }

    /// Mixing configuration in use.
    pub fn config(&self) -> &MixConfig {
        &self.config
    }

    /// `H(mix(H(input)))`.
    pub fn digest(&self, input: &[u8]) -> Hel420Digest {
        let stage1 = hash_one_shot::<H>(input);
        trace!(stage1 = %hex::encode(stage1), "stage-1 digest");

        let mixed = mix(&stage1, self.config.rounds);
        trace!(mixed = %hex::encode(mixed), rounds = self.config.rounds, "mixed buffer");

        let out = Hel420Digest::from_bytes(hash_one_shot::<H>(&mixed));
        trace!(digest = %out, "final digest");
        out
    }

    /// Digest of the UTF-8 bytes of `input`, as lowercase hex.
    pub fn hash_str(&self, input: &str) -> String {
        self.digest(input.as_bytes()).to_hex()
    }
}

/// HEL-420 digest of the UTF-8 encoding of `input`.
pub fn hel420_digest(input: &str) -> Hel420Digest {
    Hel420::new().digest(input.as_bytes())
}

/// HEL-420 of `input` as 64 lowercase hex characters.
pub fn hel420_hash(input: &str) -> String {
    hel420_digest(input).to_hex()
}

/// Recompute the digest of `input` and compare against `expected` (hex).
pub fn verify(input: &str, expected: &str) -> Result<bool, DigestParseError> {
    let expected: Hel420Digest = expected.parse()?;
    Ok(hel420_digest(input) == expected)
}
