//! HEL-420: SHA-256, a per-byte real-valued mixing stage, then SHA-256 again.
//!
//! ```
//! let hex = hel420_corelib::hel420_hash("");
//! assert_eq!(hex, "b27f7a2b0ae7d19d295502f6b109666ca3db0a341859835ae142dc5fd91b5a4c");
//! ```
//!
//! Not a cryptographic construction; it only promises reproducible output.

pub mod config;
pub mod crypto;
pub mod digest;
pub mod errors;
pub mod mix;
pub mod pipeline;

pub use config::{MixConfig, MAX_ROUNDS};
pub use crypto::hash::DIGEST_LEN;
pub use digest::Hel420Digest;
pub use errors::{DigestParseError, MixConfigError};
pub use mix::DEFAULT_ROUNDS;
pub use pipeline::{hel420_digest, hel420_hash, verify, Hel420};

/// Algorithm label used in CLI and FFI output.
pub const ALGORITHM: &str = "HEL-420";

/// Crate version, reported by `hel420 --version`.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
