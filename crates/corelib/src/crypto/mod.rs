//! Digest primitive surface area.
//! Provides the fixed-width hash trait and the SHA-256 implementation the
//! HEL-420 pipeline runs on.

pub mod hash;
pub mod sha256;
