//! SHA-256 implementation of Hash32.

use sha2::Digest as _;

use crate::crypto::hash::{Hash32, DIGEST_LEN};

pub struct Sha256 {
    inner: sha2::Sha256,
}

impl Hash32 for Sha256 {
    fn new() -> Self {
        Self {
            inner: sha2::Sha256::new(),
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    fn finalize(self) -> [u8; DIGEST_LEN] {
        let mut out = [0u8; DIGEST_LEN];
        out.copy_from_slice(&self.inner.finalize());
        out
    }
}
