//! SHA-256 integrity hashing.

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest of the payload: 64 lowercase hex characters.
pub fn sha256_hex(payload: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(payload);
    hex::encode(hasher.finalize())
}
