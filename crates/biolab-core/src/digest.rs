//! SHA-256 password digests.
//!
//! Credentials are stored as a single unsalted hash pass. That is the
//! stored format this crate must stay compatible with — a known
//! limitation, not something to harden here.

use sha2::{Digest, Sha256};

/// Hash a plaintext password to its SHA-256 digest as 64 lowercase hex
/// characters.
///
/// Deterministic: the same input always produces the same digest, so the
/// result compares byte-for-byte against the stored `TEXT` column.
#[must_use]
pub fn hash_password(password: &str) -> String {
    encode_hex(&Sha256::digest(password.as_bytes()))
}

/// Lowercase hex encoding without an external `hex` crate.
fn encode_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;
    let mut s = String::with_capacity(bytes.len().saturating_mul(2));
    for &b in bytes {
        // Writing into a String only fails on allocation, which panics
        // rather than returning Err.
        let _ = write!(s, "{b:02x}");
    }
    s
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
