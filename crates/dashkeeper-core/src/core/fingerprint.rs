// crates/dashkeeper-core/src/core/fingerprint.rs
// ============================================================================
// Module: Dashkeeper Content Fingerprint
// Description: SHA-256 fingerprints over dashboard content bytes.
// Purpose: Provide deterministic change detection between reconcile passes.
// Dependencies: serde, sha2
// ============================================================================

//! ## Overview
//! Change detection fingerprints the exact bytes handed to the renderer and
//! compares the result against the fingerprint recorded after the previous
//! successful propagation. The digest is SHA-256 rendered as lowercase hex.
//! Fingerprints detect drift only; they carry no integrity or authenticity
//! guarantees.
//!
//! The contract is byte-exact: semantically equal content with a different
//! byte form (key order, whitespace) produces a different fingerprint.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use sha2::Digest;
use sha2::Sha256;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Length in characters of a rendered content fingerprint.
pub const CONTENT_HASH_LEN: usize = 64;

/// Lowercase hexadecimal alphabet used to render digests.
const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

// ============================================================================
// SECTION: Fingerprint Type
// ============================================================================

/// Rendered SHA-256 fingerprint of dashboard content bytes.
///
/// # Invariants
/// - Computed values are exactly [`CONTENT_HASH_LEN`] lowercase hex characters.
/// - Comparison is byte-for-byte string equality; no case folding is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentHash(String);

impl ContentHash {
    /// Creates a content hash from an already-rendered value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the rendered fingerprint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContentHash {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ContentHash {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Fingerprint Computation
// ============================================================================

/// Computes the SHA-256 fingerprint of the exact content bytes.
///
/// No canonicalization is applied before hashing; callers fingerprint the
/// same byte sequence they hand to the renderer.
#[must_use]
pub fn fingerprint(content: &[u8]) -> ContentHash {
    let digest = Sha256::digest(content);
    let mut rendered = String::with_capacity(CONTENT_HASH_LEN);
    for byte in digest {
        rendered.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
        rendered.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
    }
    ContentHash(rendered)
}
