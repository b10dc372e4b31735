// crates/dashkeeper-core/src/runtime/cache.rs
// ============================================================================
// Module: Dashkeeper Cache Validation
// Description: Validity decision for previously captured URL content.
// Purpose: Let the reconciliation loop skip redundant fetches safely.
// Dependencies: time
// ============================================================================

//! ## Overview
//! URL-sourced content is cached in status as a gzip stream together with
//! its origin URL and capture instant. This module decides whether that
//! snapshot can stand in for a fresh fetch at a caller-supplied `now`.
//!
//! A miss is a normal, silent outcome. Origin mismatch, expiry, and corrupt
//! bytes all yield `None` rather than an error; the worst consequence of a
//! damaged cache is one redundant fetch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Duration;
use time::OffsetDateTime;

use crate::core::codec;
use crate::core::status::DashboardStatus;

// ============================================================================
// SECTION: Cache Validation
// ============================================================================

/// Returns the decompressed cached content when the snapshot is valid at
/// `now`, or `None` on any miss.
///
/// Validity requires all of:
/// 1. the recorded origin URL equals `source_url` by exact string
///    comparison; no normalization is applied, and an empty origin matches
///    only an empty request;
/// 2. `cache_duration` is non-positive (expiry disabled), or the capture
///    instant plus the TTL falls strictly after `now`;
/// 3. the stored bytes decompress as a well-formed gzip stream.
///
/// A snapshot without a capture instant is treated as expired whenever a
/// positive TTL is in force, and an expiry instant past the representable
/// time range is treated as already reached.
#[must_use]
pub fn cached_content(
    status: &DashboardStatus,
    source_url: &str,
    cache_duration: Duration,
    now: OffsetDateTime,
) -> Option<Vec<u8>> {
    if status.cache_origin_url != source_url {
        return None;
    }

    if cache_duration.is_positive() {
        let live = status
            .cache_timestamp
            .and_then(|captured| captured.checked_add(cache_duration))
            .is_some_and(|expiry| expiry > now);
        if !live {
            return None;
        }
    }

    codec::gunzip(&status.compressed_cache).ok()
}
