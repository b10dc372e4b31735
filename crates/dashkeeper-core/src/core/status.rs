// crates/dashkeeper-core/src/core/status.rs
// ============================================================================
// Module: Dashkeeper Dashboard Status
// Description: Observed-state record for a dashboard resource.
// Purpose: Carry cache, fingerprint, and resync bookkeeping between reconcile passes.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! Status records what the reconciliation loop last observed and propagated:
//! the compressed URL cache with its origin and capture instant, the
//! fingerprint of the last content pushed downstream, the last resync
//! instant, and whether the selector matched any targets. The loop owns all
//! writes; the freshness engine only reads these fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::fingerprint::ContentHash;
use crate::core::wire;

// ============================================================================
// SECTION: Dashboard Status
// ============================================================================

/// Observed state of a dashboard resource.
///
/// # Invariants
/// - `content_hash` only ever holds the fingerprint of content that was
///   successfully propagated downstream.
/// - `cache_origin_url` names the origin of `compressed_cache`; cache reuse
///   requires exact string equality with the requested URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatus {
    /// Gzip-compressed snapshot of the last URL fetch, base64 on the wire.
    #[serde(
        default,
        with = "wire::base64_bytes",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub compressed_cache: Vec<u8>,
    /// Instant the cache snapshot was captured.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_timestamp: Option<OffsetDateTime>,
    /// URL the cache snapshot was captured from; empty when no cache exists.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cache_origin_url: String,
    /// Fingerprint of the content last propagated downstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<ContentHash>,
    /// Instant the resync clock last reset.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_resync_time: Option<OffsetDateTime>,
    /// Set by the selector collaborator when no rendering target matches.
    #[serde(default)]
    pub no_matching_targets: bool,
}
