// crates/dashkeeper-core/src/core/resource.rs
// ============================================================================
// Module: Dashkeeper Dashboard Resource
// Description: Addressable dashboard resource combining spec and status.
// Purpose: Offer the decision surface a reconciliation loop works against.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! A [`Dashboard`] pairs desired state with observed state under a
//! namespace-and-name identity. Its methods answer the questions a
//! reconciliation loop asks each pass: which sources are declared, is the
//! URL cache still usable, did the content change, and is a periodic resync
//! due. Methods that depend on time take `now` explicitly and never read the
//! wall clock.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

use crate::core::fingerprint::ContentHash;
use crate::core::identifiers::ResourceId;
use crate::core::spec::DashboardSpec;
use crate::core::spec::SourceKind;
use crate::core::status::DashboardStatus;
use crate::runtime::cache;
use crate::runtime::resync;
use crate::runtime::resync::EffectiveResyncPeriod;

// ============================================================================
// SECTION: Dashboard Resource
// ============================================================================

/// Addressable dashboard resource: identity, desired spec, observed status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Resource identity.
    pub id: ResourceId,
    /// Desired state.
    #[serde(default)]
    pub spec: DashboardSpec,
    /// Observed state.
    #[serde(default)]
    pub status: DashboardStatus,
}

impl Dashboard {
    /// Creates a dashboard resource with an empty spec and status.
    #[must_use]
    pub fn new(id: ResourceId) -> Self {
        Self {
            id,
            spec: DashboardSpec::default(),
            status: DashboardStatus::default(),
        }
    }

    /// Lists the populated source kinds in fixed declaration order.
    #[must_use]
    pub fn source_kinds(&self) -> Vec<SourceKind> {
        self.spec.source_kinds()
    }

    /// Returns the decompressed cached URL content when the snapshot is
    /// still valid at `now`, or `None` on any miss.
    ///
    /// Validity follows [`cache::cached_content`]: exact origin equality,
    /// TTL not elapsed (or expiry disabled), and a well-formed gzip stream.
    #[must_use]
    pub fn cached_content(&self, now: OffsetDateTime) -> Option<Vec<u8>> {
        cache::cached_content(
            &self.status,
            self.spec.source_url.as_deref().unwrap_or(""),
            self.spec.cache_duration,
            now,
        )
    }

    /// Returns true when `hash` equals the fingerprint recorded after the
    /// last successful propagation.
    ///
    /// A resource that never propagated content reports changed for every
    /// fingerprint.
    #[must_use]
    pub fn unchanged(&self, hash: &ContentHash) -> bool {
        self.status.content_hash.as_ref() == Some(hash)
    }

    /// Resolves the effective resync period from the declared spec value
    /// without mutating the spec.
    #[must_use]
    pub fn effective_resync_period(&self) -> EffectiveResyncPeriod {
        resync::effective_resync_period(self.spec.resync_period.as_deref())
    }

    /// Writes the normalization write-back into the spec when the declared
    /// period was absent or invalid. Returns true when the spec changed and
    /// should be persisted.
    pub fn normalize_resync_period(&mut self) -> bool {
        match self.effective_resync_period().normalized() {
            Some(replacement) => {
                self.spec.resync_period = Some(replacement.to_string());
                true
            }
            None => false,
        }
    }

    /// Returns true when `now` is strictly past the last resync plus the
    /// effective resync period.
    #[must_use]
    pub fn resync_due(&self, now: OffsetDateTime) -> bool {
        let effective = self.effective_resync_period();
        resync::resync_due(self.status.last_resync_time, effective.period(), now)
    }

    /// Returns true when the resource may be imported into rendering
    /// targets outside its own namespace.
    #[must_use]
    pub fn allow_cross_namespace_import(&self) -> bool {
        self.spec.allow_cross_namespace_import.unwrap_or(false)
    }
}

// ============================================================================
// SECTION: Dashboard List
// ============================================================================

/// Ordered collection of dashboard resources with identity lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardList {
    /// Resources in declaration order.
    #[serde(default)]
    pub items: Vec<Dashboard>,
}

impl DashboardList {
    /// Creates a list from the given resources.
    #[must_use]
    pub fn new(items: Vec<Dashboard>) -> Self {
        Self { items }
    }

    /// Finds a resource by exact namespace-and-name identity.
    #[must_use]
    pub fn find(&self, id: &ResourceId) -> Option<&Dashboard> {
        self.items.iter().find(|dashboard| dashboard.id == *id)
    }

    /// Returns the number of resources in the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the list holds no resources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the resources in declaration order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, Dashboard> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a DashboardList {
    type Item = &'a Dashboard;
    type IntoIter = std::slice::Iter<'a, Dashboard>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
