// crates/dashkeeper-core/examples/minimal.rs
// ============================================================================
// Module: Dashkeeper Minimal Example
// Description: Minimal two-pass reconcile flow using in-memory adapters.
// Purpose: Demonstrate cache reuse, change detection, and resync normalization.
// Dependencies: dashkeeper-core, time
// ============================================================================

//! ## Overview
//! Reconciles a URL-sourced dashboard twice with in-memory adapters. The
//! first pass fetches, applies, and records the fingerprint; the second pass
//! reuses the cache and skips the apply because nothing changed.

use std::cell::Cell;
use std::cell::RefCell;

use dashkeeper_core::BackendError;
use dashkeeper_core::ContentFetcher;
use dashkeeper_core::Dashboard;
use dashkeeper_core::DashboardBackend;
use dashkeeper_core::FetchError;
use dashkeeper_core::PersistError;
use dashkeeper_core::ResourceId;
use dashkeeper_core::ResourceWriter;
use dashkeeper_core::TargetError;
use dashkeeper_core::TargetResolver;
use dashkeeper_core::codec;
use dashkeeper_core::fingerprint;
use time::Duration;
use time::OffsetDateTime;
use time::macros::datetime;

/// Error type for example preconditions.
#[derive(Debug)]
struct ExampleError(&'static str);

impl std::fmt::Display for ExampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ExampleError {}

/// Fetcher serving a fixed document and counting fetches.
struct StaticFetcher {
    /// Document returned for every URL fetch.
    body: Vec<u8>,
    /// Number of URL fetches performed.
    calls: Cell<usize>,
}

impl ContentFetcher for StaticFetcher {
    fn fetch_url(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.body.clone())
    }

    fn fetch_catalog(
        &self,
        _reference: &dashkeeper_core::CatalogReference,
    ) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Catalog("example has no catalog".to_string()))
    }
}

/// Backend recording every applied document.
struct MemoryBackend {
    /// Applied documents keyed by resource identity.
    applied: RefCell<Vec<(ResourceId, Vec<u8>)>>,
}

impl DashboardBackend for MemoryBackend {
    fn apply(&self, id: &ResourceId, content: &[u8]) -> Result<(), BackendError> {
        self.applied.borrow_mut().push((id.clone(), content.to_vec()));
        Ok(())
    }

    fn remove(&self, _id: &ResourceId) -> Result<(), BackendError> {
        Ok(())
    }
}

/// Writer that accepts every persistence request.
struct NullWriter;

impl ResourceWriter for NullWriter {
    fn persist_spec(&self, _dashboard: &Dashboard) -> Result<(), PersistError> {
        Ok(())
    }

    fn persist_status(&self, _dashboard: &Dashboard) -> Result<(), PersistError> {
        Ok(())
    }
}

/// Resolver matching a single fixed rendering target.
struct OneTarget;

impl TargetResolver for OneTarget {
    fn matching_targets(&self, _dashboard: &Dashboard) -> Result<Vec<ResourceId>, TargetError> {
        Ok(vec![ResourceId::new("monitoring", "grafana-main")])
    }
}

/// One reconcile pass; returns whether content was applied.
fn reconcile_pass(
    dashboard: &mut Dashboard,
    fetcher: &impl ContentFetcher,
    backend: &impl DashboardBackend,
    resolver: &impl TargetResolver,
    writer: &impl ResourceWriter,
    now: OffsetDateTime,
) -> Result<bool, Box<dyn std::error::Error>> {
    if dashboard.normalize_resync_period() {
        writer.persist_spec(dashboard)?;
    }

    let targets = resolver.matching_targets(dashboard)?;
    dashboard.status.no_matching_targets = targets.is_empty();

    let url = dashboard
        .spec
        .source_url
        .clone()
        .ok_or(ExampleError("example dashboard must declare a source url"))?;
    let content = match dashboard.cached_content(now) {
        Some(cached) => cached,
        None => {
            let fetched = fetcher.fetch_url(&url)?;
            dashboard.status.compressed_cache = codec::gzip(&fetched)?;
            dashboard.status.cache_timestamp = Some(now);
            dashboard.status.cache_origin_url = url;
            fetched
        }
    };

    let hash = fingerprint(&content);
    let mut applied = false;
    if !dashboard.unchanged(&hash) {
        backend.apply(&dashboard.id, &content)?;
        dashboard.status.content_hash = Some(hash);
        applied = true;
    }

    dashboard.status.last_resync_time = Some(now);
    writer.persist_status(dashboard)?;
    Ok(applied)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = StaticFetcher {
        body: br#"{"title":"cpu","panels":[]}"#.to_vec(),
        calls: Cell::new(0),
    };
    let backend = MemoryBackend {
        applied: RefCell::new(Vec::new()),
    };
    let resolver = OneTarget;
    let writer = NullWriter;

    let mut dashboard = Dashboard::new(ResourceId::new("monitoring", "cpu-usage"));
    dashboard.spec.source_url = Some("https://example.com/dashboards/cpu.json".to_string());
    dashboard.spec.cache_duration = Duration::minutes(10);

    let first_at = datetime!(2026-03-01 12:00:00 UTC);
    let applied = reconcile_pass(&mut dashboard, &fetcher, &backend, &resolver, &writer, first_at)?;
    if !applied || fetcher.calls.get() != 1 {
        return Err(ExampleError("first pass must fetch and apply").into());
    }

    let second_at = first_at + Duration::minutes(5);
    let applied =
        reconcile_pass(&mut dashboard, &fetcher, &backend, &resolver, &writer, second_at)?;
    if applied || fetcher.calls.get() != 1 {
        return Err(ExampleError("second pass must reuse the cache and skip the apply").into());
    }

    if dashboard.spec.resync_period.as_deref() != Some("5m") {
        return Err(ExampleError("missing resync period must normalize to the default").into());
    }
    if !dashboard.resync_due(second_at + Duration::minutes(6)) {
        return Err(ExampleError("a full period after the last pass must be due").into());
    }

    let _ = backend.applied.into_inner();
    Ok(())
}
