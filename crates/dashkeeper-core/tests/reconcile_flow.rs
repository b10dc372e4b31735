// crates/dashkeeper-core/tests/reconcile_flow.rs
// ============================================================================
// Module: Reconcile Flow Tests
// Description: Exercises a full reconcile pass over the decision surface.
// ============================================================================
//! ## Overview
//! Simulates the reconciliation loop the crate is built for: resolve the
//! source, reuse or refresh the cache, fingerprint the content, apply only
//! on change, and stamp the resync clock. In-memory collaborators stand in
//! for the fetcher, backend, selector, and resource writer.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use std::cell::Cell;
use std::cell::RefCell;
use std::error::Error;

use dashkeeper_core::BackendError;
use dashkeeper_core::CatalogReference;
use dashkeeper_core::ContentFetcher;
use dashkeeper_core::Dashboard;
use dashkeeper_core::DashboardBackend;
use dashkeeper_core::FetchError;
use dashkeeper_core::PersistError;
use dashkeeper_core::ResourceId;
use dashkeeper_core::ResourceWriter;
use dashkeeper_core::TargetError;
use dashkeeper_core::TargetResolver;
use dashkeeper_core::TemplateError;
use dashkeeper_core::TemplateExpander;
use dashkeeper_core::codec;
use dashkeeper_core::fingerprint;
use time::Duration;
use time::OffsetDateTime;
use time::macros::datetime;

// ============================================================================
// SECTION: In-Memory Collaborators
// ============================================================================

/// Fetcher returning a scripted body and counting URL fetches.
struct ScriptedFetcher {
    body: RefCell<Vec<u8>>,
    url_calls: Cell<usize>,
}

impl ScriptedFetcher {
    fn new(body: &[u8]) -> Self {
        Self {
            body: RefCell::new(body.to_vec()),
            url_calls: Cell::new(0),
        }
    }

    fn set_body(&self, body: &[u8]) {
        *self.body.borrow_mut() = body.to_vec();
    }

    fn url_calls(&self) -> usize {
        self.url_calls.get()
    }
}

impl ContentFetcher for ScriptedFetcher {
    fn fetch_url(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        self.url_calls.set(self.url_calls.get() + 1);
        Ok(self.body.borrow().clone())
    }

    fn fetch_catalog(&self, reference: &CatalogReference) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Catalog(format!("no catalog entry {}", reference.id)))
    }
}

/// Backend recording every apply.
struct RecordingBackend {
    applied: RefCell<Vec<(ResourceId, Vec<u8>)>>,
}

impl RecordingBackend {
    fn new() -> Self {
        Self {
            applied: RefCell::new(Vec::new()),
        }
    }

    fn apply_count(&self) -> usize {
        self.applied.borrow().len()
    }
}

impl DashboardBackend for RecordingBackend {
    fn apply(&self, id: &ResourceId, content: &[u8]) -> Result<(), BackendError> {
        self.applied.borrow_mut().push((id.clone(), content.to_vec()));
        Ok(())
    }

    fn remove(&self, _id: &ResourceId) -> Result<(), BackendError> {
        Ok(())
    }
}

/// Expander wrapping the source text into a JSON document.
struct WrappingExpander;

impl TemplateExpander for WrappingExpander {
    fn expand(&self, source: &str) -> Result<Vec<u8>, TemplateError> {
        if source.is_empty() {
            return Err(TemplateError::Expand("empty template source".to_string()));
        }
        Ok(format!(r#"{{"rendered":"{source}"}}"#).into_bytes())
    }
}

/// Writer counting spec and status persistence calls.
struct CountingWriter {
    spec_writes: Cell<usize>,
    status_writes: Cell<usize>,
}

impl CountingWriter {
    fn new() -> Self {
        Self {
            spec_writes: Cell::new(0),
            status_writes: Cell::new(0),
        }
    }
}

impl ResourceWriter for CountingWriter {
    fn persist_spec(&self, _dashboard: &Dashboard) -> Result<(), PersistError> {
        self.spec_writes.set(self.spec_writes.get() + 1);
        Ok(())
    }

    fn persist_status(&self, _dashboard: &Dashboard) -> Result<(), PersistError> {
        self.status_writes.set(self.status_writes.get() + 1);
        Ok(())
    }
}

/// Resolver returning a fixed target set.
struct StaticTargets {
    targets: Vec<ResourceId>,
}

impl TargetResolver for StaticTargets {
    fn matching_targets(&self, _dashboard: &Dashboard) -> Result<Vec<ResourceId>, TargetError> {
        Ok(self.targets.clone())
    }
}

// ============================================================================
// SECTION: Loop Body
// ============================================================================

/// One reconcile pass for a URL-sourced dashboard.
///
/// Mirrors the loop shape the engine is designed for: normalize the resync
/// declaration, reuse the cache or fetch, apply only when the fingerprint
/// changed, then stamp the resync clock and persist status.
fn reconcile_url_pass(
    dashboard: &mut Dashboard,
    fetcher: &impl ContentFetcher,
    backend: &impl DashboardBackend,
    writer: &impl ResourceWriter,
    now: OffsetDateTime,
) -> Result<(), Box<dyn Error>> {
    if dashboard.normalize_resync_period() {
        writer.persist_spec(dashboard)?;
    }

    let url = dashboard.spec.source_url.clone().ok_or("spec has no source url")?;
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
    if !dashboard.unchanged(&hash) {
        backend.apply(&dashboard.id, &content)?;
        dashboard.status.content_hash = Some(hash);
    }

    dashboard.status.last_resync_time = Some(now);
    writer.persist_status(dashboard)?;
    Ok(())
}

/// Builds a URL-sourced dashboard with a ten minute cache TTL.
fn url_dashboard() -> Dashboard {
    let mut dashboard = Dashboard::new(ResourceId::new("monitoring", "cpu-usage"));
    dashboard.spec.source_url = Some("https://example.com/dashboards/cpu.json".to_string());
    dashboard.spec.cache_duration = Duration::minutes(10);
    dashboard
}

/// Instant the first pass runs at.
fn first_pass_at() -> OffsetDateTime {
    datetime!(2026-03-01 12:00:00 UTC)
}

// ============================================================================
// SECTION: Flow Scenarios
// ============================================================================

#[test]
fn first_pass_fetches_applies_and_records() {
    let fetcher = ScriptedFetcher::new(br#"{"title":"cpu"}"#);
    let backend = RecordingBackend::new();
    let writer = CountingWriter::new();
    let mut dashboard = url_dashboard();

    reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, first_pass_at())
        .expect("first pass");

    assert_eq!(fetcher.url_calls(), 1);
    assert_eq!(backend.apply_count(), 1);
    assert_eq!(writer.spec_writes.get(), 1, "Missing resync period is normalized and persisted");
    assert_eq!(writer.status_writes.get(), 1);
    assert_eq!(dashboard.spec.resync_period.as_deref(), Some("5m"));
    assert_eq!(dashboard.status.content_hash, Some(fingerprint(br#"{"title":"cpu"}"#)));
    assert_eq!(dashboard.status.last_resync_time, Some(first_pass_at()));
    assert_eq!(
        dashboard.cached_content(first_pass_at()).as_deref(),
        Some(br#"{"title":"cpu"}"#.as_slice())
    );
}

#[test]
fn second_pass_within_ttl_reuses_cache_and_skips_apply() {
    let fetcher = ScriptedFetcher::new(br#"{"title":"cpu"}"#);
    let backend = RecordingBackend::new();
    let writer = CountingWriter::new();
    let mut dashboard = url_dashboard();

    reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, first_pass_at())
        .expect("first pass");
    let second_at = first_pass_at() + Duration::minutes(5);
    reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, second_at)
        .expect("second pass");

    assert_eq!(fetcher.url_calls(), 1, "Valid cache must prevent a second fetch");
    assert_eq!(backend.apply_count(), 1, "Unchanged content must not be re-applied");
    assert_eq!(writer.spec_writes.get(), 1, "Normalization happens exactly once");
    assert_eq!(writer.status_writes.get(), 2);
    assert_eq!(dashboard.status.last_resync_time, Some(second_at));
}

#[test]
fn pass_after_ttl_refetches_but_skips_apply_when_unchanged() {
    let fetcher = ScriptedFetcher::new(br#"{"title":"cpu"}"#);
    let backend = RecordingBackend::new();
    let writer = CountingWriter::new();
    let mut dashboard = url_dashboard();

    reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, first_pass_at())
        .expect("first pass");
    let expired_at = first_pass_at() + Duration::minutes(20);
    reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, expired_at)
        .expect("pass after expiry");

    assert_eq!(fetcher.url_calls(), 2, "Expired cache must trigger a refetch");
    assert_eq!(backend.apply_count(), 1, "Identical refetched content is still unchanged");
}

#[test]
fn changed_content_is_reapplied_and_refingerprinted() {
    let fetcher = ScriptedFetcher::new(br#"{"title":"cpu"}"#);
    let backend = RecordingBackend::new();
    let writer = CountingWriter::new();
    let mut dashboard = url_dashboard();

    reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, first_pass_at())
        .expect("first pass");

    fetcher.set_body(br#"{"title":"cpu","rows":2}"#);
    let expired_at = first_pass_at() + Duration::minutes(20);
    reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, expired_at)
        .expect("pass after change");

    assert_eq!(backend.apply_count(), 2);
    assert_eq!(
        dashboard.status.content_hash,
        Some(fingerprint(br#"{"title":"cpu","rows":2}"#))
    );
    let applied = backend.applied.borrow();
    assert_eq!(applied[1].1, br#"{"title":"cpu","rows":2}"#.to_vec());
}

#[test]
fn resync_schedule_drives_idle_passes() {
    let fetcher = ScriptedFetcher::new(br#"{"title":"cpu"}"#);
    let backend = RecordingBackend::new();
    let writer = CountingWriter::new();
    let mut dashboard = url_dashboard();

    reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, first_pass_at())
        .expect("first pass");

    assert!(
        !dashboard.resync_due(first_pass_at() + Duration::minutes(4)),
        "Inside the default period nothing is due"
    );
    assert!(dashboard.resync_due(first_pass_at() + Duration::minutes(5) + Duration::seconds(1)));
}

#[test]
fn selector_outcome_is_recorded_on_status() {
    let nothing = StaticTargets {
        targets: Vec::new(),
    };
    let one_target = StaticTargets {
        targets: vec![ResourceId::new("monitoring", "grafana-main")],
    };
    let mut dashboard = url_dashboard();

    let targets = nothing.matching_targets(&dashboard).expect("resolve");
    dashboard.status.no_matching_targets = targets.is_empty();
    assert!(dashboard.status.no_matching_targets);

    let targets = one_target.matching_targets(&dashboard).expect("resolve");
    dashboard.status.no_matching_targets = targets.is_empty();
    assert!(!dashboard.status.no_matching_targets);
}

#[test]
fn template_source_expands_before_fingerprinting() {
    let backend = RecordingBackend::new();
    let expander = WrappingExpander;
    let mut dashboard = Dashboard::new(ResourceId::new("monitoring", "cpu-usage"));
    dashboard.spec.template_source = Some("cpu".to_string());

    let source = dashboard.spec.template_source.clone().expect("template source");
    let content = expander.expand(&source).expect("expand");
    let hash = fingerprint(&content);
    assert!(!dashboard.unchanged(&hash));

    backend.apply(&dashboard.id, &content).expect("apply");
    dashboard.status.content_hash = Some(hash.clone());

    assert!(dashboard.unchanged(&hash));
    assert_eq!(backend.apply_count(), 1);
}

#[test]
fn empty_template_source_fails_expansion() {
    let expander = WrappingExpander;
    let err = expander.expand("").unwrap_err();
    assert!(matches!(err, TemplateError::Expand(_)));
}

#[test]
fn catalog_fetch_errors_name_the_entry() {
    let fetcher = ScriptedFetcher::new(b"{}");
    let reference = CatalogReference {
        id: 1860,
        revision: None,
    };
    let err = fetcher.fetch_catalog(&reference).unwrap_err();
    assert!(err.to_string().contains("1860"), "Error text: {err}");
}

#[test]
fn missing_source_url_fails_the_pass() {
    let fetcher = ScriptedFetcher::new(b"{}");
    let backend = RecordingBackend::new();
    let writer = CountingWriter::new();
    let mut dashboard = Dashboard::new(ResourceId::new("monitoring", "cpu-usage"));

    let result = reconcile_url_pass(&mut dashboard, &fetcher, &backend, &writer, first_pass_at());
    assert!(result.is_err());
    assert_eq!(backend.apply_count(), 0);
}
