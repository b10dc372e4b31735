// crates/dashkeeper-core/tests/source_kinds.rs
// ============================================================================
// Module: Source Kind Listing Tests
// Description: Verifies population rules and listing order for content sources.
// ============================================================================
//! ## Overview
//! Ensures the spec reports populated source kinds in the fixed declaration
//! order, that empty strings and empty byte sequences count as not
//! populated, and that multiple kinds may be populated at once.

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

use dashkeeper_core::CatalogReference;
use dashkeeper_core::Dashboard;
use dashkeeper_core::DashboardSpec;
use dashkeeper_core::ResourceId;
use dashkeeper_core::SourceKind;
use dashkeeper_core::codec;

// ============================================================================
// SECTION: Population Rules
// ============================================================================

#[test]
fn empty_spec_lists_no_sources() {
    let spec = DashboardSpec::default();
    assert!(spec.source_kinds().is_empty());
}

#[test]
fn raw_content_populates_raw_json() {
    let spec = DashboardSpec {
        raw_content: Some(r#"{"title":"cpu"}"#.to_string()),
        ..DashboardSpec::default()
    };
    assert_eq!(spec.source_kinds(), vec![SourceKind::RawJson]);
}

#[test]
fn compressed_content_populates_gzip_json() {
    let compressed = codec::gzip(br#"{"title":"cpu"}"#).expect("gzip");
    let spec = DashboardSpec {
        compressed_content: Some(compressed),
        ..DashboardSpec::default()
    };
    assert_eq!(spec.source_kinds(), vec![SourceKind::GzipJson]);
}

#[test]
fn source_url_populates_url() {
    let spec = DashboardSpec {
        source_url: Some("https://example.com/dashboards/cpu.json".to_string()),
        ..DashboardSpec::default()
    };
    assert_eq!(spec.source_kinds(), vec![SourceKind::Url]);
}

#[test]
fn template_source_populates_template() {
    let spec = DashboardSpec {
        template_source: Some("local dashboard = {};\ndashboard".to_string()),
        ..DashboardSpec::default()
    };
    assert_eq!(spec.source_kinds(), vec![SourceKind::Template]);
}

#[test]
fn catalog_reference_populates_catalog() {
    let spec = DashboardSpec {
        catalog_reference: Some(CatalogReference {
            id: 1860,
            revision: Some(37),
        }),
        ..DashboardSpec::default()
    };
    assert_eq!(spec.source_kinds(), vec![SourceKind::Catalog]);
}

#[test]
fn empty_string_counts_as_not_populated() {
    let spec = DashboardSpec {
        raw_content: Some(String::new()),
        source_url: Some(String::new()),
        template_source: Some(String::new()),
        ..DashboardSpec::default()
    };
    assert!(spec.source_kinds().is_empty(), "Empty strings are not populated sources");
}

#[test]
fn empty_bytes_count_as_not_populated() {
    let spec = DashboardSpec {
        compressed_content: Some(Vec::new()),
        ..DashboardSpec::default()
    };
    assert!(spec.source_kinds().is_empty(), "Empty byte sequences are not populated sources");
}

// ============================================================================
// SECTION: Listing Order
// ============================================================================

#[test]
fn all_populated_lists_fixed_order() {
    let spec = DashboardSpec {
        raw_content: Some("{}".to_string()),
        compressed_content: Some(codec::gzip(b"{}").expect("gzip")),
        source_url: Some("https://example.com/d.json".to_string()),
        template_source: Some("{}".to_string()),
        catalog_reference: Some(CatalogReference {
            id: 1,
            revision: None,
        }),
        ..DashboardSpec::default()
    };
    assert_eq!(
        spec.source_kinds(),
        vec![
            SourceKind::RawJson,
            SourceKind::GzipJson,
            SourceKind::Url,
            SourceKind::Template,
            SourceKind::Catalog,
        ],
        "Listing order is fixed regardless of population pattern"
    );
}

#[test]
fn subset_preserves_fixed_order() {
    let spec = DashboardSpec {
        source_url: Some("https://example.com/d.json".to_string()),
        catalog_reference: Some(CatalogReference {
            id: 42,
            revision: None,
        }),
        ..DashboardSpec::default()
    };
    assert_eq!(spec.source_kinds(), vec![SourceKind::Url, SourceKind::Catalog]);

    let spec = DashboardSpec {
        raw_content: Some("{}".to_string()),
        template_source: Some("{}".to_string()),
        ..DashboardSpec::default()
    };
    assert_eq!(spec.source_kinds(), vec![SourceKind::RawJson, SourceKind::Template]);
}

#[test]
fn dashboard_delegates_to_spec() {
    let mut dashboard = Dashboard::new(ResourceId::new("monitoring", "cpu-usage"));
    dashboard.spec.raw_content = Some("{}".to_string());
    assert_eq!(dashboard.source_kinds(), dashboard.spec.source_kinds());
}

// ============================================================================
// SECTION: Kind Naming
// ============================================================================

#[test]
fn source_kind_names_are_stable() {
    assert_eq!(SourceKind::RawJson.as_str(), "raw_json");
    assert_eq!(SourceKind::GzipJson.as_str(), "gzip_json");
    assert_eq!(SourceKind::Url.as_str(), "url");
    assert_eq!(SourceKind::Template.as_str(), "template");
    assert_eq!(SourceKind::Catalog.as_str(), "catalog");
    assert_eq!(SourceKind::Url.to_string(), "url");
}
