// crates/dashkeeper-core/src/core/spec.rs
// ============================================================================
// Module: Dashkeeper Dashboard Spec
// Description: Desired-state declaration for a dashboard resource.
// Purpose: Model content sources, import wiring, and freshness policy.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! The spec declares where dashboard content comes from and how it is wired
//! into rendering targets. Five source kinds exist: inline JSON, compressed
//! inline JSON, a remote URL, a templating-language source, and a catalog
//! reference. Any subset may be populated at once; [`DashboardSpec::source_kinds`]
//! lists the populated kinds in a fixed order and leaves choosing among them
//! to the fetch collaborator.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use time::Duration;

use crate::core::wire;

// ============================================================================
// SECTION: Source Kinds
// ============================================================================

/// Content source kinds a dashboard spec may declare.
///
/// # Invariants
/// - Variant order is the fixed listing order of [`DashboardSpec::source_kinds`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Inline JSON declared directly on the spec.
    RawJson,
    /// Inline JSON compressed as a gzip stream.
    GzipJson,
    /// Content fetched from a remote URL.
    Url,
    /// Templating-language source requiring expansion before use.
    Template,
    /// Reference into a named external catalog.
    Catalog,
}

impl SourceKind {
    /// Returns the stable wire name of the source kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RawJson => "raw_json",
            Self::GzipJson => "gzip_json",
            Self::Url => "url",
            Self::Template => "template",
            Self::Catalog => "catalog",
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Import Wiring
// ============================================================================

/// Reference to a dashboard entry in an external catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogReference {
    /// Catalog entry identifier.
    pub id: u32,
    /// Pinned entry revision; the latest revision when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<u32>,
}

/// Label selector declaring which rendering targets import the dashboard.
///
/// Evaluation is owned by the selector collaborator; this type only carries
/// the declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSelector {
    /// Labels a target must carry, all of them, to match.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_labels: BTreeMap<String, String>,
}

/// Plugin the dashboard depends on at a pinned version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginReference {
    /// Plugin name as known to the rendering target.
    pub name: String,
    /// Exact plugin version to install.
    pub version: String,
}

/// Mapping from a datasource input required by the content to a concrete
/// datasource on the rendering target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceMapping {
    /// Input name the dashboard content requires.
    pub input_name: String,
    /// Concrete datasource name to substitute.
    pub datasource_name: String,
}

// ============================================================================
// SECTION: Dashboard Spec
// ============================================================================

/// Desired state of a dashboard resource.
///
/// # Invariants
/// - Any subset of the five source fields may be populated simultaneously.
/// - A non-positive `cache_duration` disables time expiry for URL caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSpec {
    /// Inline dashboard JSON.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
    /// Gzip-compressed inline content, base64-encoded on the wire.
    #[serde(
        default,
        with = "wire::opt_base64_bytes",
        skip_serializing_if = "Option::is_none"
    )]
    pub compressed_content: Option<Vec<u8>>,
    /// Remote origin for URL-sourced content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Templating-language source requiring expansion before use.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_source: Option<String>,
    /// Reference into a named external catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_reference: Option<CatalogReference>,
    /// Selects the rendering targets that import this dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_selector: Option<LabelSelector>,
    /// Folder the dashboard is filed under on rendering targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,
    /// Plugins the dashboard content depends on.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<PluginReference>,
    /// Datasource inputs mapped to concrete datasources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasources: Vec<DatasourceMapping>,
    /// Time-to-live for cached URL content; non-positive disables expiry.
    #[serde(default = "default_cache_duration", with = "wire::signed_duration")]
    pub cache_duration: Duration,
    /// Declared resync period; absent or invalid values resolve to the
    /// default at read time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resync_period: Option<String>,
    /// Permits import into rendering targets outside the resource namespace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_cross_namespace_import: Option<bool>,
}

impl DashboardSpec {
    /// Lists the populated source kinds in fixed declaration order.
    ///
    /// Empty strings and empty byte sequences count as not populated. The
    /// order is always raw JSON, compressed JSON, URL, template, catalog;
    /// choosing the effective source among several populated kinds is the
    /// fetch collaborator's policy.
    #[must_use]
    pub fn source_kinds(&self) -> Vec<SourceKind> {
        let mut kinds = Vec::new();
        if self.raw_content.as_deref().is_some_and(|content| !content.is_empty()) {
            kinds.push(SourceKind::RawJson);
        }
        if self
            .compressed_content
            .as_deref()
            .is_some_and(|content| !content.is_empty())
        {
            kinds.push(SourceKind::GzipJson);
        }
        if self.source_url.as_deref().is_some_and(|url| !url.is_empty()) {
            kinds.push(SourceKind::Url);
        }
        if self
            .template_source
            .as_deref()
            .is_some_and(|source| !source.is_empty())
        {
            kinds.push(SourceKind::Template);
        }
        if self.catalog_reference.is_some() {
            kinds.push(SourceKind::Catalog);
        }
        kinds
    }
}

impl Default for DashboardSpec {
    fn default() -> Self {
        Self {
            raw_content: None,
            compressed_content: None,
            source_url: None,
            template_source: None,
            catalog_reference: None,
            instance_selector: None,
            folder_title: None,
            plugins: Vec::new(),
            datasources: Vec::new(),
            cache_duration: Duration::ZERO,
            resync_period: None,
            allow_cross_namespace_import: None,
        }
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default cache TTL applied when the field is absent from the wire form.
const fn default_cache_duration() -> Duration {
    Duration::ZERO
}
