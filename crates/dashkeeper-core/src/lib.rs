// crates/dashkeeper-core/src/lib.rs
// ============================================================================
// Module: Dashkeeper Core Library
// Description: Declarative dashboard resources and the content freshness engine.
// Purpose: Give a reconciliation loop the decisions it needs to keep dashboards fresh.
// Dependencies: base64, flate2, humantime, serde, sha2, thiserror, time
// ============================================================================

//! ## Overview
//! Dashkeeper Core defines the [`Dashboard`] resource (desired spec plus
//! observed status) and the freshness decisions an external reconciliation
//! loop asks each pass: which content sources are declared, whether cached
//! URL content is still usable, whether fetched content actually changed,
//! and whether a periodic resync is due.
//! Invariants:
//! - The core performs no I/O and never reads wall-clock time; callers pass
//!   `now` explicitly.
//! - Cache misses and malformed freshness configuration degrade to safe
//!   defaults instead of surfacing errors.
//!
//! Collaborators that touch the outside world (fetching, template
//! expansion, rendering backends, selector evaluation, persistence) sit
//! behind the traits in [`interfaces`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::codec;
pub use crate::core::codec::CodecError;
pub use crate::core::fingerprint::CONTENT_HASH_LEN;
pub use crate::core::fingerprint::ContentHash;
pub use crate::core::fingerprint::fingerprint;
pub use crate::core::identifiers::DashboardName;
pub use crate::core::identifiers::Namespace;
pub use crate::core::identifiers::ResourceId;
pub use crate::core::resource::Dashboard;
pub use crate::core::resource::DashboardList;
pub use crate::core::spec::CatalogReference;
pub use crate::core::spec::DashboardSpec;
pub use crate::core::spec::DatasourceMapping;
pub use crate::core::spec::LabelSelector;
pub use crate::core::spec::PluginReference;
pub use crate::core::spec::SourceKind;
pub use crate::core::status::DashboardStatus;
pub use crate::interfaces::BackendError;
pub use crate::interfaces::ContentFetcher;
pub use crate::interfaces::DashboardBackend;
pub use crate::interfaces::FetchError;
pub use crate::interfaces::PersistError;
pub use crate::interfaces::ResourceWriter;
pub use crate::interfaces::TargetError;
pub use crate::interfaces::TargetResolver;
pub use crate::interfaces::TemplateError;
pub use crate::interfaces::TemplateExpander;
pub use crate::runtime::cache::cached_content;
pub use crate::runtime::resync::DEFAULT_RESYNC_PERIOD;
pub use crate::runtime::resync::EffectiveResyncPeriod;
pub use crate::runtime::resync::effective_resync_period;
pub use crate::runtime::resync::resync_due;
