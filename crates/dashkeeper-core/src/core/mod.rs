// crates/dashkeeper-core/src/core/mod.rs
// ============================================================================
// Module: Dashkeeper Core Model
// Description: Resource model, identifiers, codec, and fingerprint primitives.
// Purpose: Define the declarative dashboard resource and its wire forms.
// Dependencies: base64, flate2, serde, sha2, thiserror, time
// ============================================================================

//! ## Overview
//! The core model covers everything a dashboard resource carries on the
//! wire: identity, desired spec, observed status, the gzip codec used for
//! compressed content, and the SHA-256 content fingerprint. Time-dependent
//! decisions over this data live in [`crate::runtime`].

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod codec;
pub mod fingerprint;
pub mod identifiers;
pub mod resource;
pub mod spec;
pub mod status;
pub(crate) mod wire;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use codec::CodecError;
pub use fingerprint::CONTENT_HASH_LEN;
pub use fingerprint::ContentHash;
pub use fingerprint::fingerprint;
pub use identifiers::DashboardName;
pub use identifiers::Namespace;
pub use identifiers::ResourceId;
pub use resource::Dashboard;
pub use resource::DashboardList;
pub use spec::CatalogReference;
pub use spec::DashboardSpec;
pub use spec::DatasourceMapping;
pub use spec::LabelSelector;
pub use spec::PluginReference;
pub use spec::SourceKind;
pub use status::DashboardStatus;
