// crates/dashkeeper-core/src/interfaces/mod.rs
// ============================================================================
// Module: Dashkeeper Interfaces
// Description: Backend-agnostic interfaces for fetching, rendering, and persistence.
// Purpose: Define the contract surfaces a reconciliation loop composes around the core.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The core never performs I/O; everything that touches the outside world
//! sits behind these traits. A reconciliation loop wires them together:
//! fetchers produce content bytes, expanders render templating-language
//! sources, backends apply content to rendering targets, resolvers evaluate
//! selectors, and writers persist resource mutations.
//!
//! Implementations decide their own retry policy; the loop treats every
//! error as a failed pass and re-enters on the next event or resync.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::ResourceId;
use crate::core::resource::Dashboard;
use crate::core::spec::CatalogReference;

// ============================================================================
// SECTION: Content Fetcher
// ============================================================================

/// Content fetch errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Remote URL fetch failed.
    #[error("url fetch failed: {0}")]
    Url(String),
    /// Catalog entry lookup failed.
    #[error("catalog lookup failed: {0}")]
    Catalog(String),
}

/// Retrieves remote dashboard content.
///
/// When several source kinds are populated at once, choosing among them is
/// the implementation's policy; the core only reports what is populated.
pub trait ContentFetcher {
    /// Fetches the content bytes behind a URL source.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the fetch fails.
    fn fetch_url(&self, url: &str) -> Result<Vec<u8>, FetchError>;

    /// Fetches the content bytes for a catalog reference.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the lookup fails.
    fn fetch_catalog(&self, reference: &CatalogReference) -> Result<Vec<u8>, FetchError>;
}

// ============================================================================
// SECTION: Template Expander
// ============================================================================

/// Template expansion errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template source failed to expand.
    #[error("template expansion failed: {0}")]
    Expand(String),
}

/// Expands a templating-language source into dashboard content bytes.
pub trait TemplateExpander {
    /// Expands the source into the content bytes handed to the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] when expansion fails.
    fn expand(&self, source: &str) -> Result<Vec<u8>, TemplateError>;
}

// ============================================================================
// SECTION: Dashboard Backend
// ============================================================================

/// Rendering backend errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Applying content to the rendering target failed.
    #[error("backend apply failed: {0}")]
    Apply(String),
    /// Removing the dashboard from the rendering target failed.
    #[error("backend remove failed: {0}")]
    Remove(String),
}

/// Applies dashboard content to a rendering target.
pub trait DashboardBackend {
    /// Creates or updates the dashboard on the rendering target.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the apply fails.
    fn apply(&self, id: &ResourceId, content: &[u8]) -> Result<(), BackendError>;

    /// Removes the dashboard from the rendering target.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when the removal fails.
    fn remove(&self, id: &ResourceId) -> Result<(), BackendError>;
}

// ============================================================================
// SECTION: Target Resolver
// ============================================================================

/// Target resolution errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum TargetError {
    /// Selector evaluation failed.
    #[error("target resolution failed: {0}")]
    Resolve(String),
}

/// Evaluates the instance selector against known rendering targets.
pub trait TargetResolver {
    /// Resolves the rendering targets the dashboard should be imported
    /// into, honoring the cross-namespace import flag.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError`] when selector evaluation fails.
    fn matching_targets(&self, dashboard: &Dashboard) -> Result<Vec<ResourceId>, TargetError>;
}

// ============================================================================
// SECTION: Resource Writer
// ============================================================================

/// Resource persistence errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Writing the resource failed.
    #[error("resource write failed: {0}")]
    Write(String),
    /// The resource changed underneath the writer.
    #[error("resource version conflict: {0}")]
    Conflict(String),
}

/// Persists dashboard resource mutations.
///
/// Spec and status writes are separate so a normalization write-back never
/// races a status update.
pub trait ResourceWriter {
    /// Persists the desired-state half of the resource.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when the write fails.
    fn persist_spec(&self, dashboard: &Dashboard) -> Result<(), PersistError>;

    /// Persists the observed-state half of the resource.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError`] when the write fails.
    fn persist_status(&self, dashboard: &Dashboard) -> Result<(), PersistError>;
}
