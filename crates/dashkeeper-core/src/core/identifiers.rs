// crates/dashkeeper-core/src/core/identifiers.rs
// ============================================================================
// Module: Dashkeeper Identifiers
// Description: Canonical opaque identifiers for dashboard resources.
// Purpose: Provide strongly typed, serializable identifiers with stable wire forms.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! This module defines the identifiers used to address dashboard resources.
//! A resource is identified by the pair of namespace and name; both parts are
//! opaque strings and identity comparison is exact string equality. No
//! normalization or validation is applied by these types.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Identifier Types
// ============================================================================

/// Namespace a dashboard resource lives in.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Namespace(String);

impl Namespace {
    /// Creates a new namespace identifier.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self(namespace.into())
    }

    /// Returns the namespace as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Namespace {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Namespace {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Dashboard resource name, unique within a namespace.
///
/// # Invariants
/// - Opaque UTF-8 string; no normalization or validation is applied by this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardName(String);

impl DashboardName {
    /// Creates a new dashboard name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DashboardName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DashboardName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DashboardName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Composite Identity
// ============================================================================

/// Composite identity of a dashboard resource.
///
/// # Invariants
/// - Identity comparison is exact string equality on both parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId {
    /// Namespace the resource lives in.
    pub namespace: Namespace,
    /// Resource name, unique within the namespace.
    pub name: DashboardName,
}

impl ResourceId {
    /// Creates a resource identity from a namespace and a name.
    #[must_use]
    pub fn new(namespace: impl Into<Namespace>, name: impl Into<DashboardName>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}
