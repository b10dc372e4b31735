// crates/dashkeeper-core/src/runtime/resync.rs
// ============================================================================
// Module: Dashkeeper Resync Schedule
// Description: Resolution and evaluation of the periodic resync schedule.
// Purpose: Decide when a dashboard must be re-reconciled regardless of events.
// Dependencies: humantime, time
// ============================================================================

//! ## Overview
//! Every dashboard re-enters reconciliation periodically even when nothing
//! changed, so drift on the rendering target is repaired within one period.
//! The period is declared as a humantime expression; absent, empty, or
//! unparsable declarations resolve to [`DEFAULT_RESYNC_PERIOD`]. Resolution
//! never mutates the spec: it reports a normalization write-back the caller
//! may persist, separately from the resolved period itself.
//!
//! All evaluation takes `now` as an explicit argument; this module never
//! reads wall-clock time.

// ============================================================================
// SECTION: Imports
// ============================================================================

use time::Duration;
use time::OffsetDateTime;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default resync period applied when the declared value is absent or invalid.
pub const DEFAULT_RESYNC_PERIOD: &str = "5m";

// ============================================================================
// SECTION: Period Resolution
// ============================================================================

/// Effective resync period resolved from a declared spec value.
///
/// # Invariants
/// - `period` always holds a usable duration; resolution cannot fail.
/// - `normalized` is `Some` exactly when the declared value had to be
///   replaced with [`DEFAULT_RESYNC_PERIOD`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveResyncPeriod {
    /// Resolved period used for schedule evaluation.
    period: Duration,
    /// Replacement value the caller should persist into the spec, if any.
    normalized: Option<String>,
}

impl EffectiveResyncPeriod {
    /// Returns the resolved period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Returns the normalization write-back the caller should persist, if
    /// the declared value was absent or invalid.
    #[must_use]
    pub fn normalized(&self) -> Option<&str> {
        self.normalized.as_deref()
    }
}

/// Resolves the effective resync period from the declared spec value.
///
/// A missing, empty, or unparsable declaration resolves to
/// [`DEFAULT_RESYNC_PERIOD`] and carries the normalization write-back. The
/// default literal always parses, so resolution terminates in one step and
/// a persisted write-back never normalizes again.
#[must_use]
pub fn effective_resync_period(declared: Option<&str>) -> EffectiveResyncPeriod {
    let Some(declared) = declared else {
        return normalized_default();
    };
    if declared.is_empty() {
        return normalized_default();
    }
    parse_period(declared).map_or_else(normalized_default, |period| EffectiveResyncPeriod {
        period,
        normalized: None,
    })
}

// ============================================================================
// SECTION: Schedule Evaluation
// ============================================================================

/// Returns true when `now` is strictly past the last resync plus `period`.
///
/// A dashboard that never resynced is always due. Equality with the deadline
/// is not yet due. Deadlines past the representable time range never become
/// due.
#[must_use]
pub fn resync_due(
    last_resync: Option<OffsetDateTime>,
    period: Duration,
    now: OffsetDateTime,
) -> bool {
    let Some(last) = last_resync else {
        return true;
    };
    last.checked_add(period)
        .is_some_and(|deadline| now > deadline)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses a humantime expression into a signed duration value.
fn parse_period(declared: &str) -> Option<Duration> {
    let parsed = humantime::parse_duration(declared).ok()?;
    Duration::try_from(parsed).ok()
}

/// Builds the defaulted resolution carrying the normalization write-back.
fn normalized_default() -> EffectiveResyncPeriod {
    EffectiveResyncPeriod {
        period: Duration::minutes(5),
        normalized: Some(DEFAULT_RESYNC_PERIOD.to_string()),
    }
}
