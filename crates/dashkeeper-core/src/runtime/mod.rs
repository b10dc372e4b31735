// crates/dashkeeper-core/src/runtime/mod.rs
// ============================================================================
// Module: Dashkeeper Runtime Decisions
// Description: Time-dependent freshness decisions over core resource data.
// Purpose: Answer cache and resync questions for the reconciliation loop.
// Dependencies: crate::core, humantime, time
// ============================================================================

//! ## Overview
//! Runtime decisions are pure functions over core data plus an explicit
//! `now`. Nothing in this module reads the wall clock, performs I/O, or
//! mutates a resource; the reconciliation loop owns scheduling and writes.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod cache;
pub mod resync;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use cache::cached_content;
pub use resync::DEFAULT_RESYNC_PERIOD;
pub use resync::EffectiveResyncPeriod;
pub use resync::effective_resync_period;
pub use resync::resync_due;
