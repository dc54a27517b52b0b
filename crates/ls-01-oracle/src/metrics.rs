//! # Oracle Metrics
//!
//! Enable with the `metrics` feature:
//! ```toml
//! ls-01-oracle = { path = "...", features = ["metrics"] }
//! ```
//!
//! The counters themselves are registered by `staking-telemetry`.

#[cfg(feature = "metrics")]
use staking_telemetry::metrics::{
    ORACLE_LATEST_END_BLOCK, ORACLE_PENDING_UPDATES, ORACLE_RECORDS_COMMITTED,
    ORACLE_RECORDS_REJECTED,
};

/// Record a committed record
#[cfg(feature = "metrics")]
pub fn record_committed(end_block: u64) {
    ORACLE_RECORDS_COMMITTED.inc();
    ORACLE_LATEST_END_BLOCK.set(end_block as f64);
}

/// Record a record held back for review
#[cfg(feature = "metrics")]
pub fn record_pending(reason: &str) {
    ORACLE_PENDING_UPDATES.with_label_values(&[reason]).inc();
}

/// Record a structural rejection
#[cfg(feature = "metrics")]
pub fn record_rejected(kind: &str) {
    ORACLE_RECORDS_REJECTED.with_label_values(&[kind]).inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_committed(_end_block: u64) {}

#[cfg(not(feature = "metrics"))]
pub fn record_pending(_reason: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_rejected(_kind: &str) {}
