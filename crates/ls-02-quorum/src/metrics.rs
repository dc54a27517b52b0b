//! # Quorum Metrics
//!
//! Enable with the `metrics` feature.

#[cfg(feature = "metrics")]
use staking_telemetry::metrics::{QUORUM_FORWARD_FAILURES, QUORUM_REACHED, QUORUM_REPORTS_RECEIVED};

#[cfg(feature = "metrics")]
pub fn record_report() {
    QUORUM_REPORTS_RECEIVED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_quorum_reached() {
    QUORUM_REACHED.inc();
}

#[cfg(feature = "metrics")]
pub fn record_forward_failure() {
    QUORUM_FORWARD_FAILURES.inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_report() {}

#[cfg(not(feature = "metrics"))]
pub fn record_quorum_reached() {}

#[cfg(not(feature = "metrics"))]
pub fn record_forward_failure() {}
