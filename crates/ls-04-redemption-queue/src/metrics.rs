//! # Queue Metrics
//!
//! Enable with the `metrics` feature.

#[cfg(feature = "metrics")]
use staking_telemetry::metrics::{QUEUE_ALLOCATED_ETH, QUEUE_DEFICIT_ETH, QUEUE_REQUESTS};
#[cfg(feature = "metrics")]
use staking_telemetry::wei_to_ether;

use crate::domain::FundingLedger;

#[cfg(feature = "metrics")]
pub fn record_transition(action: &str, count: usize) {
    QUEUE_REQUESTS
        .with_label_values(&[action])
        .inc_by(count as f64);
}

#[cfg(feature = "metrics")]
pub fn record_funding(ledger: &FundingLedger) {
    QUEUE_ALLOCATED_ETH.set(wei_to_ether(ledger.allocated_for_claims));
    QUEUE_DEFICIT_ETH.set(wei_to_ether(ledger.deficit()));
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_transition(_action: &str, _count: usize) {}

#[cfg(not(feature = "metrics"))]
pub fn record_funding(_ledger: &FundingLedger) {}
