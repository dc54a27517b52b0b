//! # Staking Metrics
//!
//! Enable with the `metrics` feature.

#[cfg(feature = "metrics")]
use staking_telemetry::metrics::{
    STAKING_STAKED_ETH, STAKING_TOTAL_CONTROLLED_ETH, STAKING_UNSTAKE_REQUESTS,
    STAKING_VALIDATORS_INITIATED, SUBSYSTEM_ERRORS,
};
#[cfg(feature = "metrics")]
use staking_telemetry::wei_to_ether;

use shared_types::Amount;

#[cfg(feature = "metrics")]
pub fn record_stake(value: Amount) {
    STAKING_STAKED_ETH.inc_by(wei_to_ether(value));
}

#[cfg(feature = "metrics")]
pub fn record_unstake_request() {
    STAKING_UNSTAKE_REQUESTS.inc();
}

#[cfg(feature = "metrics")]
pub fn record_validators_initiated(count: usize) {
    STAKING_VALIDATORS_INITIATED.inc_by(count as f64);
}

#[cfg(feature = "metrics")]
pub fn record_total_controlled(value: Amount) {
    STAKING_TOTAL_CONTROLLED_ETH.set(wei_to_ether(value));
}

#[cfg(feature = "metrics")]
pub fn record_error(error_type: &str) {
    SUBSYSTEM_ERRORS
        .with_label_values(&["ls-05", error_type])
        .inc();
}

// =============================================================================
// NO-OP IMPLEMENTATIONS (when metrics feature disabled)
// =============================================================================

#[cfg(not(feature = "metrics"))]
pub fn record_stake(_value: Amount) {}

#[cfg(not(feature = "metrics"))]
pub fn record_unstake_request() {}

#[cfg(not(feature = "metrics"))]
pub fn record_validators_initiated(_count: usize) {}

#[cfg(not(feature = "metrics"))]
pub fn record_total_controlled(_value: Amount) {}

#[cfg(not(feature = "metrics"))]
pub fn record_error(_error_type: &str) {}
