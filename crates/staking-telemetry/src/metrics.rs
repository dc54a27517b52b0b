//! Prometheus metrics for the liquid staking core.
//!
//! All metrics follow the naming convention: `ls_<subsystem>_<metric>_<unit>`.
//! Amounts are exported in ether as `f64`; the services keep exact wei.

use lazy_static::lazy_static;
use prometheus::{Counter, CounterVec, Encoder, Gauge, Opts, Registry, TextEncoder};
use std::sync::Arc;

use crate::TelemetryError;

const WEI_PER_ETHER: f64 = 1e18;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // ORACLE METRICS (Subsystem 1)
    // =========================================================================

    pub static ref ORACLE_RECORDS_COMMITTED: Counter = Counter::new(
        "ls_oracle_records_committed_total",
        "Total oracle records appended to the log"
    ).expect("metric creation failed");

    /// End block of the latest committed window
    pub static ref ORACLE_LATEST_END_BLOCK: Gauge = Gauge::new(
        "ls_oracle_latest_end_block",
        "End block of the latest committed oracle record"
    ).expect("metric creation failed");

    pub static ref ORACLE_PENDING_UPDATES: CounterVec = CounterVec::new(
        Opts::new("ls_oracle_pending_updates_total", "Records held back by sanity checks"),
        &["reason"]
    ).expect("metric creation failed");

    pub static ref ORACLE_RECORDS_REJECTED: CounterVec = CounterVec::new(
        Opts::new("ls_oracle_records_rejected_total", "Records rejected as malformed"),
        &["kind"]
    ).expect("metric creation failed");

    // =========================================================================
    // QUORUM METRICS (Subsystem 2)
    // =========================================================================

    pub static ref QUORUM_REPORTS_RECEIVED: Counter = Counter::new(
        "ls_quorum_reports_received_total",
        "Total reporter submissions accepted"
    ).expect("metric creation failed");

    pub static ref QUORUM_REACHED: Counter = Counter::new(
        "ls_quorum_reached_total",
        "Times a record reached quorum and was forwarded"
    ).expect("metric creation failed");

    /// Forwarding failures are swallowed by the aggregator, so alert on this
    pub static ref QUORUM_FORWARD_FAILURES: Counter = Counter::new(
        "ls_quorum_forward_failures_total",
        "Forwarded records the oracle refused"
    ).expect("metric creation failed");

    // =========================================================================
    // REDEMPTION QUEUE METRICS (Subsystem 4)
    // =========================================================================

    pub static ref QUEUE_REQUESTS: CounterVec = CounterVec::new(
        Opts::new("ls_queue_requests_total", "Redemption request lifecycle transitions"),
        &["action"]  // action: created/claimed/cancelled
    ).expect("metric creation failed");

    pub static ref QUEUE_ALLOCATED_ETH: Gauge = Gauge::new(
        "ls_queue_allocated_eth",
        "Cumulative value allocated to the redemption queue"
    ).expect("metric creation failed");

    pub static ref QUEUE_DEFICIT_ETH: Gauge = Gauge::new(
        "ls_queue_deficit_eth",
        "Value still needed to cover every outstanding request"
    ).expect("metric creation failed");

    // =========================================================================
    // STAKING METRICS (Subsystem 5)
    // =========================================================================

    pub static ref STAKING_STAKED_ETH: Counter = Counter::new(
        "ls_staking_staked_eth_total",
        "Total value staked by users"
    ).expect("metric creation failed");

    pub static ref STAKING_UNSTAKE_REQUESTS: Counter = Counter::new(
        "ls_staking_unstake_requests_total",
        "Total unstake requests opened"
    ).expect("metric creation failed");

    pub static ref STAKING_VALIDATORS_INITIATED: Counter = Counter::new(
        "ls_staking_validators_initiated_total",
        "Total validators funded"
    ).expect("metric creation failed");

    pub static ref STAKING_TOTAL_CONTROLLED_ETH: Gauge = Gauge::new(
        "ls_staking_total_controlled_eth",
        "Total value controlled by the protocol"
    ).expect("metric creation failed");

    // =========================================================================
    // ERROR METRICS
    // =========================================================================

    /// Errors by subsystem and type
    pub static ref SUBSYSTEM_ERRORS: CounterVec = CounterVec::new(
        Opts::new("ls_subsystem_errors_total", "Errors by subsystem and type"),
        &["subsystem", "error_type"]
    ).expect("metric creation failed");
}

/// Handle returned by `register_metrics`
pub struct MetricsHandle {
    _registry: Arc<Registry>,
}

/// Register all metrics with the global registry.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Oracle
        Box::new(ORACLE_RECORDS_COMMITTED.clone()),
        Box::new(ORACLE_LATEST_END_BLOCK.clone()),
        Box::new(ORACLE_PENDING_UPDATES.clone()),
        Box::new(ORACLE_RECORDS_REJECTED.clone()),
        // Quorum
        Box::new(QUORUM_REPORTS_RECEIVED.clone()),
        Box::new(QUORUM_REACHED.clone()),
        Box::new(QUORUM_FORWARD_FAILURES.clone()),
        // Queue
        Box::new(QUEUE_REQUESTS.clone()),
        Box::new(QUEUE_ALLOCATED_ETH.clone()),
        Box::new(QUEUE_DEFICIT_ETH.clone()),
        // Staking
        Box::new(STAKING_STAKED_ETH.clone()),
        Box::new(STAKING_UNSTAKE_REQUESTS.clone()),
        Box::new(STAKING_VALIDATORS_INITIATED.clone()),
        Box::new(STAKING_TOTAL_CONTROLLED_ETH.clone()),
        // Errors
        Box::new(SUBSYSTEM_ERRORS.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        _registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Lossy wei to ether conversion for gauges
pub fn wei_to_ether(wei: u128) -> f64 {
    wei as f64 / WEI_PER_ETHER
}
