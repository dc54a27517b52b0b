//! Driving Ports (API - Inbound)

use crate::error::QuorumResult;
use crate::types::QuorumConfig;
use shared_types::{Address, BlockNumber, Hash, OracleRecord};

/// Result of a single submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuorumOutcome {
    /// Thresholds not met for the submitted hash
    NoQuorum { count: u64, total_reporters: u64 },
    /// Quorum holds but the oracle already has this window
    AlreadyReceived,
    /// Forwarded and accepted by the oracle (committed or pending)
    Forwarded,
    /// Forwarded and refused by the oracle
    ForwardingFailed { reason: String },
}

/// Primary Quorum API
///
/// Callers are already authorized reporters; see `access::QuorumAccessHandler`.
pub trait QuorumApi: Send + Sync {
    /// Record the reporter's view of a window and forward it on quorum.
    ///
    /// Never fails because of the oracle.
    fn submit_report(&self, reporter: Address, record: OracleRecord) -> QuorumOutcome;

    fn record_hash_by_block_and_reporter(
        &self,
        block: BlockNumber,
        reporter: &Address,
    ) -> Option<Hash>;

    fn record_hash_count(&self, block: BlockNumber, hash: &Hash) -> u64;

    fn config(&self) -> QuorumConfig;

    /// Set both thresholds at once; validated before applying
    fn set_quorum_thresholds(&self, absolute: u16, relative_bps: u16) -> QuorumResult<()>;

    fn set_target_report_window_blocks(&self, blocks: u64) -> QuorumResult<()>;
}
