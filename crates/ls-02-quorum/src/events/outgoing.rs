//! Outgoing events for Quorum subsystem

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber, Hash, OracleRecord};

/// Audit trail of reporter activity
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuorumEvent {
    /// Emitted for every submission, including unchanged resubmissions
    ReportReceived {
        block: BlockNumber,
        reporter: Address,
        hash: Hash,
        record: OracleRecord,
    },
    /// A hash reached quorum and is being forwarded
    QuorumReached { block: BlockNumber, hash: Hash },
    /// The oracle refused the forwarded record
    ForwardingFailed {
        block: BlockNumber,
        hash: Hash,
        reason: String,
    },
    /// A configuration value changed
    ConfigurationChanged { setting: String, value: u64 },
}
