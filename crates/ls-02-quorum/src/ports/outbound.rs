//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::QuorumResult;
use shared_types::{BlockNumber, OracleRecord};

/// Destination for records that reached quorum
pub trait RecordSink: Send + Sync {
    /// Hand the record over. An error is logged by the caller, never raised.
    fn receive_record(&self, record: OracleRecord) -> QuorumResult<()>;

    /// Whether a window ending at `block` was already committed or is pending
    fn has_received(&self, block: BlockNumber) -> bool;
}

/// Size of the authorized reporter set, read live
pub trait ReporterDirectory: Send + Sync {
    fn reporter_count(&self) -> u64;
}
