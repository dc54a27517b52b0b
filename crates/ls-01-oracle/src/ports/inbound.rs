//! Driving Ports (API - Inbound)

use crate::domain::{OracleState, SanityViolation};
use crate::error::OracleResult;
use crate::types::SanityConfig;
use shared_types::OracleRecord;

/// Result of a structurally valid `receive_record`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReceiveOutcome {
    /// Appended to the record log at `index`
    Committed { index: usize },
    /// Held back for review; the protocol pause has been requested
    Pending(SanityViolation),
}

impl ReceiveOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, ReceiveOutcome::Committed { .. })
    }
}

/// Primary Oracle API
///
/// Callers are already authorized; see `access::OracleAccessHandler`.
pub trait OracleApi: Send + Sync {
    /// Validate, sanity-check and either commit or pend a record
    ///
    /// Structural problems are errors and leave the state unchanged. A sanity
    /// violation is not an error: the record becomes pending and the call
    /// succeeds, so unattended automation can always invoke it.
    fn receive_record(&self, record: OracleRecord) -> OracleResult<ReceiveOutcome>;

    /// Commit the pending record. Returns its index.
    fn accept_pending_update(&self) -> OracleResult<usize>;

    /// Discard the pending record. Returns it.
    fn reject_pending_update(&self) -> OracleResult<OracleRecord>;

    /// Correct the payload of a committed record without moving its window
    fn modify_existing_record(&self, index: usize, record: OracleRecord) -> OracleResult<()>;

    fn latest_record(&self) -> OracleRecord;

    fn record_at(&self, index: usize) -> OracleResult<OracleRecord>;

    fn num_records(&self) -> usize;

    /// The pending record, or `NoPendingUpdate`
    fn pending_update(&self) -> OracleResult<OracleRecord>;

    fn has_pending_update(&self) -> bool;

    fn state(&self) -> OracleState;

    fn set_finalization_block_delta(&self, delta: u64) -> OracleResult<()>;

    fn finalization_block_delta(&self) -> u64;

    /// Replace every sanity bound at once; validated before applying
    fn set_sanity_config(&self, config: SanityConfig) -> OracleResult<()>;

    fn sanity_config(&self) -> SanityConfig;
}
