//! Error types for the Oracle subsystem
//!
//! Every variant here is a structural rejection: the call is aborted and no
//! state changes. Records that are well-formed but implausible are never
//! errors; they become a pending update instead.

use shared_types::{AccessError, Amount, BlockNumber};
use thiserror::Error;

/// Oracle subsystem errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// A pending update must be accepted or rejected first
    #[error("Cannot receive a record while an update is pending resolution")]
    UpdatePending,

    /// Accept/reject called with nothing pending
    #[error("No update is pending")]
    NoPendingUpdate,

    /// Window end is not after window start
    #[error("Invalid window: end block {end} is not after start block {start}")]
    InvalidWindow { start: BlockNumber, end: BlockNumber },

    /// Window does not start right after the previous record
    #[error("Invalid start block: expected {expected}, got {actual}")]
    InvalidStartBlock {
        expected: BlockNumber,
        actual: BlockNumber,
    },

    /// Remote chain processed more deposits than were ever sent
    #[error("More deposits processed ({processed}) than sent ({sent})")]
    MoreDepositsProcessedThanSent { processed: Amount, sent: Amount },

    /// Remote chain reports more validators than were ever initiated
    #[error("More validators reported ({reported}) than initiated ({initiated})")]
    MoreValidatorsThanInitiated { reported: u64, initiated: u64 },

    /// Window end is not yet behind the finality horizon
    #[error("Window end block not final: finalizes at {finalizing_block}, current height {current_height}")]
    WindowNotFinal {
        finalizing_block: BlockNumber,
        current_height: BlockNumber,
    },

    /// The bootstrap record is immutable
    #[error("Cannot modify the initial record")]
    CannotModifyInitialRecord,

    /// Index past the end of the record log
    #[error("Record not found: index {index}")]
    RecordNotFound { index: usize },

    /// A correction tried to move the window bounds
    #[error("Invalid record modification: window bounds must not change")]
    InvalidRecordModification,

    /// Setter rejected an out-of-range value
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The returns sink refused the forwarded amounts
    #[error("Returns forwarding failed: {reason}")]
    ReturnsForwardingFailed { reason: String },

    /// Caller lacks the role for this entry point
    #[error(transparent)]
    Access(#[from] AccessError),
}

impl OracleError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Stable label for metrics
    pub fn label(&self) -> &'static str {
        match self {
            OracleError::UpdatePending => "update_pending",
            OracleError::NoPendingUpdate => "no_pending_update",
            OracleError::InvalidWindow { .. } => "invalid_window",
            OracleError::InvalidStartBlock { .. } => "invalid_start_block",
            OracleError::MoreDepositsProcessedThanSent { .. } => "more_deposits_than_sent",
            OracleError::MoreValidatorsThanInitiated { .. } => "more_validators_than_initiated",
            OracleError::WindowNotFinal { .. } => "window_not_final",
            OracleError::CannotModifyInitialRecord => "cannot_modify_initial",
            OracleError::RecordNotFound { .. } => "record_not_found",
            OracleError::InvalidRecordModification => "invalid_modification",
            OracleError::InvalidConfiguration { .. } => "invalid_configuration",
            OracleError::ReturnsForwardingFailed { .. } => "returns_forwarding_failed",
            OracleError::Access(_) => "unauthorized",
        }
    }
}

/// Result type for oracle operations
pub type OracleResult<T> = Result<T, OracleError>;
