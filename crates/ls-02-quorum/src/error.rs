//! Error types for the Quorum subsystem

use shared_types::AccessError;
use thiserror::Error;

/// Quorum subsystem errors
///
/// Submissions themselves never fail because of the oracle: a refused
/// forward is reported in the outcome, not as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuorumError {
    /// Setter rejected an out-of-range value
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// The oracle refused a forwarded record
    #[error("Oracle rejected forwarded record: {reason}")]
    ForwardingRejected { reason: String },

    /// Caller lacks the role for this entry point
    #[error(transparent)]
    Access(#[from] AccessError),
}

impl QuorumError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result type for quorum operations
pub type QuorumResult<T> = Result<T, QuorumError>;
