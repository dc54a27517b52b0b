//! Error types for the redemption queue

use shared_types::{AccessError, Amount};
use thiserror::Error;

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// No request was ever created with this id, or it was cancelled
    #[error("Request {id} not found")]
    RequestNotFound { id: RequestId },

    /// The request slot is a tombstone
    #[error("Request {id} already claimed")]
    AlreadyClaimed { id: RequestId },

    #[error("Request {id} belongs to another requester")]
    NotRequester { id: RequestId },

    /// The oracle horizon has not yet passed the request's finalization block
    #[error("Request {id} not finalized")]
    NotFinalized { id: RequestId },

    /// Allocation has not yet reached this request's cumulative offset
    #[error("Not enough funds allocated: request needs cumulative {cumulative}, allocated {allocated}")]
    NotEnoughFunds { cumulative: Amount, allocated: Amount },

    /// A share or value transfer port refused the operation
    #[error("Transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error(transparent)]
    Access(#[from] AccessError),
}

impl QueueError {
    /// Whether the same call may succeed later without any change by the caller
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            QueueError::NotEnoughFunds { .. }
                | QueueError::NotFinalized { .. }
                | QueueError::TransferFailed { .. }
        )
    }

    pub(crate) fn transfer(reason: impl Into<String>) -> Self {
        Self::TransferFailed {
            reason: reason.into(),
        }
    }
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
