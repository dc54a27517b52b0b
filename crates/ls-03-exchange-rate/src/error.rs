//! Error types for the exchange-rate engine

use shared_types::Amount;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    /// Shares exist but nothing backs them
    #[error("Total controlled value is zero while share supply is {supply}")]
    ZeroControlledValue { supply: Amount },

    /// Setter rejected an out-of-range value
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },
}

/// Result type for rate operations
pub type RateResult<T> = Result<T, RateError>;
