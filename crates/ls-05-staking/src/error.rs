//! Error types for the staking entry points

use ls_03_exchange_rate::RateError;
use ls_04_redemption_queue::QueueError;
use shared_types::{AccessError, Amount};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StakingError {
    #[error("Staking is paused")]
    Paused,

    #[error("Stake of {value} below minimum {minimum}")]
    MinimumStakeBoundNotSatisfied { value: Amount, minimum: Amount },

    /// Slippage protection on stake
    #[error("Stake would mint {shares} shares, below requested minimum {minimum}")]
    StakeBelowMinimumShares { shares: Amount, minimum: Amount },

    #[error("Share supply would reach {supply}, above maximum {maximum}")]
    MaximumSupplyExceeded { supply: Amount, maximum: Amount },

    #[error("Unstake of {shares} shares below minimum {minimum}")]
    MinimumUnstakeBoundNotSatisfied { shares: Amount, minimum: Amount },

    /// Slippage protection on unstake
    #[error("Unstake would return {value}, below requested minimum {minimum}")]
    UnstakeBelowMinimumValue { value: Amount, minimum: Amount },

    #[error("Not enough unallocated value: requested {requested}, available {available}")]
    NotEnoughUnallocated { requested: Amount, available: Amount },

    #[error("Not enough value allocated for deposits: requested {requested}, allocated {allocated}")]
    NotEnoughDepositValue { requested: Amount, allocated: Amount },

    #[error("Validator deposit {amount} outside [{minimum}, {maximum}]")]
    InvalidDepositAmount {
        amount: Amount,
        minimum: Amount,
        maximum: Amount,
    },

    #[error("Validator 0x{pubkey} was already initiated")]
    PreviouslyUsedValidator { pubkey: String },

    #[error("Insufficient shares: balance {balance}, needed {needed}")]
    InsufficientShares { balance: Amount, needed: Amount },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error(transparent)]
    Rate(#[from] RateError),

    #[error(transparent)]
    Queue(#[from] QueueError),

    #[error(transparent)]
    Access(#[from] AccessError),
}

impl StakingError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Stable label for metrics
    pub fn label(&self) -> &'static str {
        match self {
            StakingError::Paused => "paused",
            StakingError::MinimumStakeBoundNotSatisfied { .. } => "minimum_stake",
            StakingError::StakeBelowMinimumShares { .. } => "stake_slippage",
            StakingError::MaximumSupplyExceeded { .. } => "maximum_supply",
            StakingError::MinimumUnstakeBoundNotSatisfied { .. } => "minimum_unstake",
            StakingError::UnstakeBelowMinimumValue { .. } => "unstake_slippage",
            StakingError::NotEnoughUnallocated { .. } => "not_enough_unallocated",
            StakingError::NotEnoughDepositValue { .. } => "not_enough_deposit_value",
            StakingError::InvalidDepositAmount { .. } => "invalid_deposit_amount",
            StakingError::PreviouslyUsedValidator { .. } => "previously_used_validator",
            StakingError::InsufficientShares { .. } => "insufficient_shares",
            StakingError::InvalidConfiguration { .. } => "invalid_configuration",
            StakingError::Rate(_) => "rate",
            StakingError::Queue(_) => "queue",
            StakingError::Access(_) => "unauthorized",
        }
    }
}

pub type StakingResult<T> = Result<T, StakingError>;
