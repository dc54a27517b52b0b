//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::OracleResult;
use shared_types::Amount;

/// Local deposit and validator counters
///
/// Implemented by the staking ledger. Structural validation rejects records
/// that claim more deposits or validators than were ever sent.
pub trait DepositCounters: Send + Sync {
    /// Total value deposited into remote-chain validators
    fn total_deposited(&self) -> Amount;

    /// Number of validators ever initiated
    fn num_initiated_validators(&self) -> u64;
}

/// Protocol-wide pause signal
///
/// Raised when a record fails sanity checks. Must not fail: the record is
/// already stored as pending when this is called. Called with the oracle
/// state locked, so it must not read the oracle back.
pub trait PauseSink: Send + Sync {
    fn request_pause_all(&self);
}

/// Withdrawn amounts forwarded out of a committed window
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WindowReturns {
    pub reward_amount: Amount,
    pub principal_amount: Amount,
    /// Whether execution-layer rewards should be swept alongside
    pub include_external_rewards: bool,
}

impl WindowReturns {
    pub fn is_empty(&self) -> bool {
        self.reward_amount == 0 && self.principal_amount == 0
    }
}

/// Return-aggregation sink
///
/// An error aborts the commit that triggered it; the oracle reverts its own
/// state before surfacing the error. Called with the oracle state locked,
/// so implementations must not call back into the oracle.
pub trait ReturnsSink: Send + Sync {
    fn process_returns(&self, returns: WindowReturns) -> OracleResult<()>;
}
