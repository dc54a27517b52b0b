//! Driven Ports (SPI - Outbound Dependencies)
//!
//! Each call must be all-or-nothing: an `Err` means nothing moved. The queue
//! calls these with its state locked, so implementations must not call back
//! into the queue.

use crate::error::QueueResult;
use shared_types::{Address, Amount, BlockNumber};

/// End block of the oracle's latest committed record
pub trait OracleHorizon: Send + Sync {
    fn latest_end_block(&self) -> BlockNumber;
}

/// Share escrow held by the queue
pub trait ShareEscrow: Send + Sync {
    /// Burn shares locked by a claimed request
    fn burn(&self, amount: Amount) -> QueueResult<()>;

    /// Return locked shares to the requester of a cancelled request
    fn transfer_shares(&self, to: &Address, amount: Amount) -> QueueResult<()>;

    /// Re-issue shares burned by a claim whose payout failed
    fn restore(&self, amount: Amount) -> QueueResult<()>;
}

/// Pays claimed value out to requesters
pub trait ValueTransfer: Send + Sync {
    fn send_value(&self, to: &Address, amount: Amount) -> QueueResult<()>;
}

/// Takes allocated surplus back (the staking ledger)
pub trait SurplusReceiver: Send + Sync {
    fn receive_surplus(&self, amount: Amount) -> QueueResult<()>;
}
