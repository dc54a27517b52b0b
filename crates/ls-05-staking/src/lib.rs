//! # ls-05-staking
//!
//! Stake and unstake entry points over the shared staking ledger.
//!
//! ## Value Flow
//!
//! ```text
//!   stake ──► unallocated ◄── returns (oracle) ◄── surplus (queue)
//!                 │
//!      allocate ──┼──────────────► redemption queue ──► claims
//!                 ▼
//!     allocated_for_deposits ──initiate──► total_deposited (remote chain)
//! ```
//!
//! ## Wiring
//!
//! `StakingLedger` is built first and shared: the oracle reads it as
//! `DepositCounters` and forwards returns into it as `ReturnsSink`, the
//! queue hands surplus back through it as `SurplusReceiver`. The service
//! and the rate engine are built after the oracle and the queue.
//!
//! ## Roles
//!
//! | Entry point | Role |
//! |-------------|------|
//! | `stake`, `unstake_request`, `claim_unstake_request` | none |
//! | `allocate`, `initiate_validators` | `AllocatorService` |
//! | `reclaim_allocated_surplus`, `unpause`, setters | `StakingManager` |

pub mod access;
pub mod adapters;
pub mod domain;
pub mod error;
pub mod events;
pub mod ledger;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod types;

pub use access::StakingAccessHandler;
pub use adapters::{
    BufferPosition, InMemoryShareToken, NativeBalances, PauseSwitch, QueueBalanceAdapter,
    TokenEscrow,
};
pub use domain::{LedgerBalances, ValidatorDeposit, ValidatorSet};
pub use error::{StakingError, StakingResult};
pub use events::StakingEvent;
pub use ledger::StakingLedger;
pub use ports::inbound::StakingApi;
pub use ports::outbound::ShareToken;
pub use service::{StakingAccounts, StakingService};
pub use types::StakingConfig;
