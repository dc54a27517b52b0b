//! # ls-01-oracle
//!
//! Append-only log of validator-balance records with structural validation,
//! plausibility bounds and a single pending-update slot.
//!
//! ## Overview
//!
//! This subsystem provides:
//! - **Record log**: contiguous, non-overlapping windows starting at a bootstrap record
//! - **Structural validation**: malformed records are rejected outright
//! - **Sanity bounds**: implausible records are held back and the protocol is paused
//! - **Corrections**: committed records can be amended without moving their window
//!
//! ## Architecture
//!
//! ```text
//! Quorum (2) ──receive_record──→ Oracle (1)
//!                                    │
//!                                    ├── process_returns ──→ Staking (5)
//!                                    │
//!                                    └── request_pause_all ──→ Pauser
//! ```
//!
//! ## State Machine
//!
//! ```text
//!            receive_record (plausible)
//!           ┌──────────────┐
//!           ▼              │
//!      [NORMAL] ───────────┘
//!        │  ▲
//!        │  │ accept_pending_update / reject_pending_update
//!        ▼  │
//! [AWAITING_RESOLUTION]   (receive_record fails with UpdatePending)
//! ```
//!
//! ## Security Model
//!
//! | Entry point | Required role |
//! |-------------|---------------|
//! | receive_record | OracleUpdater |
//! | accept/reject pending | OraclePendingResolver |
//! | modify_existing_record, setters | OracleManager |
//!
//! ## Example
//!
//! ```rust,ignore
//! use ls_01_oracle::{OracleService, OracleConfig};
//! use ls_01_oracle::ports::inbound::OracleApi;
//!
//! let oracle = OracleService::new(OracleConfig::default(), staking, pauser, staking, clock)?;
//! match oracle.receive_record(record)? {
//!     ReceiveOutcome::Committed { index } => { /* returns forwarded */ }
//!     ReceiveOutcome::Pending(violation) => { /* protocol paused */ }
//! }
//! ```

pub mod access;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod types;

pub use access::OracleAccessHandler;
pub use domain::{
    balance_bounds, sanity_check, BalanceBounds, OracleState, PendingUpdate, RecordStore,
    SanityViolation, ViolationKind,
};
pub use error::{OracleError, OracleResult};
pub use events::OracleEvent;
pub use ports::inbound::{OracleApi, ReceiveOutcome};
pub use ports::outbound::{DepositCounters, PauseSink, ReturnsSink, WindowReturns};
pub use service::OracleService;
pub use types::{OracleConfig, SanityConfig, FINALIZATION_BLOCK_DELTA_UPPER_BOUND};
