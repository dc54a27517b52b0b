//! # ls-04-redemption-queue
//!
//! FIFO ledger of unstake requests, their cumulative funding requirement,
//! and finalization against the oracle's horizon.
//!
//! ## Request Lifecycle
//!
//! ```text
//! create ──→ [QUEUED] ──horizon passes creation + delay──→ [FINALIZED]
//!               │                                              │
//!               │ cancel_unfinalized_requests (tail only)      │ claim (funded)
//!               ▼                                              ▼
//!          [CANCELLED]                                   [CLAIMED / tombstone]
//! ```
//!
//! ## Funding
//!
//! Each request carries the cumulative requested value up to and including
//! itself. Allocation fills requests strictly in creation order:
//!
//! ```text
//! claimable = min(allocated - (cumulative - requested), requested), floored at 0
//! ```
//!
//! A claim needs the whole request funded (`cumulative <= allocated`).
//! Shares are burned and value sent only after the slot is tombstoned.

pub mod access;
pub mod adapters;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod types;

pub use access::QueueAccessHandler;
pub use adapters::OracleHorizonAdapter;
pub use domain::{CancelBatch, FundingLedger, RequestInfo, RequestQueue, UnstakeRequest};
pub use error::{QueueError, QueueResult, RequestId};
pub use events::QueueEvent;
pub use ports::inbound::RedemptionQueueApi;
pub use ports::outbound::{OracleHorizon, ShareEscrow, SurplusReceiver, ValueTransfer};
pub use service::RedemptionQueueService;
pub use types::QueueConfig;
