//! Domain layer for the redemption queue

pub mod queue;
pub mod request;

pub use queue::{CancelBatch, RequestQueue};
pub use request::{FundingLedger, RequestInfo, UnstakeRequest};
