//! Ports module for the redemption queue

pub mod inbound;
pub mod outbound;

pub use inbound::RedemptionQueueApi;
pub use outbound::{OracleHorizon, ShareEscrow, SurplusReceiver, ValueTransfer};
