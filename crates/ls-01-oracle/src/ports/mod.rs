//! Ports module for Oracle subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::{OracleApi, ReceiveOutcome};
pub use outbound::{DepositCounters, PauseSink, ReturnsSink, WindowReturns};
