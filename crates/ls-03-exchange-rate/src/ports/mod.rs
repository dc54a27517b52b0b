//! Ports module for the exchange-rate engine

pub mod inbound;
pub mod outbound;

pub use inbound::ExchangeRateApi;
pub use outbound::{BufferBalances, LatestRecordSource, QueueBalance};
