//! # ls-03-exchange-rate
//!
//! Derives the share/value conversion rate from the latest oracle record
//! and local balances.
//!
//! ## Total Controlled Value
//!
//! ```text
//!   unallocated
//! + allocated for deposits
//! + (total deposited - record.cumulative_processed_deposit)
//! + record.current_total_validator_balance
//! + (buffer available - buffer drawdown)
//! + redemption queue balance
//! ```
//!
//! ## Conversion
//!
//! ```text
//! shares = amount * supply * (10_000 - adjustment_bps) / (tcv * 10_000)
//! value  = shares * tcv / supply
//! ```
//!
//! Both are 1:1 while the share supply is zero. The adjustment is a protocol
//! parameter (at most 1_000 bps) compensating for the remote chain's entry
//! queue latency; it applies to minting only.

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod error;
pub mod ports;
pub mod types;

pub use adapters::OracleRecordSource;
pub use domain::{shares_to_value, value_to_shares, ControlledValueBreakdown, LocalBalances};
pub use engine::ExchangeRateEngine;
pub use error::{RateError, RateResult};
pub use ports::inbound::ExchangeRateApi;
pub use ports::outbound::{BufferBalances, LatestRecordSource, QueueBalance};
pub use types::{RateConfig, MAX_EXCHANGE_ADJUSTMENT_BPS};
