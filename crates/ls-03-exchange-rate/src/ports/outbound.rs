//! Driven Ports (SPI - Outbound Dependencies)

use shared_types::{Amount, OracleRecord};

/// Latest committed oracle record
pub trait LatestRecordSource: Send + Sync {
    fn latest_record(&self) -> OracleRecord;
}

/// Liquidity buffer, treated as an opaque balance source
pub trait BufferBalances: Send + Sync {
    fn available(&self) -> Amount;

    /// Value the protocol already drew out of the buffer
    fn cumulative_drawdown(&self) -> Amount;
}

/// Undisbursed value held by the redemption queue
pub trait QueueBalance: Send + Sync {
    fn balance(&self) -> Amount;
}
