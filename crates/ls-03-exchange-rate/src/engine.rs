//! Exchange-rate engine
//!
//! Reads the oracle, the buffer and the queue through ports on every call.
//! The only state it owns is the adjustment parameter.

use crate::domain::{shares_to_value, value_to_shares, ControlledValueBreakdown, LocalBalances};
use crate::error::RateResult;
use crate::ports::inbound::ExchangeRateApi;
use crate::ports::outbound::{BufferBalances, LatestRecordSource, QueueBalance};
use crate::types::{validate_adjustment, RateConfig};
use parking_lot::RwLock;
use shared_types::Amount;
use std::sync::Arc;
use tracing::{debug, info};

pub struct ExchangeRateEngine<O, B, Q>
where
    O: LatestRecordSource,
    B: BufferBalances,
    Q: QueueBalance,
{
    config: RwLock<RateConfig>,
    oracle: Arc<O>,
    buffer: Arc<B>,
    queue: Arc<Q>,
}

impl<O, B, Q> ExchangeRateEngine<O, B, Q>
where
    O: LatestRecordSource,
    B: BufferBalances,
    Q: QueueBalance,
{
    pub fn new(config: RateConfig, oracle: Arc<O>, buffer: Arc<B>, queue: Arc<Q>) -> RateResult<Self> {
        config.validate()?;
        Ok(Self {
            config: RwLock::new(config),
            oracle,
            buffer,
            queue,
        })
    }
}

impl<O, B, Q> ExchangeRateApi for ExchangeRateEngine<O, B, Q>
where
    O: LatestRecordSource,
    B: BufferBalances,
    Q: QueueBalance,
{
    fn controlled_value_breakdown(&self, local: &LocalBalances) -> ControlledValueBreakdown {
        ControlledValueBreakdown::compute(
            local,
            &self.oracle.latest_record(),
            self.buffer.available(),
            self.buffer.cumulative_drawdown(),
            self.queue.balance(),
        )
    }

    fn value_to_shares(
        &self,
        amount: Amount,
        supply: Amount,
        local: &LocalBalances,
    ) -> RateResult<Amount> {
        let total = self.total_controlled_value(local);
        let shares = value_to_shares(amount, supply, total, self.exchange_adjustment_bps())?;
        debug!(amount, supply, total, shares, "[ls-03] value to shares");
        Ok(shares)
    }

    fn shares_to_value(
        &self,
        shares: Amount,
        supply: Amount,
        local: &LocalBalances,
    ) -> RateResult<Amount> {
        let total = self.total_controlled_value(local);
        shares_to_value(shares, supply, total)
    }

    fn exchange_adjustment_bps(&self) -> u16 {
        self.config.read().exchange_adjustment_bps
    }

    fn set_exchange_adjustment_bps(&self, bps: u16) -> RateResult<()> {
        validate_adjustment(bps)?;
        self.config.write().exchange_adjustment_bps = bps;
        info!(bps, "[ls-03] exchange adjustment updated");
        Ok(())
    }
}
