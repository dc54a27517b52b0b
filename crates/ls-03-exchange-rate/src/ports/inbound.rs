//! Driving Ports (API - Inbound)

use crate::domain::{ControlledValueBreakdown, LocalBalances};
use crate::error::RateResult;
use shared_types::Amount;

/// Rate queries used by the stake and unstake entry points
///
/// Callers pass their own ledger balances in, so the engine never reads
/// back into the staking ledger.
pub trait ExchangeRateApi: Send + Sync {
    fn controlled_value_breakdown(&self, local: &LocalBalances) -> ControlledValueBreakdown;

    fn total_controlled_value(&self, local: &LocalBalances) -> Amount {
        self.controlled_value_breakdown(local).total()
    }

    fn value_to_shares(&self, amount: Amount, supply: Amount, local: &LocalBalances)
        -> RateResult<Amount>;

    fn shares_to_value(&self, shares: Amount, supply: Amount, local: &LocalBalances)
        -> RateResult<Amount>;

    fn exchange_adjustment_bps(&self) -> u16;

    fn set_exchange_adjustment_bps(&self, bps: u16) -> RateResult<()>;
}
