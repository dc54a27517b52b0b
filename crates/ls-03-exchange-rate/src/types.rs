//! Configuration for the exchange-rate engine

use crate::error::{RateError, RateResult};
use serde::{Deserialize, Serialize};

/// Upper bound for the exchange adjustment, in basis points
pub const MAX_EXCHANGE_ADJUSTMENT_BPS: u16 = 1_000;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateConfig {
    /// Discount applied when minting shares for deposited value.
    ///
    /// Compensates for the remote chain's entry queue being slower than its
    /// exit queue. Redemptions are not adjusted.
    pub exchange_adjustment_bps: u16,
}

impl RateConfig {
    pub fn validate(&self) -> RateResult<()> {
        validate_adjustment(self.exchange_adjustment_bps)
    }
}

pub(crate) fn validate_adjustment(bps: u16) -> RateResult<()> {
    if bps > MAX_EXCHANGE_ADJUSTMENT_BPS {
        return Err(RateError::InvalidConfiguration {
            reason: format!(
                "exchange adjustment {} bps exceeds {}",
                bps, MAX_EXCHANGE_ADJUSTMENT_BPS
            ),
        });
    }
    Ok(())
}
