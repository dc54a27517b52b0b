//! Configuration for the staking entry points

use crate::error::{StakingError, StakingResult};
use serde::{Deserialize, Serialize};
use shared_types::{Amount, ONE_ETHER};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StakingConfig {
    pub minimum_stake_bound: Amount,
    /// In shares
    pub minimum_unstake_bound: Amount,
    pub maximum_share_supply: Amount,
    pub minimum_deposit_amount: Amount,
    pub maximum_deposit_amount: Amount,
}

impl Default for StakingConfig {
    fn default() -> Self {
        Self {
            minimum_stake_bound: ONE_ETHER / 10,
            minimum_unstake_bound: ONE_ETHER / 100,
            maximum_share_supply: 1_024 * ONE_ETHER,
            minimum_deposit_amount: 32 * ONE_ETHER,
            maximum_deposit_amount: 32 * ONE_ETHER,
        }
    }
}

impl StakingConfig {
    pub fn validate(&self) -> StakingResult<()> {
        validate_deposit_bounds(self.minimum_deposit_amount, self.maximum_deposit_amount)
    }
}

pub(crate) fn validate_deposit_bounds(minimum: Amount, maximum: Amount) -> StakingResult<()> {
    if minimum == 0 {
        return Err(StakingError::config("minimum deposit must be non-zero"));
    }
    if minimum > maximum {
        return Err(StakingError::config(format!(
            "minimum deposit {} exceeds maximum {}",
            minimum, maximum
        )));
    }
    Ok(())
}
