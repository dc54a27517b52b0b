//! Driving Ports (API - Inbound)

use crate::domain::{LedgerBalances, ValidatorDeposit};
use crate::error::StakingResult;
use crate::types::StakingConfig;
use ls_03_exchange_rate::ControlledValueBreakdown;
use ls_04_redemption_queue::{RequestId, UnstakeRequest};
use shared_types::{Address, Amount};

/// Staking entry points
///
/// Callers are already authorized; see `access::StakingAccessHandler`.
pub trait StakingApi: Send + Sync {
    /// Mint shares for `value` at the current rate. Returns the shares minted.
    fn stake(&self, staker: Address, value: Amount, min_shares: Amount) -> StakingResult<Amount>;

    /// Escrow `shares` with the redemption queue against their current value
    fn unstake_request(
        &self,
        requester: Address,
        shares: Amount,
        min_value: Amount,
    ) -> StakingResult<RequestId>;

    fn claim_unstake_request(
        &self,
        id: RequestId,
        requester: &Address,
    ) -> StakingResult<UnstakeRequest>;

    fn allocate(&self, to_queue: Amount, to_deposits: Amount) -> StakingResult<()>;

    /// Fund validators from the deposit pot. Returns the total deposited.
    fn initiate_validators(&self, deposits: Vec<ValidatorDeposit>) -> StakingResult<Amount>;

    /// Pull the queue's allocated surplus back into `unallocated`
    fn reclaim_allocated_surplus(&self) -> StakingResult<Amount>;

    fn unpause(&self);

    fn is_paused(&self) -> bool;

    fn ledger(&self) -> LedgerBalances;

    fn controlled_value_breakdown(&self) -> ControlledValueBreakdown;

    fn total_controlled_value(&self) -> Amount {
        self.controlled_value_breakdown().total()
    }

    fn value_to_shares(&self, amount: Amount) -> StakingResult<Amount>;

    fn shares_to_value(&self, shares: Amount) -> StakingResult<Amount>;

    fn config(&self) -> StakingConfig;

    fn set_minimum_stake_bound(&self, amount: Amount);

    fn set_minimum_unstake_bound(&self, shares: Amount);

    fn set_maximum_share_supply(&self, supply: Amount);

    fn set_deposit_bounds(&self, minimum: Amount, maximum: Amount) -> StakingResult<()>;

    fn set_exchange_adjustment_bps(&self, bps: u16) -> StakingResult<()>;
}
