//! Access handler for the staking entry points
//!
//! Authorized callers:
//! - stake, unstake_request, claim_unstake_request: anyone, acting for themselves
//! - allocate, initiate_validators: AllocatorService ONLY
//! - reclaim_allocated_surplus, unpause, setters: StakingManager ONLY

use crate::domain::ValidatorDeposit;
use crate::error::StakingResult;
use crate::ports::inbound::StakingApi;
use ls_04_redemption_queue::{RequestId, UnstakeRequest};
use shared_types::{Address, Amount, Role, RoleRegistry};
use std::sync::Arc;
use tracing::warn;

pub struct StakingAccessHandler<S>
where
    S: StakingApi,
{
    staking: Arc<S>,
    roles: Arc<RoleRegistry>,
}

impl<S> StakingAccessHandler<S>
where
    S: StakingApi,
{
    pub fn new(staking: Arc<S>, roles: Arc<RoleRegistry>) -> Self {
        Self { staking, roles }
    }

    /// The wrapped service, for unrestricted reads
    pub fn staking(&self) -> &Arc<S> {
        &self.staking
    }

    fn authorize(&self, caller: &Address, role: Role) -> StakingResult<()> {
        self.roles.ensure_role(role, caller).map_err(|e| {
            warn!(role = ?role, "[ls-05] unauthorized call rejected");
            e.into()
        })
    }

    pub fn stake(&self, caller: &Address, value: Amount, min_shares: Amount) -> StakingResult<Amount> {
        self.staking.stake(*caller, value, min_shares)
    }

    pub fn unstake_request(
        &self,
        caller: &Address,
        shares: Amount,
        min_value: Amount,
    ) -> StakingResult<RequestId> {
        self.staking.unstake_request(*caller, shares, min_value)
    }

    pub fn claim_unstake_request(
        &self,
        caller: &Address,
        id: RequestId,
    ) -> StakingResult<UnstakeRequest> {
        self.staking.claim_unstake_request(id, caller)
    }

    pub fn allocate(&self, caller: &Address, to_queue: Amount, to_deposits: Amount) -> StakingResult<()> {
        self.authorize(caller, Role::AllocatorService)?;
        self.staking.allocate(to_queue, to_deposits)
    }

    pub fn initiate_validators(
        &self,
        caller: &Address,
        deposits: Vec<ValidatorDeposit>,
    ) -> StakingResult<Amount> {
        self.authorize(caller, Role::AllocatorService)?;
        self.staking.initiate_validators(deposits)
    }

    pub fn reclaim_allocated_surplus(&self, caller: &Address) -> StakingResult<Amount> {
        self.authorize(caller, Role::StakingManager)?;
        self.staking.reclaim_allocated_surplus()
    }

    pub fn unpause(&self, caller: &Address) -> StakingResult<()> {
        self.authorize(caller, Role::StakingManager)?;
        self.staking.unpause();
        Ok(())
    }

    pub fn set_minimum_stake_bound(&self, caller: &Address, amount: Amount) -> StakingResult<()> {
        self.authorize(caller, Role::StakingManager)?;
        self.staking.set_minimum_stake_bound(amount);
        Ok(())
    }

    pub fn set_minimum_unstake_bound(&self, caller: &Address, shares: Amount) -> StakingResult<()> {
        self.authorize(caller, Role::StakingManager)?;
        self.staking.set_minimum_unstake_bound(shares);
        Ok(())
    }

    pub fn set_maximum_share_supply(&self, caller: &Address, supply: Amount) -> StakingResult<()> {
        self.authorize(caller, Role::StakingManager)?;
        self.staking.set_maximum_share_supply(supply);
        Ok(())
    }

    pub fn set_deposit_bounds(
        &self,
        caller: &Address,
        minimum: Amount,
        maximum: Amount,
    ) -> StakingResult<()> {
        self.authorize(caller, Role::StakingManager)?;
        self.staking.set_deposit_bounds(minimum, maximum)
    }

    pub fn set_exchange_adjustment_bps(&self, caller: &Address, bps: u16) -> StakingResult<()> {
        self.authorize(caller, Role::StakingManager)?;
        self.staking.set_exchange_adjustment_bps(bps)
    }
}
