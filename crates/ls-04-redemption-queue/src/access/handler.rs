//! Access handler for the redemption queue
//!
//! Authorized callers:
//! - create, claim, allocate, withdraw_allocated_surplus: StakingContract ONLY
//! - cancel_unfinalized_requests, set_finalize_delay_blocks: QueueManager ONLY

use crate::domain::UnstakeRequest;
use crate::error::{QueueResult, RequestId};
use crate::ports::inbound::RedemptionQueueApi;
use shared_types::{Address, Amount, Role, RoleRegistry};
use std::sync::Arc;
use tracing::warn;

pub struct QueueAccessHandler<Q>
where
    Q: RedemptionQueueApi,
{
    queue: Arc<Q>,
    roles: Arc<RoleRegistry>,
}

impl<Q> QueueAccessHandler<Q>
where
    Q: RedemptionQueueApi,
{
    pub fn new(queue: Arc<Q>, roles: Arc<RoleRegistry>) -> Self {
        Self { queue, roles }
    }

    /// The wrapped service, for unrestricted reads
    pub fn queue(&self) -> &Arc<Q> {
        &self.queue
    }

    fn authorize(&self, caller: &Address, role: Role) -> QueueResult<()> {
        self.roles.ensure_role(role, caller).map_err(|e| {
            warn!(role = ?role, "[ls-04] unauthorized call rejected");
            e.into()
        })
    }

    pub fn create(
        &self,
        caller: &Address,
        requester: Address,
        locked_shares: Amount,
        requested_value: Amount,
    ) -> QueueResult<RequestId> {
        self.authorize(caller, Role::StakingContract)?;
        Ok(self.queue.create(requester, locked_shares, requested_value))
    }

    pub fn claim(
        &self,
        caller: &Address,
        id: RequestId,
        requester: &Address,
    ) -> QueueResult<UnstakeRequest> {
        self.authorize(caller, Role::StakingContract)?;
        self.queue.claim(id, requester)
    }

    pub fn allocate(&self, caller: &Address, amount: Amount) -> QueueResult<()> {
        self.authorize(caller, Role::StakingContract)?;
        self.queue.allocate(amount);
        Ok(())
    }

    pub fn withdraw_allocated_surplus(&self, caller: &Address) -> QueueResult<Amount> {
        self.authorize(caller, Role::StakingContract)?;
        self.queue.withdraw_allocated_surplus()
    }

    pub fn cancel_unfinalized_requests(&self, caller: &Address, max_cancel: usize) -> QueueResult<bool> {
        self.authorize(caller, Role::QueueManager)?;
        self.queue.cancel_unfinalized_requests(max_cancel)
    }

    pub fn set_finalize_delay_blocks(&self, caller: &Address, blocks: u64) -> QueueResult<()> {
        self.authorize(caller, Role::QueueManager)?;
        self.queue.set_finalize_delay_blocks(blocks);
        Ok(())
    }
}
