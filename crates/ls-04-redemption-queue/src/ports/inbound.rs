//! Driving Ports (API - Inbound)

use crate::domain::{FundingLedger, RequestInfo, UnstakeRequest};
use crate::error::{QueueResult, RequestId};
use shared_types::{Address, Amount};

/// Primary Redemption Queue API
///
/// Callers are already authorized; see `access::QueueAccessHandler`.
pub trait RedemptionQueueApi: Send + Sync {
    /// Append a request at the current block. Returns its id.
    fn create(&self, requester: Address, locked_shares: Amount, requested_value: Amount) -> RequestId;

    /// Pay out a finalized, fully funded request. Returns the removed request.
    fn claim(&self, id: RequestId, requester: &Address) -> QueueResult<UnstakeRequest>;

    /// Cancel up to `max_cancel` unfinalized requests from the tail.
    ///
    /// Returns whether unfinalized requests remain.
    fn cancel_unfinalized_requests(&self, max_cancel: usize) -> QueueResult<bool>;

    /// Add to the value allocated for claims
    fn allocate(&self, amount: Amount);

    /// Hand allocation above the outstanding requirement back. Returns the amount.
    fn withdraw_allocated_surplus(&self) -> QueueResult<Amount>;

    fn allocated_surplus(&self) -> Amount;

    fn allocated_deficit(&self) -> Amount;

    /// Allocated value not yet claimed
    fn balance(&self) -> Amount;

    fn funding(&self) -> FundingLedger;

    fn request_info(&self, id: RequestId) -> QueueResult<RequestInfo>;

    /// The request, or `None` once claimed
    fn request_by_id(&self, id: RequestId) -> QueueResult<Option<UnstakeRequest>>;

    fn num_requests(&self) -> usize;

    fn finalize_delay_blocks(&self) -> u64;

    fn set_finalize_delay_blocks(&self, blocks: u64);
}
