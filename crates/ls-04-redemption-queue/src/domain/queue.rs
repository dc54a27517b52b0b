//! The request queue aggregate
//!
//! Owns the request slots and the funding ledger. Every method is a single
//! atomic step on in-memory state; ports are driven by the service.
//!
//! Slots are `Option<UnstakeRequest>`: `None` is a claimed tombstone. Ids
//! are slot indices, so cancelling from the tail hands the same ids out
//! again.

use super::request::{FundingLedger, RequestInfo, UnstakeRequest};
use crate::error::{QueueError, QueueResult, RequestId};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, BlockNumber};

/// Requests removed by `pop_unfinalized`, newest first
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CancelBatch {
    pub cancelled: Vec<UnstakeRequest>,
    /// Whether the new tail is still unfinalized
    pub has_more: bool,
}

impl CancelBatch {
    pub fn cancelled_value(&self) -> Amount {
        self.cancelled
            .iter()
            .fold(0, |acc: Amount, r| acc.saturating_add(r.requested_value))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQueue {
    slots: Vec<Option<UnstakeRequest>>,
    ledger: FundingLedger,
}

impl RequestQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &FundingLedger {
        &self.ledger
    }

    pub fn num_requests(&self) -> usize {
        self.slots.len()
    }

    /// The slot for `id`; `Ok(None)` for a claimed tombstone
    pub fn get(&self, id: RequestId) -> QueueResult<Option<&UnstakeRequest>> {
        usize::try_from(id)
            .ok()
            .and_then(|index| self.slots.get(index))
            .map(Option::as_ref)
            .ok_or(QueueError::RequestNotFound { id })
    }

    pub fn create(
        &mut self,
        requester: Address,
        locked_shares: Amount,
        requested_value: Amount,
        creation_block: BlockNumber,
    ) -> UnstakeRequest {
        let cumulative = self
            .ledger
            .latest_cumulative_requested
            .saturating_add(requested_value);
        let request = UnstakeRequest {
            id: self.slots.len() as RequestId,
            requester,
            locked_shares,
            requested_value,
            cumulative_requested_value: cumulative,
            creation_block,
        };
        self.slots.push(Some(request));
        self.ledger.latest_cumulative_requested = cumulative;
        request
    }

    pub fn request_info(
        &self,
        id: RequestId,
        latest_end_block: BlockNumber,
        finalize_delay: u64,
    ) -> QueueResult<RequestInfo> {
        let info = match self.get(id)? {
            Some(request) => RequestInfo {
                finalized: request.is_finalized(latest_end_block, finalize_delay),
                claimable: request.claimable(self.ledger.allocated_for_claims),
            },
            None => RequestInfo {
                finalized: true,
                claimable: 0,
            },
        };
        Ok(info)
    }

    /// Check every claim condition, then tombstone the slot and count the
    /// value as claimed. Returns the removed request.
    pub fn begin_claim(
        &mut self,
        id: RequestId,
        requester: &Address,
        latest_end_block: BlockNumber,
        finalize_delay: u64,
    ) -> QueueResult<UnstakeRequest> {
        let request = *self.get(id)?.ok_or(QueueError::AlreadyClaimed { id })?;
        if request.requester != *requester {
            return Err(QueueError::NotRequester { id });
        }
        if !request.is_finalized(latest_end_block, finalize_delay) {
            return Err(QueueError::NotFinalized { id });
        }
        if request.cumulative_requested_value > self.ledger.allocated_for_claims {
            return Err(QueueError::NotEnoughFunds {
                cumulative: request.cumulative_requested_value,
                allocated: self.ledger.allocated_for_claims,
            });
        }

        self.slots[id as usize] = None;
        self.ledger.total_claimed = self
            .ledger
            .total_claimed
            .saturating_add(request.requested_value);
        Ok(request)
    }

    /// Undo `begin_claim`
    pub(crate) fn revert_claim(&mut self, request: UnstakeRequest) {
        if let Some(slot) = self.slots.get_mut(request.id as usize) {
            *slot = Some(request);
            self.ledger.total_claimed = self
                .ledger
                .total_claimed
                .saturating_sub(request.requested_value);
        }
    }

    /// Pop up to `max_cancel` unfinalized requests from the tail.
    ///
    /// Stops at the first finalized slot; tombstones count as finalized.
    pub fn pop_unfinalized(
        &mut self,
        max_cancel: usize,
        latest_end_block: BlockNumber,
        finalize_delay: u64,
    ) -> CancelBatch {
        let is_finalized = |slot: &Option<UnstakeRequest>| match slot {
            Some(request) => request.is_finalized(latest_end_block, finalize_delay),
            None => true,
        };

        let mut batch = CancelBatch::default();
        while batch.cancelled.len() < max_cancel {
            let request = match self.slots.last() {
                Some(Some(request)) if !request.is_finalized(latest_end_block, finalize_delay) => {
                    *request
                }
                _ => break,
            };
            self.slots.pop();
            batch.cancelled.push(request);
        }

        self.ledger.latest_cumulative_requested = self
            .ledger
            .latest_cumulative_requested
            .saturating_sub(batch.cancelled_value());
        batch.has_more = self.slots.last().map(|s| !is_finalized(s)).unwrap_or(false);
        batch
    }

    /// Push back requests taken by `pop_unfinalized`, given newest first.
    ///
    /// Only valid for a suffix of the batch that is contiguous with the
    /// current tail.
    pub(crate) fn restore_cancelled(&mut self, newest_first: &[UnstakeRequest]) {
        for request in newest_first.iter().rev() {
            debug_assert_eq!(request.id as usize, self.slots.len());
            self.slots.push(Some(*request));
            self.ledger.latest_cumulative_requested = self
                .ledger
                .latest_cumulative_requested
                .saturating_add(request.requested_value);
        }
    }

    pub fn allocate(&mut self, amount: Amount) {
        self.ledger.allocated_for_claims = self.ledger.allocated_for_claims.saturating_add(amount);
    }

    /// Remove the allocated surplus from the ledger and return it
    pub fn take_surplus(&mut self) -> Amount {
        let surplus = self.ledger.surplus();
        self.ledger.allocated_for_claims -= surplus;
        surplus
    }

    pub(crate) fn revert_surplus(&mut self, amount: Amount) {
        self.allocate(amount);
    }
}
