//! Unstake requests and the funding ledger

use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount, BlockNumber};

use crate::error::RequestId;

/// A queued claim on `requested_value` in exchange for `locked_shares`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnstakeRequest {
    pub id: RequestId,
    pub requester: Address,
    pub locked_shares: Amount,
    pub requested_value: Amount,
    /// Running total of requested value up to and including this request
    pub cumulative_requested_value: Amount,
    pub creation_block: BlockNumber,
}

impl UnstakeRequest {
    /// Allocation needed before this request can receive anything
    pub fn starting_offset(&self) -> Amount {
        self.cumulative_requested_value
            .saturating_sub(self.requested_value)
    }

    pub fn is_finalized(&self, latest_end_block: BlockNumber, finalize_delay: u64) -> bool {
        self.creation_block.saturating_add(finalize_delay) <= latest_end_block
    }

    /// Portion fundable at `allocated_for_claims`, filling strictly in order
    pub fn claimable(&self, allocated_for_claims: Amount) -> Amount {
        allocated_for_claims
            .saturating_sub(self.starting_offset())
            .min(self.requested_value)
    }
}

/// `request_info` result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestInfo {
    pub finalized: bool,
    pub claimable: Amount,
}

/// Scalar counters of the queue's funding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundingLedger {
    /// Cumulative value allocated for claims, net of withdrawn surplus
    pub allocated_for_claims: Amount,
    pub total_claimed: Amount,
    /// Cumulative requested value of the newest request
    pub latest_cumulative_requested: Amount,
}

impl FundingLedger {
    /// Allocation beyond what every outstanding request needs
    pub fn surplus(&self) -> Amount {
        self.allocated_for_claims
            .saturating_sub(self.latest_cumulative_requested)
    }

    /// Allocation still missing to cover every outstanding request
    pub fn deficit(&self) -> Amount {
        self.latest_cumulative_requested
            .saturating_sub(self.allocated_for_claims)
    }

    /// Allocated value not yet paid out
    pub fn balance(&self) -> Amount {
        self.allocated_for_claims.saturating_sub(self.total_claimed)
    }
}
