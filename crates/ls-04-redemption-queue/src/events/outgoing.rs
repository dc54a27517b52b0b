//! Outgoing events for the redemption queue

use crate::domain::UnstakeRequest;
use crate::error::RequestId;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueEvent {
    RequestCreated { request: UnstakeRequest },
    RequestClaimed { request: UnstakeRequest },
    RequestCancelled { request: UnstakeRequest },
    Allocated { amount: Amount },
    SurplusWithdrawn { amount: Amount },
    /// Value transfer failed after the shares were burned; the request is
    /// back in the queue with no shares left to burn
    ClaimPartiallyReverted { id: RequestId, requester: Address },
    ConfigurationChanged { setting: String, value: u64 },
}
