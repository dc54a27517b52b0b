//! Outgoing events for the staking entry points

use ls_04_redemption_queue::RequestId;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Amount};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StakingEvent {
    Staked {
        staker: Address,
        value: Amount,
        shares: Amount,
    },
    UnstakeRequested {
        id: RequestId,
        requester: Address,
        shares: Amount,
        value: Amount,
    },
    UnstakeRequestClaimed {
        id: RequestId,
        requester: Address,
    },
    Allocated {
        to_queue: Amount,
        to_deposits: Amount,
    },
    /// `pubkey` is hex encoded
    ValidatorInitiated {
        pubkey: String,
        amount: Amount,
    },
    ReturnsReceived {
        reward: Amount,
        principal: Amount,
    },
    SurplusReceived {
        amount: Amount,
    },
    Unpaused,
    ConfigurationChanged {
        setting: String,
        value: Amount,
    },
}
