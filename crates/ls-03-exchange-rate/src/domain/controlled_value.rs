//! Total controlled value
//!
//! Every place protocol value can sit, counted once.

use serde::{Deserialize, Serialize};
use shared_types::{Amount, OracleRecord};

/// Balances held by the local staking ledger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalBalances {
    /// Received but not yet allocated anywhere
    pub unallocated: Amount,
    /// Allocated for validator deposits but not yet sent
    pub allocated_for_deposits: Amount,
    /// Value ever sent to remote-chain validators
    pub total_deposited: Amount,
}

/// Components of the total controlled value
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlledValueBreakdown {
    pub unallocated: Amount,
    pub allocated_for_deposits: Amount,
    /// Deposits sent but not yet reflected in the reported balance
    pub in_flight_deposits: Amount,
    pub validator_balance: Amount,
    /// Buffer balance net of what the protocol already drew from it
    pub buffer_value: Amount,
    /// Allocated to the redemption queue and not yet claimed
    pub queue_balance: Amount,
}

impl ControlledValueBreakdown {
    pub fn compute(
        local: &LocalBalances,
        record: &OracleRecord,
        buffer_available: Amount,
        buffer_drawdown: Amount,
        queue_balance: Amount,
    ) -> Self {
        Self {
            unallocated: local.unallocated,
            allocated_for_deposits: local.allocated_for_deposits,
            in_flight_deposits: local
                .total_deposited
                .saturating_sub(record.cumulative_processed_deposit_amount),
            validator_balance: record.current_total_validator_balance,
            buffer_value: buffer_available.saturating_sub(buffer_drawdown),
            queue_balance,
        }
    }

    pub fn total(&self) -> Amount {
        self.unallocated
            .saturating_add(self.allocated_for_deposits)
            .saturating_add(self.in_flight_deposits)
            .saturating_add(self.validator_balance)
            .saturating_add(self.buffer_value)
            .saturating_add(self.queue_balance)
    }
}
