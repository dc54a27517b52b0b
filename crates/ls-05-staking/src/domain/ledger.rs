//! Local ledger balances
//!
//! ```text
//! stake / returns / surplus ──► unallocated ──┬──► redemption queue
//!                                             └──► allocated_for_deposits ──► total_deposited
//! ```
//!
//! Value only ever moves left to right, except the surplus the queue hands
//! back into `unallocated`.

use crate::error::{StakingError, StakingResult};
use ls_03_exchange_rate::LocalBalances;
use serde::{Deserialize, Serialize};
use shared_types::Amount;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerBalances {
    pub unallocated: Amount,
    pub allocated_for_deposits: Amount,
    /// Value ever sent to remote-chain validators; never decreases
    pub total_deposited: Amount,
    pub num_initiated_validators: u64,
}

impl LedgerBalances {
    pub fn local(&self) -> LocalBalances {
        LocalBalances {
            unallocated: self.unallocated,
            allocated_for_deposits: self.allocated_for_deposits,
            total_deposited: self.total_deposited,
        }
    }

    pub fn credit(&mut self, amount: Amount) {
        self.unallocated = self.unallocated.saturating_add(amount);
    }

    /// Move unallocated value to the queue and to the deposit pot.
    /// All-or-nothing.
    pub fn allocate(&mut self, to_queue: Amount, to_deposits: Amount) -> StakingResult<()> {
        let requested = to_queue
            .checked_add(to_deposits)
            .filter(|total| *total <= self.unallocated)
            .ok_or(StakingError::NotEnoughUnallocated {
                requested: to_queue.saturating_add(to_deposits),
                available: self.unallocated,
            })?;
        self.unallocated -= requested;
        self.allocated_for_deposits += to_deposits;
        Ok(())
    }

    /// Undo an allocation whose queue transfer was refused
    pub fn revert_allocation(&mut self, to_queue: Amount, to_deposits: Amount) {
        self.allocated_for_deposits = self.allocated_for_deposits.saturating_sub(to_deposits);
        self.unallocated = self
            .unallocated
            .saturating_add(to_queue)
            .saturating_add(to_deposits);
    }

    /// Spend deposit funds on `count` validators totalling `amount`
    pub fn deposit(&mut self, amount: Amount, count: u64) -> StakingResult<()> {
        if amount > self.allocated_for_deposits {
            return Err(StakingError::NotEnoughDepositValue {
                requested: amount,
                allocated: self.allocated_for_deposits,
            });
        }
        self.allocated_for_deposits -= amount;
        self.total_deposited = self.total_deposited.saturating_add(amount);
        self.num_initiated_validators = self.num_initiated_validators.saturating_add(count);
        Ok(())
    }
}
