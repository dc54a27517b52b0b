//! Shared staking ledger
//!
//! The oracle, the redemption queue and the staking service all hold the
//! same `Arc<StakingLedger>`. It answers the oracle's deposit counters,
//! takes forwarded returns and reclaimed surplus, and buffers the staking
//! events raised by any of them.
//!
//! Never call out of this type while holding its lock; every method here
//! locks once and returns.

use crate::domain::{LedgerBalances, ValidatorDeposit, ValidatorSet};
use crate::error::StakingResult;
use crate::events::StakingEvent;
use ls_01_oracle::{DepositCounters, OracleResult, ReturnsSink, WindowReturns};
use ls_04_redemption_queue::{QueueResult, SurplusReceiver};
use parking_lot::RwLock;
use shared_types::{Amount, EventBuffer};
use tracing::{debug, info};

#[derive(Default)]
struct LedgerState {
    balances: LedgerBalances,
    validators: ValidatorSet,
    events: EventBuffer<StakingEvent>,
}

#[derive(Default)]
pub struct StakingLedger {
    state: RwLock<LedgerState>,
}

impl StakingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balances(&self) -> LedgerBalances {
        self.state.read().balances
    }

    pub fn take_events(&self) -> Vec<StakingEvent> {
        self.state.write().events.take()
    }

    pub(crate) fn push_event(&self, event: StakingEvent) {
        self.state.write().events.push(event);
    }

    /// Credit staked value
    pub(crate) fn credit(&self, amount: Amount) {
        self.state.write().balances.credit(amount);
    }

    pub(crate) fn allocate(&self, to_queue: Amount, to_deposits: Amount) -> StakingResult<()> {
        self.state.write().balances.allocate(to_queue, to_deposits)
    }

    pub(crate) fn revert_allocation(&self, to_queue: Amount, to_deposits: Amount) {
        self.state
            .write()
            .balances
            .revert_allocation(to_queue, to_deposits);
    }

    /// Check and record a validator batch in one step. Returns the total.
    pub(crate) fn initiate_validators(
        &self,
        deposits: &[ValidatorDeposit],
        minimum: Amount,
        maximum: Amount,
    ) -> StakingResult<Amount> {
        let mut state = self.state.write();
        let total = state.validators.check_batch(deposits, minimum, maximum)?;
        state.balances.deposit(total, deposits.len() as u64)?;
        state.validators.insert_batch(deposits);
        for deposit in deposits {
            state.events.push(StakingEvent::ValidatorInitiated {
                pubkey: hex::encode(&deposit.pubkey),
                amount: deposit.amount,
            });
        }
        Ok(total)
    }
}

impl DepositCounters for StakingLedger {
    fn total_deposited(&self) -> Amount {
        self.state.read().balances.total_deposited
    }

    fn num_initiated_validators(&self) -> u64 {
        self.state.read().balances.num_initiated_validators
    }
}

impl ReturnsSink for StakingLedger {
    fn process_returns(&self, returns: WindowReturns) -> OracleResult<()> {
        if returns.is_empty() {
            debug!("[ls-05] no returns to process");
            return Ok(());
        }
        let mut state = self.state.write();
        state
            .balances
            .credit(returns.reward_amount.saturating_add(returns.principal_amount));
        state.events.push(StakingEvent::ReturnsReceived {
            reward: returns.reward_amount,
            principal: returns.principal_amount,
        });
        info!(
            reward = returns.reward_amount,
            principal = returns.principal_amount,
            include_external_rewards = returns.include_external_rewards,
            unallocated = state.balances.unallocated,
            "[ls-05] returns received"
        );
        Ok(())
    }
}

impl SurplusReceiver for StakingLedger {
    fn receive_surplus(&self, amount: Amount) -> QueueResult<()> {
        let mut state = self.state.write();
        state.balances.credit(amount);
        state.events.push(StakingEvent::SurplusReceived { amount });
        info!(amount, "[ls-05] queue surplus received");
        Ok(())
    }
}
