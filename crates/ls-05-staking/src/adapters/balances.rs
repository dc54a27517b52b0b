//! Value balances outside the staking ledger

use ls_03_exchange_rate::{BufferBalances, QueueBalance};
use ls_04_redemption_queue::{QueueResult, RedemptionQueueApi, ValueTransfer};
use parking_lot::RwLock;
use shared_types::{Address, Amount};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Native value paid out to accounts
#[derive(Default)]
pub struct NativeBalances {
    balances: RwLock<HashMap<Address, Amount>>,
}

impl NativeBalances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.read().get(account).copied().unwrap_or(0)
    }
}

impl ValueTransfer for NativeBalances {
    fn send_value(&self, to: &Address, amount: Amount) -> QueueResult<()> {
        let mut balances = self.balances.write();
        let balance = balances.entry(*to).or_default();
        *balance = balance.saturating_add(amount);
        debug!(to = %hex::encode(to), amount, "[ls-05] value paid out");
        Ok(())
    }
}

/// Liquidity buffer position, updated by whoever manages the buffer
#[derive(Default)]
pub struct BufferPosition {
    position: RwLock<(Amount, Amount)>,
}

impl BufferPosition {
    pub fn new(available: Amount, cumulative_drawdown: Amount) -> Self {
        Self {
            position: RwLock::new((available, cumulative_drawdown)),
        }
    }

    pub fn update(&self, available: Amount, cumulative_drawdown: Amount) {
        *self.position.write() = (available, cumulative_drawdown);
    }
}

impl BufferBalances for BufferPosition {
    fn available(&self) -> Amount {
        self.position.read().0
    }

    fn cumulative_drawdown(&self) -> Amount {
        self.position.read().1
    }
}

/// Queue balance read straight from the queue service
pub struct QueueBalanceAdapter<Q>
where
    Q: RedemptionQueueApi,
{
    queue: Arc<Q>,
}

impl<Q> QueueBalanceAdapter<Q>
where
    Q: RedemptionQueueApi,
{
    pub fn new(queue: Arc<Q>) -> Self {
        Self { queue }
    }
}

impl<Q> QueueBalance for QueueBalanceAdapter<Q>
where
    Q: RedemptionQueueApi,
{
    fn balance(&self) -> Amount {
        self.queue.balance()
    }
}
