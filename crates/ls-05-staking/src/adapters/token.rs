//! Share token held in memory, and the queue's escrow view of it

use crate::error::{StakingError, StakingResult};
use crate::ports::outbound::ShareToken;
use ls_04_redemption_queue::{QueueError, QueueResult, ShareEscrow};
use parking_lot::RwLock;
use shared_types::{Address, Amount};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
struct TokenState {
    total_supply: Amount,
    balances: HashMap<Address, Amount>,
}

#[derive(Default)]
pub struct InMemoryShareToken {
    state: RwLock<TokenState>,
}

impl InMemoryShareToken {
    pub fn new() -> Self {
        Self::default()
    }
}

fn insufficient(balance: Amount, needed: Amount) -> StakingError {
    StakingError::InsufficientShares { balance, needed }
}

impl ShareToken for InMemoryShareToken {
    fn total_supply(&self) -> Amount {
        self.state.read().total_supply
    }

    fn balance_of(&self, account: &Address) -> Amount {
        self.state.read().balances.get(account).copied().unwrap_or(0)
    }

    fn mint(&self, to: &Address, amount: Amount) -> StakingResult<()> {
        let mut state = self.state.write();
        let supply = state
            .total_supply
            .checked_add(amount)
            .ok_or_else(|| StakingError::config("share supply overflow"))?;
        state.total_supply = supply;
        *state.balances.entry(*to).or_default() += amount;
        Ok(())
    }

    fn burn(&self, from: &Address, amount: Amount) -> StakingResult<()> {
        let mut state = self.state.write();
        let balance = state.balances.get(from).copied().unwrap_or(0);
        if balance < amount {
            return Err(insufficient(balance, amount));
        }
        state.balances.insert(*from, balance - amount);
        state.total_supply -= amount;
        Ok(())
    }

    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> StakingResult<()> {
        let mut state = self.state.write();
        let balance = state.balances.get(from).copied().unwrap_or(0);
        if balance < amount {
            return Err(insufficient(balance, amount));
        }
        state.balances.insert(*from, balance - amount);
        *state.balances.entry(*to).or_default() += amount;
        Ok(())
    }
}

/// Shares escrowed under the queue's account
pub struct TokenEscrow<T>
where
    T: ShareToken,
{
    token: Arc<T>,
    holder: Address,
}

impl<T> TokenEscrow<T>
where
    T: ShareToken,
{
    pub fn new(token: Arc<T>, holder: Address) -> Self {
        Self { token, holder }
    }

    pub fn holder(&self) -> &Address {
        &self.holder
    }

    pub fn escrowed(&self) -> Amount {
        self.token.balance_of(&self.holder)
    }
}

impl<T> ShareEscrow for TokenEscrow<T>
where
    T: ShareToken,
{
    fn burn(&self, amount: Amount) -> QueueResult<()> {
        self.token
            .burn(&self.holder, amount)
            .map_err(|e| QueueError::TransferFailed {
                reason: e.to_string(),
            })
    }

    fn transfer_shares(&self, to: &Address, amount: Amount) -> QueueResult<()> {
        self.token
            .transfer(&self.holder, to, amount)
            .map_err(|e| QueueError::TransferFailed {
                reason: e.to_string(),
            })
    }

    fn restore(&self, amount: Amount) -> QueueResult<()> {
        self.token
            .mint(&self.holder, amount)
            .map_err(|e| QueueError::TransferFailed {
                reason: e.to_string(),
            })
    }
}
