//! Driven Ports (SPI - Outbound Dependencies)

use crate::error::StakingResult;
use shared_types::{Address, Amount};

/// The liquid share token
///
/// Every mutation is all-or-nothing.
pub trait ShareToken: Send + Sync {
    fn total_supply(&self) -> Amount;

    fn balance_of(&self, account: &Address) -> Amount;

    fn mint(&self, to: &Address, amount: Amount) -> StakingResult<()>;

    fn burn(&self, from: &Address, amount: Amount) -> StakingResult<()>;

    fn transfer(&self, from: &Address, to: &Address, amount: Amount) -> StakingResult<()>;
}
