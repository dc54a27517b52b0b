//! Domain layer for the staking ledger

pub mod ledger;
pub mod validators;

pub use ledger::LedgerBalances;
pub use validators::{ValidatorDeposit, ValidatorSet};
