//! # Adapters Layer
//!
//! In-memory implementations of the ports the staking ledger wires into the
//! rest of the protocol.

pub mod balances;
pub mod pause;
pub mod token;

pub use balances::{BufferPosition, NativeBalances, QueueBalanceAdapter};
pub use pause::PauseSwitch;
pub use token::{InMemoryShareToken, TokenEscrow};
