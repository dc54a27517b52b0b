//! Domain layer for the exchange-rate engine

pub mod controlled_value;
pub mod conversion;

pub use controlled_value::{ControlledValueBreakdown, LocalBalances};
pub use conversion::{shares_to_value, value_to_shares};
