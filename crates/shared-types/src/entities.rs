//! # Core Domain Entities
//!
//! Defines the ledger primitives and the oracle record shared by every
//! staking subsystem.
//!
//! ## Clusters
//!
//! - **Ledger**: `Address`, `Hash`, `BlockNumber`, `Amount`
//! - **Oracle**: `OracleRecord`, the snapshot of remote consensus-layer state

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

// Re-export U256 from primitive-types for wide intermediate arithmetic
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: LEDGER PRIMITIVES
// =============================================================================

/// A 32-byte hash (Keccak-256).
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// Height of the host ledger or of the remote consensus layer.
pub type BlockNumber = u64;

/// Value or share amount in the smallest indivisible unit.
pub type Amount = u128;

/// One whole unit of value (10^18 base units).
pub const ONE_ETHER: Amount = 1_000_000_000_000_000_000;

/// The all-zero address, never a valid requester.
pub const ZERO_ADDRESS: Address = [0u8; 20];

// =============================================================================
// CLUSTER B: ORACLE
// =============================================================================

/// Snapshot of remote consensus-layer state for the block window
/// `[update_start_block, update_end_block]`.
///
/// Windowed fields describe only what happened inside the window;
/// cumulative fields carry totals since protocol initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OracleRecord {
    /// First block covered by this record (inclusive).
    pub update_start_block: BlockNumber,
    /// Last block covered by this record (inclusive).
    pub update_end_block: BlockNumber,
    /// Validators that are active and not yet withdrawable.
    pub current_num_validators_not_withdrawable: u64,
    /// Validators that have become withdrawable since initialization.
    pub cumulative_num_validators_withdrawable: u64,
    /// Principal withdrawn from the remote chain during the window.
    pub window_withdrawn_principal_amount: Amount,
    /// Rewards withdrawn from the remote chain during the window.
    pub window_withdrawn_reward_amount: Amount,
    /// Aggregate balance of all validators at the end of the window.
    pub current_total_validator_balance: Amount,
    /// Deposits the remote chain has processed since initialization.
    pub cumulative_processed_deposit_amount: Amount,
}

impl OracleRecord {
    /// The zero-valued bootstrap record ending at the initialization block.
    pub fn bootstrap(initialization_block: BlockNumber) -> Self {
        Self {
            update_end_block: initialization_block,
            ..Self::default()
        }
    }

    /// Total validators ever observed (withdrawable + not withdrawable).
    pub fn total_validators(&self) -> u64 {
        self.current_num_validators_not_withdrawable
            .saturating_add(self.cumulative_num_validators_withdrawable)
    }

    /// Number of blocks covered by the window, both ends inclusive.
    pub fn window_size(&self) -> u64 {
        self.update_end_block
            .saturating_sub(self.update_start_block)
            .saturating_add(1)
    }

    /// Keccak-256 over the big-endian encoding of every field, in
    /// declaration order. Two records hash equal iff all fields match.
    pub fn content_hash(&self) -> Hash {
        let mut hasher = Keccak256::new();
        hasher.update(self.update_start_block.to_be_bytes());
        hasher.update(self.update_end_block.to_be_bytes());
        hasher.update(self.current_num_validators_not_withdrawable.to_be_bytes());
        hasher.update(self.cumulative_num_validators_withdrawable.to_be_bytes());
        hasher.update(self.window_withdrawn_principal_amount.to_be_bytes());
        hasher.update(self.window_withdrawn_reward_amount.to_be_bytes());
        hasher.update(self.current_total_validator_balance.to_be_bytes());
        hasher.update(self.cumulative_processed_deposit_amount.to_be_bytes());
        hasher.finalize().into()
    }
}

/// Short hex rendering of a hash for log lines.
pub fn short_hash(hash: &Hash) -> String {
    hex::encode(&hash[..6])
}
