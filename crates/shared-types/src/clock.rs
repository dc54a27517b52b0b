//! # Block Clock
//!
//! Host-ledger height as seen by the services. Oracle finality checks and
//! redemption request timestamps both read it through this port.

use crate::entities::BlockNumber;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the current host-ledger height.
pub trait BlockClock: Send + Sync {
    /// Height of the block currently being executed.
    fn current_height(&self) -> BlockNumber;
}

/// Clock advanced explicitly by its owner (simulations and tests).
#[derive(Debug, Default)]
pub struct ManualClock {
    height: AtomicU64,
}

impl ManualClock {
    pub fn new(height: BlockNumber) -> Self {
        Self {
            height: AtomicU64::new(height),
        }
    }

    pub fn set(&self, height: BlockNumber) {
        self.height.store(height, Ordering::SeqCst);
    }

    /// Advance by `blocks` and return the new height.
    pub fn advance(&self, blocks: u64) -> BlockNumber {
        self.height.fetch_add(blocks, Ordering::SeqCst) + blocks
    }
}

impl BlockClock for ManualClock {
    fn current_height(&self) -> BlockNumber {
        self.height.load(Ordering::SeqCst)
    }
}
