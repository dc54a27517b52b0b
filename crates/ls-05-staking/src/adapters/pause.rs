//! Protocol pause switch

use ls_01_oracle::PauseSink;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Raised by the oracle on a sanity violation, lowered by a staking manager
#[derive(Debug, Default)]
pub struct PauseSwitch {
    paused: AtomicBool,
}

impl PauseSwitch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// Returns whether the switch was raised
    pub fn unpause(&self) -> bool {
        let was_paused = self.paused.swap(false, Ordering::AcqRel);
        if was_paused {
            info!("[ls-05] protocol unpaused");
        }
        was_paused
    }
}

impl PauseSink for PauseSwitch {
    fn request_pause_all(&self) {
        if !self.paused.swap(true, Ordering::AcqRel) {
            warn!("[ls-05] protocol paused");
        }
    }
}
