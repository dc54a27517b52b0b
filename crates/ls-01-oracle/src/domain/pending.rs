//! Pending-update slot and the oracle state machine
//!
//! ```text
//! [NORMAL] ──record fails sanity──→ [AWAITING_RESOLUTION]
//!     ↑                                   │
//!     ├────────── accept (commit) ────────┤
//!     └────────── reject (discard) ───────┘
//! ```
//!
//! While awaiting resolution no new record is accepted.

use super::sanity::SanityViolation;
use serde::{Deserialize, Serialize};
use shared_types::OracleRecord;

/// Oracle state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OracleState {
    /// No pending update; new records are accepted
    #[default]
    Normal,
    /// A record failed sanity checks and awaits a privileged decision
    AwaitingResolution,
}

/// A structurally valid record held back by a sanity violation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingUpdate {
    pub record: OracleRecord,
    pub violation: SanityViolation,
}

/// At most one pending update
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingSlot {
    update: Option<PendingUpdate>,
}

impl PendingSlot {
    pub fn state(&self) -> OracleState {
        match self.update {
            Some(_) => OracleState::AwaitingResolution,
            None => OracleState::Normal,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.update.is_some()
    }

    pub fn get(&self) -> Option<&PendingUpdate> {
        self.update.as_ref()
    }

    /// Occupy the slot. Callers check `is_occupied` first.
    pub(crate) fn set(&mut self, update: PendingUpdate) {
        debug_assert!(self.update.is_none(), "pending slot already occupied");
        self.update = Some(update);
    }

    pub(crate) fn take(&mut self) -> Option<PendingUpdate> {
        self.update.take()
    }
}
