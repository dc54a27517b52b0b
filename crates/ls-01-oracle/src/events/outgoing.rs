//! Outgoing events for Oracle subsystem
//!
//! Buffered by the service and drained with `OracleService::take_events`.

use crate::domain::SanityViolation;
use serde::{Deserialize, Serialize};
use shared_types::OracleRecord;

/// Audit trail of oracle state changes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OracleEvent {
    /// A record was appended to the log
    RecordAdded { index: usize, record: OracleRecord },
    /// A committed record was corrected in place
    RecordModified { index: usize, record: OracleRecord },
    /// A record was held back for review
    RecordFailedSanityCheck {
        reason: String,
        value: u128,
        bound: u128,
        record: OracleRecord,
    },
    /// The pending record was discarded
    PendingUpdateRejected { record: OracleRecord },
    /// A configuration value changed
    ConfigurationChanged { setting: String, value: u128 },
}

impl OracleEvent {
    pub fn failed_sanity_check(violation: &SanityViolation, record: OracleRecord) -> Self {
        Self::RecordFailedSanityCheck {
            reason: violation.reason().to_string(),
            value: violation.value,
            bound: violation.bound,
            record,
        }
    }

    pub fn config_changed(setting: &str, value: impl Into<u128>) -> Self {
        Self::ConfigurationChanged {
            setting: setting.to_string(),
            value: value.into(),
        }
    }
}
