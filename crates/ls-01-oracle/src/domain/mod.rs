//! Domain module for Oracle subsystem
//!
//! ## Core Modules
//! - record_store: Append-only record log with bootstrap record
//! - validation: Structural checks and the finality horizon
//! - sanity: Plausibility bounds between consecutive records
//! - pending: Pending-update slot and oracle state

pub mod pending;
pub mod record_store;
pub mod sanity;
pub mod validation;

pub use pending::{OracleState, PendingSlot, PendingUpdate};
pub use record_store::RecordStore;
pub use sanity::{balance_bounds, sanity_check, BalanceBounds, SanityViolation, ViolationKind};
pub use validation::{check_window_final, validate_update, ExternalCounters};
