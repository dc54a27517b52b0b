//! # Error Types
//!
//! Defines error types used across subsystems.

use crate::entities::Address;
use crate::security::Role;
use thiserror::Error;

/// Errors raised by the permission layer before a call reaches a service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// Caller does not hold the role required for this entry point.
    #[error("Unauthorized: account 0x{} lacks role {role:?}", hex::encode(.account))]
    Unauthorized { account: Address, role: Role },
}
