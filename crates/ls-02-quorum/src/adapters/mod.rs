//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements outbound port traits on top of the oracle and the role registry.

mod oracle_forwarder;
mod reporter_directory;

pub use oracle_forwarder::OracleForwarder;
pub use reporter_directory::RoleReporterDirectory;
