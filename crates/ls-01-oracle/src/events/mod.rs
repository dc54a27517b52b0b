//! Events module for Oracle subsystem

pub mod outgoing;

pub use outgoing::OracleEvent;
