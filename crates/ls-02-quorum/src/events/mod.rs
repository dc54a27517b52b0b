//! Events module for Quorum subsystem

pub mod outgoing;

pub use outgoing::QuorumEvent;
