//! Role-gated entry points for the Quorum subsystem

pub mod handler;

pub use handler::QuorumAccessHandler;
