//! Ports module for Quorum subsystem

pub mod inbound;
pub mod outbound;

pub use inbound::{QuorumApi, QuorumOutcome};
pub use outbound::{RecordSink, ReporterDirectory};
