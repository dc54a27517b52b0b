//! Domain layer for the Quorum subsystem

pub mod tally;

pub use tally::{quorum_reached, ReportTally, TallyChange};
