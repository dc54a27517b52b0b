//! # ls-02-quorum
//!
//! Collects independent reporter submissions per window and forwards a
//! record to the oracle once enough reporters agree on its content hash.
//!
//! ## Architecture
//!
//! ```text
//! Reporter A ──┐
//! Reporter B ──┼──submit_report──→ Quorum (2) ──receive_record──→ Oracle (1)
//! Reporter C ──┘        │
//!                       └── tally[(block, hash)] += 1
//! ```
//!
//! ## Quorum Rule
//!
//! ```text
//! count >= absolute_threshold
//!   AND count * 10_000 >= total_reporters * relative_threshold_bps
//! ```
//!
//! `total_reporters` is read from the reporter directory on every call, not
//! snapshotted per block. Forwarding is skipped once the oracle has committed
//! or pended the window, and a refusal by the oracle never fails the
//! submission.

pub mod access;
pub mod adapters;
pub mod domain;
pub mod error;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod types;

pub use access::QuorumAccessHandler;
pub use adapters::{OracleForwarder, RoleReporterDirectory};
pub use domain::{quorum_reached, ReportTally, TallyChange};
pub use error::{QuorumError, QuorumResult};
pub use events::QuorumEvent;
pub use ports::inbound::{QuorumApi, QuorumOutcome};
pub use ports::outbound::{RecordSink, ReporterDirectory};
pub use service::QuorumService;
pub use types::QuorumConfig;
