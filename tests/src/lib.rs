//! # Liquid Staking Test Suite
//!
//! Unified test crate for the staking core.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # Full protocol wiring through the access handlers
//! └── integration/
//!     ├── scenarios.rs  # Reference scenarios: first window, quorum, funding
//!     ├── lifecycle.rs  # Stake → report → unstake → claim across subsystems
//!     ├── invariants.rs # Seeded randomized operation sequences
//!     └── telemetry.rs  # Metrics exposition and logging configuration
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ls-tests
//! cargo test -p ls-tests integration::invariants::
//! cargo bench -p ls-tests
//! ```

pub mod harness;
pub mod integration;

pub use harness::{ProtocolConfig, ProtocolHarness};
