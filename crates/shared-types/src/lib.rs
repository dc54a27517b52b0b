//! # Shared Types Crate
//!
//! This crate contains the entities and helpers shared by every staking
//! subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `OracleRecord` is defined once and read by the
//!   oracle, the quorum aggregator, the rate engine and the redemption queue.
//! - **Floor Rounding**: all fixed-point math rounds toward zero and never
//!   panics on overflow.
//! - **Authorization Outside the Core**: services receive already-authorized
//!   callers; `RoleRegistry` is consulted only by access handlers.

pub mod clock;
pub mod entities;
pub mod errors;
pub mod events;
pub mod math;
pub mod security;

pub use clock::{BlockClock, ManualClock};
pub use entities::*;
pub use errors::*;
pub use events::{EventBuffer, MAX_BUFFERED_EVENTS};
pub use security::*;
