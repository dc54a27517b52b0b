//! Events module for the staking entry points

pub mod outgoing;

pub use outgoing::StakingEvent;
