//! Ports module for the staking entry points

pub mod inbound;
pub mod outbound;

pub use inbound::StakingApi;
pub use outbound::ShareToken;
