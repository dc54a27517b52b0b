//! Access layer for the staking entry points

pub mod handler;

pub use handler::StakingAccessHandler;
