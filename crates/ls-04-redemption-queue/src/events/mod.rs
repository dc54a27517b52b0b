//! Events module for the redemption queue

pub mod outgoing;

pub use outgoing::QueueEvent;
