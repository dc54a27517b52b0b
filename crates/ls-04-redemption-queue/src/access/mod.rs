//! Role-gated entry points for the redemption queue

pub mod handler;

pub use handler::QueueAccessHandler;
