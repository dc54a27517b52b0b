//! Role-gated entry points for the Oracle subsystem

pub mod handler;

pub use handler::OracleAccessHandler;
