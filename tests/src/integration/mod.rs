//! Cross-subsystem tests

mod invariants;
mod lifecycle;
mod scenarios;
mod telemetry;
