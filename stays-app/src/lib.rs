//! Shared wiring for the booking and payment server binaries.

pub mod config;
pub mod telemetry;
