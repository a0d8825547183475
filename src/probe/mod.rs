//! Probe module - scheduled liveness check of the gateway

pub mod health_check;

pub use health_check::{exit_code, HealthProbe, ProbeOutcome, ProbeReport};
