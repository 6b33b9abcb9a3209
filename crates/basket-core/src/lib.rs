//! Shared foundations for the basket association-rule miner.
//!
//! Everything here is free of mining logic: errors, layered configuration,
//! tracing setup, cancellation, constants and collection aliases.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;
