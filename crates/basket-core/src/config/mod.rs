//! Configuration system for basket.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod basket_config;
pub mod mining_config;

pub use basket_config::{BasketConfig, CliOverrides};
pub use mining_config::{MiningConfig, MiningParams, RuleMode};
