//! Pipeline errors.

use super::error_code::BasketErrorCode;
use super::{ConfigError, EncodeError, MiningError};

/// Errors that abort a pipeline run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),
}

impl BasketErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Encode(e) => e.error_code(),
            Self::Mining(e) => e.error_code(),
        }
    }
}
