//! Transaction encoding errors.

use super::error_code::{self, BasketErrorCode};

/// Errors raised while turning raw rows into a presence matrix.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// Every row was empty after trimming.
    #[error("No valid transactions: all {rejected} rows were empty after trimming")]
    EmptyInput { rejected: usize },
}

impl BasketErrorCode for EncodeError {
    fn error_code(&self) -> &'static str {
        error_code::ENCODE_ERROR
    }
}
