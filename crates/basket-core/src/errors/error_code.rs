//! BasketErrorCode trait for presentation-layer error reporting.

/// Every error enum implements this to expose a structured code string
/// that a presentation layer can branch on without parsing messages.
pub trait BasketErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const ENCODE_ERROR: &str = "ENCODE_ERROR";
pub const MINING_ERROR: &str = "MINING_ERROR";
pub const INTERNAL_INCONSISTENCY: &str = "INTERNAL_INCONSISTENCY";
pub const CANCELLED: &str = "CANCELLED";
