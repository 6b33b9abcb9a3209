//! Frequent-itemset and rule-generation errors.

use super::error_code::{self, BasketErrorCode};

/// Errors that can occur while mining itemsets or deriving rules.
#[derive(Debug, thiserror::Error)]
pub enum MiningError {
    /// A subset of a frequent itemset was not found among the mined itemsets.
    /// This can only happen if the encoder or miner is broken.
    #[error("Internal inconsistency: subset ({subset}) of frequent itemset ({itemset}) was not mined")]
    InternalInconsistency { subset: String, itemset: String },

    #[error("Mining cancelled before level {level}")]
    Cancelled { level: usize },
}

impl BasketErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InternalInconsistency { .. } => error_code::INTERNAL_INCONSISTENCY,
            Self::Cancelled { .. } => error_code::CANCELLED,
        }
    }
}
