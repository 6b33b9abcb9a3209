//! Item catalog and transaction encoder.
//!
//! Builds a first-seen-ordered universe of item labels and a boolean
//! presence matrix with one row per valid transaction.

pub mod encoder;
pub mod types;

pub use encoder::encode;
pub use types::{EncodedTransactions, PresenceMatrix, Universe};
