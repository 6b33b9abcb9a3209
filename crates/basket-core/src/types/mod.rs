//! Collection aliases and item identifiers.

pub mod collections;
pub mod identifiers;

pub use collections::{FxHashMap, FxHashSet, ItemIds};
pub use identifiers::ItemId;
