//! Re-exports of performance-oriented collection types.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;

use super::identifiers::ItemId;

/// Sorted item ids of one itemset. Frequent itemsets rarely exceed 4 items.
pub type ItemIds = SmallVec<[ItemId; 4]>;
