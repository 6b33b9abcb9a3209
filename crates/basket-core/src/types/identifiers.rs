//! Item identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Column index of an item in the encoder's universe.
///
/// Ids are handed out in first-seen order, so sorting ids sorts items into
/// the universe's canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    /// The id as a column index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for ItemId {
    fn from(index: usize) -> Self {
        Self(index as u32)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
