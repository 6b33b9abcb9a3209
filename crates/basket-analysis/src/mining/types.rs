//! Core types for frequent itemset mining.

use basket_core::types::{FxHashMap, ItemId, ItemIds};
use serde::Serialize;

use crate::encoding::Universe;

/// A frequent itemset: sorted item ids plus its observed support.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Itemset {
    /// Item ids in universe order.
    pub items: ItemIds,
    /// Transactions containing every item.
    pub count: usize,
    /// `count / transaction_count`.
    pub support: f64,
}

impl Itemset {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.items.binary_search(&item).is_ok()
    }
}

/// All frequent itemsets of one size, in lexicographic id order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Level {
    itemsets: Vec<Itemset>,
    #[serde(skip)]
    index: FxHashMap<ItemIds, usize>,
}

impl Level {
    /// Build a level. `itemsets` must already be sorted and share one size.
    pub(crate) fn new(itemsets: Vec<Itemset>) -> Self {
        let index = itemsets
            .iter()
            .enumerate()
            .map(|(i, set)| (set.items.clone(), i))
            .collect();
        Self { itemsets, index }
    }

    pub fn itemsets(&self) -> &[Itemset] {
        &self.itemsets
    }

    pub fn get(&self, items: &[ItemId]) -> Option<&Itemset> {
        self.index.get(items).map(|&i| &self.itemsets[i])
    }

    pub fn contains(&self, items: &[ItemId]) -> bool {
        self.index.contains_key(items)
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }
}

/// Display row: comma-joined labels and support.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemsetRow {
    pub items: String,
    pub support: f64,
}

/// Miner output. Levels are stored by size; `levels()[0]` holds the 1-itemsets.
#[derive(Debug, Clone, Serialize)]
pub struct FrequentItemsets {
    universe: Universe,
    transaction_count: usize,
    levels: Vec<Level>,
}

impl FrequentItemsets {
    pub(crate) fn new(universe: Universe, transaction_count: usize, levels: Vec<Level>) -> Self {
        Self {
            universe,
            transaction_count,
            levels,
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn transaction_count(&self) -> usize {
        self.transaction_count
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Frequent itemsets of size `k` (1-based).
    pub fn level(&self, k: usize) -> Option<&Level> {
        k.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    /// Every itemset, smallest first, lexicographic within a size.
    pub fn iter(&self) -> impl Iterator<Item = &Itemset> {
        self.levels.iter().flat_map(|l| l.itemsets.iter())
    }

    pub fn len(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest itemset size found, 0 when empty.
    pub fn max_size(&self) -> usize {
        self.levels.iter().rposition(|l| !l.is_empty()).map_or(0, |i| i + 1)
    }

    /// Look up a sorted id list.
    pub fn get(&self, items: &[ItemId]) -> Option<&Itemset> {
        self.level(items.len())?.get(items)
    }

    pub fn support_of(&self, items: &[ItemId]) -> Option<f64> {
        self.get(items).map(|s| s.support)
    }

    /// Look up by labels in any order.
    pub fn get_by_labels<S: AsRef<str>>(&self, labels: &[S]) -> Option<&Itemset> {
        let ids = self.universe.ids_of(labels)?;
        self.get(&ids)
    }

    pub fn render(&self, itemset: &Itemset) -> String {
        self.universe.render(&itemset.items)
    }

    pub fn labels(&self, itemset: &Itemset) -> Vec<String> {
        self.universe.labels_of(&itemset.items)
    }

    /// Rows ready for tabular display.
    pub fn display_rows(&self) -> Vec<ItemsetRow> {
        self.iter()
            .map(|set| ItemsetRow {
                items: self.render(set),
                support: set.support,
            })
            .collect()
    }
}
