//! Core types for the encoding stage.

use std::fmt;

use basket_core::constants::DISPLAY_SEPARATOR;
use basket_core::types::{FxHashMap, ItemId};
use serde::Serialize;

/// Distinct item labels in canonical column order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Universe {
    labels: Vec<String>,
    #[serde(skip)]
    index: FxHashMap<String, ItemId>,
}

impl Universe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of `label`, assigning the next column if it has not been seen.
    pub fn intern(&mut self, label: &str) -> ItemId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = ItemId::from(self.labels.len());
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        id
    }

    pub fn get(&self, label: &str) -> Option<ItemId> {
        self.index.get(label).copied()
    }

    /// Label of `id`. Panics if `id` was not issued by this universe.
    pub fn label(&self, id: ItemId) -> &str {
        &self.labels[id.index()]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Ids for `labels`, or `None` if any label is unknown. Result is sorted.
    pub fn ids_of<S: AsRef<str>>(&self, labels: &[S]) -> Option<Vec<ItemId>> {
        let mut ids = labels
            .iter()
            .map(|l| self.get(l.as_ref()))
            .collect::<Option<Vec<_>>>()?;
        ids.sort_unstable();
        ids.dedup();
        Some(ids)
    }

    /// Labels of `ids` in the order given.
    pub fn labels_of(&self, ids: &[ItemId]) -> Vec<String> {
        ids.iter().map(|&id| self.label(id).to_string()).collect()
    }

    /// Comma-joined display form of a sorted id list.
    pub fn render(&self, ids: &[ItemId]) -> String {
        ids.iter()
            .map(|&id| self.label(id))
            .collect::<Vec<_>>()
            .join(DISPLAY_SEPARATOR)
    }
}

/// Boolean item-presence table, row-major.
///
/// Rows are valid transactions in input order, columns are the universe's
/// items in universe order. Read-only once built.
#[derive(Debug, Clone, Serialize)]
pub struct PresenceMatrix {
    universe: Universe,
    row_count: usize,
    cells: Vec<bool>,
}

impl PresenceMatrix {
    /// Build from deduplicated id rows. Every id must belong to `universe`.
    pub(crate) fn from_rows(universe: Universe, rows: &[Vec<ItemId>]) -> Self {
        let width = universe.len();
        let mut cells = vec![false; rows.len() * width];
        for (r, row) in rows.iter().enumerate() {
            for id in row {
                cells[r * width + id.index()] = true;
            }
        }
        Self {
            universe,
            row_count: rows.len(),
            cells,
        }
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.universe.len()
    }

    /// Presence flags of one transaction, in column order.
    pub fn row(&self, row: usize) -> &[bool] {
        let width = self.column_count();
        &self.cells[row * width..(row + 1) * width]
    }

    pub fn get(&self, row: usize, item: ItemId) -> bool {
        self.cells[row * self.column_count() + item.index()]
    }

    /// Presence flags of one item across all transactions.
    pub fn column(&self, item: ItemId) -> impl Iterator<Item = bool> + '_ {
        (0..self.row_count).map(move |r| self.get(r, item))
    }

    /// Number of transactions containing `item`.
    pub fn count_column(&self, item: ItemId) -> usize {
        self.column(item).filter(|&present| present).count()
    }

    /// Whether transaction `row` contains every item of `items`.
    pub fn row_contains_all(&self, row: usize, items: &[ItemId]) -> bool {
        let cells = self.row(row);
        items.iter().all(|id| cells[id.index()])
    }

    /// Number of transactions containing every item of `items`.
    pub fn count_containing(&self, items: &[ItemId]) -> usize {
        (0..self.row_count)
            .filter(|&r| self.row_contains_all(r, items))
            .count()
    }
}

impl fmt::Display for PresenceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.universe.labels().iter().map(|l| l.len().max(1)).collect();
        let header: Vec<String> = self
            .universe
            .labels()
            .iter()
            .zip(&widths)
            .map(|(l, &w)| format!("{l:>w$}"))
            .collect();
        writeln!(f, "{}", header.join(" "))?;
        for r in 0..self.row_count {
            let cells: Vec<String> = self
                .row(r)
                .iter()
                .zip(&widths)
                .map(|(&present, &w)| format!("{:>w$}", u8::from(present)))
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Encoder output: the matrix plus the rows that were rejected.
#[derive(Debug, Clone, Serialize)]
pub struct EncodedTransactions {
    pub matrix: PresenceMatrix,
    /// Input indices of rows that were empty after trimming.
    pub rejected_rows: Vec<usize>,
}

impl EncodedTransactions {
    pub fn rejected_count(&self) -> usize {
        self.rejected_rows.len()
    }

    pub fn universe(&self) -> &Universe {
        self.matrix.universe()
    }
}
