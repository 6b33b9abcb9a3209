//! Frequent itemset mining: level-wise Apriori.
//!
//! Level 1 counts single columns. Each later level joins frequent
//! (k-1)-itemsets sharing a (k-2)-prefix, prunes candidates with an
//! infrequent (k-1)-subset, then counts the survivors against the matrix.

pub mod apriori;
pub mod candidates;
pub mod types;

pub use apriori::{mine, AprioriMiner};
pub use types::{FrequentItemsets, Itemset, ItemsetRow, Level};
