//! Market-basket analysis engine.
//!
//! Raw transactions flow through four pure stages:
//! [`encoding`] builds a presence matrix, [`mining`] finds frequent itemsets
//! level by level, [`rules`] derives scored association rules and optionally
//! reduces them to the maximum-confidence subset. [`pipeline`] wires the
//! stages together and reports empty outcomes distinctly from errors.

pub mod encoding;
pub mod ingest;
pub mod mining;
pub mod pipeline;
pub mod rules;
pub mod scoring;

pub use encoding::{encode, EncodedTransactions, PresenceMatrix, Universe};
pub use mining::{mine, AprioriMiner, FrequentItemsets, Itemset};
pub use pipeline::{AnalysisPipeline, AnalysisReport, AnalysisStatus};
pub use rules::{generate_rules, select_max_confidence, Rule, RuleGenerator, RuleSet};
