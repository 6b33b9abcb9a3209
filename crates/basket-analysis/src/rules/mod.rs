//! Association rules: generation from frequent itemsets and
//! maximum-confidence selection.

pub mod generator;
pub mod selector;
pub mod types;

pub use generator::{generate_rules, RuleGenerator};
pub use selector::select_max_confidence;
pub use types::{Rule, RuleSet};
