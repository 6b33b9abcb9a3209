//! Rule generation from frequent itemsets.
//!
//! Every non-empty proper subset of a frequent itemset is tried as an
//! antecedent. That is exponential in the itemset size, which is bounded by
//! the largest frequent itemset rather than by the universe, so it is kept.

use std::time::Instant;

use basket_core::config::mining_config::check_unit_threshold;
use basket_core::errors::{ConfigError, MiningError, PipelineError};
use basket_core::types::ItemIds;

use super::types::{Rule, RuleSet};
use crate::mining::{FrequentItemsets, Itemset};
use crate::scoring::meets_threshold;

/// Generate rules with confidence ≥ `min_confidence`.
///
/// Rejects `min_confidence` outside (0, 1] before any work.
pub fn generate_rules(
    frequent: &FrequentItemsets,
    min_confidence: f64,
) -> Result<RuleSet, PipelineError> {
    let generator = RuleGenerator::new(min_confidence)?;
    Ok(generator.generate(frequent)?)
}

/// Configured rule generator.
#[derive(Debug, Clone, Copy)]
pub struct RuleGenerator {
    min_confidence: Option<f64>,
}

impl RuleGenerator {
    pub fn new(min_confidence: f64) -> Result<Self, ConfigError> {
        check_unit_threshold("mining.min_confidence", min_confidence)?;
        Ok(Self {
            min_confidence: Some(min_confidence),
        })
    }

    /// A generator that keeps every rule regardless of confidence.
    pub fn unfiltered() -> Self {
        Self {
            min_confidence: None,
        }
    }

    pub fn min_confidence(&self) -> Option<f64> {
        self.min_confidence
    }

    /// Derive and score rules. An inconsistent itemset collection aborts the
    /// whole run; no partial rule set is returned.
    pub fn generate(&self, frequent: &FrequentItemsets) -> Result<RuleSet, MiningError> {
        let start = Instant::now();
        let mut rules = Vec::new();
        let mut considered = 0usize;

        for itemset in frequent.iter().filter(|s| s.len() >= 2) {
            let n = itemset.len();
            // Masks 1..2^n-1 enumerate the non-empty proper subsets.
            for mask in 1u64..(1u64 << n) - 1 {
                considered += 1;
                let (antecedent, consequent) = split(&itemset.items, mask);
                let rule = score(frequent, itemset, antecedent, consequent)?;
                if self
                    .min_confidence
                    .map_or(true, |min| meets_threshold(rule.confidence, min))
                {
                    rules.push(rule);
                }
            }
        }

        let rules = RuleSet::new(rules);
        tracing::info!(
            considered,
            kept = rules.len(),
            min_confidence = ?self.min_confidence,
            rule_generation_time = start.elapsed().as_micros() as u64,
            "rule generation complete"
        );
        Ok(rules)
    }
}

/// Split sorted `items` by bit mask: set bits go to the antecedent.
fn split(items: &ItemIds, mask: u64) -> (ItemIds, ItemIds) {
    let mut antecedent = ItemIds::new();
    let mut consequent = ItemIds::new();
    for (i, &id) in items.iter().enumerate() {
        if mask & (1 << i) != 0 {
            antecedent.push(id);
        } else {
            consequent.push(id);
        }
    }
    (antecedent, consequent)
}

fn lookup_support(
    frequent: &FrequentItemsets,
    subset: &ItemIds,
    itemset: &Itemset,
) -> Result<f64, MiningError> {
    frequent
        .support_of(subset)
        .ok_or_else(|| MiningError::InternalInconsistency {
            subset: frequent.universe().render(subset),
            itemset: frequent.render(itemset),
        })
}

fn score(
    frequent: &FrequentItemsets,
    itemset: &Itemset,
    antecedent: ItemIds,
    consequent: ItemIds,
) -> Result<Rule, MiningError> {
    let antecedent_support = lookup_support(frequent, &antecedent, itemset)?;
    let consequent_support = lookup_support(frequent, &consequent, itemset)?;
    let support = itemset.support;
    let confidence = support / antecedent_support;
    let lift = confidence / consequent_support;
    let leverage = support - antecedent_support * consequent_support;
    let conviction = if meets_threshold(confidence, 1.0) {
        f64::INFINITY
    } else {
        (1.0 - consequent_support) / (1.0 - confidence)
    };

    let universe = frequent.universe();
    Ok(Rule {
        antecedent_labels: universe.labels_of(&antecedent),
        consequent_labels: universe.labels_of(&consequent),
        antecedent,
        consequent,
        antecedent_support,
        consequent_support,
        support,
        confidence,
        lift,
        leverage,
        conviction,
    })
}
