//! Maximum-confidence reduction.

use crate::scoring::score_key;

use super::types::RuleSet;

/// Every rule whose confidence ties the maximum. Empty in, empty out.
///
/// Ties are detected on scores quantized to `SCORE_EPSILON`, and none are
/// dropped. Canonical order is preserved.
pub fn select_max_confidence(rules: &RuleSet) -> RuleSet {
    let Some(max_key) = rules.iter().map(|r| score_key(r.confidence)).max() else {
        return RuleSet::default();
    };
    let selected: Vec<_> = rules
        .iter()
        .filter(|r| score_key(r.confidence) == max_key)
        .cloned()
        .collect();
    tracing::debug!(
        input = rules.len(),
        selected = selected.len(),
        "selected maximum-confidence rules"
    );
    RuleSet::new(selected)
}

#[cfg(test)]
mod tests {
    use basket_core::types::{ItemId, ItemIds};

    use super::*;
    use crate::rules::types::Rule;

    fn rule(a: &str, c: &str, confidence: f64, lift: f64) -> Rule {
        Rule {
            antecedent: ItemIds::from_slice(&[ItemId(0)]),
            consequent: ItemIds::from_slice(&[ItemId(1)]),
            antecedent_labels: vec![a.to_string()],
            consequent_labels: vec![c.to_string()],
            antecedent_support: 0.5,
            consequent_support: 0.5,
            support: 0.5 * confidence,
            confidence,
            lift,
            leverage: 0.0,
            conviction: 1.0,
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(select_max_confidence(&RuleSet::default()).is_empty());
    }

    #[test]
    fn test_keeps_all_ties() {
        let rules = RuleSet::new(vec![
            rule("a", "b", 0.8, 1.0),
            rule("c", "d", 1.0, 1.2),
            rule("e", "f", 1.0 - 1e-12, 0.9),
            rule("g", "h", 0.99, 3.0),
        ]);
        let selected = select_max_confidence(&rules);
        let keys: Vec<String> = selected.iter().map(|r| r.display_key()).collect();
        assert_eq!(keys, vec!["c -> d", "e -> f"]);
    }

    #[test]
    fn test_single_rule() {
        let rules = RuleSet::new(vec![rule("x", "y", 0.4, 1.0)]);
        assert_eq!(select_max_confidence(&rules).len(), 1);
    }
}
