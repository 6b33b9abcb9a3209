//! Core types for association rules.

use std::cmp::Reverse;
use std::fmt;

use basket_core::constants::DISPLAY_SEPARATOR;
use basket_core::types::ItemIds;
use serde::Serialize;

use crate::scoring::score_key;

/// A scored rule `antecedent -> consequent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub antecedent: ItemIds,
    pub consequent: ItemIds,
    pub antecedent_labels: Vec<String>,
    pub consequent_labels: Vec<String>,
    pub antecedent_support: f64,
    pub consequent_support: f64,
    /// Support of antecedent ∪ consequent.
    pub support: f64,
    /// `support / antecedent_support`.
    pub confidence: f64,
    /// `confidence / consequent_support`.
    pub lift: f64,
    /// `support - antecedent_support * consequent_support`.
    pub leverage: f64,
    /// `(1 - consequent_support) / (1 - confidence)`; infinite at confidence 1.
    pub conviction: f64,
}

impl Rule {
    pub fn antecedent_display(&self) -> String {
        self.antecedent_labels.join(DISPLAY_SEPARATOR)
    }

    pub fn consequent_display(&self) -> String {
        self.consequent_labels.join(DISPLAY_SEPARATOR)
    }

    /// Stable textual key, the last tie-breaker in rule ordering.
    pub fn display_key(&self) -> String {
        format!("{} -> {}", self.antecedent_display(), self.consequent_display())
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} -> {{{}}} (support {:.3}, confidence {:.3}, lift {:.3})",
            self.antecedent_display(),
            self.consequent_display(),
            self.support,
            self.confidence,
            self.lift
        )
    }
}

/// Rules in canonical order: confidence descending, lift descending, then
/// display key ascending. Scores compare after quantization to
/// `SCORE_EPSILON`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Sort `rules` into canonical order.
    pub fn new(mut rules: Vec<Rule>) -> Self {
        rules.sort_by_cached_key(|r| {
            (
                Reverse(score_key(r.confidence)),
                Reverse(score_key(r.lift)),
                r.display_key(),
            )
        });
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn into_vec(self) -> Vec<Rule> {
        self.rules
    }

    /// Find a rule by its labels, each side in any order.
    pub fn find<S: AsRef<str>>(&self, antecedent: &[S], consequent: &[S]) -> Option<&Rule> {
        let same = |labels: &[String], wanted: &[S]| {
            labels.len() == wanted.len()
                && wanted.iter().all(|w| labels.iter().any(|l| l == w.as_ref()))
        };
        self.rules
            .iter()
            .find(|r| same(&r.antecedent_labels, antecedent) && same(&r.consequent_labels, consequent))
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl IntoIterator for RuleSet {
    type Item = Rule;
    type IntoIter = std::vec::IntoIter<Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.into_iter()
    }
}
