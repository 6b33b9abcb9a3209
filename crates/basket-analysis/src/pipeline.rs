//! Encoder → Miner → Rule Generator → optional Selector.
//!
//! Configuration is validated before any row is touched. Empty outcomes are
//! reported through [`AnalysisStatus`], never as errors.

use std::fmt;

use basket_core::config::{BasketConfig, MiningParams};
use basket_core::errors::{ConfigError, PipelineError};
use basket_core::traits::CancellationToken;
use serde::Serialize;

use crate::encoding::{encode, PresenceMatrix};
use crate::ingest::parse_text;
use crate::mining::{AprioriMiner, FrequentItemsets, ItemsetRow};
use crate::rules::{select_max_confidence, RuleGenerator, RuleSet};

/// How a run ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    /// At least one rule survived.
    Complete,
    /// No itemset met the support threshold.
    NoFrequentItemsets,
    /// Itemsets were found but no rule survived.
    NoRulesFound,
}

impl AnalysisStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::NoFrequentItemsets => "no_frequent_itemsets",
            Self::NoRulesFound => "no_rules_found",
        }
    }
}

impl fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a presentation layer needs from one run.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub params: MiningParams,
    pub matrix: PresenceMatrix,
    /// Input indices of rows rejected as empty.
    pub rejected_rows: Vec<usize>,
    pub itemsets: FrequentItemsets,
    pub rules: RuleSet,
    /// Maximum-confidence subset, present when the rule mode asks for it.
    pub selected: Option<RuleSet>,
    pub status: AnalysisStatus,
}

impl AnalysisReport {
    pub fn itemset_rows(&self) -> Vec<ItemsetRow> {
        self.itemsets.display_rows()
    }

    /// The rules a caller should show: the selection if one was made.
    pub fn final_rules(&self) -> &RuleSet {
        self.selected.as_ref().unwrap_or(&self.rules)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Stateless pipeline over explicit parameters.
#[derive(Debug, Clone)]
pub struct AnalysisPipeline {
    params: MiningParams,
    cancellation: Option<CancellationToken>,
}

impl AnalysisPipeline {
    pub fn new(params: MiningParams) -> Self {
        Self {
            params,
            cancellation: None,
        }
    }

    pub fn from_config(config: &BasketConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.mining_params()?))
    }

    /// Abort between miner levels once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn params(&self) -> &MiningParams {
        &self.params
    }

    /// Parse comma-separated text and run.
    pub fn run_text(&self, text: &str) -> Result<AnalysisReport, PipelineError> {
        self.run(&parse_text(text))
    }

    /// Run every stage over raw token rows.
    pub fn run<R, T>(&self, rows: &[R]) -> Result<AnalysisReport, PipelineError>
    where
        R: AsRef<[T]>,
        T: AsRef<str>,
    {
        let params = MiningParams::new(
            self.params.min_support,
            self.params.min_confidence,
            self.params.max_len,
            self.params.rule_mode,
        )?;
        let mut miner = AprioriMiner::new(params.min_support)?;
        if let Some(max_len) = params.max_len {
            miner = miner.with_max_len(max_len)?;
        }
        let generator = if params.rule_mode.applies_threshold() {
            RuleGenerator::new(params.min_confidence)?
        } else {
            RuleGenerator::unfiltered()
        };

        let span = tracing::info_span!("analysis", rule_mode = %params.rule_mode);
        let _guard = span.enter();

        let encoded = encode(rows)?;
        let itemsets = match &self.cancellation {
            Some(token) => miner.mine_cancellable(&encoded.matrix, token)?,
            None => miner.mine(&encoded.matrix),
        };

        let rules = if itemsets.is_empty() {
            RuleSet::default()
        } else {
            generator.generate(&itemsets)?
        };
        let selected = params
            .rule_mode
            .selects_max()
            .then(|| select_max_confidence(&rules));

        let status = if itemsets.is_empty() {
            AnalysisStatus::NoFrequentItemsets
        } else if rules.is_empty() {
            AnalysisStatus::NoRulesFound
        } else {
            AnalysisStatus::Complete
        };
        tracing::info!(
            %status,
            rows = encoded.matrix.row_count(),
            rejected_rows = encoded.rejected_count(),
            itemsets = itemsets.len(),
            rules = rules.len(),
            "analysis finished"
        );

        Ok(AnalysisReport {
            params,
            matrix: encoded.matrix,
            rejected_rows: encoded.rejected_rows,
            itemsets,
            rules,
            selected,
            status,
        })
    }
}
