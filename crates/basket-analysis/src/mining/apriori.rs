//! Level-wise Apriori search over a presence matrix.

use std::time::Instant;

use basket_core::config::mining_config::check_unit_threshold;
use basket_core::errors::{ConfigError, MiningError};
use basket_core::traits::Cancellable;
use basket_core::types::{ItemId, ItemIds};
use smallvec::smallvec;

use super::candidates;
use super::types::{FrequentItemsets, Itemset, Level};
use crate::encoding::PresenceMatrix;
use crate::scoring::meets_threshold;

/// Mine every itemset with support ≥ `min_support`.
///
/// Rejects `min_support` outside (0, 1] before touching the matrix.
pub fn mine(matrix: &PresenceMatrix, min_support: f64) -> Result<FrequentItemsets, ConfigError> {
    Ok(AprioriMiner::new(min_support)?.mine(matrix))
}

/// Configured Apriori miner. Holds no state between runs.
#[derive(Debug, Clone, Copy)]
pub struct AprioriMiner {
    min_support: f64,
    max_len: Option<usize>,
}

impl AprioriMiner {
    pub fn new(min_support: f64) -> Result<Self, ConfigError> {
        check_unit_threshold("mining.min_support", min_support)?;
        Ok(Self {
            min_support,
            max_len: None,
        })
    }

    /// Stop after itemsets of `max_len` items.
    pub fn with_max_len(mut self, max_len: usize) -> Result<Self, ConfigError> {
        if max_len == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "mining.max_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        self.max_len = Some(max_len);
        Ok(self)
    }

    pub fn min_support(&self) -> f64 {
        self.min_support
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Run to completion.
    pub fn mine(&self, matrix: &PresenceMatrix) -> FrequentItemsets {
        let mut search = LevelSearch::new(*self, matrix);
        while !search.is_done() {
            search.step();
        }
        search.finish()
    }

    /// Run, checking `token` before each level.
    pub fn mine_cancellable(
        &self,
        matrix: &PresenceMatrix,
        token: &dyn Cancellable,
    ) -> Result<FrequentItemsets, MiningError> {
        let mut search = LevelSearch::new(*self, matrix);
        while !search.is_done() {
            if token.is_cancelled() {
                let level = search.next_level();
                tracing::info!(level, "mining cancelled");
                return Err(MiningError::Cancelled { level });
            }
            search.step();
        }
        Ok(search.finish())
    }
}

/// In-progress search: the levels mined so far and whether the next one can exist.
struct LevelSearch<'m> {
    miner: AprioriMiner,
    matrix: &'m PresenceMatrix,
    max_k: usize,
    levels: Vec<Level>,
    exhausted: bool,
}

impl<'m> LevelSearch<'m> {
    fn new(miner: AprioriMiner, matrix: &'m PresenceMatrix) -> Self {
        let width = matrix.column_count();
        Self {
            miner,
            matrix,
            max_k: miner.max_len.map_or(width, |m| m.min(width)),
            levels: Vec::new(),
            exhausted: false,
        }
    }

    fn next_level(&self) -> usize {
        self.levels.len() + 1
    }

    fn is_done(&self) -> bool {
        self.exhausted || self.next_level() > self.max_k
    }

    /// Mine level `next_level()`. An empty level ends the search.
    fn step(&mut self) {
        let k = self.next_level();
        let total = self.matrix.row_count();
        let width = self.matrix.column_count();
        let start = Instant::now();

        let (candidates, generated, pruned) = match self.levels.last() {
            None => {
                let singles: Vec<ItemIds> =
                    (0..width).map(|i| smallvec![ItemId::from(i)]).collect();
                (singles, width, 0)
            }
            Some(prev) => {
                let batch = candidates::generate(prev);
                (batch.candidates, batch.generated, batch.pruned)
            }
        };

        let frequent: Vec<Itemset> = candidates
            .into_iter()
            .filter_map(|items| {
                let count = self.matrix.count_containing(&items);
                let support = count as f64 / total as f64;
                meets_threshold(support, self.miner.min_support).then_some(Itemset {
                    items,
                    count,
                    support,
                })
            })
            .collect();

        tracing::debug!(
            level = k,
            candidates_generated = generated,
            candidates_pruned = pruned,
            frequent = frequent.len(),
            level_time = start.elapsed().as_micros() as u64,
            "apriori level complete"
        );

        if frequent.is_empty() {
            self.exhausted = true;
        } else {
            self.levels.push(Level::new(frequent));
        }
    }

    fn finish(self) -> FrequentItemsets {
        let result = FrequentItemsets::new(
            self.matrix.universe().clone(),
            self.matrix.row_count(),
            self.levels,
        );
        tracing::info!(
            itemsets = result.len(),
            max_size = result.max_size(),
            min_support = self.miner.min_support,
            "frequent itemset mining complete"
        );
        result
    }
}
