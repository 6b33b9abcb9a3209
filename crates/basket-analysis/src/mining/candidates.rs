//! Candidate generation: prefix join plus subset pruning.

use std::collections::BTreeSet;

use basket_core::types::ItemIds;

use super::types::Level;

/// Candidates for the next level.
#[derive(Debug, Default)]
pub struct CandidateBatch {
    /// Surviving candidates in lexicographic order.
    pub candidates: Vec<ItemIds>,
    /// Distinct unions produced by the join step.
    pub generated: usize,
    /// Unions discarded because a (k-1)-subset was not frequent.
    pub pruned: usize,
}

/// Build k-candidates from the frequent (k-1)-itemsets in `prev`.
///
/// Two (k-1)-itemsets join when they share their first k-2 items; since both
/// are sorted, that is exactly the pairs sharing k-2 items whose union has k.
/// `prev` must be sorted, so joinable itemsets sit next to each other.
pub fn generate(prev: &Level) -> CandidateBatch {
    let sets = prev.itemsets();
    let mut unions: BTreeSet<ItemIds> = BTreeSet::new();

    for (i, a) in sets.iter().enumerate() {
        let prefix_len = a.items.len() - 1;
        for b in &sets[i + 1..] {
            if a.items[..prefix_len] != b.items[..prefix_len] {
                break;
            }
            let mut union = a.items.clone();
            union.push(b.items[prefix_len]);
            unions.insert(union);
        }
    }

    let generated = unions.len();
    let candidates: Vec<ItemIds> = unions
        .into_iter()
        .filter(|candidate| all_subsets_frequent(candidate, prev))
        .collect();

    CandidateBatch {
        pruned: generated - candidates.len(),
        generated,
        candidates,
    }
}

/// Whether every (k-1)-subset of `candidate` is in `prev`.
///
/// The subsets dropping one of the last two items are the join parents and
/// are skipped.
fn all_subsets_frequent(candidate: &ItemIds, prev: &Level) -> bool {
    let k = candidate.len();
    if k < 3 {
        return true;
    }
    let mut subset = ItemIds::with_capacity(k - 1);
    (0..k - 2).all(|skip| {
        subset.clear();
        subset.extend(
            candidate
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &id)| id),
        );
        prev.contains(&subset)
    })
}
