//! Raw rows to presence matrix.

use std::time::Instant;

use basket_core::errors::EncodeError;
use basket_core::types::ItemId;

use super::types::{EncodedTransactions, PresenceMatrix, Universe};

/// Encode raw transactions.
///
/// Tokens are trimmed and empty tokens dropped; repeated items within a row
/// count once. Rows left empty are rejected and reported by index. Fails
/// with `EmptyInput` only when no row survives.
pub fn encode<R, T>(rows: &[R]) -> Result<EncodedTransactions, EncodeError>
where
    R: AsRef<[T]>,
    T: AsRef<str>,
{
    let start = Instant::now();
    let mut universe = Universe::new();
    let mut id_rows: Vec<Vec<ItemId>> = Vec::with_capacity(rows.len());
    let mut rejected_rows = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        let mut ids: Vec<ItemId> = Vec::new();
        for token in row.as_ref() {
            let token = token.as_ref().trim();
            if token.is_empty() {
                continue;
            }
            let id = universe.intern(token);
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        if ids.is_empty() {
            rejected_rows.push(idx);
        } else {
            id_rows.push(ids);
        }
    }

    if id_rows.is_empty() {
        return Err(EncodeError::EmptyInput {
            rejected: rejected_rows.len(),
        });
    }
    if !rejected_rows.is_empty() {
        tracing::warn!(
            rejected_rows = rejected_rows.len(),
            total_rows = rows.len(),
            "rejected transactions that were empty after trimming"
        );
    }

    let matrix = PresenceMatrix::from_rows(universe, &id_rows);
    tracing::debug!(
        rows = matrix.row_count(),
        columns = matrix.column_count(),
        encode_time = start.elapsed().as_micros() as u64,
        "encoded transactions"
    );

    Ok(EncodedTransactions {
        matrix,
        rejected_rows,
    })
}
