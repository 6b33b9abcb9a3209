//! Text ingestion: one cart per line, items separated by commas.
//!
//! This is deliberately thin. Tokens are returned untrimmed and blank lines
//! are kept, so the encoder can report them as rejected rows.

use basket_core::constants::ITEM_DELIMITER;

/// Split pasted text into raw token rows.
///
/// Leading and trailing whitespace of the whole text is ignored, so a
/// trailing newline does not produce an extra row.
pub fn parse_text(text: &str) -> Vec<Vec<String>> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.split(ITEM_DELIMITER).map(str::to_string).collect())
        .collect()
}
