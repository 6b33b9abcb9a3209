//! Shared constants for the basket mining engine.

/// Basket version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tolerance for every support and confidence comparison.
///
/// Thresholds pass when `value >= threshold - SCORE_EPSILON`. Scores are
/// quantized to multiples of this value before ordering or tie detection, so
/// two confidences closer than `SCORE_EPSILON` are treated as equal.
pub const SCORE_EPSILON: f64 = 1e-9;

/// Default minimum support applied by the config layer.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.3;

/// Default minimum confidence applied by the config layer.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;

/// Separator used when an itemset is rendered as a label list.
pub const DISPLAY_SEPARATOR: &str = ", ";

/// Separator between items on one line of text input.
pub const ITEM_DELIMITER: char = ',';

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "basket.toml";
