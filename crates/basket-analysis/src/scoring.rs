//! Epsilon-tolerant comparisons shared by every stage.
//!
//! All thresholds and orderings go through these helpers so that a support
//! of `0.3000000000000001` and a threshold of `0.3` agree on both sides of
//! the boundary.

use basket_core::constants::SCORE_EPSILON;

/// `value >= threshold`, allowing `value` to fall short by `SCORE_EPSILON`.
pub fn meets_threshold(value: f64, threshold: f64) -> bool {
    value >= threshold - SCORE_EPSILON
}

/// Quantize a score to an integer multiple of `SCORE_EPSILON`.
///
/// Gives a total order on finite scores with explicit tie detection:
/// two scores are tied iff their keys are equal.
pub fn score_key(value: f64) -> i64 {
    (value / SCORE_EPSILON).round() as i64
}

/// Whether two scores are equal after quantization.
pub fn scores_tie(a: f64, b: f64) -> bool {
    score_key(a) == score_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary_rounding() {
        let support = 1.0 / 3.0 + 2.0 / 3.0 - 2.0 / 3.0;
        assert!(meets_threshold(support, 1.0 / 3.0));
        assert!(meets_threshold(0.3 - 1e-12, 0.3));
        assert!(!meets_threshold(0.29, 0.3));
    }

    #[test]
    fn test_score_key_ties() {
        assert!(scores_tie(0.1 + 0.2, 0.3));
        assert!(!scores_tie(0.3, 0.3 + 1e-6));
        assert!(score_key(1.0) > score_key(0.999));
    }
}
