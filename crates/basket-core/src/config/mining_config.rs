//! Mining configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_SUPPORT};
use crate::errors::ConfigError;

/// How the generated rule set is reduced before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleMode {
    /// Keep every rule whose confidence meets `min_confidence`.
    #[default]
    Threshold,
    /// Apply `min_confidence`, then keep only the maximum-confidence rules.
    MaxConfidence,
    /// Skip the confidence floor and keep only the maximum-confidence rules.
    /// `min_confidence` is ignored in this mode.
    MaxConfidenceUnfiltered,
}

impl RuleMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::MaxConfidence => "max_confidence",
            Self::MaxConfidenceUnfiltered => "max_confidence_unfiltered",
        }
    }

    /// Whether the max-confidence reduction runs after generation.
    pub fn selects_max(&self) -> bool {
        !matches!(self, Self::Threshold)
    }

    /// Whether `min_confidence` filters generated rules.
    pub fn applies_threshold(&self) -> bool {
        !matches!(self, Self::MaxConfidenceUnfiltered)
    }
}

impl fmt::Display for RuleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "threshold" => Ok(Self::Threshold),
            "max_confidence" => Ok(Self::MaxConfidence),
            "max_confidence_unfiltered" => Ok(Self::MaxConfidenceUnfiltered),
            other => Err(ConfigError::InvalidValue {
                field: "mining.rule_mode".to_string(),
                message: format!(
                    "unknown rule mode '{other}' (expected threshold, max_confidence or max_confidence_unfiltered)"
                ),
            }),
        }
    }
}

/// Configuration for the mining subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support for a frequent itemset. Default: 0.3.
    pub min_support: Option<f64>,
    /// Minimum confidence for a rule. Default: 0.6.
    pub min_confidence: Option<f64>,
    /// Largest itemset size to mine. Unbounded when absent.
    pub max_len: Option<usize>,
    /// Rule reduction mode. Default: threshold.
    pub rule_mode: Option<RuleMode>,
}

impl MiningConfig {
    /// Returns the effective minimum support, defaulting to 0.3.
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(DEFAULT_MIN_SUPPORT)
    }

    /// Returns the effective minimum confidence, defaulting to 0.6.
    pub fn effective_min_confidence(&self) -> f64 {
        self.min_confidence.unwrap_or(DEFAULT_MIN_CONFIDENCE)
    }

    /// Returns the effective rule mode, defaulting to `Threshold`.
    pub fn effective_rule_mode(&self) -> RuleMode {
        self.rule_mode.unwrap_or_default()
    }

    /// Validate and freeze the effective values.
    pub fn resolve(&self) -> Result<MiningParams, ConfigError> {
        MiningParams::new(
            self.effective_min_support(),
            self.effective_min_confidence(),
            self.max_len,
            self.effective_rule_mode(),
        )
    }
}

/// Validated, fully explicit mining parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiningParams {
    pub min_support: f64,
    pub min_confidence: f64,
    pub max_len: Option<usize>,
    pub rule_mode: RuleMode,
}

impl MiningParams {
    /// Build parameters, rejecting thresholds outside (0, 1] and `max_len == 0`.
    pub fn new(
        min_support: f64,
        min_confidence: f64,
        max_len: Option<usize>,
        rule_mode: RuleMode,
    ) -> Result<Self, ConfigError> {
        check_unit_threshold("mining.min_support", min_support)?;
        check_unit_threshold("mining.min_confidence", min_confidence)?;
        if max_len == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "mining.max_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(Self {
            min_support,
            min_confidence,
            max_len,
            rule_mode,
        })
    }
}

/// Reject a threshold that is NaN or outside (0, 1].
pub fn check_unit_threshold(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_nan() || value <= 0.0 || value > 1.0 {
        return Err(ConfigError::out_of_unit_range(field, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_resolve() {
        let params = MiningConfig::default().resolve().unwrap();
        assert_eq!(params.min_support, DEFAULT_MIN_SUPPORT);
        assert_eq!(params.min_confidence, DEFAULT_MIN_CONFIDENCE);
        assert_eq!(params.max_len, None);
        assert_eq!(params.rule_mode, RuleMode::Threshold);
    }

    #[test]
    fn test_threshold_bounds() {
        assert!(check_unit_threshold("x", 1.0).is_ok());
        assert!(check_unit_threshold("x", 1e-6).is_ok());
        assert!(check_unit_threshold("x", 0.0).is_err());
        assert!(check_unit_threshold("x", 1.5).is_err());
        assert!(check_unit_threshold("x", -0.2).is_err());
        assert!(check_unit_threshold("x", f64::NAN).is_err());
    }

    #[test]
    fn test_zero_max_len_rejected() {
        let err = MiningParams::new(0.5, 0.5, Some(0), RuleMode::Threshold).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "mining.max_len"));
    }

    #[test]
    fn test_rule_mode_parse() {
        assert_eq!("max_confidence".parse::<RuleMode>().unwrap(), RuleMode::MaxConfidence);
        assert_eq!(" threshold ".parse::<RuleMode>().unwrap(), RuleMode::Threshold);
        assert!("greedy".parse::<RuleMode>().is_err());
        assert!(RuleMode::MaxConfidenceUnfiltered.selects_max());
        assert!(!RuleMode::MaxConfidenceUnfiltered.applies_threshold());
    }
}
