//! Top-level basket configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::mining_config::{check_unit_threshold, MiningParams, RuleMode};
use super::MiningConfig;
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`BASKET_*`)
/// 3. Project config (`basket.toml` in project root)
/// 4. User config (`~/.basket/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BasketConfig {
    pub mining: MiningConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_support: Option<f64>,
    pub min_confidence: Option<f64>,
    pub max_len: Option<usize>,
    pub rule_mode: Option<RuleMode>,
}

impl BasketConfig {
    /// Load configuration with layered resolution, then validate it.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values that are explicitly set.
    pub fn validate(config: &BasketConfig) -> Result<(), ConfigError> {
        if let Some(v) = config.mining.min_support {
            check_unit_threshold("mining.min_support", v)?;
        }
        if let Some(v) = config.mining.min_confidence {
            check_unit_threshold("mining.min_confidence", v)?;
        }
        if config.mining.max_len == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "mining.max_len".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Validated parameters for a mining run.
    pub fn mining_params(&self) -> Result<MiningParams, ConfigError> {
        self.mining.resolve()
    }

    /// Returns the user config path: `~/.basket/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut BasketConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BasketConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut BasketConfig, other: &BasketConfig) {
        if other.mining.min_support.is_some() {
            base.mining.min_support = other.mining.min_support;
        }
        if other.mining.min_confidence.is_some() {
            base.mining.min_confidence = other.mining.min_confidence;
        }
        if other.mining.max_len.is_some() {
            base.mining.max_len = other.mining.max_len;
        }
        if other.mining.rule_mode.is_some() {
            base.mining.rule_mode = other.mining.rule_mode;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BASKET_MINING_MIN_SUPPORT`, `BASKET_MINING_RULE_MODE`, etc.
    ///
    /// Numbers that fail to parse are ignored; an unknown rule mode is an error.
    fn apply_env_overrides(config: &mut BasketConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("BASKET_MINING_MIN_SUPPORT") {
            if let Ok(v) = val.parse::<f64>() {
                config.mining.min_support = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_MINING_MIN_CONFIDENCE") {
            if let Ok(v) = val.parse::<f64>() {
                config.mining.min_confidence = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_MINING_MAX_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.mining.max_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BASKET_MINING_RULE_MODE") {
            config.mining.rule_mode = Some(val.parse()?);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut BasketConfig, cli: &CliOverrides) {
        if let Some(v) = cli.min_support {
            config.mining.min_support = Some(v);
        }
        if let Some(v) = cli.min_confidence {
            config.mining.min_confidence = Some(v);
        }
        if let Some(v) = cli.max_len {
            config.mining.max_len = Some(v);
        }
        if let Some(v) = cli.rule_mode {
            config.mining.rule_mode = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Returns the user-level basket config directory: `~/.basket/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".basket"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
