//! Tests for the basket configuration system.

use std::sync::Mutex;

use basket_core::config::{BasketConfig, CliOverrides, RuleMode};
use basket_core::constants::{DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_SUPPORT};
use basket_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_basket_env_vars() {
    for key in [
        "BASKET_MINING_MIN_SUPPORT",
        "BASKET_MINING_MIN_CONFIDENCE",
        "BASKET_MINING_MAX_LEN",
        "BASKET_MINING_RULE_MODE",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_basket_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("basket.toml"),
        r#"
[mining]
min_support = 0.2
min_confidence = 0.5
max_len = 3
"#,
    )
    .unwrap();

    std::env::set_var("BASKET_MINING_MIN_SUPPORT", "0.4");

    let cli = CliOverrides {
        min_confidence: Some(0.9),
        ..Default::default()
    };
    let config = BasketConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats project
    assert_eq!(config.mining.min_confidence, Some(0.9));
    // Env beats project
    assert_eq!(config.mining.min_support, Some(0.4));
    // Project beats defaults
    assert_eq!(config.mining.max_len, Some(3));

    clear_basket_env_vars();
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_basket_env_vars();

    let dir = tempdir();
    let config = BasketConfig::load(dir.path(), None).unwrap();
    let params = config.mining_params().unwrap();
    assert_eq!(params.min_support, DEFAULT_MIN_SUPPORT);
    assert_eq!(params.min_confidence, DEFAULT_MIN_CONFIDENCE);
    assert_eq!(params.rule_mode, RuleMode::Threshold);
}

#[test]
fn test_invalid_support_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_basket_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("basket.toml"), "[mining]\nmin_support = 1.5\n").unwrap();
    let err = BasketConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::ValidationFailed { ref field, .. } if field == "mining.min_support"
    ));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_basket_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("basket.toml"), "[mining\nmin_support = ").unwrap();
    let err = BasketConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_env_rule_mode() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_basket_env_vars();

    let dir = tempdir();
    std::env::set_var("BASKET_MINING_RULE_MODE", "max_confidence");
    let config = BasketConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.mining.rule_mode, Some(RuleMode::MaxConfidence));

    std::env::set_var("BASKET_MINING_RULE_MODE", "everything");
    let err = BasketConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    clear_basket_env_vars();
}

#[test]
fn test_toml_round_trip() {
    let config = BasketConfig::from_toml(
        r#"
[mining]
min_support = 0.25
rule_mode = "max_confidence_unfiltered"
"#,
    )
    .unwrap();
    assert_eq!(config.mining.rule_mode, Some(RuleMode::MaxConfidenceUnfiltered));

    let text = config.to_toml().unwrap();
    let reparsed = BasketConfig::from_toml(&text).unwrap();
    assert_eq!(reparsed.mining.min_support, Some(0.25));
    assert_eq!(reparsed.mining.rule_mode, Some(RuleMode::MaxConfidenceUnfiltered));
    assert_eq!(reparsed.mining.min_confidence, None);
}

#[test]
fn test_unknown_keys_ignored() {
    let config = BasketConfig::from_toml("[mining]\nmin_support = 0.5\nflavour = \"sweet\"\n").unwrap();
    assert_eq!(config.mining.min_support, Some(0.5));
}
