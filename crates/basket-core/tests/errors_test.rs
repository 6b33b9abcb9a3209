//! Tests for the basket error handling system.

use basket_core::errors::error_code::{self, BasketErrorCode};
use basket_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let encode = EncodeError::EmptyInput { rejected: 3 };
    assert_eq!(encode.error_code(), error_code::ENCODE_ERROR);

    let config = ConfigError::out_of_unit_range("mining.min_support", 1.5);
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let inconsistency = MiningError::InternalInconsistency {
        subset: "Milk".into(),
        itemset: "Milk, Bread".into(),
    };
    assert_eq!(inconsistency.error_code(), error_code::INTERNAL_INCONSISTENCY);

    let cancelled = MiningError::Cancelled { level: 3 };
    assert_eq!(cancelled.error_code(), error_code::CANCELLED);
}

#[test]
fn test_from_conversions() {
    let pipeline: PipelineError = EncodeError::EmptyInput { rejected: 1 }.into();
    assert!(matches!(pipeline, PipelineError::Encode(EncodeError::EmptyInput { rejected: 1 })));

    let pipeline: PipelineError = ConfigError::FileNotFound { path: "/tmp/x".into() }.into();
    assert!(matches!(pipeline, PipelineError::Config(_)));

    let pipeline: PipelineError = MiningError::Cancelled { level: 2 }.into();
    assert!(matches!(pipeline, PipelineError::Mining(_)));
}

#[test]
fn test_pipeline_error_forwards_inner_code() {
    let pipeline: PipelineError = MiningError::InternalInconsistency {
        subset: "Jam".into(),
        itemset: "Bread, Jam".into(),
    }
    .into();
    assert_eq!(pipeline.error_code(), error_code::INTERNAL_INCONSISTENCY);

    let pipeline: PipelineError = ConfigError::out_of_unit_range("mining.min_confidence", 0.0).into();
    assert_eq!(pipeline.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_coded_string_format() {
    let err = EncodeError::EmptyInput { rejected: 2 };
    let s = err.coded_string();
    assert!(s.starts_with("[ENCODE_ERROR] "), "got {s}");
    assert!(s.contains("all 2 rows"));
}

#[test]
fn test_inconsistency_message_names_both_sets() {
    let err = MiningError::InternalInconsistency {
        subset: "Butter".into(),
        itemset: "Milk, Bread, Butter".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("(Butter)"), "got {msg}");
    assert!(msg.contains("(Milk, Bread, Butter)"), "got {msg}");
}
