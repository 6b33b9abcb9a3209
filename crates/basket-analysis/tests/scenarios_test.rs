//! End-to-end market-basket scenarios.

use basket_analysis::ingest::parse_text;
use basket_analysis::{
    encode, generate_rules, mine, select_max_confidence, AnalysisPipeline, AnalysisStatus,
};
use basket_core::config::{BasketConfig, MiningParams, RuleMode};
use basket_core::errors::{BasketErrorCode, EncodeError, PipelineError};

fn carts() -> Vec<Vec<&'static str>> {
    vec![
        vec!["Milk", "Bread", "Butter"],
        vec!["Bread", "Jam"],
        vec!["Milk", "Bread"],
    ]
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-3
}

#[test]
fn test_frequent_itemsets_at_point_three() {
    let encoded = encode(&carts()).unwrap();
    let itemsets = mine(&encoded.matrix, 0.3).unwrap();

    let support = |labels: &[&str]| itemsets.get_by_labels(labels).unwrap().support;
    assert!(approx(support(&["Milk"]), 0.667));
    assert!(approx(support(&["Bread"]), 1.0));
    assert!(approx(support(&["Milk", "Bread"]), 0.667));
    assert!(approx(support(&["Butter"]), 0.333));
    assert!(approx(support(&["Jam"]), 0.333));
}

#[test]
fn test_milk_bread_rule_and_selection() {
    let encoded = encode(&carts()).unwrap();
    let itemsets = mine(&encoded.matrix, 0.3).unwrap();
    let rules = generate_rules(&itemsets, 0.6).unwrap();

    let rule = rules.find(&["Milk"], &["Bread"]).expect("Milk -> Bread");
    assert!(approx(rule.confidence, 1.0));
    assert!(approx(rule.lift, 1.0));

    let selected = select_max_confidence(&rules);
    assert!(selected.find(&["Milk"], &["Bread"]).is_some());
}

#[test]
fn test_full_support_only_bread() {
    let encoded = encode(&carts()).unwrap();
    let itemsets = mine(&encoded.matrix, 1.0).unwrap();
    assert_eq!(itemsets.len(), 1);
    assert!(itemsets.get_by_labels(&["Bread"]).is_some());

    let rules = generate_rules(&itemsets, 0.6).unwrap();
    assert!(rules.is_empty());
}

#[test]
fn test_blank_rows_rejected_and_counted() {
    let rows = parse_text("Milk,Bread\n,,\nBread,Jam");
    let encoded = encode(&rows).unwrap();
    assert_eq!(encoded.rejected_count(), 1);
    assert_eq!(encoded.rejected_rows, vec![1]);
    assert_eq!(encoded.matrix.row_count(), 2);

    let all_blank = parse_text(",,\n , \n,");
    let err = encode(&all_blank).unwrap_err();
    assert!(matches!(err, EncodeError::EmptyInput { rejected: 3 }));
}

#[test]
fn test_invalid_support_rejected_before_matrix() {
    let config = BasketConfig::from_toml("[mining]\nmin_support = 1.5\n").unwrap();
    let err = AnalysisPipeline::from_config(&config).unwrap_err();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    assert!(MiningParams::new(1.5, 0.6, None, RuleMode::Threshold).is_err());
}

#[test]
fn test_pipeline_matches_stagewise_result() {
    let params = MiningParams::new(0.3, 0.6, None, RuleMode::MaxConfidence).unwrap();
    let report = AnalysisPipeline::new(params).run(&carts()).unwrap();

    let encoded = encode(&carts()).unwrap();
    let itemsets = mine(&encoded.matrix, 0.3).unwrap();
    let rules = generate_rules(&itemsets, 0.6).unwrap();

    assert_eq!(report.status, AnalysisStatus::Complete);
    assert_eq!(report.rules, rules);
    assert_eq!(report.selected, Some(select_max_confidence(&rules)));
    assert_eq!(report.itemset_rows(), itemsets.display_rows());
}

#[test]
fn test_pipeline_empty_input_is_error() {
    let params = MiningParams::new(0.3, 0.6, None, RuleMode::Threshold).unwrap();
    let err = AnalysisPipeline::new(params).run_text(" \n ").unwrap_err();
    assert!(matches!(err, PipelineError::Encode(EncodeError::EmptyInput { .. })));
}

#[test]
fn test_itemset_rows_render_in_universe_order() {
    let encoded = encode(&carts()).unwrap();
    let itemsets = mine(&encoded.matrix, 0.6).unwrap();
    let rows = itemsets.display_rows();
    let names: Vec<&str> = rows.iter().map(|r| r.items.as_str()).collect();
    assert_eq!(names, vec!["Milk", "Bread", "Milk, Bread"]);
}
