//! Tests for the rule registry and validation entry points

use chrono::Datelike;

use super::super::engine::{ValidationEngine, ValidationRule};
use super::{item_with, token, valid_item};
use crate::Error;

#[test]
fn test_standard_engine_accepts_valid_item() {
    let engine = ValidationEngine::new();
    engine.validate_item(&valid_item(), &token()).unwrap();
}

#[test]
fn test_standard_rule_order() {
    let engine = ValidationEngine::new();
    assert_eq!(
        engine.rule_names(),
        vec!["row_format", "date", "hours", "rate", "description", "total"]
    );
}

#[test]
fn test_failure_is_wrapped_with_rule_name() {
    let engine = ValidationEngine::new();
    let error = engine
        .validate_item(&item_with(-1.0, 100.0), &token())
        .unwrap_err();

    match error {
        Error::Validation { rule, message } => {
            assert_eq!(rule, "hours");
            assert!(message.contains("greater than zero"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_short_circuits_on_first_failing_rule() {
    // Hours and rate are both invalid; hours is registered first
    let engine = ValidationEngine::new();
    let error = engine
        .validate_item(&item_with(-1.0, 0.0), &token())
        .unwrap_err();

    match error {
        Error::Validation { rule, .. } => assert_eq!(rule, "hours"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_custom_rule_injection() {
    let mut engine = ValidationEngine::new();
    engine.add_rule(
        ValidationRule::new("no_weekend_work").with_item_check(|item| {
            if matches!(
                item.date.weekday(),
                chrono::Weekday::Sat | chrono::Weekday::Sun
            ) {
                Err("weekend work requires prior approval".to_string())
            } else {
                Ok(())
            }
        }),
    );

    assert!(engine.rule_names().contains(&"no_weekend_work"));

    // A Saturday within the accepted date window
    let mut item = valid_item();
    let mut date = item.date;
    while date.weekday() != chrono::Weekday::Sat {
        date = date.pred_opt().unwrap();
    }
    item.date = date;

    let error = engine.validate_item(&item, &token()).unwrap_err();
    match error {
        Error::Validation { rule, .. } => assert_eq!(rule, "no_weekend_work"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_rule_removal_by_name() {
    let mut engine = ValidationEngine::new();

    assert!(engine.remove_rule("description"));
    assert!(!engine.rule_names().contains(&"description"));
    assert!(!engine.remove_rule("description")); // already gone

    // With the rule removed, a generic description passes
    let mut item = valid_item();
    item.description = "work".to_string();
    engine.validate_item(&item, &token()).unwrap();
}

#[test]
fn test_empty_engine_accepts_everything() {
    let engine = ValidationEngine::empty();
    engine.validate_item(&item_with(-100.0, 0.0), &token()).unwrap();
    engine
        .validate_row(&[String::from("only-field")], 2, &token())
        .unwrap();
}

#[test]
fn test_row_validation_uses_row_rules() {
    let engine = ValidationEngine::new();
    let short_row = vec![String::from("a"), String::from("b")];

    let error = engine.validate_row(&short_row, 5, &token()).unwrap_err();
    match error {
        Error::Validation { rule, .. } => assert_eq!(rule, "row_format"),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_cancellation_checked_before_work() {
    let engine = ValidationEngine::new();
    let cancel = token();
    cancel.cancel();

    assert!(engine.validate_item(&valid_item(), &cancel).unwrap_err().is_cancelled());
    assert!(engine
        .validate_row(&[String::new()], 2, &cancel)
        .unwrap_err()
        .is_cancelled());
    assert!(engine.validate_batch(&[], &cancel).unwrap_err().is_cancelled());
}
