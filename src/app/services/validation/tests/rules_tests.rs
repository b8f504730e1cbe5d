//! Tests for the standard validation rules

use chrono::{Days, Months, Utc};

use super::super::rules::{
    check_date, check_description, check_hours, check_rate, check_row_format, check_total,
};
use super::{item_with, recent_date, valid_item};
use crate::app::models::WorkItem;

fn item_dated(date: chrono::NaiveDate) -> WorkItem {
    WorkItem::new(
        "wi-d".to_string(),
        date,
        8.0,
        100.0,
        "Parser refactoring".to_string(),
    )
}

fn item_described(description: &str) -> WorkItem {
    WorkItem::new(
        "wi-s".to_string(),
        recent_date(1),
        8.0,
        100.0,
        description.to_string(),
    )
}

#[test]
fn test_valid_item_passes_all_rules() {
    let item = valid_item();
    check_date(&item).unwrap();
    check_hours(&item).unwrap();
    check_rate(&item).unwrap();
    check_description(&item).unwrap();
    check_total(&item).unwrap();
}

#[test]
fn test_date_bounds() {
    let today = Utc::now().date_naive();

    // Up to 7 days ahead is fine
    check_date(&item_dated(today + Days::new(7))).unwrap();
    assert!(check_date(&item_dated(today + Days::new(8))).is_err());

    // Up to 2 years back is fine
    check_date(&item_dated(today - Months::new(23))).unwrap();
    assert!(check_date(&item_dated(today - Months::new(25))).is_err());
}

#[test]
fn test_hours_range() {
    check_hours(&item_with(0.25, 100.0)).unwrap();
    check_hours(&item_with(24.0, 100.0)).unwrap();

    assert!(check_hours(&item_with(0.0, 100.0)).is_err());
    assert!(check_hours(&item_with(-5.0, 100.0)).is_err());
    assert!(check_hours(&item_with(24.5, 100.0)).is_err());
}

#[test]
fn test_long_day_is_flagged_not_failed() {
    // > 12 hours logs a warning but passes
    check_hours(&item_with(13.0, 100.0)).unwrap();
}

#[test]
fn test_hours_precision() {
    check_hours(&item_with(7.25, 100.0)).unwrap();
    check_hours(&item_with(7.5, 100.0)).unwrap();

    let error = check_hours(&item_with(7.333, 100.0)).unwrap_err();
    assert!(error.contains("decimal places"));
    assert!(check_hours(&item_with(0.125, 100.0)).is_err());
}

#[test]
fn test_rate_range() {
    check_rate(&item_with(8.0, 1.0)).unwrap();
    check_rate(&item_with(8.0, 1000.0)).unwrap();

    assert!(check_rate(&item_with(8.0, 0.5)).is_err());
    assert!(check_rate(&item_with(8.0, 0.0)).is_err());
    assert!(check_rate(&item_with(8.0, 1000.01)).is_err());
}

#[test]
fn test_high_rate_is_flagged_not_failed() {
    check_rate(&item_with(8.0, 750.0)).unwrap();
}

#[test]
fn test_description_length() {
    assert!(check_description(&item_described("")).is_err());
    assert!(check_description(&item_described("   ")).is_err());
    assert!(check_description(&item_described("ab")).is_err());
    check_description(&item_described("abc")).unwrap();

    let long = "x".repeat(500);
    check_description(&item_described(&long)).unwrap();
    let too_long = "x".repeat(501);
    assert!(check_description(&item_described(&too_long)).is_err());
}

#[test]
fn test_generic_descriptions_rejected() {
    for generic in ["work", "Development", "MEETING", "  fix  ", "todo"] {
        let error = check_description(&item_described(generic)).unwrap_err();
        assert!(error.contains("too generic"), "{generic}: {error}");
    }
    // Generic word as part of a longer description is fine
    check_description(&item_described("fix for parser line counting")).unwrap();
}

#[test]
fn test_total_tolerance() {
    let mut item = valid_item();
    check_total(&item).unwrap();

    // Within a cent of hours * rate still passes
    item.total = item.hours * item.rate + 0.009;
    check_total(&item).unwrap();

    item.total = item.hours * item.rate + 0.02;
    let error = check_total(&item).unwrap_err();
    assert!(error.contains("does not match"));
}

#[test]
fn test_row_format_bounds() {
    let fields = |n: usize| vec![String::from("x"); n];

    assert!(check_row_format(&fields(3), 2).is_err());
    check_row_format(&fields(4), 2).unwrap();
    check_row_format(&fields(20), 2).unwrap();
    assert!(check_row_format(&fields(21), 2).is_err());
}
