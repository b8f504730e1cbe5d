//! Tests for free-form date interpretation and year inference

use chrono::NaiveDate;

use super::super::dates::{parse_date, parse_date_with_reference};
use crate::Error;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Fixed reference so year inference is deterministic in tests
fn reference() -> NaiveDate {
    date(2024, 6, 15)
}

#[test]
fn test_iso_format() {
    assert_eq!(
        parse_date_with_reference("2024-01-15", reference()).unwrap(),
        date(2024, 1, 15)
    );
}

#[test]
fn test_us_format() {
    assert_eq!(
        parse_date_with_reference("01/15/2024", reference()).unwrap(),
        date(2024, 1, 15)
    );
    // Single digits
    assert_eq!(
        parse_date_with_reference("9/8/2024", reference()).unwrap(),
        date(2024, 9, 8)
    );
}

#[test]
fn test_eu_format_when_us_reading_invalid() {
    // 25 cannot be a month, so the EU reading applies
    assert_eq!(
        parse_date_with_reference("25/12/2024", reference()).unwrap(),
        date(2024, 12, 25)
    );
}

#[test]
fn test_us_reading_wins_when_ambiguous() {
    // Both readings are valid; the fixed attempt order resolves it as US
    assert_eq!(
        parse_date_with_reference("03/04/2024", reference()).unwrap(),
        date(2024, 3, 4)
    );
}

#[test]
fn test_alternate_iso() {
    assert_eq!(
        parse_date_with_reference("2024/01/15", reference()).unwrap(),
        date(2024, 1, 15)
    );
}

#[test]
fn test_month_names() {
    assert_eq!(
        parse_date_with_reference("Jan 15, 2024", reference()).unwrap(),
        date(2024, 1, 15)
    );
    assert_eq!(
        parse_date_with_reference("January 15, 2024", reference()).unwrap(),
        date(2024, 1, 15)
    );
}

#[test]
fn test_iso_with_time() {
    assert_eq!(
        parse_date_with_reference("2024-01-15 09:30:00", reference()).unwrap(),
        date(2024, 1, 15)
    );
}

#[test]
fn test_two_digit_year_remap_policy() {
    // 00-50 -> 2000-2050
    assert_eq!(
        parse_date_with_reference("01/15/00", reference()).unwrap(),
        date(2000, 1, 15)
    );
    assert_eq!(
        parse_date_with_reference("01/15/50", reference()).unwrap(),
        date(2050, 1, 15)
    );
    // 51-99 -> 1951-1999
    assert_eq!(
        parse_date_with_reference("01/15/51", reference()).unwrap(),
        date(1951, 1, 15)
    );
    assert_eq!(
        parse_date_with_reference("01/15/99", reference()).unwrap(),
        date(1999, 1, 15)
    );
}

#[test]
fn test_two_digit_year_eu_fallback() {
    assert_eq!(
        parse_date_with_reference("25/12/99", reference()).unwrap(),
        date(1999, 12, 25)
    );
}

#[test]
fn test_two_digit_year_dash_shape() {
    assert_eq!(
        parse_date_with_reference("24-01-15", reference()).unwrap(),
        date(2024, 1, 15)
    );
}

#[test]
fn test_no_year_within_window_uses_current_year() {
    // June reference; "7/1" lands within 6 months ahead
    assert_eq!(
        parse_date_with_reference("7/1", reference()).unwrap(),
        date(2024, 7, 1)
    );
    assert_eq!(
        parse_date_with_reference("3/10", reference()).unwrap(),
        date(2024, 3, 10)
    );
}

#[test]
fn test_no_year_far_future_means_last_year() {
    // "9/8" read on January 1 would be >6 months ahead, so it is last September
    let january_first = date(2025, 1, 1);
    assert_eq!(
        parse_date_with_reference("9/8", january_first).unwrap(),
        date(2024, 9, 8)
    );
}

#[test]
fn test_no_year_month_name() {
    let january_first = date(2025, 1, 1);
    assert_eq!(
        parse_date_with_reference("Dec 15", january_first).unwrap(),
        date(2024, 12, 15)
    );
    assert_eq!(
        parse_date_with_reference("Feb 3", january_first).unwrap(),
        date(2025, 2, 3)
    );
}

#[test]
fn test_whitespace_is_trimmed() {
    assert_eq!(
        parse_date_with_reference("  2024-01-15  ", reference()).unwrap(),
        date(2024, 1, 15)
    );
}

#[test]
fn test_empty_string_is_an_error() {
    for input in ["", "   ", "\t"] {
        assert!(parse_date_with_reference(input, reference()).is_err());
    }
}

#[test]
fn test_unparseable_input() {
    for input in [
        "not a date",
        "2024-13-45",
        "99/99/99",
        "15th of January",
        "--",
    ] {
        let error = parse_date_with_reference(input, reference()).unwrap_err();
        assert!(
            matches!(error, Error::DateParsing { .. }),
            "expected DateParsing for {input:?}, got {error:?}"
        );
    }
}

#[test]
fn test_determinism() {
    for input in ["2024-01-15", "9/8", "01/15/99", "Dec 15", "garbage"] {
        let first = parse_date_with_reference(input, reference());
        let second = parse_date_with_reference(input, reference());
        match (first, second) {
            (Ok(a), Ok(b)) => assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            other => panic!("non-deterministic outcome for {input:?}: {other:?}"),
        }
    }
}

#[test]
fn test_parse_date_never_panics() {
    for input in ["", "\u{fffd}\u{fffd}", "0/0/0", "//", "13/13/13", "∞"] {
        let _ = parse_date(input);
    }
}
