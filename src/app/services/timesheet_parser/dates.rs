//! Free-form date interpretation with year inference
//!
//! Timesheet dates arrive in many shapes: ISO, US, EU, month names, dates
//! with 2-digit years, and dates with no year at all. Formats are attempted
//! in a fixed order because some patterns are structurally ambiguous with
//! others. Two heuristics are business policy, preserved verbatim:
//!
//! - Two-digit years: `00-50` map to `2000-2050`, `51-99` to `1951-1999`.
//! - No-year dates: try the current calendar year first; if the candidate
//!   lands more than 6 months after "today", use the previous year instead
//!   ("Dec 15" entered in January means last December, not next December).

use crate::constants::{NO_YEAR_FUTURE_WINDOW_MONTHS, TWO_DIGIT_YEAR_PIVOT};
use crate::{Error, Result};
use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Full 4-digit-year formats, tried in this fixed order
const FULL_YEAR_FORMATS: &[&str] = &[
    "%Y-%m-%d",  // ISO
    "%m/%d/%Y",  // US
    "%d/%m/%Y",  // EU (reached only when the US reading is invalid)
    "%Y/%m/%d",  // alternate ISO
    "%b %d, %Y", // abbreviated month name
    "%B %d, %Y", // full month name
];

/// ISO date with a time component
const ISO_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Shape guards for the 2-digit-year and no-year ladders. The full-year
// ladder is skipped for strings matching these, since a lenient year parse
// would otherwise swallow them (e.g. "01/02/03" as year 3).
static TWO_DIGIT_SLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{2})$").expect("valid regex"));
static TWO_DIGIT_DASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2})-(\d{1,2})-(\d{1,2})$").expect("valid regex"));
static NO_YEAR_SLASH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2})/(\d{1,2})$").expect("valid regex"));
static NO_YEAR_MONTH_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]{3,9})\s+(\d{1,2})$").expect("valid regex"));

/// Parse a free-form date string into a calendar date
///
/// Never panics; unparseable input yields an error carrying the raw value,
/// which callers must treat as "unparseable", never as a valid date.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    parse_date_with_reference(text, Utc::now().date_naive())
}

/// Parse with an explicit "today" reference for the no-year heuristic
///
/// Identical input with an identical reference always yields an identical
/// result; tests pin the reference to stay deterministic.
pub fn parse_date_with_reference(text: &str, today: NaiveDate) -> Result<NaiveDate> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::date_parsing(text, "empty date string"));
    }

    let two_digit_shape =
        TWO_DIGIT_SLASH.is_match(trimmed) || TWO_DIGIT_DASH.is_match(trimmed);
    let no_year_shape =
        NO_YEAR_SLASH.is_match(trimmed) || NO_YEAR_MONTH_NAME.is_match(trimmed);

    // 1. Full 4-digit-year formats
    if !two_digit_shape && !no_year_shape {
        for format in FULL_YEAR_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
                return Ok(date);
            }
        }
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, ISO_DATETIME_FORMAT) {
            return Ok(datetime.date());
        }
    }

    // 2. Two-digit-year formats with the year remap policy
    if let Some(captures) = TWO_DIGIT_SLASH.captures(trimmed) {
        let first = capture_number(&captures, 1);
        let second = capture_number(&captures, 2);
        let year = remap_two_digit_year(capture_number(&captures, 3));
        // MM/DD/YY first, DD/MM/YY as the fallback reading
        if let Some(date) = NaiveDate::from_ymd_opt(year, first, second) {
            return Ok(date);
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, second, first) {
            return Ok(date);
        }
        return Err(Error::date_parsing(trimmed, "invalid calendar date"));
    }
    if let Some(captures) = TWO_DIGIT_DASH.captures(trimmed) {
        let year = remap_two_digit_year(capture_number(&captures, 1));
        let month = capture_number(&captures, 2);
        let day = capture_number(&captures, 3);
        return NaiveDate::from_ymd_opt(year, month, day)
            .ok_or_else(|| Error::date_parsing(trimmed, "invalid calendar date"));
    }

    // 3. No-year formats with the recent-past heuristic
    if let Some(captures) = NO_YEAR_SLASH.captures(trimmed) {
        let month = capture_number(&captures, 1);
        let day = capture_number(&captures, 2);
        return resolve_no_year_date(trimmed, month, day, today);
    }
    if let Some(captures) = NO_YEAR_MONTH_NAME.captures(trimmed) {
        let month_name = &captures[1];
        let day = capture_number(&captures, 2);
        let probe = format!("{} {}, {}", month_name, day, today.year());
        if let Ok(candidate) = NaiveDate::parse_from_str(&probe, "%b %d, %Y") {
            return resolve_no_year_date(trimmed, candidate.month(), candidate.day(), today);
        }
        return Err(Error::date_parsing(trimmed, "unrecognized month name"));
    }

    Err(Error::date_parsing(
        trimmed,
        "matches no supported date format",
    ))
}

/// Apply the two-digit-year bucketing policy
fn remap_two_digit_year(two_digit: u32) -> i32 {
    if two_digit <= TWO_DIGIT_YEAR_PIVOT {
        2000 + two_digit as i32
    } else {
        1900 + two_digit as i32
    }
}

/// Resolve a month/day with no year against the reference date
fn resolve_no_year_date(
    raw: &str,
    month: u32,
    day: u32,
    today: NaiveDate,
) -> Result<NaiveDate> {
    let candidate = NaiveDate::from_ymd_opt(today.year(), month, day)
        .ok_or_else(|| Error::date_parsing(raw, "invalid calendar date"))?;

    let future_window = today
        .checked_add_months(Months::new(NO_YEAR_FUTURE_WINDOW_MONTHS))
        .unwrap_or(NaiveDate::MAX);

    if candidate > future_window {
        NaiveDate::from_ymd_opt(today.year() - 1, month, day)
            .ok_or_else(|| Error::date_parsing(raw, "invalid calendar date"))
    } else {
        Ok(candidate)
    }
}

/// Extract a numeric capture group; guards guarantee the group matched digits
fn capture_number(captures: &regex::Captures<'_>, group: usize) -> u32 {
    captures
        .get(group)
        .map(|m| m.as_str().parse().unwrap_or(0))
        .unwrap_or(0)
}
