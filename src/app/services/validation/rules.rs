//! Standard validation rules for work items and raw rows
//!
//! Each check returns a descriptive message on violation; the engine wraps
//! it with the rule name. Two checks flag suspicious values (long days,
//! high rates) via warning logs without failing the item.

use chrono::{Days, Months, Utc};
use tracing::warn;

use crate::app::models::WorkItem;
use crate::constants::{is_generic_description, limits};

use super::engine::{RuleOutcome, ValidationRule};

/// Build the standard rule set, in application order
pub fn standard_rules() -> Vec<ValidationRule> {
    vec![
        ValidationRule::new("row_format").with_row_check(check_row_format),
        ValidationRule::new("date").with_item_check(|item| check_date(item)),
        ValidationRule::new("hours").with_item_check(|item| check_hours(item)),
        ValidationRule::new("rate").with_item_check(|item| check_rate(item)),
        ValidationRule::new("description").with_item_check(|item| check_description(item)),
        ValidationRule::new("total").with_item_check(|item| check_total(item)),
    ]
}

/// Row-level pre-parse check on the raw field count
pub fn check_row_format(fields: &[String], _line: u64) -> RuleOutcome {
    let count = fields.len();
    if count < limits::ROW_MIN_FIELDS {
        return Err(format!(
            "row has {count} fields, need at least {}",
            limits::ROW_MIN_FIELDS
        ));
    }
    if count > limits::ROW_MAX_FIELDS {
        return Err(format!(
            "row has {count} fields, maximum is {}",
            limits::ROW_MAX_FIELDS
        ));
    }
    Ok(())
}

/// Work date must be near the present: at most 7 days ahead, 2 years back
pub fn check_date(item: &WorkItem) -> RuleOutcome {
    let today = Utc::now().date_naive();

    let future_limit = today
        .checked_add_days(Days::new(limits::MAX_FUTURE_DAYS))
        .unwrap_or(chrono::NaiveDate::MAX);
    if item.date > future_limit {
        return Err(format!(
            "date {} is more than {} days in the future",
            item.date,
            limits::MAX_FUTURE_DAYS
        ));
    }

    let past_limit = today
        .checked_sub_months(Months::new(limits::MAX_PAST_MONTHS))
        .unwrap_or(chrono::NaiveDate::MIN);
    if item.date < past_limit {
        return Err(format!("date {} is more than 2 years in the past", item.date));
    }

    Ok(())
}

/// Hours must be positive, at most 24, and carry at most 2 decimal places
pub fn check_hours(item: &WorkItem) -> RuleOutcome {
    if item.hours <= 0.0 {
        return Err(format!("hours must be greater than zero, got {}", item.hours));
    }
    if item.hours > limits::MAX_HOURS {
        return Err(format!(
            "hours must be at most {}, got {}",
            limits::MAX_HOURS,
            item.hours
        ));
    }
    if item.hours > limits::LONG_DAY_HOURS {
        warn!(
            item_id = %item.id,
            hours = item.hours,
            "unusually long working day"
        );
    }

    // Precision check: re-format to 2dp and compare
    let reformatted: f64 = format!("{:.2}", item.hours)
        .parse()
        .unwrap_or(item.hours);
    if (reformatted - item.hours).abs() > f64::EPSILON {
        return Err(format!(
            "hours {} has more than 2 decimal places of precision",
            item.hours
        ));
    }

    Ok(())
}

/// Rate must sit in the plausible billing band
pub fn check_rate(item: &WorkItem) -> RuleOutcome {
    if item.rate < limits::MIN_RATE || item.rate > limits::MAX_RATE {
        return Err(format!(
            "rate must be between {} and {}, got {}",
            limits::MIN_RATE,
            limits::MAX_RATE,
            item.rate
        ));
    }
    if item.rate > limits::HIGH_RATE {
        warn!(item_id = %item.id, rate = item.rate, "unusually high rate");
    }
    Ok(())
}

/// Description must be present, sized sensibly, and not a generic word
pub fn check_description(item: &WorkItem) -> RuleOutcome {
    let trimmed = item.description.trim();
    if trimmed.is_empty() {
        return Err("description is empty".to_string());
    }
    let length = trimmed.chars().count();
    if length < limits::MIN_DESCRIPTION_LEN {
        return Err(format!(
            "description is too short ({length} chars, minimum {})",
            limits::MIN_DESCRIPTION_LEN
        ));
    }
    if length > limits::MAX_DESCRIPTION_LEN {
        return Err(format!(
            "description is too long ({length} chars, maximum {})",
            limits::MAX_DESCRIPTION_LEN
        ));
    }
    if is_generic_description(trimmed) {
        return Err(format!(
            "description '{trimmed}' is too generic to invoice"
        ));
    }
    Ok(())
}

/// Total must equal hours * rate within the cent tolerance
pub fn check_total(item: &WorkItem) -> RuleOutcome {
    let expected = item.hours * item.rate;
    if (item.total - expected).abs() > limits::TOTAL_TOLERANCE {
        return Err(format!(
            "total {} does not match hours * rate = {:.2}",
            item.total, expected
        ));
    }
    Ok(())
}
