//! Test fixtures for validation testing

use chrono::{Days, NaiveDate, Utc};
use tokio_util::sync::CancellationToken;

use crate::app::models::WorkItem;

mod engine_tests;
mod rules_tests;

/// Fresh, never-cancelled token
pub fn token() -> CancellationToken {
    CancellationToken::new()
}

/// A date safely inside the accepted window
pub fn recent_date(days_ago: u64) -> NaiveDate {
    Utc::now().date_naive() - Days::new(days_ago)
}

/// A work item that passes every standard rule
pub fn valid_item() -> WorkItem {
    WorkItem::new(
        "wi-1".to_string(),
        recent_date(1),
        8.0,
        100.0,
        "Parser refactoring and tests".to_string(),
    )
}

/// A valid item with overridden hours and rate
pub fn item_with(hours: f64, rate: f64) -> WorkItem {
    WorkItem::new(
        "wi-x".to_string(),
        recent_date(1),
        hours,
        rate,
        "Invoice pipeline review".to_string(),
    )
}
