//! Test utilities and fixtures for timesheet parser testing

use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::app::adapters::id_gen::SequentialIdGenerator;
use crate::app::services::timesheet_parser::TimesheetParser;

// Test modules
mod date_tests;

/// Parser with deterministic IDs for assertions
pub fn test_parser() -> TimesheetParser {
    TimesheetParser::new().with_id_generator(Arc::new(SequentialIdGenerator::new("wi")))
}

/// Fresh, never-cancelled token
pub fn token() -> CancellationToken {
    CancellationToken::new()
}

/// A well-formed comma-separated timesheet with three rows
pub fn sample_csv() -> String {
    let today = recent_date_string(1);
    let yesterday = recent_date_string(2);
    let before = recent_date_string(3);
    format!(
        "Date,Hours,Rate,Description\n\
         {today},8.0,100.0,Parser refactoring\n\
         {yesterday},6.5,95.0,Invoice pipeline review\n\
         {before},3.25,120.0,Client data migration\n"
    )
}

/// The same logical content, tab-separated
pub fn sample_tsv() -> String {
    sample_csv().replace(',', "\t")
}

/// ISO date string `days_ago` days before today, safe for the date rule
pub fn recent_date_string(days_ago: u64) -> String {
    let date = chrono::Utc::now().date_naive() - chrono::Days::new(days_ago);
    date.format("%Y-%m-%d").to_string()
}
