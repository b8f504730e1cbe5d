//! Parse result and per-row error structures
//!
//! These types summarize one parse invocation: the work items produced,
//! the rows that failed and why, and the header/format context the parse
//! ran under.

use crate::Error;
use crate::app::models::WorkItem;
use crate::constants::fields;
use serde::{Deserialize, Serialize};

use super::format::FormatInfo;
use super::header::HeaderMap;

/// One failed row, with enough context to be directly user-displayable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseError {
    /// 1-based line number in the original input; always >= 1
    pub line: u64,

    /// Canonical field the failure is attributed to, if known
    pub column: String,

    /// Offending raw value, if known
    pub value: String,

    /// User-displayable failure message
    pub message: String,

    /// Actionable hint for fixing the row
    pub suggestion: String,

    /// The raw fields of the failed row
    pub row: Vec<String>,
}

impl ParseError {
    /// Build a per-row error record from an internal error
    pub fn from_error(error: &Error, line: u64, row: &[String]) -> Self {
        let (column, value) = match error {
            Error::RowParsing { field, value, .. } => (field.clone(), value.clone()),
            Error::DateParsing { value, .. } => (fields::DATE.to_string(), value.clone()),
            Error::Validation { .. } => (String::new(), String::new()),
            _ => (String::new(), String::new()),
        };

        Self {
            line: line.max(1),
            column,
            value,
            message: error.to_string(),
            suggestion: suggestion_for(error),
            row: row.to_vec(),
        }
    }
}

/// Produce an actionable hint for a failed row
fn suggestion_for(error: &Error) -> String {
    match error {
        Error::DateParsing { .. } => {
            "use an unambiguous date format such as YYYY-MM-DD".to_string()
        }
        Error::RowParsing { field, message, .. } => {
            if message.contains("invalid date") {
                "use an unambiguous date format such as YYYY-MM-DD".to_string()
            } else if message.contains("invalid hours") || message.contains("invalid rate") {
                format!("enter {field} as a plain decimal number, e.g. 7.5")
            } else if message.contains("field is empty") || message.contains("field missing") {
                format!("fill in the {field} column for this row")
            } else if message.contains("empty row") {
                "remove the empty row or enable skip_empty_rows".to_string()
            } else {
                "check the row against the expected date,hours,rate,description layout"
                    .to_string()
            }
        }
        Error::Validation { rule, .. } => match rule.as_str() {
            "hours" => "hours must be greater than 0 and at most 24, with at most 2 decimal places".to_string(),
            "rate" => "rate must be between 1 and 1000".to_string(),
            "date" => "work dates may be at most 7 days in the future and 2 years in the past".to_string(),
            "description" => "describe the work specifically, in 3 to 500 characters".to_string(),
            "total" => "total must equal hours times rate".to_string(),
            "row_format" => "rows need between 4 and 20 fields".to_string(),
            _ => format!("review the '{rule}' validation rule"),
        },
        _ => "check the input against the expected timesheet layout".to_string(),
    }
}

/// Summary of one parse invocation
///
/// Invariants: `success_rows + error_rows == total_rows`,
/// `work_items.len() == success_rows`, and `errors.len() == error_rows`.
/// Rows skipped via `skip_empty_rows` are counted separately and do not
/// participate in the invariants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResult {
    /// Successfully parsed and validated work items
    pub work_items: Vec<WorkItem>,

    /// Data rows processed (header and skipped rows excluded)
    pub total_rows: usize,

    /// Rows that produced a work item
    pub success_rows: usize,

    /// Rows that produced a parse error
    pub error_rows: usize,

    /// Blank rows dropped by `skip_empty_rows`
    pub skipped_rows: usize,

    /// One entry per failed row
    pub errors: Vec<ParseError>,

    /// Header mapping the parse ran under
    pub header_map: HeaderMap,

    /// Format the input was parsed as
    pub format: FormatInfo,
}

impl ParseResult {
    /// Verify the structural counting invariants
    pub fn is_consistent(&self) -> bool {
        self.success_rows + self.error_rows == self.total_rows
            && self.work_items.len() == self.success_rows
            && self.errors.len() == self.error_rows
    }

    /// Fraction of processed rows that parsed successfully, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.success_rows as f64 / self.total_rows as f64) * 100.0
        }
    }

    /// Sum of line totals across all parsed work items
    pub fn grand_total(&self) -> f64 {
        self.work_items.iter().map(|item| item.total).sum()
    }

    /// Sum of hours across all parsed work items
    pub fn total_hours(&self) -> f64 {
        self.work_items.iter().map(|item| item.hours).sum()
    }
}
