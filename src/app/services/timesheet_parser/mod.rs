//! CSV timesheet parsing engine
//!
//! This module converts delimiter-separated timesheet text into validated
//! work-item records, tolerating adversarial input without panicking and
//! supporting partial-failure semantics.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - End-to-end parse orchestration and format entry points
//! - [`format`] - Delimiter/shape detection from sampled content
//! - [`header`] - Header normalization and canonical column mapping
//! - [`dates`] - Multi-format date interpretation with year inference
//! - [`row_parser`] - Individual row to work-item conversion
//! - [`result`] - Parse results and per-row error records
//!
//! ## Usage
//!
//! ```rust
//! use timesheet_processor::{ParseOptions, TimesheetParser};
//! use tokio_util::sync::CancellationToken;
//!
//! # fn example() -> timesheet_processor::Result<()> {
//! let parser = TimesheetParser::new();
//! let input = "Date,Hours,Rate,Description\n2024-01-15,8.0,100.0,Parser refactoring";
//! let options = ParseOptions::new().with_continue_on_error();
//!
//! let result = parser.parse_timesheet(input.as_bytes(), &options, &CancellationToken::new())?;
//! println!("parsed {} of {} rows", result.success_rows, result.total_rows);
//! # Ok(())
//! # }
//! ```

pub mod dates;
pub mod format;
pub mod header;
pub mod parser;
pub mod result;
pub mod row_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use format::{FormatInfo, FormatName};
pub use header::{HeaderMap, normalize_header};
pub use parser::TimesheetParser;
pub use result::{ParseError, ParseResult};
