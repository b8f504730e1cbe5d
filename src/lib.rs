//! Timesheet Processor Library
//!
//! A Rust library for converting delimiter-separated timesheet data into
//! validated, typed work-item records suitable for invoicing.
//!
//! This library provides tools for:
//! - Detecting the delimiter/format shape of raw timesheet text
//! - Normalizing arbitrary header spellings to canonical field keys
//! - Parsing free-form date strings with year-inference heuristics
//! - Converting raw rows into typed `WorkItem` records
//! - Composable rule-based validation at item, row, and batch level
//! - Partial-failure parsing with continue-on-error semantics
//! - Cooperative cancellation and comprehensive error handling

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod timesheet_parser;
        pub mod validation;
    }
    pub mod adapters {
        pub mod id_gen;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::WorkItem;
pub use app::services::timesheet_parser::{
    FormatInfo, FormatName, HeaderMap, ParseResult, TimesheetParser,
};
pub use app::services::validation::{ValidationEngine, ValidationRule};
pub use config::ParseOptions;

/// Result type alias for the timesheet processor
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for timesheet processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Low-level CSV reader error
    #[error("CSV reading error: {message}")]
    Csv {
        message: String,
        #[source]
        source: csv::Error,
    },

    /// Input was empty or contained no data rows
    #[error("timesheet input is empty")]
    EmptyInput,

    /// Format detection failed on the sampled content
    #[error("format detection failed: {reason}")]
    FormatDetection { reason: String },

    /// Requested or detected format is not in the supported set
    #[error("unsupported format: '{name}'")]
    UnsupportedFormat { name: String },

    /// A canonical header field is absent from the header row
    #[error("missing required header field: '{field}'")]
    MissingHeaderField { field: String },

    /// A data row could not be converted into a work item
    #[error("row parsing failed at line {line}: {message}")]
    RowParsing {
        line: u64,
        field: String,
        value: String,
        message: String,
    },

    /// A date string matched none of the supported formats
    #[error("unsupported date format: '{value}': {message}")]
    DateParsing { value: String, message: String },

    /// A validation rule rejected an item, row, or batch
    #[error("validation rule '{rule}' failed: {message}")]
    Validation { rule: String, message: String },

    /// Operation was cancelled cooperatively
    #[error("operation cancelled")]
    Cancelled,
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a CSV reading error with context
    pub fn csv(message: impl Into<String>, source: csv::Error) -> Self {
        Self::Csv {
            message: message.into(),
            source,
        }
    }

    /// Create a format detection error
    pub fn format_detection(reason: impl Into<String>) -> Self {
        Self::FormatDetection {
            reason: reason.into(),
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(name: impl Into<String>) -> Self {
        Self::UnsupportedFormat { name: name.into() }
    }

    /// Create a missing header field error
    pub fn missing_header_field(field: impl Into<String>) -> Self {
        Self::MissingHeaderField {
            field: field.into(),
        }
    }

    /// Create a row parsing error with full row context
    pub fn row_parsing(
        line: u64,
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::RowParsing {
            line,
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a date parsing error
    pub fn date_parsing(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DateParsing {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Create a validation error wrapped with the failing rule name
    pub fn validation(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Check whether this error is the cancellation sentinel
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::Csv {
            message: "CSV reading failed".to_string(),
            source: error,
        }
    }
}
