//! Application constants for the timesheet processor
//!
//! This module contains canonical field names, header alias tables,
//! validation thresholds, and format names used throughout the crate.

// =============================================================================
// Canonical Field Names
// =============================================================================

/// Canonical column roles every timesheet must provide
pub mod fields {
    pub const DATE: &str = "date";
    pub const HOURS: &str = "hours";
    pub const RATE: &str = "rate";
    pub const DESCRIPTION: &str = "description";
}

/// All canonical field names, in parse order
pub const CANONICAL_FIELDS: &[&str] = &[
    fields::DATE,
    fields::HOURS,
    fields::RATE,
    fields::DESCRIPTION,
];

// =============================================================================
// Header Alias Tables
// =============================================================================

/// Header spellings that map to the `date` field
pub const DATE_ALIASES: &[&str] = &["date", "work_date", "day"];

/// Header spellings that map to the `hours` field
pub const HOURS_ALIASES: &[&str] = &["hours", "time", "duration", "hours_worked"];

/// Header spellings that map to the `rate` field
pub const RATE_ALIASES: &[&str] = &["rate", "hourly_rate", "hour_rate", "billing_rate"];

/// Header spellings that map to the `description` field
pub const DESCRIPTION_ALIASES: &[&str] =
    &["description", "desc", "task", "work_description", "notes"];

// =============================================================================
// Format Detection Constants
// =============================================================================

/// Delimiter characters considered during detection, in reporting order
pub const CANDIDATE_DELIMITERS: &[char] = &[',', '\t', ';'];

/// Formats accepted by `validate_format`
pub const SUPPORTED_FORMATS: &[&str] =
    &["standard", "rfc4180", "tab", "tsv", "semicolon", "excel"];

/// Minimum column count for a plausible work-item file
pub const MIN_COLUMNS: usize = 3;

/// Maximum column count before the input is rejected as implausible
pub const MAX_COLUMNS: usize = 50;

/// Encoding reported for all parsed input (bytes are lossily decoded)
pub const INPUT_ENCODING: &str = "utf-8";

// =============================================================================
// Date Interpretation Policy
// =============================================================================

/// Two-digit years at or below this pivot map to 2000-2050; above it, to
/// 1951-1999. This bucketing is a deliberate policy trading ambiguity for a
/// sensible default range.
pub const TWO_DIGIT_YEAR_PIVOT: u32 = 50;

/// A no-year date resolving more than this many months into the future is
/// shifted back one year (e.g. "Dec 15" entered in January means last
/// December).
pub const NO_YEAR_FUTURE_WINDOW_MONTHS: u32 = 6;

// =============================================================================
// Validation Thresholds
// =============================================================================

/// Limits enforced by the standard validation rules
pub mod limits {
    /// Work dates may be at most this many days in the future
    pub const MAX_FUTURE_DAYS: u64 = 7;

    /// Work dates may be at most this many months in the past
    pub const MAX_PAST_MONTHS: u32 = 24;

    /// Hard ceiling on hours per work item
    pub const MAX_HOURS: f64 = 24.0;

    /// Hours above this are logged as suspicious but not rejected
    pub const LONG_DAY_HOURS: f64 = 12.0;

    /// Minimum acceptable hourly rate
    pub const MIN_RATE: f64 = 1.0;

    /// Maximum acceptable hourly rate
    pub const MAX_RATE: f64 = 1000.0;

    /// Rates above this are logged as suspicious but not rejected
    pub const HIGH_RATE: f64 = 500.0;

    /// Minimum description length after trimming
    pub const MIN_DESCRIPTION_LEN: usize = 3;

    /// Maximum description length
    pub const MAX_DESCRIPTION_LEN: usize = 500;

    /// Tolerance when comparing a stored total against hours * rate
    pub const TOTAL_TOLERANCE: f64 = 0.01;

    /// Minimum field count for a raw data row
    pub const ROW_MIN_FIELDS: usize = 4;

    /// Maximum field count for a raw data row
    pub const ROW_MAX_FIELDS: usize = 20;

    /// Maximum span in days between the earliest and latest date in a batch
    pub const MAX_BATCH_SPAN_DAYS: i64 = 365;

    /// Batches with more distinct rates than this are logged as a warning
    pub const MAX_DISTINCT_RATES: usize = 3;
}

/// Descriptions that are too generic to invoice, rejected case-insensitively
pub const GENERIC_DESCRIPTIONS: &[&str] = &[
    "work",
    "development",
    "coding",
    "programming",
    "task",
    "project",
    "meeting",
    "call",
    "todo",
    "fix",
    "bug",
    "feature",
];

// =============================================================================
// Helper Functions
// =============================================================================

/// Check whether a description is one of the rejected generic words
pub fn is_generic_description(description: &str) -> bool {
    let lowered = description.trim().to_lowercase();
    GENERIC_DESCRIPTIONS.contains(&lowered.as_str())
}

/// Check whether a format name is in the supported set
pub fn is_supported_format(name: &str) -> bool {
    SUPPORTED_FORMATS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_description_detection() {
        assert!(is_generic_description("work"));
        assert!(is_generic_description("Meeting"));
        assert!(is_generic_description("  TODO  "));
        assert!(!is_generic_description("quarterly invoice reconciliation"));
        assert!(!is_generic_description("bugfix for parser"));
    }

    #[test]
    fn test_supported_formats() {
        for name in ["standard", "rfc4180", "tab", "tsv", "semicolon", "excel"] {
            assert!(is_supported_format(name));
        }
        assert!(!is_supported_format("pipe"));
        assert!(!is_supported_format(""));
    }

    #[test]
    fn test_canonical_fields_covered_by_aliases() {
        // Every canonical field must be an alias of itself
        assert!(DATE_ALIASES.contains(&fields::DATE));
        assert!(HOURS_ALIASES.contains(&fields::HOURS));
        assert!(RATE_ALIASES.contains(&fields::RATE));
        assert!(DESCRIPTION_ALIASES.contains(&fields::DESCRIPTION));
    }
}
