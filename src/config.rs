//! Parse option configuration.
//!
//! Provides the options structure recognized by the parse orchestrator,
//! with builder-style methods for ergonomic construction.

use crate::app::services::timesheet_parser::FormatName;
use serde::{Deserialize, Serialize};

/// Options recognized by `TimesheetParser::parse_timesheet`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Explicit input format; bypasses detection when set
    pub format: Option<FormatName>,

    /// Collect row-level failures instead of aborting the whole parse
    pub continue_on_error: bool,

    /// Silently skip rows whose fields are all blank
    pub skip_empty_rows: bool,

    /// Preferred date format hint; currently advisory only
    pub date_format: Option<String>,
}

impl ParseOptions {
    /// Create options with all defaults (strict, fail-fast parsing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an explicit format, bypassing detection
    pub fn with_format(mut self, format: FormatName) -> Self {
        self.format = Some(format);
        self
    }

    /// Collect per-row failures instead of aborting on the first one
    pub fn with_continue_on_error(mut self) -> Self {
        self.continue_on_error = true;
        self
    }

    /// Skip rows whose fields are all blank
    pub fn with_skip_empty_rows(mut self) -> Self {
        self.skip_empty_rows = true;
        self
    }

    /// Record a preferred date format hint (advisory)
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }
}
