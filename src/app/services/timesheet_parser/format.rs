//! Format detection for delimiter-separated timesheet input
//!
//! Detection samples only the first content line and considers three
//! candidate delimiters: comma, tab, and semicolon. Multi-line sampling and
//! other delimiters (pipe, colon) are deliberately out of scope, since
//! broadening the sample changes acceptance behavior on previously
//! rejected inputs.

use crate::constants::{INPUT_ENCODING, MAX_COLUMNS, MIN_COLUMNS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed enumeration of supported format names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatName {
    /// Comma-separated (default)
    Standard,
    /// Tab-separated
    Tab,
    /// Semicolon-separated (common in European locales)
    Semicolon,
    /// Comma-separated as exported by Excel
    Excel,
    /// Comma-separated with strict RFC-4180 quoting
    Rfc4180,
    /// Tab-separated, `.tsv` convention
    Tsv,
}

impl FormatName {
    /// All supported format names
    pub const ALL: &'static [FormatName] = &[
        FormatName::Standard,
        FormatName::Tab,
        FormatName::Semicolon,
        FormatName::Excel,
        FormatName::Rfc4180,
        FormatName::Tsv,
    ];

    /// Canonical lowercase name for this format
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatName::Standard => "standard",
            FormatName::Tab => "tab",
            FormatName::Semicolon => "semicolon",
            FormatName::Excel => "excel",
            FormatName::Rfc4180 => "rfc4180",
            FormatName::Tsv => "tsv",
        }
    }

    /// Separator character for this format
    pub fn delimiter(&self) -> char {
        match self {
            FormatName::Standard | FormatName::Excel | FormatName::Rfc4180 => ',',
            FormatName::Tab | FormatName::Tsv => '\t',
            FormatName::Semicolon => ';',
        }
    }
}

impl fmt::Display for FormatName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormatName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(FormatName::Standard),
            "tab" => Ok(FormatName::Tab),
            "semicolon" => Ok(FormatName::Semicolon),
            "excel" => Ok(FormatName::Excel),
            "rfc4180" => Ok(FormatName::Rfc4180),
            "tsv" => Ok(FormatName::Tsv),
            other => Err(Error::unsupported_format(other)),
        }
    }
}

/// Structural shape of a timesheet input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name from the closed enumeration
    pub name: FormatName,

    /// Single separator character
    pub delimiter: char,

    /// Whether the first row is a header row
    pub has_header: bool,

    /// Character encoding of the decoded input
    pub encoding: String,
}

impl FormatInfo {
    /// Describe the shape implied by an explicit format name
    pub fn for_name(name: FormatName) -> Self {
        Self {
            name,
            delimiter: name.delimiter(),
            has_header: true,
            encoding: INPUT_ENCODING.to_string(),
        }
    }
}

/// Detect the delimiter and structural shape of raw timesheet text
///
/// Examines only the first content line. Pure function over the sampled
/// text; never panics on empty, malformed, or binary input.
pub fn detect_format(content: &str) -> Result<FormatInfo> {
    let first_line = content.lines().next().unwrap_or("");
    if first_line.trim().is_empty() {
        return Err(Error::format_detection(
            "cannot detect format of empty content",
        ));
    }

    let comma_count = first_line.matches(',').count();
    let tab_count = first_line.matches('\t').count();
    let semicolon_count = first_line.matches(';').count();

    let nonzero_kinds = [comma_count, tab_count, semicolon_count]
        .iter()
        .filter(|&&count| count > 0)
        .count();
    if nonzero_kinds > 1 {
        return Err(Error::format_detection(
            "ambiguous format: multiple delimiter types present, specify the format explicitly",
        ));
    }
    if nonzero_kinds == 0 {
        return Err(Error::format_detection("no delimiters found"));
    }

    let max_count = comma_count.max(tab_count).max(semicolon_count);
    let column_count = max_count + 1;
    if column_count < MIN_COLUMNS {
        return Err(Error::format_detection(format!(
            "too few columns: found {column_count}, need at least {MIN_COLUMNS} for work items"
        )));
    }
    if column_count > MAX_COLUMNS {
        return Err(Error::format_detection(format!(
            "too many columns: found {column_count}, maximum is {MAX_COLUMNS}"
        )));
    }

    // Strictly highest count wins; ties default to comma/standard
    let name = if tab_count > comma_count && tab_count > semicolon_count {
        FormatName::Tab
    } else if semicolon_count > comma_count && semicolon_count > tab_count {
        FormatName::Semicolon
    } else {
        FormatName::Standard
    };

    Ok(FormatInfo::for_name(name))
}
