//! Command-line argument definitions for the timesheet processor
//!
//! Defines the complete CLI interface using the clap derive API.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the timesheet processor
///
/// Converts delimiter-separated timesheet data into validated work-item
/// records suitable for invoicing.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "timesheet-processor",
    version,
    about = "Parse and validate CSV timesheet data into invoiceable work items",
    long_about = "Parses delimiter-separated timesheet files (comma, tab, or semicolon \
                  separated) into typed work-item records, applying composable validation \
                  rules at field, row, and batch level. Tolerates malformed input and \
                  supports continue-on-error collection of per-row failures."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Parse a timesheet file into validated work items
    Parse(ParseArgs),
    /// Detect and validate the format of a timesheet file
    Validate(ValidateArgs),
}

/// Output rendering for the parse command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored summary
    #[default]
    Summary,
    /// Full parse result as JSON
    Json,
}

/// Arguments for the parse command
#[derive(Debug, Clone, Parser)]
pub struct ParseArgs {
    /// Timesheet file to parse
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Explicit input format, bypassing detection
    ///
    /// One of: standard, tab, semicolon, excel, rfc4180, tsv.
    /// Required when the first line mixes delimiter characters.
    #[arg(short = 'f', long = "format", value_name = "NAME")]
    pub format: Option<String>,

    /// Collect row-level failures instead of aborting on the first one
    #[arg(long = "continue-on-error")]
    pub continue_on_error: bool,

    /// Silently skip rows whose fields are all blank
    #[arg(long = "skip-empty-rows")]
    pub skip_empty_rows: bool,

    /// Preferred date format hint (advisory)
    #[arg(long = "date-format", value_name = "FORMAT")]
    pub date_format: Option<String>,

    /// Output rendering
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Timesheet file to inspect
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Enable verbose (debug) logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Suppress all logging except errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl ParseArgs {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

impl ValidateArgs {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        log_level(self.verbose, self.quiet)
    }
}

fn log_level(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    }
}
