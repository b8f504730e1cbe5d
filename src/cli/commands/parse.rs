//! Parse command: file to validated work items

use std::fs::File;
use std::str::FromStr;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::app::services::timesheet_parser::{FormatName, TimesheetParser};
use crate::cli::args::{OutputFormat, ParseArgs};
use crate::cli::commands::shared;
use crate::config::ParseOptions;
use crate::{Error, Result};

/// Run the parse command
pub async fn run_parse(args: ParseArgs, cancel: CancellationToken) -> Result<()> {
    shared::setup_logging(args.log_level())?;

    let mut options = ParseOptions::new();
    if let Some(name) = &args.format {
        options = options.with_format(FormatName::from_str(name)?);
    }
    if args.continue_on_error {
        options = options.with_continue_on_error();
    }
    if args.skip_empty_rows {
        options = options.with_skip_empty_rows();
    }
    if let Some(hint) = &args.date_format {
        options = options.with_date_format(hint);
    }

    info!(file = %args.input.display(), "parsing timesheet file");
    let file = File::open(&args.input)
        .map_err(|e| Error::io(format!("failed to open {}", args.input.display()), e))?;

    let parser = TimesheetParser::new();
    let result = parser.parse_timesheet(file, &options, &cancel)?;

    // Batch constraints apply across the whole file, not per row
    parser
        .validator()
        .validate_batch(&result.work_items, &cancel)?;

    match args.output {
        OutputFormat::Summary => shared::print_summary(&result),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(&result).map_err(|e| {
                Error::io(
                    "failed to render parse result as JSON",
                    std::io::Error::other(e),
                )
            })?;
            println!("{rendered}");
        }
    }

    if result.error_rows > 0 {
        return Err(Error::validation(
            "parse",
            format!("{} of {} rows failed", result.error_rows, result.total_rows),
        ));
    }
    Ok(())
}
