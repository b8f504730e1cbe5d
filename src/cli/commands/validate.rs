//! Validate command: format detection report for a timesheet file

use colored::Colorize;
use std::fs::File;
use tracing::info;

use crate::app::services::timesheet_parser::TimesheetParser;
use crate::cli::args::ValidateArgs;
use crate::cli::commands::shared;
use crate::{Error, Result};

/// Run the validate command
pub async fn run_validate(args: ValidateArgs) -> Result<()> {
    shared::setup_logging(args.log_level())?;

    info!(file = %args.input.display(), "validating timesheet format");
    let file = File::open(&args.input)
        .map_err(|e| Error::io(format!("failed to open {}", args.input.display()), e))?;

    let info = TimesheetParser::validate_format(file)?;

    println!("{}", "Format validation".bold());
    println!("  file:      {}", args.input.display());
    println!("  format:    {}", info.name.to_string().green());
    println!("  delimiter: {:?}", info.delimiter);
    println!("  header:    {}", info.has_header);
    println!("  encoding:  {}", info.encoding);

    Ok(())
}
