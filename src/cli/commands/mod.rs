//! Command implementations for the timesheet processor CLI
//!
//! Each subcommand lives in its own module:
//! - `parse`: parse a timesheet file into validated work items
//! - `validate`: detect and report the format of a timesheet file

pub mod parse;
pub mod shared;
pub mod validate;

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Dispatch to the appropriate subcommand handler
pub async fn run(args: Args, cancel: CancellationToken) -> Result<()> {
    match args.command {
        Some(Commands::Parse(parse_args)) => parse::run_parse(parse_args, cancel).await,
        Some(Commands::Validate(validate_args)) => validate::run_validate(validate_args).await,
        None => Ok(()),
    }
}
