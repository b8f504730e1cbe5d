//! Shared components for CLI commands
//!
//! Logging setup and summary rendering used by multiple subcommands.

use colored::Colorize;

use crate::Result;
use crate::app::services::timesheet_parser::ParseResult;

/// Set up structured logging for a command
///
/// Honors `RUST_LOG` when set; otherwise filters this crate to the level
/// implied by the verbosity flags.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("timesheet_processor={log_level}")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    Ok(())
}

/// Print a human-readable summary of a parse result
pub fn print_summary(result: &ParseResult) {
    println!("{}", "Timesheet parse summary".bold());
    println!("  format:      {}", result.format.name);
    println!("  rows:        {}", result.total_rows);
    println!(
        "  parsed:      {}",
        result.success_rows.to_string().green()
    );
    if result.error_rows > 0 {
        println!("  failed:      {}", result.error_rows.to_string().red());
    } else {
        println!("  failed:      0");
    }
    if result.skipped_rows > 0 {
        println!("  skipped:     {}", result.skipped_rows);
    }
    println!("  total hours: {:.2}", result.total_hours());
    println!("  grand total: {:.2}", result.grand_total());

    if !result.errors.is_empty() {
        println!();
        println!("{}", "Row errors".bold());
        for error in &result.errors {
            println!(
                "  line {}: {}",
                error.line.to_string().yellow(),
                error.message
            );
            if !error.suggestion.is_empty() {
                println!("           hint: {}", error.suggestion.dimmed());
            }
        }
    }
}
