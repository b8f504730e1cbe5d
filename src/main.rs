use clap::Parser;
use std::process;
use timesheet_processor::cli::{args::Args, commands};
use tokio_util::sync::CancellationToken;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {e}");
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Cancellation token coordinating graceful shutdown
        let cancellation_token = CancellationToken::new();

        let shutdown_signal = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install CTRL+C signal handler");
            cancellation_token.cancel();
        };

        tokio::select! {
            result = commands::run(args, cancellation_token.clone()) => {
                result
            }
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, shutting down gracefully...");
                Err(timesheet_processor::Error::Cancelled)
            }
        }
    });

    match result {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {error:#}");
            process::exit(1);
        }
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("Timesheet Processor - CSV Timesheet Parsing & Validation");
    println!("========================================================");
    println!();
    println!("Parse delimiter-separated timesheet data into validated work-item");
    println!("records suitable for invoicing.");
    println!();
    println!("USAGE:");
    println!("    timesheet-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    parse       Parse a timesheet file into validated work items");
    println!("    validate    Detect and validate the format of a timesheet file");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Parse a comma-separated timesheet, collecting row errors:");
    println!("    timesheet-processor parse hours.csv --continue-on-error");
    println!();
    println!("    # Parse a tab-separated file with an explicit format:");
    println!("    timesheet-processor parse hours.tsv --format tab --output json");
    println!();
    println!("    # Check what format a file is in:");
    println!("    timesheet-processor validate hours.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    timesheet-processor <COMMAND> --help");
}
