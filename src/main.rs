use clap::Parser;
use sota2pota::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(()) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("SOTA to POTA Converter - Amateur Radio Log Tool");
    println!("===============================================");
    println!();
    println!("Convert SOTA activator log exports into POTA ADIF submission files,");
    println!("one file per operator and park, with park-to-park detection.");
    println!();
    println!("USAGE:");
    println!("    sota2pota <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    convert     Convert SOTA logs into per-park ADIF files (main command)");
    println!("    summits     Build the summit-to-park reference table");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Convert logs using the default summit table and output directory:");
    println!("    sota2pota convert --activator activator.csv --s2s s2s.csv");
    println!();
    println!("    # Convert only contacts from August 2024 onwards:");
    println!("    sota2pota convert --activator activator.csv --s2s s2s.csv \\");
    println!("                      --cutoff 20240801 --output adif/");
    println!();
    println!("    # Build the summit-to-park table for the summits in a log:");
    println!("    sota2pota summits --activator activator.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    sota2pota <COMMAND> --help");
}
