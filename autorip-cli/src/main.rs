// autorip-cli/src/main.rs
//
// Entry point for the autorip command.
//
// Responsibilities include:
// - Parsing command-line arguments (`cli` module).
// - Setting up console logging (`logging` module).
// - Dispatching to the subcommand implementations (`commands` module).
// - Managing the process exit code based on success or failure.

mod cli;
mod commands;
mod logging;
mod progress;

use clap::Parser;
use cli::{Cli, Commands};
use console::style;
use std::process;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    // Parse the top-level arguments
    let cli = Cli::parse();

    // Match on the command provided
    let result = match &cli.command {
        Commands::Drives => commands::drives::run_drives(&cli),
        Commands::Scan(args) => commands::scan::run_scan(&cli, args),
        Commands::Rip(args) => commands::rip::run_rip(&cli, args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        process::exit(1);
    }

    Ok(())
}
