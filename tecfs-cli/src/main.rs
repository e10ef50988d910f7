//! Main entry point for the tecfs CLI.
//!
//! This is the command-line interface for the tecfs path library.
//! It provides commands for working with paths:
//! - `normalize`, `join`, `inspect`: Build and take apart paths
//! - `subpath`, `subpath-from`: Extract part of a path
//! - `special-dirs`: Show the per-user and program directories
//! - `assets-base`, `asset`: Resolve game assets
//! - `mkdir`: Create directories

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration before logging so the configured mode applies
    let config = match utils::load_configuration(
        cli.app_name,
        cli.assets_dir,
        cli.config_dir.as_deref(),
    ) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    let logger = utils::select_logger(cli.verbose, cli.quiet, &config);
    if let Err(e) = logger.install() {
        logger.debug(&format!("library logging unavailable: {e}"));
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        format: cli.format,
        config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Normalize(cmd) => cmd.execute(&global),
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Inspect(cmd) => cmd.execute(&global),
        cli::Command::Subpath(cmd) => cmd.execute(&global),
        cli::Command::SubpathFrom(cmd) => cmd.execute(&global),
        cli::Command::SpecialDirs(cmd) => cmd.execute(&global),
        cli::Command::AssetsBase(cmd) => cmd.execute(&global),
        cli::Command::Asset(cmd) => cmd.execute(&global),
        cli::Command::Mkdir(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
