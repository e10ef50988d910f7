//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, resolver construction and output
//! formatting.

use crate::error::CliError;
use clap::ValueEnum;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tecfs::{init_logger, Config, ConfigBuilder, FilePath, Logger, PathResolver};

/// Global CLI options shared across all commands.
///
/// `--verbose` and `--quiet` are consumed when the logger is installed and
/// are not carried here.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format.
    pub format: OutputFormat,

    /// Fully merged configuration.
    pub config: Config,
}

/// Output format shared by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line
    Human,
    /// Pretty-printed JSON
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(
    app_name: Option<String>,
    assets_dir: Option<PathBuf>,
    config_dir: Option<&Path>,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = config_dir {
        builder = builder.with_config_dir(dir);
    }

    let overrides = Config {
        app_name,
        assets_dir: assets_dir.map(FilePath::from),
        log_mode: None,
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Pick the logger for this run.
///
/// CLI flags win; otherwise the configured log mode (which already includes
/// `TECFS_LOG_MODE`) applies.
pub fn select_logger(verbose: bool, quiet: bool, config: &Config) -> Logger {
    match config.log_mode {
        Some(level) if !verbose && !quiet => Logger::new(level),
        _ => init_logger(verbose, quiet),
    }
}

/// Build a resolver configured from the global options.
pub fn build_resolver(global: &GlobalOptions) -> PathResolver {
    global.config.apply_to(PathResolver::new())
}

/// A path as reported by the commands.
#[derive(Debug, Serialize)]
pub struct PathReport {
    /// Native form.
    pub path: String,
    /// Form with `/` separators.
    pub generic: String,
}

impl PathReport {
    /// Report for `path`.
    pub fn new(path: &FilePath) -> Self {
        Self {
            path: path.as_str().to_string(),
            generic: path.to_generic_string(),
        }
    }

    /// Print the report. Human output shows the native form unless
    /// `generic` is set.
    pub fn print(&self, format: OutputFormat, generic: bool) -> Result<(), CliError> {
        match format {
            OutputFormat::Human if generic => println!("{}", self.generic),
            OutputFormat::Human => println!("{}", self.path),
            OutputFormat::Json => print_json(self)?,
        }
        Ok(())
    }
}

/// Print `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
