//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AssetCommand, AssetsBaseCommand, InspectCommand, JoinCommand, MkdirCommand, NormalizeCommand,
    SpecialDirsCommand, SubpathCommand, SubpathFromCommand,
};
use crate::utils::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for inspecting paths and resolving game directories.
#[derive(Parser)]
#[command(name = "tecfs")]
#[command(version, about = "Inspect paths and resolve special and asset directories", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Application name used for the per-user folders
    #[arg(long, value_name = "NAME", global = true, env = "TECFS_APP_NAME")]
    pub app_name: Option<String>,

    /// Use this directory as the assets base instead of probing
    #[arg(long, value_name = "PATH", global = true, env = "TECFS_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Read the user configuration from PATH/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "TECFS_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "human", global = true, ignore_case = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print a path in normalized form
    Normalize(NormalizeCommand),

    /// Join path elements as directories
    Join(JoinCommand),

    /// Show the parts of a path
    Inspect(InspectCommand),

    /// Extract a range of path elements
    Subpath(SubpathCommand),

    /// Extract the path after a named element
    SubpathFrom(SubpathFromCommand),

    /// Show the per-user and program directories
    SpecialDirs(SpecialDirsCommand),

    /// Show the resolved assets directory
    AssetsBase(AssetsBaseCommand),

    /// Resolve an asset name to its full path
    Asset(AssetCommand),

    /// Create a directory
    Mkdir(MkdirCommand),
}
