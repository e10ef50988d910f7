//! Build script for tecfs-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("tecfs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect paths and resolve special and asset directories")
        .long_about(
            "Command-line tool for normalizing and taking apart file paths, and for \
             locating the per-user, program and asset directories of a game",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("app-name")
                .long("app-name")
                .help("Application name used for the per-user folders")
                .value_name("NAME")
                .global(true)
                .env("TECFS_APP_NAME"),
        )
        .arg(
            Arg::new("assets-dir")
                .long("assets-dir")
                .help("Use this directory as the assets base instead of probing")
                .value_name("PATH")
                .global(true)
                .env("TECFS_ASSETS_DIR"),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Read the user configuration from PATH/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("TECFS_CONFIG_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["human", "json"])
                .default_value("human")
                .global(true),
        )
        .subcommands(vec![
            Command::new("normalize")
                .about("Print a path in normalized form")
                .long_about("Rewrite separators to the native form and print the result"),
            Command::new("join")
                .about("Join path elements as directories")
                .long_about("Join parts with exactly one separator, or concatenate with --concat"),
            Command::new("inspect")
                .about("Show the parts of a path")
                .long_about("Show file name, extension, base path, components and flags"),
            Command::new("subpath")
                .about("Extract a range of path elements")
                .long_about("Print the path elements from BEGIN up to (not including) END"),
            Command::new("subpath-from")
                .about("Extract the path after a named element")
                .long_about("Print everything after the first element equal to NEEDLE"),
            Command::new("special-dirs")
                .about("Show the per-user and program directories")
                .long_about("Show the settings, data, cache and program directories"),
            Command::new("assets-base")
                .about("Show the resolved assets directory")
                .long_about("Probe for the assets directory and print the first one found"),
            Command::new("asset")
                .about("Resolve an asset name to its full path")
                .long_about("Join an asset name onto the resolved assets directory"),
            Command::new("mkdir")
                .about("Create a directory")
                .long_about("Create a directory, or with --parents every missing level"),
        ])
}

fn main() -> io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    // Generate main tecfs.1 man page
    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("tecfs.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
