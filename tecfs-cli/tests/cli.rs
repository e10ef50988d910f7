//! Integration tests for the tecfs CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test that the binary runs without arguments and displays help/error.
#[test]
fn test_cli_no_arguments() {
    let mut cmd = Command::cargo_bin("tecfs").expect("Failed to find tecfs binary");

    // With clap subcommands required, no arguments should fail and show usage
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

/// Test that the --version flag displays version information.
#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::cargo_bin("tecfs").expect("Failed to find tecfs binary");

    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tecfs"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that the --help flag displays help text.
#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("tecfs").expect("Failed to find tecfs binary");

    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains(
            "Inspect paths and resolve special and asset directories",
        ))
        .stdout(predicate::str::contains("subpath-from"))
        .stdout(predicate::str::contains("assets-base"));
}

/// Test that subcommand help lists the command's own flags.
#[test]
fn test_cli_subcommand_help() {
    let mut cmd = Command::cargo_bin("tecfs").expect("Failed to find tecfs binary");

    cmd.args(["join", "--help"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--concat"))
        .stdout(predicate::str::contains("--generic"));
}

/// Test that an invalid subcommand produces an error.
#[test]
fn test_cli_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("tecfs").expect("Failed to find tecfs binary");

    cmd.arg("invalid-command");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

/// Test that an unknown output format is rejected by the parser.
#[test]
fn test_cli_invalid_format() {
    let mut cmd = Command::cargo_bin("tecfs").expect("Failed to find tecfs binary");

    cmd.args(["--format", "xml", "normalize", "a/b"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
