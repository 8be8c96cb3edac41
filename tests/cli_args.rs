//! Integration tests for CLI argument handling
//!
//! Tests the --fact flag and help/version output from the command line.

use std::process::Command;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_antfacts"))
        .args(args)
        .output()
        .expect("Failed to execute antfacts")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("antfacts"), "Help should mention antfacts");
    assert!(stdout.contains("fact"), "Help should mention --fact flag");
}

#[test]
fn test_version_flag_exits_successfully() {
    let output = run_cli(&["--version"]);
    assert!(
        output.status.success(),
        "Expected --version to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("antfacts"), "Version should mention antfacts");
}

#[test]
fn test_unknown_flag_prints_error_and_exits() {
    let output = run_cli(&["--unknown-flag"]);
    assert!(!output.status.success(), "Expected unknown flag to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unexpected") || stderr.contains("error"),
        "Should print error message about unknown flag: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use antfacts::cli::{Cli, StartupConfig};
    use clap::Parser;

    #[test]
    fn test_cli_no_args_does_not_request_single_fact() {
        let cli = Cli::parse_from(["antfacts"]);
        assert!(!cli.fact);
    }

    #[test]
    fn test_cli_fact_flag_requests_single_fact() {
        let cli = Cli::parse_from(["antfacts", "--fact"]);
        assert!(cli.fact);
    }

    #[test]
    fn test_startup_config_maps_fact_flag() {
        let cli = Cli::parse_from(["antfacts", "--fact"]);
        let config = StartupConfig::from_cli(&cli);
        assert!(config.print_single_fact);
    }
}
