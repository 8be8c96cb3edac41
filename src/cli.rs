//! Command-line interface parsing for Anteater Facts
//!
//! This module handles parsing of CLI arguments using clap, including the
//! --fact flag for printing a single fact without entering the TUI.

use clap::Parser;

/// Anteater Facts - random anteater facts in your terminal
#[derive(Parser, Debug)]
#[command(name = "antfacts")]
#[command(about = "Random anteater facts, with an offline fallback list")]
#[command(version)]
pub struct Cli {
    /// Print one random fact to stdout and exit instead of opening the TUI
    #[arg(long)]
    pub fact: bool,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, Default)]
pub struct StartupConfig {
    /// Whether to print a single fact and exit
    pub print_single_fact: bool,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            print_single_fact: cli.fact,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["antfacts"]);
        assert!(!cli.fact);
    }

    #[test]
    fn test_cli_parse_fact_flag() {
        let cli = Cli::parse_from(["antfacts", "--fact"]);
        assert!(cli.fact);
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(!config.print_single_fact);
    }

    #[test]
    fn test_startup_config_from_cli_no_args() {
        let cli = Cli::parse_from(["antfacts"]);
        let config = StartupConfig::from_cli(&cli);
        assert!(!config.print_single_fact);
    }

    #[test]
    fn test_startup_config_from_cli_fact_flag() {
        let cli = Cli::parse_from(["antfacts", "--fact"]);
        let config = StartupConfig::from_cli(&cli);
        assert!(config.print_single_fact);
    }
}
