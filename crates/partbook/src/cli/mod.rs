//! Command-line interface for partbook.
//!
//! This module provides the CLI structure and command definitions for the
//! `partbook` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ClearCommand, ConfigCommand, FieldArg, OutputFormat, SearchCommand, ShowCommand,
    WriteMode,
};

/// partbook - flat-file registry for electronic component records
///
/// Keeps component registries as plain text files, seven lines per record,
/// and searches them by any field. Run without a subcommand for the
/// interactive menu shell.
#[derive(Debug, Parser)]
#[command(name = "partbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute; defaults to the interactive shell
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the interactive menu shell
    Shell,

    /// Register one component record in a registry file
    Add(AddCommand),

    /// Print a registry file line by line
    Show(ShowCommand),

    /// Truncate a registry file
    Clear(ClearCommand),

    /// Search a registry file by field
    Search(SearchCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "partbook");
    }

    #[test]
    fn test_no_subcommand_defaults_to_shell() {
        let cli = Cli::try_parse_from(["partbook"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_shell() {
        let cli = Cli::try_parse_from(["partbook", "shell"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Shell)));
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "partbook", "add", "parts", "--name", "Resistor 1k", "--kind", "Resistor", "--value",
            "1000", "--tolerance", "5", "--voltage", "12.5", "--status", "New",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Add(cmd)) => {
                assert_eq!(cmd.file, "parts");
                assert_eq!(cmd.name, "Resistor 1k");
                assert_eq!(cmd.mode, WriteMode::Append);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_add_overwrite_mode() {
        let cli = Cli::try_parse_from([
            "partbook",
            "add",
            "parts",
            "--name",
            "R1",
            "--kind",
            "Resistor",
            "--value",
            "100",
            "--tolerance",
            "1",
            "--voltage",
            "5",
            "--status",
            "New",
            "--mode",
            "overwrite",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Add(cmd)) => assert_eq!(cmd.mode, WriteMode::Overwrite),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_search() {
        let cli =
            Cli::try_parse_from(["partbook", "search", "parts", "--field", "name", "Res"]).unwrap();
        match cli.command {
            Some(Command::Search(cmd)) => {
                assert_eq!(cmd.file, "parts");
                assert_eq!(cmd.field, FieldArg::Name);
                assert_eq!(cmd.query, "Res");
                assert_eq!(cmd.format, OutputFormat::Plain);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_clear_requires_file() {
        assert!(Cli::try_parse_from(["partbook", "clear"]).is_err());
        let cli = Cli::try_parse_from(["partbook", "clear", "parts", "--yes"]).unwrap();
        match cli.command {
            Some(Command::Clear(cmd)) => assert!(cmd.yes),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_with_config() {
        let cli = Cli::try_parse_from(["partbook", "-c", "/custom/config.toml", "shell"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }

    #[test]
    fn test_verbosity_flags() {
        let cli = Cli::try_parse_from(["partbook", "-q"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);

        let cli = Cli::try_parse_from(["partbook", "-v"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);

        let cli = Cli::try_parse_from(["partbook", "-vv"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);

        let cli = Cli::try_parse_from(["partbook"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }
}
