//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use crate::record::Field;

/// Add command arguments.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Registry file (bare names resolve against the data directory)
    pub file: String,

    /// Component name (digits allowed)
    #[arg(long)]
    pub name: String,

    /// Component kind (digits allowed)
    #[arg(long)]
    pub kind: String,

    /// Nominal value
    #[arg(long)]
    pub value: f32,

    /// Tolerance percentage
    #[arg(long)]
    pub tolerance: f32,

    /// Working voltage
    #[arg(long)]
    pub voltage: f32,

    /// Component status (no digits allowed)
    #[arg(long)]
    pub status: String,

    /// Write mode
    #[arg(short, long, value_enum, default_value = "append")]
    pub mode: WriteMode,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Registry file to print
    pub file: String,
}

/// Clear command arguments.
#[derive(Debug, Args)]
pub struct ClearCommand {
    /// Registry file to truncate
    pub file: String,

    /// Skip confirmation
    #[arg(short, long)]
    pub yes: bool,
}

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// Registry file to search
    pub file: String,

    /// The query: substring for text fields, exact value for numeric fields
    pub query: String,

    /// Field to search
    #[arg(short, long, value_enum)]
    pub field: FieldArg,

    /// Output format
    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Write mode for the add command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum WriteMode {
    /// Append after existing records
    #[default]
    Append,
    /// Truncate the file and write this one record
    Overwrite,
}

/// Record field argument for searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldArg {
    /// Component name
    Name,
    /// Component kind
    Kind,
    /// Nominal value
    Value,
    /// Tolerance percentage
    Tolerance,
    /// Working voltage
    Voltage,
    /// Component status
    Status,
}

impl From<FieldArg> for Field {
    fn from(arg: FieldArg) -> Self {
        match arg {
            FieldArg::Name => Self::Name,
            FieldArg::Kind => Self::Kind,
            FieldArg::Value => Self::NominalValue,
            FieldArg::Tolerance => Self::Tolerance,
            FieldArg::Voltage => Self::WorkingVoltage,
            FieldArg::Status => Self::Status,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_arg_conversion() {
        assert_eq!(Field::from(FieldArg::Name), Field::Name);
        assert_eq!(Field::from(FieldArg::Kind), Field::Kind);
        assert_eq!(Field::from(FieldArg::Value), Field::NominalValue);
        assert_eq!(Field::from(FieldArg::Tolerance), Field::Tolerance);
        assert_eq!(Field::from(FieldArg::Voltage), Field::WorkingVoltage);
        assert_eq!(Field::from(FieldArg::Status), Field::Status);
    }

    #[test]
    fn test_write_mode_default() {
        assert_eq!(WriteMode::default(), WriteMode::Append);
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            file: "parts".to_string(),
            name: "R1".to_string(),
            kind: "Resistor".to_string(),
            value: 100.0,
            tolerance: 1.0,
            voltage: 5.0,
            status: "New".to_string(),
            mode: WriteMode::Append,
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("parts"));
        assert!(debug_str.contains("Resistor"));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        assert!(format!("{cmd:?}").contains("Show"));
    }
}
