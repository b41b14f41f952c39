//! `partbook` - CLI for flat-file component registries
//!
//! This binary provides the command-line surface: the interactive menu shell
//! plus non-interactive subcommands over registry files.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use std::io;

use anyhow::bail;
use clap::Parser;

use partbook::cli::{
    AddCommand, Cli, ClearCommand, Command, ConfigCommand, OutputFormat, SearchCommand,
    ShowCommand, WriteMode,
};
use partbook::record::FieldQuery;
use partbook::{init_logging, search, Config, Record, Store};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command; no subcommand means the interactive shell
    match cli.command {
        None | Some(Command::Shell) => run_shell(&config),
        Some(Command::Add(add_cmd)) => handle_add(&config, &add_cmd),
        Some(Command::Show(show_cmd)) => handle_show(&config, &show_cmd),
        Some(Command::Clear(clear_cmd)) => handle_clear(&config, &clear_cmd),
        Some(Command::Search(search_cmd)) => handle_search(&config, &search_cmd),
        Some(Command::Config(config_cmd)) => handle_config(&config, config_cmd),
    }
}

fn run_shell(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = partbook::Shell::new(config, stdin.lock(), stdout.lock());
    match shell.run() {
        Ok(()) => Ok(()),
        // Closed stdin ends the shell the same way Exit does.
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn handle_add(config: &Config, cmd: &AddCommand) -> anyhow::Result<()> {
    if cmd.name.trim().is_empty() || cmd.kind.trim().is_empty() || cmd.status.trim().is_empty() {
        bail!("name, kind, and status must not be empty");
    }
    if cmd.status.chars().any(|c| c.is_ascii_digit()) {
        bail!("status must not contain digits, got {:?}", cmd.status);
    }

    let record = Record {
        name: cmd.name.trim().to_string(),
        kind: cmd.kind.trim().to_string(),
        nominal_value: cmd.value,
        tolerance: cmd.tolerance,
        working_voltage: cmd.voltage,
        status: cmd.status.trim().to_string(),
    };

    let store = Store::new(config.resolve_path(&cmd.file));
    match cmd.mode {
        WriteMode::Append => store.append(&record)?,
        WriteMode::Overwrite => store.overwrite(&record)?,
    }
    println!("Saved '{}' to {}", record.name, store.path().display());
    Ok(())
}

fn handle_show(config: &Config, cmd: &ShowCommand) -> anyhow::Result<()> {
    let store = Store::new(config.resolve_path(&cmd.file));
    for line in store.raw_lines()? {
        println!("{line}");
    }
    Ok(())
}

fn handle_clear(config: &Config, cmd: &ClearCommand) -> anyhow::Result<()> {
    let store = Store::new(config.resolve_path(&cmd.file));
    if !cmd.yes {
        println!(
            "This will erase all records in {}. Use --yes to confirm.",
            store.path().display()
        );
        return Ok(());
    }
    store.clear()?;
    println!("Cleared {}", store.path().display());
    Ok(())
}

fn handle_search(config: &Config, cmd: &SearchCommand) -> anyhow::Result<()> {
    let store = Store::new(config.resolve_path(&cmd.file));
    let records = store.load()?;
    let query = FieldQuery::for_field(cmd.field.into(), &cmd.query)?;
    let matches = search(&records, &query);

    match cmd.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matches)?),
        OutputFormat::Plain => {
            if matches.is_empty() {
                println!("No matching component found.");
            } else {
                for record in matches {
                    println!("\nComponent found:\n{record}");
                }
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Storage]");
                println!("  Data directory:     {}", config.data_dir().display());
                println!(
                    "  Default extension:  {}",
                    config.storage.default_extension
                );
                println!();
                println!("[Shell]");
                println!("  Confirm overwrite:  {}", config.shell.confirm_overwrite);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
