//! Interactive menu shell.
//!
//! The shell owns the prompt loop and the in-memory record sequence; the
//! store only ever sees explicit arguments. All shared state lives in
//! [`ShellContext`] and is passed into each handler, never held globally.
//!
//! File-open failures are reported and the menu loop continues. The only
//! way out of the loop is the Exit option (or the input stream closing).

pub mod input;
pub mod menu;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::config::Config;
use crate::error::Error;
use crate::record::{search, FieldQuery, Record};
use crate::store::Store;

pub use input::Prompter;
pub use menu::{MainMenu, SearchMenu};

/// Mutable state shared by the shell handlers.
#[derive(Debug, Default)]
pub struct ShellContext {
    /// The in-memory record sequence. Loading a file replaces it.
    pub records: Vec<Record>,
    /// The registry file most recently named by the user.
    pub file: Option<PathBuf>,
}

/// The interactive shell.
#[derive(Debug)]
pub struct Shell<'a, R, W> {
    prompter: Prompter<R, W>,
    config: &'a Config,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a shell over the given streams.
    pub fn new(config: &'a Config, input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            config,
        }
    }

    /// Run the menu loop until the user exits.
    ///
    /// # Errors
    ///
    /// Returns an error only if the console streams fail; store errors are
    /// reported to the user and the loop continues.
    pub fn run(&mut self) -> io::Result<()> {
        let mut ctx = ShellContext::default();
        loop {
            self.prompter.say(&MainMenu::render())?;
            let choice = self.prompter.read_choice("Choice: ", MainMenu::COUNT)?;
            match MainMenu::from_choice(choice) {
                Some(MainMenu::NewRegistration) => self.register(&mut ctx, true)?,
                Some(MainMenu::ContinueRegistration) => self.register(&mut ctx, false)?,
                Some(MainMenu::ViewFile) => self.view_file(&mut ctx)?,
                Some(MainMenu::ClearFile) => self.clear_file(&mut ctx)?,
                Some(MainMenu::SearchFile) => self.search_file(&mut ctx)?,
                Some(MainMenu::Exit) => {
                    self.prompter.say("Come back soon!")?;
                    return Ok(());
                }
                None => self.prompter.say("Error: invalid option.")?,
            }
        }
    }

    fn ask_file(&mut self, prompt: &str) -> io::Result<PathBuf> {
        let name = self.prompter.read_text(prompt, true)?;
        Ok(self.config.resolve_path(&name))
    }

    fn report(&mut self, err: &Error) -> io::Result<()> {
        warn!("{err}");
        self.prompter.say(&format!("Error: {err}"))
    }

    /// The registration workflow for both write modes.
    ///
    /// Overwrite mode saves only the single most recent record on each
    /// pass, so looping multiple entries leaves just the last one durable.
    /// Append mode requires the file to already exist.
    fn register(&mut self, ctx: &mut ShellContext, overwrite: bool) -> io::Result<()> {
        let path = self.ask_file("Registry file name: ")?;
        let store = Store::new(path.clone());

        if overwrite && store.exists() && self.config.shell.confirm_overwrite {
            let keep_going = self
                .prompter
                .confirm("The file already exists and will be overwritten. Continue?")?;
            if !keep_going {
                return Ok(());
            }
        }

        if !overwrite && !store.exists() {
            return self
                .prompter
                .say("The file does not exist. Cannot continue registration.");
        }

        ctx.records.clear();
        ctx.file = Some(path);

        loop {
            let record = self.prompt_record()?;
            let result = if overwrite {
                store.overwrite(&record)
            } else {
                store.append(&record)
            };
            match result {
                Ok(()) => {
                    ctx.records.push(record);
                    self.prompter.say("Component saved.")?;
                }
                Err(err) => self.report(&err)?,
            }

            let another = self.prompter.confirm("Enter another component?")?;
            if !another {
                break;
            }
        }
        self.prompter.say("Registry saved.")
    }

    fn prompt_record(&mut self) -> io::Result<Record> {
        self.prompter.say("Enter the component data:")?;
        Ok(Record {
            name: self.prompter.read_text("Component name: ", true)?,
            kind: self.prompter.read_text("Component kind: ", true)?,
            nominal_value: self.prompter.read_number("Nominal value: ")?,
            tolerance: self.prompter.read_number("Tolerance: ")?,
            working_voltage: self.prompter.read_number("Working voltage: ")?,
            status: self.prompter.read_text("Component status: ", false)?,
        })
    }

    fn view_file(&mut self, ctx: &mut ShellContext) -> io::Result<()> {
        let path = self.ask_file("File to view: ")?;
        let store = Store::new(path.clone());
        ctx.file = Some(path);

        match store.raw_lines() {
            Ok(lines) => {
                self.prompter.say("File contents, line by line:")?;
                for line in lines {
                    self.prompter.say(&line)?;
                }
                Ok(())
            }
            Err(err) => self.report(&err),
        }
    }

    fn clear_file(&mut self, ctx: &mut ShellContext) -> io::Result<()> {
        let path = self.ask_file("File to clear: ")?;
        let store = Store::new(path.clone());

        match store.clear() {
            Ok(()) => {
                let message = format!("The file '{}' was cleared.", path.display());
                ctx.file = Some(path);
                self.prompter.say(&message)
            }
            Err(err) => self.report(&err),
        }
    }

    fn search_file(&mut self, ctx: &mut ShellContext) -> io::Result<()> {
        let path = self.ask_file("File to search in: ")?;
        let store = Store::new(path.clone());

        // The loaded sequence replaces whatever was in memory.
        match store.load() {
            Ok(records) => {
                ctx.records = records;
                ctx.file = Some(path);
            }
            Err(err) => return self.report(&err),
        }

        self.prompter.say(&SearchMenu::render())?;
        let choice = self.prompter.read_choice("Choice: ", SearchMenu::COUNT)?;
        let query = match SearchMenu::from_choice(choice) {
            Some(SearchMenu::Field(field)) => self.prompt_query(field)?,
            Some(SearchMenu::Back) => {
                return self.prompter.say("Returning to the main menu...");
            }
            None => return self.prompter.say("Error: invalid option."),
        };

        let matches = search(&ctx.records, &query);
        if matches.is_empty() {
            self.prompter.say("No matching component found.")?;
        } else {
            for record in matches {
                self.prompter.say("\nComponent found:")?;
                self.prompter.say(&record.to_string())?;
            }
        }
        Ok(())
    }

    fn prompt_query(&mut self, field: crate::record::Field) -> io::Result<FieldQuery> {
        use crate::record::Field;
        Ok(match field {
            Field::Name => FieldQuery::Name(
                self.prompter
                    .read_text("Enter the name of the component to find: ", true)?,
            ),
            Field::Kind => FieldQuery::Kind(
                self.prompter
                    .read_text("Enter the kind of the component to find: ", true)?,
            ),
            Field::NominalValue => FieldQuery::NominalValue(
                self.prompter
                    .read_number("Enter the nominal value of the component to find: ")?,
            ),
            Field::Tolerance => FieldQuery::Tolerance(
                self.prompter
                    .read_number("Enter the tolerance of the component to find: ")?,
            ),
            Field::WorkingVoltage => FieldQuery::WorkingVoltage(
                self.prompter
                    .read_number("Enter the voltage of the component to find: ")?,
            ),
            Field::Status => FieldQuery::Status(
                self.prompter
                    .read_text("Enter the status of the component to find: ", true)?,
            ),
        })
    }
}
