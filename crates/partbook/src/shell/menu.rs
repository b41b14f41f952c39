//! Shell menu definitions.
//!
//! Menu options are enumerated variants resolved from the numeric choice,
//! so dispatch in the shell loop is an exhaustive `match` rather than a
//! bare integer switch.

use crate::record::Field;

/// Main menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenu {
    /// Start a new registry file (overwrite mode).
    NewRegistration,
    /// Add records to an existing registry file (append mode).
    ContinueRegistration,
    /// Print a registry file line by line.
    ViewFile,
    /// Truncate a registry file.
    ClearFile,
    /// Load a registry file and search it.
    SearchFile,
    /// Leave the shell.
    Exit,
}

impl MainMenu {
    /// Number of options on this menu.
    pub const COUNT: u32 = 6;

    /// Resolve a 1-based menu choice.
    #[must_use]
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::NewRegistration),
            2 => Some(Self::ContinueRegistration),
            3 => Some(Self::ViewFile),
            4 => Some(Self::ClearFile),
            5 => Some(Self::SearchFile),
            6 => Some(Self::Exit),
            _ => None,
        }
    }

    /// The menu text shown before the choice prompt.
    #[must_use]
    pub fn render() -> String {
        [
            "\n============================",
            "Welcome! Select an option:",
            "(1) New component registration",
            "(2) Continue registration in an existing file",
            "(3) View records in an existing file",
            "(4) Clear the contents of a file",
            "(5) Search for a component in a file",
            "(6) Exit",
            "============================",
        ]
        .join("\n")
    }
}

/// Search submenu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMenu {
    /// Search one of the record fields.
    Field(Field),
    /// Return to the main menu without searching.
    Back,
}

impl SearchMenu {
    /// Number of options on this menu.
    pub const COUNT: u32 = 7;

    /// Resolve a 1-based menu choice.
    #[must_use]
    pub fn from_choice(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(Self::Field(Field::Name)),
            2 => Some(Self::Field(Field::Kind)),
            3 => Some(Self::Field(Field::NominalValue)),
            4 => Some(Self::Field(Field::Tolerance)),
            5 => Some(Self::Field(Field::WorkingVoltage)),
            6 => Some(Self::Field(Field::Status)),
            7 => Some(Self::Back),
            _ => None,
        }
    }

    /// The menu text shown before the choice prompt.
    #[must_use]
    pub fn render() -> String {
        [
            "\n============================",
            "(1) Name",
            "(2) Kind",
            "(3) Nominal value",
            "(4) Tolerance",
            "(5) Working voltage",
            "(6) Status",
            "(7) Back",
            "Choose the search parameter:",
            "============================",
        ]
        .join("\n")
    }
}
