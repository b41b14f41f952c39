//! `partbook` - flat-file registries of electronic component records
//!
//! This library provides the record type, the line-oriented flat-file store,
//! the field search, and the interactive shell behind the `partbook` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod shell;
pub mod store;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{search, Field, FieldQuery, Record};
pub use shell::{Shell, ShellContext};
pub use store::Store;
