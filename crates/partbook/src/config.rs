//! Configuration management for partbook.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default data directory name.
const DATA_DIR_NAME: &str = "partbook";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `PARTBOOK_`)
/// 2. TOML config file at `~/.config/partbook/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Storage configuration.
    pub storage: StorageConfig,
    /// Interactive shell configuration.
    pub shell: ShellConfig,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory where bare registry file names are placed.
    /// Defaults to `~/.local/share/partbook`.
    pub data_dir: Option<PathBuf>,
    /// Extension appended to bare registry names that carry none.
    pub default_extension: String,
}

/// Interactive shell configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Ask for confirmation before overwriting an existing registry file.
    pub confirm_overwrite: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None, // Will be resolved to default at runtime
            default_extension: "txt".to_string(),
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            confirm_overwrite: true,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `PARTBOOK_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("PARTBOOK_").split("_"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(DATA_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from(".local/share"))
            .join(DATA_DIR_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.storage.default_extension.is_empty() {
            return Err(Error::ConfigValidation {
                message: "default_extension must not be empty".to_string(),
            });
        }

        if self
            .storage
            .default_extension
            .contains(['/', '\\', '.'])
        {
            return Err(Error::ConfigValidation {
                message: format!(
                    "default_extension must be a bare extension, got {:?}",
                    self.storage.default_extension
                ),
            });
        }

        Ok(())
    }

    /// Get the data directory, resolving defaults if not set.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage
            .data_dir
            .clone()
            .unwrap_or_else(Self::default_data_dir)
    }

    /// Resolve a user-typed registry name to a file path.
    ///
    /// Absolute paths and names containing a separator pass through
    /// unchanged. Bare names land in the data directory, with the default
    /// extension appended when the name carries none.
    #[must_use]
    pub fn resolve_path(&self, name: &str) -> PathBuf {
        let as_path = Path::new(name);
        if as_path.is_absolute() || name.contains(['/', '\\']) {
            return as_path.to_path_buf();
        }

        let file_name = if as_path.extension().is_some() {
            PathBuf::from(name)
        } else {
            PathBuf::from(format!("{name}.{}", self.storage.default_extension))
        };
        self.data_dir().join(file_name)
    }
}
