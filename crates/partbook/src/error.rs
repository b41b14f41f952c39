//! Error types for partbook.
//!
//! This module defines all error types used throughout the partbook crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::record::Field;

/// The main error type for partbook operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Store Errors ===
    /// Failed to open a registry file for reading.
    #[error("failed to open {path} for reading: {source}")]
    FileOpen {
        /// Path to the registry file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to open or write a registry file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        /// Path to the registry file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A numeric field line in a registry file failed to parse.
    #[error("corrupt record in {path}: line {line} is not a number: {value:?}")]
    CorruptRecord {
        /// Path to the registry file.
        path: PathBuf,
        /// 1-based line number of the offending line.
        line: usize,
        /// The offending line text.
        value: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Query Errors ===
    /// A numeric field was queried with non-numeric text.
    #[error("field '{field}' expects a numeric query, got {value:?}")]
    InvalidQuery {
        /// The queried field.
        field: Field,
        /// The raw query text.
        value: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for partbook operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a read-side open error.
    #[must_use]
    pub fn file_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a write-side open/flush error.
    #[must_use]
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a corrupt-record error for a malformed numeric line.
    #[must_use]
    pub fn corrupt_record(path: impl Into<PathBuf>, line: usize, value: impl Into<String>) -> Self {
        Self::CorruptRecord {
            path: path.into(),
            line,
            value: value.into(),
        }
    }

    /// Create an invalid-query error for a numeric field.
    #[must_use]
    pub fn invalid_query(field: Field, value: impl Into<String>) -> Self {
        Self::InvalidQuery {
            field,
            value: value.into(),
        }
    }

    /// Check if this error means the registry file could not be opened.
    #[must_use]
    pub fn is_file_open(&self) -> bool {
        matches!(self, Self::FileOpen { .. })
    }

    /// Check if this error is a corrupt-record condition.
    #[must_use]
    pub fn is_corrupt_record(&self) -> bool {
        matches!(self, Self::CorruptRecord { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_open_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = Error::file_open("parts.txt", io);
        let msg = err.to_string();
        assert!(msg.contains("parts.txt"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn test_file_write_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = Error::file_write("/etc/parts.txt", io);
        let msg = err.to_string();
        assert!(msg.contains("/etc/parts.txt"));
        assert!(msg.contains("read-only"));
    }

    #[test]
    fn test_corrupt_record_display() {
        let err = Error::corrupt_record("parts.txt", 3, "not-a-number");
        let msg = err.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.contains("not-a-number"));
    }

    #[test]
    fn test_invalid_query_display() {
        let err = Error::invalid_query(Field::Tolerance, "five");
        let msg = err.to_string();
        assert!(msg.contains("tolerance"));
        assert!(msg.contains("five"));
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::ConfigValidation {
            message: "empty extension".to_string(),
        };
        assert!(err.to_string().contains("empty extension"));
    }

    #[test]
    fn test_is_file_open() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(Error::file_open("x", io).is_file_open());
        assert!(!Error::corrupt_record("x", 1, "y").is_file_open());
    }

    #[test]
    fn test_is_corrupt_record() {
        assert!(Error::corrupt_record("x", 1, "y").is_corrupt_record());
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert!(!Error::file_open("x", io).is_corrupt_record());
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted");
        let err: Error = io.into();
        assert!(err.to_string().contains("interrupted"));
    }

    #[test]
    fn test_from_json_error() {
        let result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }
}
