//! Flat-file storage for component records.
//!
//! A registry file is plain UTF-8 text, seven lines per record: the six
//! fields in order (name, kind, nominal value, tolerance, working voltage,
//! status) followed by the `-----` delimiter line. Records are concatenated
//! with no blank lines between them.
//!
//! Every operation opens its file handle on entry and releases it before
//! returning; no handle survives across operations.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{Record, DELIMITER};

/// Storage engine for one registry file.
///
/// Owns the file path only; the in-memory record sequence belongs to the
/// caller and is passed into and out of operations explicitly.
#[derive(Debug, Clone)]
pub struct Store {
    /// Path to the registry file.
    path: PathBuf,
}

impl Store {
    /// Create a store over the given registry file path.
    ///
    /// The file itself is not touched until an operation runs.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the registry file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check whether the registry file currently exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write exactly one record, truncating any existing content.
    ///
    /// Pre-existing file content is destroyed. Note that this writes the
    /// single given record, not a whole sequence: invoked in a loop across
    /// multiple entries it leaves only the last entered record durable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if the file cannot be created or written.
    pub fn overwrite(&self, record: &Record) -> Result<()> {
        let mut file =
            File::create(&self.path).map_err(|source| Error::file_write(&self.path, source))?;
        self.write_block(&mut file, record)?;
        debug!("Overwrote {} with one record", self.path.display());
        Ok(())
    }

    /// Append one record at the end of the file, creating it if absent.
    ///
    /// Existing content is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if the file cannot be opened or written.
    pub fn append(&self, record: &Record) -> Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|source| Error::file_write(&self.path, source))?;
        self.write_block(&mut file, record)?;
        debug!("Appended one record to {}", self.path.display());
        Ok(())
    }

    fn write_block(&self, file: &mut File, record: &Record) -> Result<()> {
        file.write_all(record.to_block().as_bytes())
            .and_then(|()| file.flush())
            .map_err(|source| Error::file_write(&self.path, source))
    }

    /// Load all records from the registry file.
    ///
    /// Lines are assigned to fields positionally; the position counter
    /// resets when the delimiter line is seen at offset 6. Any deviation
    /// from the strict 7-line cycle (a missing delimiter, extra blank
    /// lines, a truncated final record) silently desynchronizes the parse:
    /// shifted lines are misassigned and lines past a missed delimiter are
    /// dropped. There is no resynchronization.
    ///
    /// The returned sequence is meant to REPLACE whatever the caller held,
    /// not merge with it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpen`] if the file cannot be opened and
    /// [`Error::CorruptRecord`] if a numeric field line does not parse; in
    /// the corrupt case no partial sequence is returned.
    pub fn load(&self) -> Result<Vec<Record>> {
        let file =
            File::open(&self.path).map_err(|source| Error::file_open(&self.path, source))?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        let mut draft = Record::default();
        let mut offset = 0usize;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let number = idx + 1;
            match offset {
                0 => draft.name = line,
                1 => draft.kind = line,
                2 => draft.nominal_value = self.parse_float(&line, number)?,
                3 => draft.tolerance = self.parse_float(&line, number)?,
                4 => draft.working_voltage = self.parse_float(&line, number)?,
                5 => draft.status = line,
                6 if line == DELIMITER => {
                    records.push(std::mem::take(&mut draft));
                    offset = 0;
                    continue;
                }
                // Desynced: offset ran past the delimiter slot without
                // seeing `-----`. Subsequent lines are dropped.
                _ => {}
            }
            offset += 1;
        }

        info!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn parse_float(&self, line: &str, number: usize) -> Result<f32> {
        line.trim()
            .parse::<f32>()
            .map_err(|_| Error::corrupt_record(&self.path, number, line))
    }

    /// Read the file line by line without interpreting record structure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileOpen`] if the file cannot be opened.
    pub fn raw_lines(&self) -> Result<Vec<String>> {
        let file =
            File::open(&self.path).map_err(|source| Error::file_open(&self.path, source))?;
        let reader = BufReader::new(file);
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Ok(lines)
    }

    /// Truncate the registry file to zero bytes.
    ///
    /// The file keeps existing but holds no content afterwards. The
    /// operation is irreversible and asks for no confirmation here; that is
    /// the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FileWrite`] if the file cannot be opened for
    /// truncation.
    pub fn clear(&self) -> Result<()> {
        File::create(&self.path).map_err(|source| Error::file_write(&self.path, source))?;
        info!("Cleared {}", self.path.display());
        Ok(())
    }
}
