//! Append-only audit trail of catalog events.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use crate::error::{LibraryError, Result};

/// Destination for human-readable event lines
pub trait LogSink {
    /// Durably append one line
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::ResourceUnavailable` if the line cannot be written.
    fn append(&mut self, line: &str) -> Result<()>;
}

/// Appends each line to a UTF-8 text file, creating it on first use
///
/// The file is opened and closed around every append.
#[derive(Debug, Clone)]
pub struct FileLogSink {
    /// Log file location
    path: PathBuf,
}

impl FileLogSink {
    /// Log to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Log file location
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileLogSink {
    fn append(&mut self, line: &str) -> Result<()> {
        let unavailable = |e: std::io::Error| LibraryError::ResourceUnavailable {
            path: self.path.clone(),
            reason: e.to_string(),
        };

        let mut file =
            OpenOptions::new().create(true).append(true).open(&self.path).map_err(unavailable)?;
        writeln!(file, "{line}").map_err(unavailable)?;
        file.sync_data().map_err(unavailable)?;

        Ok(())
    }
}
