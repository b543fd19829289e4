//! File locations used by the catalog binary.
use std::{env, path::PathBuf};

/// Default location of the saved book collection
pub const DEFAULT_CATALOG_PATH: &str = "library.json";
/// Default location of the audit log
pub const DEFAULT_LOG_PATH: &str = "library_log.txt";

/// Where the catalog is saved and where events are logged
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// JSON file holding the book collection
    pub catalog_path: PathBuf,
    /// Append-only text log of catalog events
    pub log_path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

impl CatalogConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `LIBRARY_CATALOG_PATH`
    /// - `LIBRARY_LOG_PATH`
    #[must_use]
    pub fn from_env() -> Self {
        Self::default()
            .with_overrides(read_env("LIBRARY_CATALOG_PATH"), read_env("LIBRARY_LOG_PATH"))
    }

    /// Replace whichever paths are given
    #[must_use]
    pub fn with_overrides(
        mut self,
        catalog_path: Option<PathBuf>,
        log_path: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = catalog_path {
            self.catalog_path = path;
        }
        if let Some(path) = log_path {
            self.log_path = path;
        }
        self
    }
}

/// Read a non-empty path from the environment
fn read_env(key: &str) -> Option<PathBuf> {
    env::var_os(key).filter(|value| !value.is_empty()).map(PathBuf::from)
}
