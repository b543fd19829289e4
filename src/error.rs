//! Error types raised by catalog operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the catalog, its commands and its storage collaborators
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Removal of a book that is not in the catalog
    #[error("book \"{title}\" by {author} is not in the catalog")]
    NotFound {
        /// Title of the missing book
        title: String,
        /// Author of the missing book
        author: String,
    },

    /// The storage target could not be opened, written, read or parsed
    #[error("storage target {} is unavailable: {reason}", .path.display())]
    ResourceUnavailable {
        /// File the operation was addressed to
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// Persisted content does not have the per-book field shape
    #[error("storage target {} holds malformed book data: {reason}", .path.display())]
    MalformedData {
        /// File the data was read from
        path: PathBuf,
        /// Description of the mismatch
        reason: String,
    },

    /// The shared catalog handle is already borrowed for mutation
    #[error("catalog is already borrowed by another operation")]
    CatalogBusy,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, LibraryError>;
