//! JSON storage for the book collection.
//!
//! The file holds a pretty-printed array of `{ "title": ..., "author": ... }`
//! mappings. Saving overwrites the whole file; loading a file that does not
//! exist yields `None` instead of an error.

use std::{
    fs::File,
    io::{ErrorKind, Read, Write},
    path::Path,
};

use serde_json::error::Category;

use crate::{
    entities::Book,
    error::{LibraryError, Result},
};

/// Write `books` to `path`, replacing any previous content
///
/// # Errors
///
/// Returns `LibraryError::ResourceUnavailable` if:
/// - The books cannot be serialized to JSON
/// - The file cannot be created
/// - The data cannot be written to the file
pub fn save_books(path: &Path, books: &[Book]) -> Result<()> {
    let serialized = serde_json::to_string_pretty(books)
        .map_err(|e| unavailable(path, format!("failed to serialize books: {e}")))?;

    tracing::debug!(path = %path.display(), count = books.len(), "saving books");

    let mut file =
        File::create(path).map_err(|e| unavailable(path, format!("failed to create file: {e}")))?;

    file.write_all(serialized.as_bytes())
        .map_err(|e| unavailable(path, format!("failed to write to file: {e}")))?;
    file.write_all(b"\n")
        .map_err(|e| unavailable(path, format!("failed to write to file: {e}")))?;

    Ok(())
}

/// Read the books previously written by [`save_books`]
///
/// Returns `Ok(None)` when `path` does not exist.
///
/// # Errors
///
/// Returns `LibraryError::ResourceUnavailable` if the file cannot be opened
/// or read, or is not valid JSON, and `LibraryError::MalformedData` if the
/// JSON is not a sequence of `{title, author}` mappings.
pub fn load_books(path: &Path) -> Result<Option<Vec<Book>>> {
    tracing::debug!(path = %path.display(), "loading books");

    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no saved catalog, nothing to load");
            return Ok(None);
        }
        Err(e) => return Err(unavailable(path, format!("failed to open file: {e}"))),
    };

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| unavailable(path, format!("failed to read file: {e}")))?;

    let books: Vec<Book> = serde_json::from_str(&contents).map_err(|e| match e.classify() {
        Category::Data => LibraryError::MalformedData {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
        Category::Io | Category::Syntax | Category::Eof => {
            unavailable(path, format!("failed to parse JSON: {e}"))
        }
    })?;

    Ok(Some(books))
}

/// Build a `ResourceUnavailable` error for `path`
fn unavailable(path: &Path, reason: String) -> LibraryError {
    LibraryError::ResourceUnavailable { path: path.to_path_buf(), reason }
}
