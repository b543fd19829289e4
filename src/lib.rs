//! In-memory library catalog of books, readers and librarians.
//!
//! Mutations go through command objects, queries through interchangeable
//! search strategies, and the book collection can be saved to and read back
//! from a JSON file.

pub mod commands;
pub mod config;
pub mod entities;
pub mod error;
pub mod factory;
pub mod log_sink;
pub mod persistence;
pub mod registry;
pub mod search;

pub use commands::{Command, Invoker, ReversibleCommand, execute_logged};
pub use config::CatalogConfig;
pub use entities::{Book, Librarian, Reader};
pub use error::{LibraryError, Result};
pub use factory::EntityFactory;
pub use log_sink::{FileLogSink, LogSink};
pub use registry::{Library, SharedLibrary};
pub use search::{AuthorSearch, LibrarianNameSearch, ReaderNameSearch, SearchStrategy, TitleSearch};
