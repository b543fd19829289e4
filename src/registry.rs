use std::{cell::RefCell, fmt, path::Path, rc::Rc};

use crate::{
    entities::{Book, Librarian, Reader},
    error::{LibraryError, Result},
    persistence,
};

/// In-memory catalog of books, readers and librarians
///
/// Each collection keeps insertion order and allows duplicates. A program
/// builds exactly one catalog and hands out [`SharedLibrary`] handles to it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Library {
    /// Books in insertion order
    books: Vec<Book>,
    /// Readers in insertion order
    readers: Vec<Reader>,
    /// Librarians in insertion order
    librarians: Vec<Librarian>,
}

impl Library {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog behind a shareable handle
    #[must_use]
    pub fn shared() -> SharedLibrary {
        SharedLibrary::new(Self::new())
    }

    /// Append a book
    pub fn add_book(&mut self, book: Book) {
        tracing::debug!(title = book.title(), author = book.author(), "adding book");
        self.books.push(book);
    }

    /// Remove the first book equal to `book`
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::NotFound` if no equal book is in the catalog;
    /// the catalog is left untouched in that case.
    pub fn remove_book(&mut self, book: &Book) -> Result<Book> {
        match self.books.iter().position(|b| b == book) {
            Some(pos) => {
                tracing::debug!(title = book.title(), author = book.author(), "removing book");
                Ok(self.books.remove(pos))
            }
            None => {
                tracing::warn!(title = book.title(), author = book.author(), "book not found");
                Err(LibraryError::NotFound {
                    title: book.title().to_string(),
                    author: book.author().to_string(),
                })
            }
        }
    }

    /// Append a reader
    pub fn add_reader(&mut self, reader: Reader) {
        tracing::debug!(name = reader.name(), "adding reader");
        self.readers.push(reader);
    }

    /// Append a librarian
    pub fn add_librarian(&mut self, librarian: Librarian) {
        tracing::debug!(name = librarian.name(), "adding librarian");
        self.librarians.push(librarian);
    }

    /// Current books
    #[must_use]
    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    /// Current readers
    #[must_use]
    pub fn list_readers(&self) -> &[Reader] {
        &self.readers
    }

    /// Current librarians
    #[must_use]
    pub fn list_librarians(&self) -> &[Librarian] {
        &self.librarians
    }

    /// Write the book collection to `path`, overwriting it
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::ResourceUnavailable` if the file cannot be written.
    pub fn save_books(&self, path: &Path) -> Result<()> {
        persistence::save_books(path, &self.books)
    }

    /// Read a saved book collection without touching the catalog
    ///
    /// Returns `Ok(None)` when `path` does not exist. Merging the records is
    /// left to the caller, see [`Library::restore_books`].
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::ResourceUnavailable` or
    /// `LibraryError::MalformedData` if the file cannot be read or parsed.
    #[allow(clippy::unused_self)]
    pub fn load_books(&self, path: &Path) -> Result<Option<Vec<Book>>> {
        persistence::load_books(path)
    }

    /// Append previously loaded books in their saved order
    pub fn restore_books(&mut self, books: impl IntoIterator<Item = Book>) {
        for book in books {
            self.add_book(book);
        }
    }
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} books, {} readers, {} librarians",
            self.books.len(),
            self.readers.len(),
            self.librarians.len()
        )
    }
}

/// Handle to the single catalog of a program
///
/// Clones share the same underlying [`Library`]; no clone ever creates a
/// second catalog. The handle is single-threaded.
#[derive(Debug, Clone, Default)]
pub struct SharedLibrary(Rc<RefCell<Library>>);

impl SharedLibrary {
    /// Wrap an existing catalog
    #[must_use]
    pub fn new(library: Library) -> Self {
        Self(Rc::new(RefCell::new(library)))
    }

    /// Whether both handles refer to the same catalog
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Run `f` with shared access to the catalog
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::CatalogBusy` if the catalog is currently
    /// borrowed for mutation.
    pub fn with<T>(&self, f: impl FnOnce(&Library) -> T) -> Result<T> {
        let library = self.0.try_borrow().map_err(|_| LibraryError::CatalogBusy)?;
        Ok(f(&library))
    }

    /// Run `f` with exclusive access to the catalog
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::CatalogBusy` if the catalog is already borrowed.
    pub fn with_mut<T>(&self, f: impl FnOnce(&mut Library) -> T) -> Result<T> {
        let mut library = self.0.try_borrow_mut().map_err(|_| LibraryError::CatalogBusy)?;
        Ok(f(&mut library))
    }

    /// Snapshot of the current books
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::CatalogBusy` if the catalog is borrowed for mutation.
    pub fn books(&self) -> Result<Vec<Book>> {
        self.with(|library| library.list_books().to_vec())
    }

    /// Snapshot of the current readers
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::CatalogBusy` if the catalog is borrowed for mutation.
    pub fn readers(&self) -> Result<Vec<Reader>> {
        self.with(|library| library.list_readers().to_vec())
    }

    /// Snapshot of the current librarians
    ///
    /// # Errors
    ///
    /// Returns `LibraryError::CatalogBusy` if the catalog is borrowed for mutation.
    pub fn librarians(&self) -> Result<Vec<Librarian>> {
        self.with(|library| library.list_librarians().to_vec())
    }
}

#[cfg(test)]
mod tests;
