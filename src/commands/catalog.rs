use crate::{
    commands::Command,
    entities::{Book, Librarian, Reader},
    error::Result,
    registry::SharedLibrary,
};

/// Append a book to the catalog
#[derive(Debug, Clone)]
pub struct AddBookCommand {
    /// Target catalog
    library: SharedLibrary,
    /// Book to add
    book: Book,
}

impl AddBookCommand {
    /// Bind `book` to `library`
    #[must_use]
    pub fn new(library: &SharedLibrary, book: Book) -> Self {
        Self { library: library.clone(), book }
    }
}

impl Command for AddBookCommand {
    fn execute(&self) -> Result<()> {
        self.library.with_mut(|library| library.add_book(self.book.clone()))
    }

    fn describe(&self) -> String {
        format!("Added book. {}", self.book)
    }
}

/// Remove the first equal book from the catalog
#[derive(Debug, Clone)]
pub struct RemoveBookCommand {
    /// Target catalog
    library: SharedLibrary,
    /// Book to remove, matched by value
    book: Book,
}

impl RemoveBookCommand {
    /// Bind `book` to `library`
    #[must_use]
    pub fn new(library: &SharedLibrary, book: Book) -> Self {
        Self { library: library.clone(), book }
    }
}

impl Command for RemoveBookCommand {
    fn execute(&self) -> Result<()> {
        self.library.with_mut(|library| library.remove_book(&self.book))??;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("Removed book. {}", self.book)
    }
}

/// Register a reader
#[derive(Debug, Clone)]
pub struct AddReaderCommand {
    /// Target catalog
    library: SharedLibrary,
    /// Reader to add
    reader: Reader,
}

impl AddReaderCommand {
    /// Bind `reader` to `library`
    #[must_use]
    pub fn new(library: &SharedLibrary, reader: Reader) -> Self {
        Self { library: library.clone(), reader }
    }
}

impl Command for AddReaderCommand {
    fn execute(&self) -> Result<()> {
        self.library.with_mut(|library| library.add_reader(self.reader.clone()))
    }

    fn describe(&self) -> String {
        format!("Added reader. {}", self.reader)
    }
}

/// Register a librarian
#[derive(Debug, Clone)]
pub struct AddLibrarianCommand {
    /// Target catalog
    library: SharedLibrary,
    /// Librarian to add
    librarian: Librarian,
}

impl AddLibrarianCommand {
    /// Bind `librarian` to `library`
    #[must_use]
    pub fn new(library: &SharedLibrary, librarian: Librarian) -> Self {
        Self { library: library.clone(), librarian }
    }
}

impl Command for AddLibrarianCommand {
    fn execute(&self) -> Result<()> {
        self.library.with_mut(|library| library.add_librarian(self.librarian.clone()))
    }

    fn describe(&self) -> String {
        format!("Added librarian. {}", self.librarian)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::{error::LibraryError, registry::Library};

    #[test]
    fn test_add_twice_duplicates() {
        let library = Library::shared();
        let command = AddBookCommand::new(&library, Book::new("1984", "Orwell"));

        command.execute().unwrap();
        command.execute().unwrap();

        assert_eq!(library.books().unwrap().len(), 2);
    }

    #[test]
    fn test_remove_twice_fails_second_time() {
        let library = Library::shared();
        AddBookCommand::new(&library, Book::new("1984", "Orwell")).execute().unwrap();
        let remove = RemoveBookCommand::new(&library, Book::new("1984", "Orwell"));

        remove.execute().unwrap();
        let second = remove.execute();

        assert!(matches!(second, Err(LibraryError::NotFound { .. })));
        assert!(library.books().unwrap().is_empty());
    }

    #[test]
    fn test_people_commands_fill_their_collections() {
        let library = Library::shared();

        AddReaderCommand::new(&library, Reader::new("Vasily", 25)).execute().unwrap();
        AddLibrarianCommand::new(&library, Librarian::new("Viktor")).execute().unwrap();

        assert_eq!(library.readers().unwrap(), [Reader::new("Vasily", 25)]);
        assert_eq!(library.librarians().unwrap(), [Librarian::new("Viktor")]);
        assert!(library.books().unwrap().is_empty());
    }

    #[test]
    fn test_descriptions() {
        let library = Library::shared();
        let book = Book::new("1984", "Orwell");

        assert_eq!(
            AddBookCommand::new(&library, book.clone()).describe(),
            "Added book. Book: 1984. Author: Orwell"
        );
        assert_eq!(
            RemoveBookCommand::new(&library, book).describe(),
            "Removed book. Book: 1984. Author: Orwell"
        );
        assert_eq!(
            AddReaderCommand::new(&library, Reader::new("Elena", 35)).describe(),
            "Added reader. Reader: Elena. Age: 35"
        );
        assert_eq!(
            AddLibrarianCommand::new(&library, Librarian::new("Viktor")).describe(),
            "Added librarian. Librarian: Viktor"
        );
    }
}
