use crate::entities::{Book, Librarian, Reader};

/// Stateless constructors for catalog entities
///
/// Inputs are never validated: empty names and negative ages are accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityFactory;

impl EntityFactory {
    /// Build a book from its title and author
    pub fn create_book(title: &str, author: &str) -> Book {
        Book::new(title, author)
    }

    /// Build a reader from a name and an age
    pub fn create_reader(name: &str, age: i32) -> Reader {
        Reader::new(name, age)
    }

    /// Build a librarian from a name
    pub fn create_librarian(name: &str) -> Librarian {
        Librarian::new(name)
    }
}
