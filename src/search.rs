//! Interchangeable search strategies over catalog collections.
//!
//! Every strategy matches one field by case-insensitive substring
//! containment. Both sides are lowercased; nothing is trimmed. An empty query
//! matches every item.

use crate::entities::{Book, Librarian, Reader};

/// A filter over a collection of `T`
pub trait SearchStrategy<T: Clone> {
    /// Return the items matching `query`, in input order
    fn search(&self, items: &[T], query: &str) -> Vec<T>;
}

/// Whether `field` contains `query`, ignoring case
fn contains_ignore_case(field: &str, query: &str) -> bool {
    field.to_lowercase().contains(&query.to_lowercase())
}

/// Keep the items whose selected field contains `query`
fn filter_by<T: Clone>(items: &[T], query: &str, field: impl Fn(&T) -> &str) -> Vec<T> {
    items.iter().filter(|&item| contains_ignore_case(field(item), query)).cloned().collect()
}

/// Matches books by title
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleSearch;

impl SearchStrategy<Book> for TitleSearch {
    fn search(&self, items: &[Book], query: &str) -> Vec<Book> {
        filter_by(items, query, Book::title)
    }
}

/// Matches books by author
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorSearch;

impl SearchStrategy<Book> for AuthorSearch {
    fn search(&self, items: &[Book], query: &str) -> Vec<Book> {
        filter_by(items, query, Book::author)
    }
}

/// Matches readers by name
#[derive(Debug, Clone, Copy, Default)]
pub struct ReaderNameSearch;

impl SearchStrategy<Reader> for ReaderNameSearch {
    fn search(&self, items: &[Reader], query: &str) -> Vec<Reader> {
        filter_by(items, query, Reader::name)
    }
}

/// Matches librarians by name
#[derive(Debug, Clone, Copy, Default)]
pub struct LibrarianNameSearch;

impl SearchStrategy<Librarian> for LibrarianNameSearch {
    fn search(&self, items: &[Librarian], query: &str) -> Vec<Librarian> {
        filter_by(items, query, Librarian::name)
    }
}
