use std::fmt;

use serde::{Deserialize, Serialize};

/// A book held by the library
///
/// Serialized as a mapping with exactly two fields, `title` and `author`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Book {
    /// Title of the book
    title: String,
    /// Author of the book
    author: String,
}

impl Book {
    /// Create a new book record
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self { title: title.into(), author: author.into() }
    }

    /// The book's title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book: {}. Author: {}", self.title, self.author)
    }
}

/// A registered library reader
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Reader {
    /// Full name of the reader
    name: String,
    /// Age in years, not validated
    age: i32,
}

impl Reader {
    /// Create a new reader record
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self { name: name.into(), age }
    }

    /// The reader's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The reader's age
    #[must_use]
    pub fn age(&self) -> i32 {
        self.age
    }
}

impl fmt::Display for Reader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reader: {}. Age: {}", self.name, self.age)
    }
}

/// A member of the library staff
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Librarian {
    /// Full name of the librarian
    name: String,
}

impl Librarian {
    /// Create a new librarian record
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The librarian's name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Librarian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Librarian: {}", self.name)
    }
}
