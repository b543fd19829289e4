#![allow(clippy::unwrap_used)]

use tempfile::TempDir;

use crate::{
    entities::{Book, Librarian, Reader},
    error::LibraryError,
    registry::{Library, SharedLibrary},
};

/// Helper function to set up a catalog with two books
fn setup_test_library() -> Library {
    let mut library = Library::new();
    library.add_book(Book::new("1984", "Orwell"));
    library.add_book(Book::new("Brave New World", "Huxley"));
    library
}

#[test]
fn test_new_library_is_empty() {
    let library = Library::new();
    assert!(library.list_books().is_empty());
    assert!(library.list_readers().is_empty());
    assert!(library.list_librarians().is_empty());
}

#[test]
fn test_add_preserves_order_and_duplicates() {
    let mut library = setup_test_library();
    library.add_book(Book::new("1984", "Orwell"));

    assert_eq!(
        library.list_books(),
        [
            Book::new("1984", "Orwell"),
            Book::new("Brave New World", "Huxley"),
            Book::new("1984", "Orwell"),
        ]
    );
}

#[test]
fn test_remove_takes_first_equal_book() {
    let mut library = setup_test_library();
    library.add_book(Book::new("1984", "Orwell"));

    let removed = library.remove_book(&Book::new("1984", "Orwell")).unwrap();

    assert_eq!(removed, Book::new("1984", "Orwell"));
    assert_eq!(
        library.list_books(),
        [Book::new("Brave New World", "Huxley"), Book::new("1984", "Orwell")]
    );
}

#[test]
fn test_remove_missing_book_fails_without_mutation() {
    let mut library = setup_test_library();
    library.add_reader(Reader::new("Vasily", 25));
    library.add_librarian(Librarian::new("Viktor"));
    let before = library.clone();

    let result = library.remove_book(&Book::new("Dune", "Herbert"));

    assert!(matches!(
        result,
        Err(LibraryError::NotFound { ref title, ref author })
            if title == "Dune" && author == "Herbert"
    ));
    assert_eq!(library, before);
}

#[test]
fn test_collections_are_independent() {
    let mut library = Library::new();
    library.add_reader(Reader::new("Vasily", 25));
    library.add_librarian(Librarian::new("Viktor"));

    assert!(library.list_books().is_empty());
    assert_eq!(library.list_readers(), [Reader::new("Vasily", 25)]);
    assert_eq!(library.list_librarians(), [Librarian::new("Viktor")]);
    assert_eq!(library.to_string(), "0 books, 1 readers, 1 librarians");
}

#[test]
fn test_load_does_not_merge_into_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("library.json");
    let library = setup_test_library();
    library.save_books(&path).unwrap();

    let fresh = Library::new();
    let loaded = fresh.load_books(&path).unwrap().unwrap();

    assert_eq!(loaded, library.list_books());
    assert!(fresh.list_books().is_empty());
}

#[test]
fn test_restore_appends_loaded_books() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("library.json");
    setup_test_library().save_books(&path).unwrap();

    let mut library = Library::new();
    library.add_book(Book::new("Dune", "Herbert"));
    let loaded = library.load_books(&path).unwrap().unwrap_or_default();
    library.restore_books(loaded);

    assert_eq!(
        library.list_books(),
        [
            Book::new("Dune", "Herbert"),
            Book::new("1984", "Orwell"),
            Book::new("Brave New World", "Huxley"),
        ]
    );
}

#[test]
fn test_shared_handles_see_one_catalog() {
    let first = Library::shared();
    let second = first.clone();

    first.with_mut(|library| library.add_book(Book::new("1984", "Orwell"))).unwrap();

    assert!(first.ptr_eq(&second));
    assert_eq!(second.books().unwrap(), [Book::new("1984", "Orwell")]);
    assert!(!first.ptr_eq(&Library::shared()));
}

#[test]
fn test_nested_mutation_reports_busy() {
    let shared = SharedLibrary::new(setup_test_library());
    let inner = shared.clone();

    let nested = shared.with_mut(|_| inner.books()).unwrap();

    assert!(matches!(nested, Err(LibraryError::CatalogBusy)));
}
