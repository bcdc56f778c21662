//! The book record type and its field capacity limits.
//!
//! Every field of a [`Book`] has a fixed maximum width in bytes, matching the
//! widths used by the on-disk binary format. Over-long input is silently
//! truncated at the largest UTF-8 character boundary that fits, so a `Book`
//! always holds fields within capacity and always holds valid UTF-8.
//!
//! # Examples
//!
//! ```
//! use biblio::Book;
//!
//! let book = Book::new("Dune", "Herbert", 1965, "0441013597", "SciFi");
//! assert_eq!(book.title(), "Dune");
//! assert_eq!(book.year(), 1965);
//! ```
//!
//! Or with the builder:
//!
//! ```
//! use biblio::Book;
//!
//! let book = Book::builder()
//!     .title("Foundation")
//!     .author("Asimov")
//!     .year(1951)
//!     .isbn("0553293354")
//!     .genre("SciFi")
//!     .build();
//! assert_eq!(book.author(), "Asimov");
//! ```

use serde::{Deserialize, Serialize};

/// Maximum title length in bytes.
pub const TITLE_MAX: usize = 99;
/// Maximum author length in bytes.
pub const AUTHOR_MAX: usize = 99;
/// Maximum ISBN length in bytes (13 digits, hyphens not counted out).
pub const ISBN_MAX: usize = 13;
/// Maximum genre length in bytes.
pub const GENRE_MAX: usize = 49;

/// A single book record: title, author, publication year, ISBN, and genre.
///
/// The ISBN is the business key used for lookup and removal. Uniqueness is
/// not enforced here: a collection accepts duplicate ISBNs and leaves
/// pre-insert checks to the caller.
///
/// Fields are private so the capacity invariant cannot be bypassed; use
/// [`Book::new`] or [`Book::builder`] to construct values and the accessors
/// to read them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    author: String,
    year: i32,
    isbn: String,
    genre: String,
}

impl Book {
    /// Create a book record, truncating each string field to its capacity.
    #[must_use]
    pub fn new(title: &str, author: &str, year: i32, isbn: &str, genre: &str) -> Self {
        Book {
            title: clamp(title, TITLE_MAX),
            author: clamp(author, AUTHOR_MAX),
            year,
            isbn: clamp(isbn, ISBN_MAX),
            genre: clamp(genre, GENRE_MAX),
        }
    }

    /// Create a builder for fluently constructing book records.
    #[must_use]
    pub fn builder() -> BookBuilder {
        BookBuilder::default()
    }

    /// The book's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The publication year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The ISBN, the record's business key.
    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }

    /// The book's genre.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }
}

/// Builder for [`Book`] values.
///
/// Unset string fields default to empty, the year to 0. Each setter applies
/// the same silent truncation as [`Book::new`].
#[derive(Debug, Default)]
pub struct BookBuilder {
    title: String,
    author: String,
    year: i32,
    isbn: String,
    genre: String,
}

impl BookBuilder {
    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = clamp(title, TITLE_MAX);
        self
    }

    /// Set the author.
    #[must_use]
    pub fn author(mut self, author: &str) -> Self {
        self.author = clamp(author, AUTHOR_MAX);
        self
    }

    /// Set the publication year.
    #[must_use]
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Set the ISBN.
    #[must_use]
    pub fn isbn(mut self, isbn: &str) -> Self {
        self.isbn = clamp(isbn, ISBN_MAX);
        self
    }

    /// Set the genre.
    #[must_use]
    pub fn genre(mut self, genre: &str) -> Self {
        self.genre = clamp(genre, GENRE_MAX);
        self
    }

    /// Build the record.
    #[must_use]
    pub fn build(self) -> Book {
        Book {
            title: self.title,
            author: self.author,
            year: self.year,
            isbn: self.isbn,
            genre: self.genre,
        }
    }
}

/// Copy `value` into an owned string of at most `max_bytes` bytes, cutting at
/// a character boundary so the result stays valid UTF-8.
pub(crate) fn clamp(value: &str, max_bytes: usize) -> String {
    if value.len() <= max_bytes {
        return value.to_string();
    }
    let mut end = max_bytes;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}
