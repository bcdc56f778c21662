//! Title search and payload sorts over a collection.
//!
//! Searching is a case-sensitive substring match over titles in current list
//! order, surfacing only the first hit. Sorting copies every record value
//! into a contiguous buffer in list order, sorts the buffer, and writes the
//! values back into the existing nodes position-for-position. Node count and
//! link topology are never touched; only the payload order changes.
//!
//! # Examples
//!
//! ```
//! use biblio::{Book, Collection, SortKey};
//! use biblio::search::{find_by_title, sort_by_key};
//!
//! let mut shelf = Collection::new();
//! shelf.insert(Book::new("Dune", "Herbert", 1965, "0441013597", "SciFi"));
//! shelf.insert(Book::new("Foundation", "Asimov", 1951, "0553293354", "SciFi"));
//!
//! assert_eq!(find_by_title(&shelf, "und").unwrap().title(), "Foundation");
//!
//! sort_by_key(&mut shelf, SortKey::Year);
//! let years: Vec<i32> = shelf.iter().map(|b| b.year()).collect();
//! assert_eq!(years, [1951, 1965]);
//! ```

use memchr::memmem;

use crate::book::Book;
use crate::collection::Collection;

/// Comparison key for [`sort_by_key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Byte-wise lexicographic title order.
    Title,
    /// Byte-wise lexicographic author order.
    Author,
    /// Ascending publication year.
    Year,
}

/// Find the first record whose title contains `needle`.
///
/// The match is case-sensitive and byte-wise, with no locale collation, and
/// runs over the collection in current list order. An empty needle matches
/// the first record. Returns `None` when nothing matches or the collection
/// is empty.
#[must_use]
pub fn find_by_title<'a>(collection: &'a Collection, needle: &str) -> Option<&'a Book> {
    let finder = memmem::Finder::new(needle.as_bytes());
    collection
        .iter()
        .find(|book| finder.find(book.title().as_bytes()).is_some())
}

/// Sort the collection's payloads by the given key.
///
/// Record values are copied into a temporary buffer in list order, the
/// buffer is sorted, and the sorted values are written back into the
/// existing nodes position-for-position. The buffer is fully built and
/// fully sorted before any write-back occurs.
///
/// The underlying [`slice::sort_by`] is stable: records comparing equal keep
/// their current relative list order. Collections with fewer than two
/// records are left untouched.
pub fn sort_by_key(collection: &mut Collection, key: SortKey) {
    if collection.len() < 2 {
        return;
    }

    let slots = collection.slots();
    let mut buffer: Vec<Book> = collection.iter().cloned().collect();
    match key {
        SortKey::Title => buffer.sort_by(|a, b| a.title().cmp(b.title())),
        SortKey::Author => buffer.sort_by(|a, b| a.author().cmp(b.author())),
        SortKey::Year => buffer.sort_by_key(Book::year),
    }

    for (slot, book) in slots.into_iter().zip(buffer) {
        *collection.book_mut(slot) = book;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> Collection {
        let mut shelf = Collection::new();
        shelf.insert(Book::new("Dune", "Herbert", 1965, "0441013597", "SciFi"));
        shelf.insert(Book::new(
            "Foundation",
            "Asimov",
            1951,
            "0553293354",
            "SciFi",
        ));
        shelf.insert(Book::new("Hyperion", "Simmons", 1989, "0553283685", "SciFi"));
        shelf
    }

    #[test]
    fn test_find_by_title_substring() {
        let shelf = shelf();
        assert_eq!(find_by_title(&shelf, "peri").unwrap().title(), "Hyperion");
        assert_eq!(find_by_title(&shelf, "Dune").unwrap().title(), "Dune");
    }

    #[test]
    fn test_find_is_case_sensitive() {
        let shelf = shelf();
        assert!(find_by_title(&shelf, "dune").is_none());
        assert!(find_by_title(&shelf, "DUNE").is_none());
    }

    #[test]
    fn test_find_returns_first_in_list_order() {
        let mut shelf = Collection::new();
        shelf.insert(Book::new("The Stand", "King", 1978, "a", "Horror"));
        shelf.insert(Book::new("The Shining", "King", 1977, "b", "Horror"));

        // List order is reverse of insertion, so "The Shining" comes first.
        assert_eq!(find_by_title(&shelf, "The").unwrap().title(), "The Shining");
    }

    #[test]
    fn test_find_empty_needle_matches_head() {
        let shelf = shelf();
        assert_eq!(find_by_title(&shelf, "").unwrap().title(), "Hyperion");
        assert!(find_by_title(&Collection::new(), "").is_none());
    }

    #[test]
    fn test_sort_by_title() {
        let mut shelf = shelf();
        sort_by_key(&mut shelf, SortKey::Title);
        let titles: Vec<&str> = shelf.iter().map(Book::title).collect();
        assert_eq!(titles, ["Dune", "Foundation", "Hyperion"]);
    }

    #[test]
    fn test_sort_by_author() {
        let mut shelf = shelf();
        sort_by_key(&mut shelf, SortKey::Author);
        let authors: Vec<&str> = shelf.iter().map(Book::author).collect();
        assert_eq!(authors, ["Asimov", "Herbert", "Simmons"]);
    }

    #[test]
    fn test_sort_by_year_ascending() {
        let mut shelf = shelf();
        sort_by_key(&mut shelf, SortKey::Year);
        let years: Vec<i32> = shelf.iter().map(Book::year).collect();
        assert_eq!(years, [1951, 1965, 1989]);
    }

    #[test]
    fn test_sort_is_byte_wise() {
        let mut shelf = Collection::new();
        shelf.insert(Book::new("apple", "x", 1, "1", "g"));
        shelf.insert(Book::new("Banana", "x", 2, "2", "g"));
        sort_by_key(&mut shelf, SortKey::Title);
        // Uppercase sorts before lowercase in byte order.
        let titles: Vec<&str> = shelf.iter().map(Book::title).collect();
        assert_eq!(titles, ["Banana", "apple"]);
    }

    #[test]
    fn test_sort_preserves_membership() {
        let mut shelf = shelf();
        let mut before: Vec<String> = shelf.iter().map(|b| b.isbn().to_string()).collect();
        sort_by_key(&mut shelf, SortKey::Title);
        let mut after: Vec<String> = shelf.iter().map(|b| b.isbn().to_string()).collect();

        assert_eq!(shelf.len(), 3);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_sort_ties_keep_list_order() {
        let mut shelf = Collection::new();
        shelf.insert(Book::new("first inserted", "x", 1999, "a", "g"));
        shelf.insert(Book::new("second inserted", "x", 1999, "b", "g"));
        shelf.insert(Book::new("third inserted", "x", 1950, "c", "g"));

        sort_by_key(&mut shelf, SortKey::Year);
        let isbns: Vec<&str> = shelf.iter().map(Book::isbn).collect();
        // 1950 first; the 1999 pair keeps its pre-sort list order (b before a).
        assert_eq!(isbns, ["c", "b", "a"]);
    }

    #[test]
    fn test_sort_singleton_and_empty_are_noops() {
        let mut empty = Collection::new();
        sort_by_key(&mut empty, SortKey::Title);
        assert!(empty.is_empty());

        let mut single = Collection::new();
        single.insert(Book::new("only", "x", 1, "1", "g"));
        sort_by_key(&mut single, SortKey::Year);
        assert_eq!(single.len(), 1);
        assert_eq!(single.iter().next().unwrap().title(), "only");
    }

    #[test]
    fn test_sort_then_insert_goes_to_head() {
        let mut shelf = shelf();
        sort_by_key(&mut shelf, SortKey::Title);
        shelf.insert(Book::new("Aardvark", "x", 1, "z", "g"));
        assert_eq!(shelf.iter().next().unwrap().title(), "Aardvark");
    }
}
