//! Reading book records from the fixed-block binary format.
//!
//! This module provides [`BinaryReader`] for reading the raw binary store:
//! a concatenation of fixed-size record blocks with no header, no record
//! count, and no terminator. Each block holds one record in field order
//! (title, author, year, ISBN, genre) with string fields NUL-padded to their
//! capacity plus one byte and the year as a little-endian `i32`.
//!
//! Reading stops cleanly at end of file; a trailing partial block (fewer
//! bytes than one record) is discarded silently.
//!
//! # Examples
//!
//! Reading records from a buffer:
//!
//! ```
//! use biblio::BinaryReader;
//! use std::io::Cursor;
//!
//! let cursor = Cursor::new(Vec::new());
//! let mut reader = BinaryReader::new(cursor);
//!
//! assert!(reader.read_record().unwrap().is_none());
//! ```

use std::io::Read;

use crate::book::{Book, AUTHOR_MAX, GENRE_MAX, ISBN_MAX, TITLE_MAX};
use crate::error::Result;
use crate::formats::RecordReader;

pub(crate) const TITLE_BYTES: usize = TITLE_MAX + 1;
pub(crate) const AUTHOR_BYTES: usize = AUTHOR_MAX + 1;
pub(crate) const YEAR_BYTES: usize = 4;
pub(crate) const ISBN_BYTES: usize = ISBN_MAX + 1;
pub(crate) const GENRE_BYTES: usize = GENRE_MAX + 1;

/// Size in bytes of one on-disk record block.
pub const BLOCK_SIZE: usize = TITLE_BYTES + AUTHOR_BYTES + YEAR_BYTES + ISBN_BYTES + GENRE_BYTES;

/// Reader for the fixed-block binary format.
///
/// `BinaryReader` reads one record block at a time from any source
/// implementing [`std::io::Read`].
///
/// # Examples
///
/// ```no_run
/// use biblio::BinaryReader;
/// use std::fs::File;
///
/// let file = File::open("library.dat")?;
/// let mut reader = BinaryReader::new(file);
///
/// while let Some(book) = reader.read_record()? {
///     println!("{}", book.title());
/// }
/// # Ok::<(), biblio::LibraryError>(())
/// ```
#[derive(Debug)]
pub struct BinaryReader<R: Read> {
    reader: R,
    records_read: usize,
}

impl<R: Read> BinaryReader<R> {
    /// Create a new binary reader over any [`std::io::Read`] source.
    pub fn new(reader: R) -> Self {
        BinaryReader {
            reader,
            records_read: 0,
        }
    }

    /// Read a single record block.
    ///
    /// Returns `Ok(Some(book))` for a full block, `Ok(None)` at end of file.
    /// A trailing partial block is discarded and also reported as `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying source fails.
    pub fn read_record(&mut self) -> Result<Option<Book>> {
        let mut block = [0u8; BLOCK_SIZE];
        let mut filled = 0;
        while filled < BLOCK_SIZE {
            match self.reader.read(&mut block[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {},
                Err(e) => return Err(e.into()),
            }
        }
        if filled < BLOCK_SIZE {
            // Clean EOF, or a trailing partial block to discard.
            return Ok(None);
        }

        let (title_bytes, rest) = block.split_at(TITLE_BYTES);
        let (author_bytes, rest) = rest.split_at(AUTHOR_BYTES);
        let (year_bytes, rest) = rest.split_at(YEAR_BYTES);
        let (isbn_bytes, genre_bytes) = rest.split_at(ISBN_BYTES);

        let year = i32::from_le_bytes([year_bytes[0], year_bytes[1], year_bytes[2], year_bytes[3]]);
        let book = Book::new(
            &decode_field(title_bytes),
            &decode_field(author_bytes),
            year,
            &decode_field(isbn_bytes),
            &decode_field(genre_bytes),
        );

        self.records_read += 1;
        Ok(Some(book))
    }
}

impl<R: Read + std::fmt::Debug> RecordReader for BinaryReader<R> {
    fn read_record(&mut self) -> Result<Option<Book>> {
        BinaryReader::read_record(self)
    }

    fn records_read(&self) -> Option<usize> {
        Some(self.records_read)
    }
}

/// Decode a NUL-padded field: the bytes before the first NUL, as UTF-8.
fn decode_field(bytes: &[u8]) -> String {
    let end = memchr::memchr(0, bytes).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
