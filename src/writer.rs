//! Writing book records to the fixed-block binary format.
//!
//! This module provides [`BinaryWriter`] for serializing [`Book`] records to
//! the raw binary store read back by [`crate::reader::BinaryReader`]. One
//! fixed-size block is written per record, with no header and no record
//! count; the block layout is documented on the reader module.
//!
//! # Examples
//!
//! Writing to a buffer:
//!
//! ```
//! use biblio::{BinaryWriter, Book};
//!
//! let mut buffer = Vec::new();
//! let mut writer = BinaryWriter::new(&mut buffer);
//! writer.write_record(&Book::new("Dune", "Herbert", 1965, "0441013597", "SciFi"))?;
//! writer.finish()?;
//! assert_eq!(buffer.len(), biblio::reader::BLOCK_SIZE);
//! # Ok::<(), biblio::LibraryError>(())
//! ```

use std::io::Write;

use crate::book::Book;
use crate::error::{LibraryError, Result};
use crate::formats::RecordWriter;
use crate::reader::{AUTHOR_BYTES, BLOCK_SIZE, ISBN_BYTES, TITLE_BYTES, YEAR_BYTES};

/// Writer for the fixed-block binary format.
///
/// Records are written one block at a time to any destination implementing
/// [`std::io::Write`]. Call [`finish`](BinaryWriter::finish) when done;
/// writing afterwards is an error.
#[derive(Debug)]
pub struct BinaryWriter<W: Write> {
    writer: W,
    records_written: usize,
    finished: bool,
}

impl<W: Write> BinaryWriter<W> {
    /// Create a new binary writer over any [`std::io::Write`] destination.
    pub fn new(writer: W) -> Self {
        BinaryWriter {
            writer,
            records_written: 0,
            finished: false,
        }
    }

    /// Write a single record as one fixed-size block.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer was already finished or if writing to
    /// the underlying destination fails.
    pub fn write_record(&mut self, book: &Book) -> Result<()> {
        if self.finished {
            return Err(LibraryError::WriterFinished);
        }

        let mut block = [0u8; BLOCK_SIZE];
        let (title_dest, rest) = block.split_at_mut(TITLE_BYTES);
        let (author_dest, rest) = rest.split_at_mut(AUTHOR_BYTES);
        let (year_dest, rest) = rest.split_at_mut(YEAR_BYTES);
        let (isbn_dest, genre_dest) = rest.split_at_mut(ISBN_BYTES);

        encode_field(title_dest, book.title());
        encode_field(author_dest, book.author());
        year_dest.copy_from_slice(&book.year().to_le_bytes());
        encode_field(isbn_dest, book.isbn());
        encode_field(genre_dest, book.genre());

        self.writer.write_all(&block)?;
        self.records_written += 1;
        Ok(())
    }

    /// Flush buffered data and finalize the output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing the underlying destination fails.
    pub fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }
}

impl<W: Write + std::fmt::Debug> RecordWriter for BinaryWriter<W> {
    fn write_record(&mut self, book: &Book) -> Result<()> {
        BinaryWriter::write_record(self, book)
    }

    fn finish(&mut self) -> Result<()> {
        BinaryWriter::finish(self)
    }

    fn records_written(&self) -> Option<usize> {
        Some(self.records_written)
    }
}

/// Copy a string into a NUL-padded field. `Book` keeps every field within
/// capacity, which leaves at least one trailing NUL in the destination.
fn encode_field(dest: &mut [u8], value: &str) {
    let bytes = value.as_bytes();
    let len = bytes.len().min(dest.len() - 1);
    dest[..len].copy_from_slice(&bytes[..len]);
}
