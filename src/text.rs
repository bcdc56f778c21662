//! The delimited text format.
//!
//! One record per line, string fields double-quoted, the year bare:
//!
//! ```text
//! "<title>","<author>",<year>,"<isbn>","<genre>"
//! ```
//!
//! No escaping of embedded quotes is performed; a field containing `"`
//! corrupts the parse of that line on reload. This is a documented
//! limitation of the format, not a crash: the corrupt line is skipped like
//! any other malformed line. On load a line is accepted only when all five
//! fields parse within their declared widths; malformed and blank lines are
//! skipped silently.
//!
//! # Examples
//!
//! ```
//! use biblio::{Book, TextReader, TextWriter};
//! use std::io::Cursor;
//!
//! let mut buffer = Vec::new();
//! let mut writer = TextWriter::new(&mut buffer);
//! writer.write_record(&Book::new("Dune", "Herbert", 1965, "0441013597", "SciFi"))?;
//! writer.finish()?;
//!
//! assert_eq!(
//!     String::from_utf8_lossy(&buffer),
//!     "\"Dune\",\"Herbert\",1965,\"0441013597\",\"SciFi\"\n"
//! );
//!
//! let mut reader = TextReader::new(Cursor::new(buffer));
//! let book = reader.read_record()?.unwrap();
//! assert_eq!(book.title(), "Dune");
//! # Ok::<(), biblio::LibraryError>(())
//! ```

use std::io::{BufRead, Write};

use crate::book::{Book, AUTHOR_MAX, GENRE_MAX, ISBN_MAX, TITLE_MAX};
use crate::error::{LibraryError, Result};
use crate::formats::{RecordReader, RecordWriter};

/// Writer for the delimited text format, one record per line.
#[derive(Debug)]
pub struct TextWriter<W: Write> {
    writer: W,
    records_written: usize,
    finished: bool,
}

impl<W: Write> TextWriter<W> {
    /// Create a new text writer over any [`std::io::Write`] destination.
    pub fn new(writer: W) -> Self {
        TextWriter {
            writer,
            records_written: 0,
            finished: false,
        }
    }

    /// Write a single record as one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the writer was already finished or if writing to
    /// the underlying destination fails.
    pub fn write_record(&mut self, book: &Book) -> Result<()> {
        if self.finished {
            return Err(LibraryError::WriterFinished);
        }
        writeln!(
            self.writer,
            "\"{}\",\"{}\",{},\"{}\",\"{}\"",
            book.title(),
            book.author(),
            book.year(),
            book.isbn(),
            book.genre()
        )?;
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

impl<W: Write + std::fmt::Debug> RecordWriter for TextWriter<W> {
    fn write_record(&mut self, book: &Book) -> Result<()> {
        TextWriter::write_record(self, book)
    }

    fn finish(&mut self) -> Result<()> {
        TextWriter::finish(self)
    }

    fn records_written(&self) -> Option<usize> {
        Some(self.records_written)
    }
}

/// Reader for the delimited text format.
///
/// Lines that fail to parse (wrong shape, over-width field, non-numeric
/// year, blank) are counted and skipped, never surfaced as errors.
#[derive(Debug)]
pub struct TextReader<R: BufRead> {
    reader: R,
    records_read: usize,
    lines_skipped: usize,
}

impl<R: BufRead> TextReader<R> {
    /// Create a new text reader over any [`std::io::BufRead`] source.
    pub fn new(reader: R) -> Self {
        TextReader {
            reader,
            records_read: 0,
            lines_skipped: 0,
        }
    }

    /// Read the next well-formed record line.
    ///
    /// Skips malformed and blank lines until a record parses or the input
    /// ends. Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the underlying source fails.
    pub fn read_record(&mut self) -> Result<Option<Book>> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_line(line.trim_end_matches(['\r', '\n'])) {
                Some(book) => {
                    self.records_read += 1;
                    return Ok(Some(book));
                },
                None => self.lines_skipped += 1,
            }
        }
    }

    /// Number of lines skipped as malformed or blank so far.
    #[must_use]
    pub fn lines_skipped(&self) -> usize {
        self.lines_skipped
    }
}

impl<R: BufRead + std::fmt::Debug> RecordReader for TextReader<R> {
    fn read_record(&mut self) -> Result<Option<Book>> {
        TextReader::read_record(self)
    }

    fn records_read(&self) -> Option<usize> {
        Some(self.records_read)
    }
}

/// Parse one record line, or `None` if the line is malformed.
fn parse_line(line: &str) -> Option<Book> {
    let rest = line.strip_prefix('"')?;
    let (title, rest) = rest.split_once('"')?;
    let rest = rest.strip_prefix(",\"")?;
    let (author, rest) = rest.split_once('"')?;
    let rest = rest.strip_prefix(',')?;
    let (year, rest) = rest.split_once(",\"")?;
    let year: i32 = year.parse().ok()?;
    let (isbn, rest) = rest.split_once('"')?;
    let rest = rest.strip_prefix(",\"")?;
    let (genre, rest) = rest.split_once('"')?;
    if !rest.is_empty() {
        return None;
    }
    if title.len() > TITLE_MAX
        || author.len() > AUTHOR_MAX
        || isbn.len() > ISBN_MAX
        || genre.len() > GENRE_MAX
    {
        return None;
    }
    Some(Book::new(title, author, year, isbn, genre))
}
