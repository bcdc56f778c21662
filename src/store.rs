//! Path-level persistence: save and load a whole collection.
//!
//! These functions are the surface an application driver calls. Saving
//! writes the collection in current list order; loading reads a file
//! previously written by the matching save function and **appends** every
//! record to the target collection. Loads never clear the destination, so
//! loading the same file twice duplicates every record.
//!
//! A file that cannot be opened is reported as an error. That includes a
//! file that simply does not exist yet: first-run callers can match on
//! [`std::io::ErrorKind::NotFound`] inside [`crate::LibraryError::Io`] to
//! treat it as an empty store. Which file to try first, and whether to fall
//! back from binary to text, is the caller's policy.
//!
//! # Examples
//!
//! ```no_run
//! use biblio::{Book, Collection};
//!
//! let mut shelf = Collection::new();
//! shelf.insert(Book::new("Dune", "Herbert", 1965, "0441013597", "SciFi"));
//!
//! biblio::store::save_binary(&shelf, "library.dat")?;
//!
//! let mut restored = Collection::new();
//! let loaded = biblio::store::load_binary(&mut restored, "library.dat")?;
//! assert_eq!(loaded, 1);
//! # Ok::<(), biblio::LibraryError>(())
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::collection::Collection;
use crate::error::Result;
use crate::reader::BinaryReader;
use crate::text::{TextReader, TextWriter};
use crate::writer::BinaryWriter;

/// Save the collection to a text file, one record per line.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a write fails.
pub fn save_text<P: AsRef<Path>>(collection: &Collection, path: P) -> Result<usize> {
    let file = File::create(path)?;
    let mut writer = TextWriter::new(BufWriter::new(file));
    let mut count = 0;
    for book in collection {
        writer.write_record(book)?;
        count += 1;
    }
    writer.finish()?;
    Ok(count)
}

/// Load records from a text file, appending them to the collection.
///
/// Malformed and blank lines are skipped silently. Returns the number of
/// records loaded.
///
/// # Errors
///
/// Returns an error if the file cannot be opened (including when it does
/// not exist) or a read fails.
pub fn load_text<P: AsRef<Path>>(collection: &mut Collection, path: P) -> Result<usize> {
    let file = File::open(path)?;
    let mut reader = TextReader::new(BufReader::new(file));
    let mut count = 0;
    while let Some(book) = reader.read_record()? {
        collection.insert(book);
        count += 1;
    }
    Ok(count)
}

/// Save the collection to a binary file of fixed-size record blocks.
///
/// Returns the number of records written.
///
/// # Errors
///
/// Returns an error if the file cannot be created or a write fails.
pub fn save_binary<P: AsRef<Path>>(collection: &Collection, path: P) -> Result<usize> {
    let file = File::create(path)?;
    let mut writer = BinaryWriter::new(BufWriter::new(file));
    let mut count = 0;
    for book in collection {
        writer.write_record(book)?;
        count += 1;
    }
    writer.finish()?;
    Ok(count)
}

/// Load records from a binary file, appending them to the collection.
///
/// A trailing partial block is discarded silently. Returns the number of
/// records loaded.
///
/// # Errors
///
/// Returns an error if the file cannot be opened (including when it does
/// not exist) or a read fails.
pub fn load_binary<P: AsRef<Path>>(collection: &mut Collection, path: P) -> Result<usize> {
    let file = File::open(path)?;
    let mut reader = BinaryReader::new(BufReader::new(file));
    let mut count = 0;
    while let Some(book) = reader.read_record()? {
        collection.insert(book);
        count += 1;
    }
    Ok(count)
}
