//! Error types for library operations.
//!
//! This module provides the [`LibraryError`] type for all biblio operations
//! and the [`Result`] convenience type.

use thiserror::Error;

/// Error type for all biblio operations.
///
/// Malformed input encountered while loading (a text line that fails field
/// extraction, or a trailing partial binary block) is skipped silently by
/// the codecs rather than reported, so the variants here cover I/O failures
/// and writer misuse.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Write attempted on a writer that has already been finished.
    #[error("writer already finished")]
    WriterFinished,

    /// IO error from the underlying source/destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`LibraryError`].
pub type Result<T> = std::result::Result<T, LibraryError>;
