#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Biblio: personal library collection engine
//!
//! The crate keeps a collection of book records in memory, supports
//! add/remove/search/sort, maintains a history stack of consulted ISBNs and
//! a wish-list queue, and persists the collection to disk in a delimited
//! text format or a fixed-block binary format.
//!
//! ## Modules
//!
//! - [`book`] — the `Book` record type and field capacity limits
//! - [`collection`] — the owned, insertion-order collection of records
//! - [`history`] — LIFO history of consulted ISBNs
//! - [`wishlist`] — FIFO wish list of desired books
//! - [`search`] — substring title search and payload sorts
//! - [`formats`] — reader/writer traits shared by both codecs
//! - [`text`] — the delimited text format
//! - [`reader`] / [`writer`] — the fixed-block binary format
//! - [`store`] — path-level save/load of a whole collection
//! - [`error`] — error types and result alias

pub mod book;
pub mod collection;
pub mod error;
pub mod formats;
pub mod history;
pub mod reader;
pub mod search;
pub mod store;
pub mod text;
pub mod wishlist;
pub mod writer;

pub use book::{Book, BookBuilder, AUTHOR_MAX, GENRE_MAX, ISBN_MAX, TITLE_MAX};
pub use collection::Collection;
pub use error::{LibraryError, Result};
pub use formats::{RecordReader, RecordReaderExt, RecordWriter};
pub use history::HistoryStack;
pub use reader::BinaryReader;
pub use search::{find_by_title, sort_by_key, SortKey};
pub use text::{TextReader, TextWriter};
pub use wishlist::WishQueue;
pub use writer::BinaryWriter;
