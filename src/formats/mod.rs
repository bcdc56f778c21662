//! Format traits shared by the text and binary codecs.
//!
//! Both persistence formats expose the same streaming surface through
//! [`RecordReader`] and [`RecordWriter`], so driver code can be written
//! against either codec. See the [`traits`] module for details.

pub mod traits;

pub use traits::{RecordReader, RecordReaderExt, RecordWriter, Records};
