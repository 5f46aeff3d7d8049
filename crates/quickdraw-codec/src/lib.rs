//! Binary record codec for Quick, Draw! data files.
//!
//! Each category's data file is a plain concatenation of fixed-layout
//! records with no header, no delimiter, and no trailer. This crate
//! decodes that stream into [`DrawingRecord`](quickdraw_core::DrawingRecord)s
//! and encodes records back into it.
//!
//! # Architecture
//!
//! - [`decode_records`] bulk-decodes with an optional bound and
//!   recognized-filter, the way a drawing group loads a category
//! - [`RecordReader`] pulls records one at a time from any `Read` source
//! - [`RecordWriter`] writes records to any `Write` sink
//! - All I/O uses a hand-written little-endian codec (no serde dependency)
//!
//! # End of data
//!
//! A clean end of stream is zero bytes where a record would start. A
//! stream that stops anywhere inside a record is reported as
//! [`CodecError::Truncated`] rather than silently ending the load.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{
    decode_record, decode_records, encode_record, DecodeOptions, DecodeOutcome, StopReason,
};
pub use error::CodecError;
pub use reader::{RecordIter, RecordReader};
pub use writer::RecordWriter;

/// Size in bytes of the fixed record header
/// (`key_id` + `country_code` + `recognized` + `timestamp` + `stroke_count`).
pub const RECORD_HEADER_LEN: usize = 8 + 2 + 1 + 4 + 2;
