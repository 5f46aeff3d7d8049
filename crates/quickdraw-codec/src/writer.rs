//! Streaming record writer.
//!
//! [`RecordWriter`] encodes records to any `Write` sink in the same
//! layout the dataset publishes, so its output can be read back by
//! [`RecordReader`](crate::reader::RecordReader) or dropped into a cache
//! directory in place of a downloaded file.

use std::io::Write;

use quickdraw_core::DrawingRecord;

use crate::codec::encode_record;
use crate::error::CodecError;

/// Writes drawing records to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use quickdraw_codec::{RecordReader, RecordWriter};
/// use quickdraw_core::{CountryCode, DrawingRecord, Stroke};
///
/// let record = DrawingRecord {
///     key_id: 42,
///     country_code: CountryCode(*b"FR"),
///     recognized: true,
///     timestamp: 1_488_000_000,
///     stroke_count: 1,
///     image_data: vec![Stroke::new(vec![0, 128], vec![128, 0])],
/// };
///
/// let mut buf = Vec::new();
/// let mut writer = RecordWriter::new(&mut buf);
/// writer.write_record(&record).unwrap();
/// assert_eq!(writer.records_written(), 1);
/// drop(writer);
///
/// let mut reader = RecordReader::new(buf.as_slice());
/// assert_eq!(reader.next_record().unwrap(), Some(record));
/// assert!(reader.next_record().unwrap().is_none());
/// ```
pub struct RecordWriter<W: Write> {
    writer: W,
    records_written: u64,
}

impl<W: Write> RecordWriter<W> {
    /// Create a new record writer. Nothing is written until the first record.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
        }
    }

    /// Encode and write one record.
    pub fn write_record(&mut self, record: &DrawingRecord) -> Result<(), CodecError> {
        encode_record(&mut self.writer, record)?;
        self.records_written += 1;
        Ok(())
    }

    /// Write every record from an iterator, stopping at the first error.
    pub fn write_all<'a, I>(&mut self, records: I) -> Result<(), CodecError>
    where
        I: IntoIterator<Item = &'a DrawingRecord>,
    {
        for record in records {
            self.write_record(record)?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), CodecError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
