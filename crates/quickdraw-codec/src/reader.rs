//! Streaming record reader.
//!
//! [`RecordReader`] decodes records one at a time from any `Read`
//! source. Unlike [`decode_records`](crate::codec::decode_records) it
//! applies no bound or filter; callers pull exactly as many records as
//! they need.

use std::io::Read;

use quickdraw_core::DrawingRecord;

use crate::codec::decode_record;
use crate::error::CodecError;

/// Reads drawing records from a byte stream.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
pub struct RecordReader<R: Read> {
    reader: R,
    records_read: u64,
}

impl<R: Read> RecordReader<R> {
    /// Wrap a stream positioned at the start of a record.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            records_read: 0,
        }
    }

    /// Read the next record, or `None` if the stream is exhausted.
    pub fn next_record(&mut self) -> Result<Option<DrawingRecord>, CodecError> {
        let record = decode_record(&mut self.reader)?;
        if record.is_some() {
            self.records_read += 1;
        }
        Ok(record)
    }

    /// Number of records read so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Convert into a record iterator.
    pub fn records(self) -> RecordIter<R> {
        RecordIter {
            reader: self.reader,
            records_read: self.records_read,
            done: false,
        }
    }

    /// Consume the reader and return the underlying stream.
    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Iterator adapter over decoded records.
///
/// Yields `Err` at most once; iteration ends after the first error.
pub struct RecordIter<R: Read> {
    reader: R,
    records_read: u64,
    done: bool,
}

impl<R: Read> RecordIter<R> {
    /// Number of records yielded so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }
}

impl<R: Read> Iterator for RecordIter<R> {
    type Item = Result<DrawingRecord, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match decode_record(&mut self.reader) {
            Ok(Some(record)) => {
                self.records_read += 1;
                Some(Ok(record))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
