//! Binary encode/decode for the drawing record format.
//!
//! All multi-byte integers are little-endian. Records are concatenated
//! with no delimiter and no file header:
//!
//! ```text
//! key_id u64 | country_code [u8; 2] | recognized i8 | timestamp u32 | stroke_count u16
//! stroke_count × ( n_points u16 | x [u8; n_points] | y [u8; n_points] )
//! ```
//!
//! End of data is a short read. Zero bytes where a record would start is
//! a clean end of stream; any shorter-than-required read after that point
//! is a truncated record and fails with [`CodecError::Truncated`].

use std::io::{self, Read, Write};

use quickdraw_core::{CountryCode, DrawingRecord, Stroke};

use crate::error::CodecError;

// ── Primitive writers ───────────────────────────────────────────

/// Write a signed byte.
pub fn write_i8(w: &mut dyn Write, v: i8) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u16.
pub fn write_u16_le(w: &mut dyn Write, v: u16) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), CodecError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read into `buf` until it is full or the source is exhausted,
/// returning how many bytes were filled.
fn fill(r: &mut dyn Read, buf: &mut [u8]) -> Result<usize, CodecError> {
    let mut filled = 0;
    while filled < buf.len() {
        match r.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::Io(e)),
        }
    }
    Ok(filled)
}

/// Fill `buf` completely or fail with [`CodecError::Truncated`].
fn read_field(r: &mut dyn Read, buf: &mut [u8], field: &'static str) -> Result<(), CodecError> {
    let got = fill(r, buf)?;
    if got < buf.len() {
        return Err(CodecError::Truncated {
            field,
            needed: buf.len(),
            got,
        });
    }
    Ok(())
}

/// Read a signed byte.
pub fn read_i8(r: &mut dyn Read, field: &'static str) -> Result<i8, CodecError> {
    let mut buf = [0u8; 1];
    read_field(r, &mut buf, field)?;
    Ok(i8::from_le_bytes(buf))
}

/// Read a little-endian u16.
pub fn read_u16_le(r: &mut dyn Read, field: &'static str) -> Result<u16, CodecError> {
    let mut buf = [0u8; 2];
    read_field(r, &mut buf, field)?;
    Ok(u16::from_le_bytes(buf))
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read, field: &'static str) -> Result<u32, CodecError> {
    let mut buf = [0u8; 4];
    read_field(r, &mut buf, field)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read, field: &'static str) -> Result<u64, CodecError> {
    let mut buf = [0u8; 8];
    read_field(r, &mut buf, field)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read exactly `len` raw bytes.
pub fn read_bytes(r: &mut dyn Read, len: usize, field: &'static str) -> Result<Vec<u8>, CodecError> {
    let mut buf = vec![0u8; len];
    read_field(r, &mut buf, field)?;
    Ok(buf)
}

// ── Record encode/decode ────────────────────────────────────────

/// Encode a single record.
///
/// Fails with [`CodecError::MalformedRecord`] if the record cannot be
/// represented on the wire: `stroke_count` disagreeing with the stroke
/// list, mismatched axis lengths, or a stroke longer than `u16::MAX`.
pub fn encode_record(w: &mut dyn Write, record: &DrawingRecord) -> Result<(), CodecError> {
    if usize::from(record.stroke_count) != record.image_data.len() {
        return Err(CodecError::MalformedRecord {
            detail: format!(
                "stroke_count {} does not match {} strokes",
                record.stroke_count,
                record.image_data.len()
            ),
        });
    }

    write_u64_le(w, record.key_id)?;
    w.write_all(record.country_code.as_bytes())?;
    write_i8(w, i8::from(record.recognized))?;
    write_u32_le(w, record.timestamp)?;
    write_u16_le(w, record.stroke_count)?;

    for (i, stroke) in record.image_data.iter().enumerate() {
        if !stroke.is_consistent() {
            return Err(CodecError::MalformedRecord {
                detail: format!(
                    "stroke {i} has {} x values and {} y values",
                    stroke.x.len(),
                    stroke.y.len()
                ),
            });
        }
        let n_points = u16::try_from(stroke.len()).map_err(|_| CodecError::MalformedRecord {
            detail: format!("stroke {i} has {} points (max {})", stroke.len(), u16::MAX),
        })?;
        write_u16_le(w, n_points)?;
        w.write_all(&stroke.x)?;
        w.write_all(&stroke.y)?;
    }

    Ok(())
}

/// Decode a single record.
///
/// Returns `Ok(None)` on clean EOF (no bytes available where a record
/// would start), `Ok(Some(record))` on success, or an error on a record
/// that ends early.
pub fn decode_record(r: &mut dyn Read) -> Result<Option<DrawingRecord>, CodecError> {
    // Fill the key_id by hand to tell clean EOF (zero bytes) apart from a
    // partial header (1-7 bytes).
    let mut key_buf = [0u8; 8];
    match fill(r, &mut key_buf)? {
        0 => return Ok(None),
        8 => {}
        got => {
            return Err(CodecError::Truncated {
                field: "key_id",
                needed: 8,
                got,
            })
        }
    }
    let key_id = u64::from_le_bytes(key_buf);

    let mut code = [0u8; 2];
    read_field(r, &mut code, "country_code")?;
    let recognized = read_i8(r, "recognized")? != 0;
    let timestamp = read_u32_le(r, "timestamp")?;
    let stroke_count = read_u16_le(r, "stroke_count")?;

    let mut image_data = Vec::with_capacity(usize::from(stroke_count));
    for _ in 0..stroke_count {
        let n_points = usize::from(read_u16_le(r, "n_points")?);
        let x = read_bytes(r, n_points, "x")?;
        let y = read_bytes(r, n_points, "y")?;
        image_data.push(Stroke { x, y });
    }

    Ok(Some(DrawingRecord {
        key_id,
        country_code: CountryCode(code),
        recognized,
        timestamp,
        stroke_count,
        image_data,
    }))
}

// ── Bulk decoding ───────────────────────────────────────────────

/// Load-time bound and filter for [`decode_records`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Stop after accepting this many records. `None` = read to the end.
    pub max_records: Option<usize>,
    /// Keep only records whose recognized flag equals this. `None` = keep all.
    pub recognized: Option<bool>,
}

impl DecodeOptions {
    /// Options that accept every record until the stream ends.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Whether `record` passes the recognized filter.
    pub fn accepts(&self, record: &DrawingRecord) -> bool {
        self.recognized.is_none_or(|r| r == record.recognized)
    }

    fn limit_reached(&self, accepted: usize) -> bool {
        self.max_records.is_some_and(|max| accepted >= max)
    }
}

/// Why [`decode_records`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The stream ended cleanly at a record boundary.
    EndOfStream,
    /// `max_records` records were accepted; the rest of the stream was not read.
    LimitReached,
}

/// Result of a bulk decode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Accepted records, in stream order.
    pub records: Vec<DrawingRecord>,
    /// Records decoded from the stream, accepted or not.
    pub scanned: usize,
    /// Records rejected by the recognized filter.
    pub discarded: usize,
    /// Why decoding stopped.
    pub stop: StopReason,
}

/// Upper bound on the initial record buffer, so a huge `max_records`
/// does not pre-allocate.
const INITIAL_CAPACITY_CAP: usize = 1024;

/// Decode records until the stream ends or `max_records` are accepted.
///
/// Filtered-out records do not count toward the bound. The stream is not
/// read past the last accepted record once the bound is met.
///
/// # Examples
///
/// ```
/// use quickdraw_codec::{decode_records, encode_record, DecodeOptions, StopReason};
/// use quickdraw_core::{CountryCode, DrawingRecord, Stroke};
///
/// let mut buf = Vec::new();
/// for key_id in 0..3u64 {
///     let record = DrawingRecord {
///         key_id,
///         country_code: CountryCode(*b"US"),
///         recognized: key_id % 2 == 0,
///         timestamp: 0,
///         stroke_count: 1,
///         image_data: vec![Stroke::new(vec![1, 2], vec![3, 4])],
///     };
///     encode_record(&mut buf, &record).unwrap();
/// }
///
/// let opts = DecodeOptions { max_records: Some(2), recognized: None };
/// let outcome = decode_records(&mut buf.as_slice(), &opts).unwrap();
/// assert_eq!(outcome.records.len(), 2);
/// assert_eq!(outcome.stop, StopReason::LimitReached);
/// ```
pub fn decode_records(r: &mut dyn Read, opts: &DecodeOptions) -> Result<DecodeOutcome, CodecError> {
    let capacity = opts
        .max_records
        .unwrap_or(INITIAL_CAPACITY_CAP)
        .min(INITIAL_CAPACITY_CAP);
    let mut records = Vec::with_capacity(capacity);
    let mut scanned = 0;
    let mut discarded = 0;

    let stop = loop {
        if opts.limit_reached(records.len()) {
            break StopReason::LimitReached;
        }
        let Some(record) = decode_record(r)? else {
            break StopReason::EndOfStream;
        };
        scanned += 1;
        if opts.accepts(&record) {
            records.push(record);
        } else {
            discarded += 1;
        }
    };

    Ok(DecodeOutcome {
        records,
        scanned,
        discarded,
        stop,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RECORD_HEADER_LEN;
    use proptest::prelude::*;

    fn record(key_id: u64, recognized: bool, strokes: &[usize]) -> DrawingRecord {
        DrawingRecord {
            key_id,
            country_code: CountryCode(*b"US"),
            recognized,
            timestamp: 1_488_368_345,
            stroke_count: strokes.len() as u16,
            image_data: strokes
                .iter()
                .map(|&n| {
                    Stroke::new(
                        (0..n).map(|i| i as u8).collect(),
                        (0..n).map(|i| (255 - i) as u8).collect(),
                    )
                })
                .collect(),
        }
    }

    fn encode_all(records: &[DrawingRecord]) -> Vec<u8> {
        let mut buf = Vec::new();
        for r in records {
            encode_record(&mut buf, r).unwrap();
        }
        buf
    }

    // ── Single record ───────────────────────────────────────────

    #[test]
    fn eof_returns_none() {
        let buf: &[u8] = &[];
        assert!(decode_record(&mut &buf[..]).unwrap().is_none());
    }

    #[test]
    fn wire_layout_is_little_endian_and_packed() {
        let rec = record(0x0102_0304_0506_0708, true, &[2]);
        let buf = encode_all(&[rec]);
        assert_eq!(
            buf,
            vec![
                0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01, // key_id
                b'U', b'S', // country_code
                1,    // recognized
                0xD9, 0xB2, 0xB6, 0x58, // timestamp 1488368345
                1, 0, // stroke_count
                2, 0, // n_points
                0, 1, // x
                255, 254, // y
            ]
        );
    }

    #[test]
    fn decodes_fields_exactly() {
        let rec = record(5_355_190_515_400_704, true, &[33]);
        let buf = encode_all(std::slice::from_ref(&rec));
        let got = decode_record(&mut buf.as_slice()).unwrap().unwrap();
        assert_eq!(got, rec);
        assert_eq!(got.image_data[0].x.len(), 33);
        assert_eq!(got.image_data[0].y.len(), 33);
    }

    #[test]
    fn any_nonzero_recognized_byte_is_true() {
        let mut buf = encode_all(&[record(1, false, &[])]);
        buf[10] = 0xFF; // -1 as i8
        let got = decode_record(&mut buf.as_slice()).unwrap().unwrap();
        assert!(got.recognized);
    }

    #[test]
    fn zero_stroke_record_decodes() {
        let buf = encode_all(&[record(9, false, &[])]);
        assert_eq!(buf.len(), RECORD_HEADER_LEN);
        assert_eq!(RECORD_HEADER_LEN, 17);
        let got = decode_record(&mut buf.as_slice()).unwrap().unwrap();
        assert_eq!(got.stroke_count, 0);
        assert!(got.image_data.is_empty());
    }

    // ── Truncation ──────────────────────────────────────────────

    #[test]
    fn partial_key_header_is_error_not_eof() {
        for partial_len in 1..=7 {
            let buf = vec![0xAA; partial_len];
            match decode_record(&mut buf.as_slice()) {
                Err(CodecError::Truncated { field, needed, got }) => {
                    assert_eq!(field, "key_id");
                    assert_eq!(needed, 8);
                    assert_eq!(got, partial_len);
                }
                other => panic!("expected Truncated for {partial_len} bytes, got {other:?}"),
            }
        }
    }

    #[test]
    fn every_mid_record_cut_is_truncated() {
        let buf = encode_all(&[record(3, true, &[4, 2])]);
        for cut in 1..buf.len() {
            let result = decode_record(&mut &buf[..cut]);
            assert!(
                matches!(result, Err(CodecError::Truncated { .. })),
                "cut at {cut} of {} should be truncated, got {result:?}",
                buf.len()
            );
        }
    }

    #[test]
    fn point_count_beyond_stream_is_truncated() {
        let mut buf = encode_all(&[record(3, true, &[4])]);
        // Claim 200 points where only 4 pairs follow.
        buf[RECORD_HEADER_LEN] = 200;
        match decode_record(&mut buf.as_slice()) {
            Err(CodecError::Truncated { field, needed, .. }) => {
                assert_eq!(field, "x");
                assert_eq!(needed, 200);
            }
            other => panic!("expected Truncated, got {other:?}"),
        }
    }

    // ── Encoding validation ─────────────────────────────────────

    #[test]
    fn encode_rejects_mismatched_axes() {
        let mut rec = record(1, true, &[3]);
        rec.image_data[0].y.pop();
        let result = encode_record(&mut Vec::new(), &rec);
        assert!(matches!(result, Err(CodecError::MalformedRecord { .. })));
    }

    #[test]
    fn encode_rejects_stroke_count_mismatch() {
        let mut rec = record(1, true, &[3, 3]);
        rec.stroke_count = 1;
        let result = encode_record(&mut Vec::new(), &rec);
        assert!(matches!(result, Err(CodecError::MalformedRecord { .. })));
    }

    // ── Bulk decode ─────────────────────────────────────────────

    #[test]
    fn unbounded_decode_reads_everything_in_order() {
        let records: Vec<_> = (0..5).map(|k| record(k, true, &[2, 3])).collect();
        let buf = encode_all(&records);
        let outcome = decode_records(&mut buf.as_slice(), &DecodeOptions::unbounded()).unwrap();
        assert_eq!(outcome.records, records);
        assert_eq!(outcome.scanned, 5);
        assert_eq!(outcome.discarded, 0);
        assert_eq!(outcome.stop, StopReason::EndOfStream);
    }

    #[test]
    fn bound_stops_before_next_record() {
        let records: Vec<_> = (0..5).map(|k| record(k, true, &[2])).collect();
        let buf = encode_all(&records);
        let tail_len = encode_all(&records[3..]).len();

        let mut cursor = buf.as_slice();
        let opts = DecodeOptions {
            max_records: Some(3),
            recognized: None,
        };
        let outcome = decode_records(&mut cursor, &opts).unwrap();
        assert_eq!(outcome.records.len(), 3);
        assert_eq!(outcome.stop, StopReason::LimitReached);
        // Records 4 and 5 were never touched.
        assert_eq!(cursor.len(), tail_len);
    }

    #[test]
    fn zero_bound_reads_nothing() {
        let buf = encode_all(&[record(1, true, &[2])]);
        let mut cursor = buf.as_slice();
        let opts = DecodeOptions {
            max_records: Some(0),
            recognized: None,
        };
        let outcome = decode_records(&mut cursor, &opts).unwrap();
        assert!(outcome.records.is_empty());
        assert_eq!(cursor.len(), buf.len());
    }

    #[test]
    fn filtered_records_do_not_count_toward_bound() {
        let records: Vec<_> = (0..6).map(|k| record(k, k % 3 == 0, &[1])).collect();
        let buf = encode_all(&records);
        let opts = DecodeOptions {
            max_records: Some(2),
            recognized: Some(true),
        };
        let outcome = decode_records(&mut buf.as_slice(), &opts).unwrap();
        let keys: Vec<_> = outcome.records.iter().map(|r| r.key_id).collect();
        assert_eq!(keys, vec![0, 3]);
        assert_eq!(outcome.discarded, 2);
        assert_eq!(outcome.scanned, 4);
    }

    #[test]
    fn truncated_tail_fails_the_whole_decode() {
        let records: Vec<_> = (0..3).map(|k| record(k, true, &[5])).collect();
        let mut buf = encode_all(&records);
        buf.truncate(buf.len() - 3);
        let result = decode_records(&mut buf.as_slice(), &DecodeOptions::unbounded());
        assert!(matches!(result, Err(CodecError::Truncated { .. })));
    }

    proptest! {
        #[test]
        fn bounded_decode_yields_min_of_bound_and_count(
            k in 0usize..12,
            m in 0usize..16,
        ) {
            let records: Vec<_> = (0..k as u64).map(|i| record(i, true, &[3])).collect();
            let buf = encode_all(&records);
            let opts = DecodeOptions { max_records: Some(m), recognized: None };
            let outcome = decode_records(&mut buf.as_slice(), &opts).unwrap();
            prop_assert_eq!(outcome.records.len(), k.min(m));
            prop_assert_eq!(&outcome.records[..], &records[..k.min(m)]);
        }

        #[test]
        fn recognized_filters_partition_the_stream(
            flags in prop::collection::vec(any::<bool>(), 0..40),
        ) {
            let records: Vec<_> = flags
                .iter()
                .enumerate()
                .map(|(i, &f)| record(i as u64, f, &[2]))
                .collect();
            let buf = encode_all(&records);
            let count = |recognized| {
                let opts = DecodeOptions { max_records: None, recognized };
                decode_records(&mut buf.as_slice(), &opts).unwrap().records
            };

            let yes = count(Some(true));
            let no = count(Some(false));
            let all = count(None);
            prop_assert!(yes.iter().all(|r| r.recognized));
            prop_assert!(no.iter().all(|r| !r.recognized));
            prop_assert_eq!(yes.len() + no.len(), all.len());
        }
    }
}
