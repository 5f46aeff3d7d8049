//! Record fixtures.
//!
//! - [`anvil_fixture`]: metadata of the first anvil record (`key_id`
//!   5355190515400704, drawn in Poland, recognized) with one synthetic
//!   33-point stroke
//! - [`mixed_records`]: a deterministic mix of recognized flags and
//!   country codes for filter and search tests
//! - [`RecordBuilder`]: ad-hoc records

use quickdraw_codec::RecordWriter;
use quickdraw_core::{CountryCode, DrawingRecord, Point, Stroke};

/// `key_id` of [`anvil_fixture`].
pub const ANVIL_KEY_ID: u64 = 5_355_190_515_400_704;

/// Builds [`DrawingRecord`]s with sensible defaults.
pub struct RecordBuilder {
    record: DrawingRecord,
}

impl RecordBuilder {
    pub fn new(key_id: u64) -> Self {
        Self {
            record: DrawingRecord {
                key_id,
                country_code: CountryCode(*b"US"),
                recognized: true,
                timestamp: 1_488_000_000,
                stroke_count: 0,
                image_data: Vec::new(),
            },
        }
    }

    /// Set the country code. Panics unless `code` is two bytes.
    pub fn country(mut self, code: &str) -> Self {
        let bytes: [u8; 2] = code
            .as_bytes()
            .try_into()
            .unwrap_or_else(|_| panic!("country code {code:?} must be two bytes"));
        self.record.country_code = CountryCode(bytes);
        self
    }

    pub fn recognized(mut self, recognized: bool) -> Self {
        self.record.recognized = recognized;
        self
    }

    pub fn timestamp(mut self, timestamp: u32) -> Self {
        self.record.timestamp = timestamp;
        self
    }

    /// Append a stroke through `points`.
    pub fn stroke(mut self, points: &[Point]) -> Self {
        self.record.image_data.push(Stroke::from_points(points));
        self.record.stroke_count += 1;
        self
    }

    pub fn build(self) -> DrawingRecord {
        self.record
    }
}

/// The canonical first anvil record: one 33-point stroke.
pub fn anvil_fixture() -> DrawingRecord {
    let points: Vec<Point> = (0..33u8)
        .map(|i| {
            let x = 20 + i * 6;
            let y = if i % 2 == 0 { 60 + i * 3 } else { 180 - i * 2 };
            (x, y)
        })
        .collect();
    RecordBuilder::new(ANVIL_KEY_ID)
        .country("PL")
        .recognized(true)
        .timestamp(1_488_368_345)
        .stroke(&points)
        .build()
}

/// `n` records with key ids `1..=n`.
///
/// Every third record is unrecognized; country codes cycle through
/// US, PL, GB, DE; timestamps increase by one per record; stroke
/// counts cycle 1..=3.
pub fn mixed_records(n: usize) -> Vec<DrawingRecord> {
    const CODES: [&str; 4] = ["US", "PL", "GB", "DE"];
    (0..n)
        .map(|i| {
            let mut builder = RecordBuilder::new(i as u64 + 1)
                .country(CODES[i % CODES.len()])
                .recognized(i % 3 != 2)
                .timestamp(1_490_000_000 + i as u32);
            for s in 0..=(i % 3) {
                let base = (s * 40) as u8;
                builder = builder.stroke(&[(base, base), (base + 30, base + 10), (base + 5, base + 35)]);
            }
            builder.build()
        })
        .collect()
}

/// Encode records back-to-back in the published wire format.
pub fn encode_records(records: &[DrawingRecord]) -> Vec<u8> {
    let mut writer = RecordWriter::new(Vec::new());
    writer
        .write_all(records)
        .unwrap_or_else(|e| panic!("fixture records must encode: {e}"));
    writer.into_inner()
}
