//! Benchmark corpora for quickdraw.
//!
//! - [`synthetic_corpus`]: seeded random records shaped like real sketches
//! - [`encoded_corpus`]: the same records in the published wire format

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quickdraw_codec::RecordWriter;
use quickdraw_core::{CountryCode, DrawingRecord, Stroke};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const COUNTRIES: [[u8; 2]; 6] = [*b"US", *b"GB", *b"DE", *b"PL", *b"BR", *b"JP"];

/// `n` random records: 1 to 8 strokes of 2 to 60 points each, about
/// 80% recognized.
pub fn synthetic_corpus(n: usize, seed: u64) -> Vec<DrawingRecord> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| {
            let strokes: Vec<Stroke> = (0..rng.random_range(1..=8))
                .map(|_| {
                    let points = rng.random_range(2..=60);
                    let x = (0..points).map(|_| rng.random()).collect();
                    let y = (0..points).map(|_| rng.random()).collect();
                    Stroke::new(x, y)
                })
                .collect();
            DrawingRecord {
                key_id: 4_000_000_000_000_000 + i as u64,
                country_code: CountryCode(COUNTRIES[rng.random_range(0..COUNTRIES.len())]),
                recognized: rng.random_bool(0.8),
                timestamp: 1_485_000_000 + rng.random_range(0..10_000_000),
                stroke_count: strokes.len() as u16,
                image_data: strokes,
            }
        })
        .collect()
}

/// [`synthetic_corpus`] encoded back-to-back.
pub fn encoded_corpus(n: usize, seed: u64) -> Vec<u8> {
    let mut writer = RecordWriter::new(Vec::new());
    for record in synthetic_corpus(n, seed) {
        if let Err(e) = writer.write_record(&record) {
            panic!("synthetic record failed to encode: {e}");
        }
    }
    writer.into_inner()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_is_deterministic_and_consistent() {
        let a = synthetic_corpus(50, 9);
        assert_eq!(a, synthetic_corpus(50, 9));
        for record in &a {
            assert_eq!(record.stroke_count as usize, record.image_data.len());
            assert!(record.image_data.iter().all(Stroke::is_consistent));
        }
    }
}
