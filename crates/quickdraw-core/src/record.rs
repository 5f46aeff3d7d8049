//! Decoded drawing records.
//!
//! A [`DrawingRecord`] is one sketch exactly as stored in a category's
//! binary file: opaque metadata plus the raw per-axis stroke arrays.
//! Records are immutable once decoded; the derived point-pair view lives
//! on the `Drawing` wrapper in `quickdraw-store`.

use std::borrow::Cow;
use std::fmt;

/// Width and height of the raster every coordinate is aligned to.
pub const CANVAS_SIZE: u32 = 255;

/// One `(x, y)` coordinate on the 255×255 canvas.
pub type Point = (u8, u8);

/// Two-character country code, kept as the raw bytes from the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(pub [u8; 2]);

impl CountryCode {
    /// The raw code bytes.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// The code as text. Invalid UTF-8 is replaced, never rejected.
    pub fn to_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }

    /// Whether this code equals `text` byte-for-byte.
    pub fn matches(&self, text: &str) -> bool {
        self.0.as_slice() == text.as_bytes()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<[u8; 2]> for CountryCode {
    fn from(v: [u8; 2]) -> Self {
        Self(v)
    }
}

/// One continuous pen movement as parallel coordinate arrays.
///
/// The decoder always produces `x.len() == y.len()`; records built by
/// hand may not, which is why consumers check [`is_consistent`](Self::is_consistent).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stroke {
    /// X coordinates, in pen order.
    pub x: Vec<u8>,
    /// Y coordinates, in pen order.
    pub y: Vec<u8>,
}

impl Stroke {
    /// Build a stroke from its axis arrays.
    pub fn new(x: Vec<u8>, y: Vec<u8>) -> Self {
        Self { x, y }
    }

    /// Build a stroke from a sequence of points.
    pub fn from_points(points: &[Point]) -> Self {
        let (x, y) = points.iter().copied().unzip();
        Self { x, y }
    }

    /// Number of points (the x-array length).
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the stroke has no points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Whether both axis arrays have the same length.
    pub fn is_consistent(&self) -> bool {
        self.x.len() == self.y.len()
    }

    /// Points zipped positionally: point `i` is `(x[i], y[i])`.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// One decoded sketch plus its metadata.
///
/// # Examples
///
/// ```
/// use quickdraw_core::{CountryCode, DrawingRecord, Stroke};
///
/// let record = DrawingRecord {
///     key_id: 5355190515400704,
///     country_code: CountryCode(*b"PL"),
///     recognized: true,
///     timestamp: 1488368345,
///     stroke_count: 1,
///     image_data: vec![Stroke::new(vec![0, 10, 20], vec![5, 5, 5])],
/// };
///
/// assert_eq!(record.country_code.to_text(), "PL");
/// assert_eq!(record.total_points(), 3);
/// assert_eq!(record.segment_count(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawingRecord {
    /// Identifier assigned by the source dataset.
    pub key_id: u64,
    /// Country the sketch was drawn in.
    pub country_code: CountryCode,
    /// Whether the dataset's classifier recognized the sketch.
    pub recognized: bool,
    /// Creation time in seconds since the Unix epoch.
    pub timestamp: u32,
    /// Number of strokes declared in the record header.
    pub stroke_count: u16,
    /// The strokes, in drawing order.
    pub image_data: Vec<Stroke>,
}

impl DrawingRecord {
    /// Total number of points across all strokes.
    pub fn total_points(&self) -> usize {
        self.image_data.iter().map(Stroke::len).sum()
    }

    /// Number of line segments a renderer draws: each stroke with
    /// `k > 0` points contributes `k - 1`.
    pub fn segment_count(&self) -> usize {
        self.image_data
            .iter()
            .map(|s| s.len().saturating_sub(1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_text_and_matching() {
        let code = CountryCode(*b"US");
        assert_eq!(code.to_text(), "US");
        assert_eq!(code.to_string(), "US");
        assert!(code.matches("US"));
        assert!(!code.matches("PL"));
        assert!(!code.matches("USA"));
    }

    #[test]
    fn country_code_invalid_utf8_is_lossy() {
        let code = CountryCode([0xFF, b'Z']);
        assert!(code.to_text().ends_with('Z'));
    }

    #[test]
    fn stroke_points_zip_positionally() {
        let stroke = Stroke::new(vec![1, 2, 3], vec![10, 20, 30]);
        let points: Vec<_> = stroke.points().collect();
        assert_eq!(points, vec![(1, 10), (2, 20), (3, 30)]);
        assert_eq!(Stroke::from_points(&points), stroke);
    }

    #[test]
    fn inconsistent_stroke_detected() {
        let stroke = Stroke::new(vec![1, 2, 3], vec![10, 20]);
        assert!(!stroke.is_consistent());
        assert_eq!(stroke.len(), 3);
    }

    #[test]
    fn segment_count_skips_empty_strokes() {
        let record = DrawingRecord {
            key_id: 1,
            country_code: CountryCode(*b"GB"),
            recognized: false,
            timestamp: 0,
            stroke_count: 3,
            image_data: vec![
                Stroke::new(vec![0; 4], vec![0; 4]),
                Stroke::default(),
                Stroke::new(vec![0], vec![0]),
            ],
        };
        assert_eq!(record.total_points(), 5);
        assert_eq!(record.segment_count(), 3);
    }
}
