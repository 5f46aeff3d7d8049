//! Read-only view over one decoded record.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, OnceLock};

use quickdraw_core::{DrawingRecord, Point, QuickDrawError, Stroke};
use quickdraw_render::{render_strokes, Animation, Canvas, StrokeStyle};

/// One drawing from a category, with lazily derived views.
///
/// The point-pair [`strokes`](Self::strokes), the default-styled
/// [`image`](Self::image) and the default-styled
/// [`animation`](Self::animation) are each computed at most once per
/// drawing. Clones share the record and carry over whatever has already
/// been computed.
#[derive(Clone)]
pub struct Drawing {
    name: Arc<str>,
    record: Arc<DrawingRecord>,
    strokes: OnceLock<Vec<Vec<Point>>>,
    image: OnceLock<Canvas>,
    animation: OnceLock<Animation>,
}

impl Drawing {
    /// Wrap `record` as a drawing of category `name`.
    pub fn new(name: Arc<str>, record: Arc<DrawingRecord>) -> Self {
        Self {
            name,
            record,
            strokes: OnceLock::new(),
            image: OnceLock::new(),
            animation: OnceLock::new(),
        }
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier assigned by the dataset.
    pub fn key_id(&self) -> u64 {
        self.record.key_id
    }

    /// Country code as text.
    pub fn country_code(&self) -> Cow<'_, str> {
        self.record.country_code.to_text()
    }

    /// Whether the dataset's classifier recognized the drawing.
    pub fn recognized(&self) -> bool {
        self.record.recognized
    }

    /// Creation time, seconds since the Unix epoch.
    pub fn timestamp(&self) -> u32 {
        self.record.timestamp
    }

    /// Number of strokes declared in the record.
    pub fn stroke_count(&self) -> u16 {
        self.record.stroke_count
    }

    /// Raw per-axis stroke arrays.
    pub fn image_data(&self) -> &[Stroke] {
        &self.record.image_data
    }

    /// The underlying record.
    pub fn record(&self) -> &DrawingRecord {
        &self.record
    }

    /// Strokes as `(x, y)` point sequences.
    ///
    /// Fails with [`QuickDrawError::MalformedRecord`] if any stroke's
    /// axis arrays differ in length. A failure is not cached.
    pub fn strokes(&self) -> Result<&[Vec<Point>], QuickDrawError> {
        if let Some(strokes) = self.strokes.get() {
            return Ok(strokes);
        }
        let computed = zip_strokes(&self.record)?;
        Ok(self.strokes.get_or_init(|| computed))
    }

    /// Black two-pixel strokes on white, rendered once.
    pub fn image(&self) -> Result<&Canvas, QuickDrawError> {
        if let Some(image) = self.image.get() {
            return Ok(image);
        }
        let computed = self.get_image(&StrokeStyle::default())?;
        Ok(self.image.get_or_init(|| computed))
    }

    /// Render with a custom style. Not cached.
    pub fn get_image(&self, style: &StrokeStyle) -> Result<Canvas, QuickDrawError> {
        Ok(render_strokes(self.strokes()?, style)?)
    }

    /// Default-styled animation, built once.
    pub fn animation(&self) -> Result<&Animation, QuickDrawError> {
        if let Some(animation) = self.animation.get() {
            return Ok(animation);
        }
        let computed = self.get_animation(&StrokeStyle::default())?;
        Ok(self.animation.get_or_init(|| computed))
    }

    /// Animate with a custom style. Not cached.
    pub fn get_animation(&self, style: &StrokeStyle) -> Result<Animation, QuickDrawError> {
        Ok(Animation::from_strokes(self.strokes()?, style)?)
    }
}

fn zip_strokes(record: &DrawingRecord) -> Result<Vec<Vec<Point>>, QuickDrawError> {
    record
        .image_data
        .iter()
        .enumerate()
        .map(|(i, stroke)| {
            if !stroke.is_consistent() {
                return Err(QuickDrawError::MalformedRecord {
                    detail: format!(
                        "key_id {} stroke {i}: {} x values but {} y values",
                        record.key_id,
                        stroke.x.len(),
                        stroke.y.len()
                    ),
                });
            }
            Ok(stroke.points().collect())
        })
        .collect()
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuickDrawing key_id={}", self.record.key_id)
    }
}

impl fmt::Debug for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawing")
            .field("name", &self.name)
            .field("key_id", &self.record.key_id)
            .field("country_code", &self.record.country_code)
            .field("recognized", &self.record.recognized)
            .field("stroke_count", &self.record.stroke_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdraw_core::CountryCode;
    use quickdraw_render::Rgb;

    fn drawing(strokes: Vec<Stroke>) -> Drawing {
        let record = DrawingRecord {
            key_id: 5_355_190_515_400_704,
            country_code: CountryCode(*b"PL"),
            recognized: true,
            timestamp: 1_488_368_345,
            stroke_count: strokes.len() as u16,
            image_data: strokes,
        };
        Drawing::new(Arc::from("anvil"), Arc::new(record))
    }

    #[test]
    fn accessors_pass_through() {
        let d = drawing(vec![Stroke::new(vec![1, 2], vec![3, 4])]);
        assert_eq!(d.name(), "anvil");
        assert_eq!(d.key_id(), 5_355_190_515_400_704);
        assert_eq!(d.country_code(), "PL");
        assert!(d.recognized());
        assert_eq!(d.timestamp(), 1_488_368_345);
        assert_eq!(d.stroke_count(), 1);
        assert_eq!(d.image_data()[0].x, vec![1, 2]);
    }

    #[test]
    fn strokes_zip_and_are_memoized() {
        let d = drawing(vec![
            Stroke::new(vec![1, 2, 3], vec![4, 5, 6]),
            Stroke::new(vec![9], vec![8]),
        ]);
        let first = d.strokes().unwrap();
        assert_eq!(first, &[vec![(1, 4), (2, 5), (3, 6)], vec![(9, 8)]]);
        let second = d.strokes().unwrap();
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn mismatched_axes_are_malformed() {
        let d = drawing(vec![Stroke::new(vec![1, 2, 3], vec![4, 5])]);
        match d.strokes() {
            Err(QuickDrawError::MalformedRecord { detail }) => {
                assert!(detail.contains("3 x values but 2 y values"));
            }
            other => panic!("expected MalformedRecord, got {other:?}"),
        }
        assert!(d.image().is_err());
        assert!(d.animation().is_err());
    }

    #[test]
    fn default_image_is_cached_custom_is_fresh() {
        let d = drawing(vec![Stroke::new(vec![10, 200], vec![50, 50])]);
        let a = d.image().unwrap();
        let b = d.image().unwrap();
        assert!(std::ptr::eq(a, b));

        let red = StrokeStyle::default().stroke_color(Rgb(255, 0, 0)).stroke_width(1);
        let custom = d.get_image(&red).unwrap();
        assert_eq!(custom.pixel(100, 50), Some(Rgb(255, 0, 0)));
        assert_ne!(&custom, a);
    }

    #[test]
    fn animation_frame_count_is_segments() {
        let d = drawing(vec![
            Stroke::new(vec![0; 5], vec![0, 10, 20, 30, 40]),
            Stroke::new(vec![100, 110], vec![100, 110]),
        ]);
        assert_eq!(d.animation().unwrap().frame_count(), 4 + 1);
        assert_eq!(d.record().segment_count(), 5);
    }

    #[test]
    fn display_names_key_id() {
        let d = drawing(Vec::new());
        assert_eq!(d.to_string(), "QuickDrawing key_id=5355190515400704");
    }
}
