//! Colors and stroke styling.

use plotters::style::RGBColor;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Pure black.
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// The color as `[r, g, b]`.
    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }
}

impl From<Rgb> for RGBColor {
    fn from(c: Rgb) -> Self {
        RGBColor(c.0, c.1, c.2)
    }
}

/// How strokes are drawn: pen color, pen width in pixels, and the
/// background the canvas starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StrokeStyle {
    /// Pen color.
    pub stroke_color: Rgb,
    /// Pen width in pixels.
    pub stroke_width: u32,
    /// Canvas background.
    pub bg_color: Rgb,
}

impl Default for StrokeStyle {
    /// Black two-pixel strokes on white.
    fn default() -> Self {
        Self {
            stroke_color: Rgb::BLACK,
            stroke_width: 2,
            bg_color: Rgb::WHITE,
        }
    }
}

impl StrokeStyle {
    /// Set the pen color.
    pub fn stroke_color(mut self, color: impl Into<Rgb>) -> Self {
        self.stroke_color = color.into();
        self
    }

    /// Set the pen width.
    pub fn stroke_width(mut self, width: u32) -> Self {
        self.stroke_width = width;
        self
    }

    /// Set the background color.
    pub fn bg_color(mut self, color: impl Into<Rgb>) -> Self {
        self.bg_color = color.into();
        self
    }
}
