//! RGB raster and stroke rendering.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use plotters::prelude::*;
use quickdraw_core::{Point, CANVAS_SIZE};

use crate::error::RenderError;
use crate::style::{Rgb, StrokeStyle};

/// Quantizer speed passed to the GIF encoder: 1 is slowest, 30 fastest.
pub(crate) const GIF_QUANTIZE_SPEED: i32 = 10;

/// An RGB raster, row-major, three bytes per pixel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// A `CANVAS_SIZE`×`CANVAS_SIZE` canvas filled with `background`.
    pub fn new(background: Rgb) -> Self {
        Self::with_size(CANVAS_SIZE, CANVAS_SIZE, background)
    }

    /// A canvas of arbitrary size filled with `background`.
    pub fn with_size(width: u32, height: u32, background: Rgb) -> Self {
        let len = width as usize * height as usize;
        let pixels = background.to_array().repeat(len);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The color at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some(Rgb(self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
    }

    /// Raw pixel bytes, `[r, g, b]` per pixel, row-major.
    pub fn as_rgb(&self) -> &[u8] {
        &self.pixels
    }

    /// Draw connected line segments through `points`.
    ///
    /// Fewer than two points draws nothing. Segments running off the
    /// canvas are clipped. The pen is a `stroke_width`-pixel square, so
    /// horizontal and vertical strokes are exactly `stroke_width` pixels
    /// thick; a width of 0 draws like 1.
    pub fn draw_polyline(&mut self, points: &[Point], style: &StrokeStyle) -> Result<(), RenderError> {
        if points.len() < 2 {
            return Ok(());
        }
        let pen = RGBColor::from(style.stroke_color).stroke_width(1);
        let offsets = pen_offsets(style.stroke_width);

        let root = BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height))
            .into_drawing_area();
        for dy in offsets.clone() {
            for dx in offsets.clone() {
                let path: Vec<(i32, i32)> = points
                    .iter()
                    .map(|&(x, y)| (i32::from(x) + dx, i32::from(y) + dy))
                    .collect();
                root.draw(&PathElement::new(path, pen)).map_err(backend_error)?;
            }
        }
        root.present().map_err(backend_error)?;
        Ok(())
    }

    pub(crate) fn gif_dimensions(&self) -> Result<(u16, u16), RenderError> {
        let too_large = || RenderError::Dimensions {
            width: self.width,
            height: self.height,
        };
        let w = u16::try_from(self.width).map_err(|_| too_large())?;
        let h = u16::try_from(self.height).map_err(|_| too_large())?;
        Ok((w, h))
    }

    pub(crate) fn to_gif_frame(&self) -> Result<gif::Frame<'static>, RenderError> {
        let (w, h) = self.gif_dimensions()?;
        Ok(gif::Frame::from_rgb_speed(w, h, &self.pixels, GIF_QUANTIZE_SPEED))
    }

    /// Encode the canvas as a single-frame GIF.
    pub fn encode_gif<W: Write>(&self, writer: W) -> Result<(), RenderError> {
        let (w, h) = self.gif_dimensions()?;
        let mut encoder = gif::Encoder::new(writer, w, h, &[])?;
        encoder.write_frame(&self.to_gif_frame()?)?;
        Ok(())
    }

    /// Write the canvas to `path` as a single-frame GIF.
    pub fn save_gif(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.encode_gif(&mut out)?;
        out.flush()?;
        Ok(())
    }
}

/// Pixel offsets covered by a square pen of `width`, relative to the path.
fn pen_offsets(width: u32) -> std::ops::RangeInclusive<i32> {
    let width = i32::try_from(width.max(1)).unwrap_or(i32::MAX);
    -((width - 1) / 2)..=width / 2
}

fn backend_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Backend {
        detail: e.to_string(),
    }
}

/// Draw every stroke onto a fresh canvas.
///
/// Each stroke is a point sequence drawn as connected segments, in order.
///
/// # Examples
///
/// ```
/// use quickdraw_render::{render_strokes, Rgb, StrokeStyle};
///
/// let strokes = vec![vec![(10, 20), (200, 20)]];
/// let style = StrokeStyle::default().stroke_width(1);
/// let canvas = render_strokes(&strokes, &style).unwrap();
/// assert_eq!(canvas.pixel(100, 20), Some(Rgb::BLACK));
/// assert_eq!(canvas.pixel(100, 100), Some(Rgb::WHITE));
/// ```
pub fn render_strokes(strokes: &[Vec<Point>], style: &StrokeStyle) -> Result<Canvas, RenderError> {
    let mut canvas = Canvas::new(style.bg_color);
    for stroke in strokes {
        canvas.draw_polyline(stroke, style)?;
    }
    Ok(canvas)
}
