//! Segment-by-segment animation of a drawing.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use gif::Repeat;
use quickdraw_core::Point;

use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::style::StrokeStyle;

/// Default time between frames, in seconds.
pub const DEFAULT_FRAME_LENGTH: f64 = 0.1;

/// A sketch being drawn, one line segment per frame.
///
/// Frame `i` is the canvas after `i + 1` segments have been drawn, in
/// stroke order then point order. A stroke of `k` points contributes
/// `k - 1` frames.
#[derive(Clone, Debug)]
pub struct Animation {
    frames: Vec<Canvas>,
    style: StrokeStyle,
}

impl Animation {
    /// Draw `strokes` segment by segment, snapshotting after each.
    pub fn from_strokes(strokes: &[Vec<Point>], style: &StrokeStyle) -> Result<Self, RenderError> {
        let segments: usize = strokes.iter().map(|s| s.len().saturating_sub(1)).sum();
        let mut frames = Vec::with_capacity(segments);
        let mut canvas = Canvas::new(style.bg_color);
        for stroke in strokes {
            for segment in stroke.windows(2) {
                canvas.draw_polyline(segment, style)?;
                frames.push(canvas.clone());
            }
        }
        Ok(Self {
            frames,
            style: *style,
        })
    }

    /// The frames, in drawing order.
    pub fn frames(&self) -> &[Canvas] {
        &self.frames
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// The style the frames were drawn with.
    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Encode as an animated GIF.
    ///
    /// `frame_length` is the time between frames in seconds. `loop_times`
    /// of `Some(0)` loops forever, `Some(n)` loops `n` times, and `None`
    /// plays once. An animation with no frames is written as a single
    /// background frame.
    pub fn encode_gif<W: Write>(
        &self,
        writer: W,
        frame_length: f64,
        loop_times: Option<u16>,
    ) -> Result<(), RenderError> {
        let blank;
        let frames = if self.frames.is_empty() {
            blank = [Canvas::new(self.style.bg_color)];
            &blank[..]
        } else {
            &self.frames[..]
        };

        let (w, h) = frames[0].gif_dimensions()?;
        let mut encoder = gif::Encoder::new(writer, w, h, &[])?;
        match loop_times {
            Some(0) => encoder.set_repeat(Repeat::Infinite)?,
            Some(n) => encoder.set_repeat(Repeat::Finite(n))?,
            None => {}
        }

        let delay = frame_delay(frame_length);
        for canvas in frames {
            let mut frame = canvas.to_gif_frame()?;
            frame.delay = delay;
            encoder.write_frame(&frame)?;
        }
        Ok(())
    }

    /// Write the animation to `path` as a GIF. See [`encode_gif`](Self::encode_gif).
    pub fn save(
        &self,
        path: impl AsRef<Path>,
        frame_length: f64,
        loop_times: Option<u16>,
    ) -> Result<(), RenderError> {
        let mut out = BufWriter::new(File::create(path)?);
        self.encode_gif(&mut out, frame_length, loop_times)?;
        out.flush()?;
        Ok(())
    }
}

/// Seconds to GIF delay units (hundredths of a second), saturating.
fn frame_delay(seconds: f64) -> u16 {
    let centis = (seconds * 100.0).round();
    if centis.is_nan() || centis <= 0.0 {
        0
    } else if centis >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        centis as u16
    }
}
