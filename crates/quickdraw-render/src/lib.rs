//! Raster rendering for Quick, Draw! strokes.
//!
//! Strokes are drawn as connected line segments on a 255×255 RGB
//! [`Canvas`] through the plotters bitmap backend. An [`Animation`] is
//! the sequence of canvases produced by drawing one segment at a time;
//! both can be written out as GIF files.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod animation;
pub mod canvas;
pub mod error;
pub mod style;

pub use animation::{Animation, DEFAULT_FRAME_LENGTH};
pub use canvas::{render_strokes, Canvas};
pub use error::RenderError;
pub use style::{Rgb, StrokeStyle};
