//! Error types for rendering and GIF encoding.

use std::error::Error;
use std::fmt;
use std::io;

use quickdraw_core::QuickDrawError;

/// Errors from drawing onto a canvas or encoding it.
#[derive(Debug)]
pub enum RenderError {
    /// The drawing backend rejected an operation.
    Backend {
        /// Backend error message.
        detail: String,
    },
    /// The canvas is too large for the GIF format.
    Dimensions {
        /// Canvas width.
        width: u32,
        /// Canvas height.
        height: u32,
    },
    /// The GIF encoder failed.
    Encode(gif::EncodingError),
    /// Writing the output file failed.
    Io(io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Backend { detail } => write!(f, "drawing backend error: {detail}"),
            Self::Dimensions { width, height } => {
                write!(f, "canvas {width}x{height} exceeds GIF limits")
            }
            Self::Encode(e) => write!(f, "GIF encoding failed: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<gif::EncodingError> for RenderError {
    fn from(e: gif::EncodingError) -> Self {
        match e {
            gif::EncodingError::Io(io) => Self::Io(io),
            other => Self::Encode(other),
        }
    }
}

impl From<RenderError> for QuickDrawError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::Io(io) => QuickDrawError::Io(io),
            other => QuickDrawError::Render {
                detail: other.to_string(),
            },
        }
    }
}
