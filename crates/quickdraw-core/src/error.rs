//! Error taxonomy for Quick, Draw! data access.
//!
//! Every failure surfaced to a caller maps to one [`QuickDrawError`]
//! variant. A short read at a record boundary is not an error; the
//! decoder treats it as end of data and never reports it here.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors returned by catalog, group, and drawing operations.
#[derive(Debug)]
pub enum QuickDrawError {
    /// The requested name is not in the static category catalog.
    UnknownCategory {
        /// The name that was requested.
        name: String,
    },
    /// The category's data file could not be fetched and no usable
    /// cached copy exists.
    SourceUnavailable {
        /// Category whose data was requested.
        category: String,
        /// Human-readable description of the fetch failure.
        reason: String,
    },
    /// A record is structurally invalid: mismatched stroke axes, or a
    /// stream that ends partway through a record.
    MalformedRecord {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// Index-based access beyond the number of loaded drawings.
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of drawings loaded in the group.
        count: usize,
    },
    /// A random draw was requested from a group with no drawings.
    EmptyGroup {
        /// Category of the empty group.
        category: String,
    },
    /// Catalog configuration failed validation.
    InvalidConfig {
        /// Which setting is invalid and why.
        detail: String,
    },
    /// Rendering or image encoding failed.
    Render {
        /// Human-readable description of the failure.
        detail: String,
    },
    /// An I/O error while reading or writing local data.
    Io(io::Error),
}

impl fmt::Display for QuickDrawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownCategory { name } => {
                write!(f, "{name} is not a valid quick draw category")
            }
            Self::SourceUnavailable { category, reason } => {
                write!(f, "data for {category} is unavailable: {reason}")
            }
            Self::MalformedRecord { detail } => write!(f, "malformed record: {detail}"),
            Self::IndexOutOfRange { index, count } => {
                write!(f, "index {index} out of range, there are {count} drawings")
            }
            Self::EmptyGroup { category } => {
                write!(f, "no {category} drawings are loaded")
            }
            Self::InvalidConfig { detail } => write!(f, "invalid configuration: {detail}"),
            Self::Render { detail } => write!(f, "render failed: {detail}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for QuickDrawError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for QuickDrawError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
