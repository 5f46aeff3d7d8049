//! Error types for the record codec.

use std::fmt;
use std::io;

use quickdraw_core::QuickDrawError;

/// Errors that can occur while decoding or encoding records.
///
/// Running out of data exactly at a record boundary is not an error;
/// [`decode_record`](crate::codec::decode_record) reports it as `Ok(None)`.
#[derive(Debug)]
pub enum CodecError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The stream ended partway through a record.
    Truncated {
        /// The field being read when data ran out.
        field: &'static str,
        /// Bytes the field requires.
        needed: usize,
        /// Bytes that were available.
        got: usize,
    },
    /// A record violates the wire format's structural rules.
    MalformedRecord {
        /// Human-readable description of what went wrong.
        detail: String,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Truncated { field, needed, got } => {
                write!(f, "truncated record: got {got} of {needed} bytes for {field}")
            }
            Self::MalformedRecord { detail } => write!(f, "malformed record: {detail}"),
        }
    }
}

impl std::error::Error for CodecError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<CodecError> for QuickDrawError {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::Io(e) => QuickDrawError::Io(e),
            CodecError::MalformedRecord { detail } => QuickDrawError::MalformedRecord { detail },
            truncated @ CodecError::Truncated { .. } => QuickDrawError::MalformedRecord {
                detail: truncated.to_string(),
            },
        }
    }
}
