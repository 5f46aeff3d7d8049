//! Error types for fetching and caching data files.

use std::fmt;
use std::io;

use quickdraw_core::QuickDrawError;

/// Errors from a [`Fetcher`](crate::fetch::Fetcher) or the [`FileCache`](crate::cache::FileCache).
#[derive(Debug)]
pub enum SourceError {
    /// The remote store answered with a non-success status.
    Http {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },
    /// The request could not be completed (DNS, connect, TLS, timeout, body).
    Transport {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The requested object does not exist in the store.
    NotFound {
        /// The remote object name.
        remote_name: String,
    },
    /// A local file-system operation failed.
    Io(io::Error),
}

impl SourceError {
    /// Convert into the caller-facing
    /// [`QuickDrawError::SourceUnavailable`] for `category`.
    pub fn unavailable(self, category: &str) -> QuickDrawError {
        QuickDrawError::SourceUnavailable {
            category: category.to_string(),
            reason: self.to_string(),
        }
    }
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { url, status } => write!(f, "{url} returned HTTP {status}"),
            Self::Transport { reason } => {
                write!(f, "connection error, you need to be connected to the internet: {reason}")
            }
            Self::NotFound { remote_name } => write!(f, "{remote_name} not found"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SourceError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_carries_category_and_reason() {
        let err = SourceError::Http {
            url: "https://example.invalid/anvil.bin".into(),
            status: 404,
        }
        .unavailable("anvil");
        match err {
            QuickDrawError::SourceUnavailable { category, reason } => {
                assert_eq!(category, "anvil");
                assert!(reason.contains("HTTP 404"));
            }
            other => panic!("expected SourceUnavailable, got {other:?}"),
        }
    }
}
