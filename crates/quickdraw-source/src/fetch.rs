//! Remote object fetching.
//!
//! [`Fetcher`] is the seam between the drawing store and the network:
//! given a resolved file name it streams the object's bytes into a sink.
//! [`HttpFetcher`] is the production implementation against the public
//! Quick, Draw! bucket; tests substitute in-memory fetchers.

use std::io::Write;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::SourceError;

/// Public object-store prefix for the full binary dataset.
pub const DEFAULT_BASE_URL: &str = "https://storage.googleapis.com/quickdraw_dataset/full/binary/";

/// Connect timeout for [`HttpFetcher`]. The body transfer itself is not
/// time-limited unless [`HttpFetcher::with_timeout`] is used, since a
/// single category file can be hundreds of megabytes.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Retrieves a category's data file from a remote store.
pub trait Fetcher: Send + Sync {
    /// Stream the object named `remote_name` into `sink`.
    ///
    /// Returns the number of bytes written. Blocks until the transfer
    /// completes or fails.
    fn fetch(&self, remote_name: &str, sink: &mut dyn Write) -> Result<u64, SourceError>;

    /// Where `remote_name` is fetched from, for status messages.
    fn location(&self, remote_name: &str) -> String {
        remote_name.to_string()
    }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, remote_name: &str, sink: &mut dyn Write) -> Result<u64, SourceError> {
        (**self).fetch(remote_name, sink)
    }

    fn location(&self, remote_name: &str) -> String {
        (**self).location(remote_name)
    }
}

/// Blocking HTTP(S) fetcher.
#[derive(Clone, Debug)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    /// Create a fetcher for objects under `base_url`.
    ///
    /// `base_url` is joined to each remote name verbatim, so it should
    /// end with `/`.
    pub fn new(base_url: impl Into<String>) -> Result<Self, SourceError> {
        Self::with_timeout(base_url, None)
    }

    /// Create a fetcher whose whole request (connect plus body) must
    /// finish within `timeout`.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, SourceError> {
        let client = Client::builder()
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `remote_name`.
    pub fn url_for(&self, remote_name: &str) -> String {
        format!("{}{}", self.base_url, remote_name)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, remote_name: &str, sink: &mut dyn Write) -> Result<u64, SourceError> {
        let url = self.url_for(remote_name);
        let mut response = self.client.get(&url).send()?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(SourceError::NotFound {
                remote_name: remote_name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(SourceError::Http {
                url,
                status: status.as_u16(),
            });
        }

        std::io::copy(&mut response, sink).map_err(|e| SourceError::Transport {
            reason: format!("reading body of {url}: {e}"),
        })
    }

    fn location(&self, remote_name: &str) -> String {
        self.url_for(remote_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_name() {
        let fetcher = HttpFetcher::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            fetcher.url_for("aircraft%20carrier.bin"),
            "https://storage.googleapis.com/quickdraw_dataset/full/binary/aircraft%20carrier.bin"
        );
        assert_eq!(fetcher.location("anvil.bin"), fetcher.url_for("anvil.bin"));
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        // Port 9 on localhost (discard) is closed in test environments.
        let fetcher =
            HttpFetcher::with_timeout("http://127.0.0.1:9/", Some(Duration::from_secs(2))).unwrap();
        let mut sink = Vec::new();
        let err = fetcher.fetch("anvil.bin", &mut sink).unwrap_err();
        assert!(matches!(err, SourceError::Transport { .. }), "{err:?}");
        assert!(sink.is_empty());
    }
}
