//! Catalog configuration and validation.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;

use log::Level;
use quickdraw_codec::DecodeOptions;
use quickdraw_core::QuickDrawError;
use quickdraw_source::{DEFAULT_BASE_URL, DEFAULT_CACHE_DIR};

/// Default per-group load bound.
pub const DEFAULT_MAX_DRAWINGS: usize = 1000;

/// When a catalog materializes its groups.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingMode {
    /// Load each category on first access.
    #[default]
    JustInTime,
    /// Load every known category at construction. Downloads every
    /// category file on a cold cache.
    Eager,
}

// ── ConfigError ────────────────────────────────────────────────

/// Errors from [`CatalogConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_drawings` is `Some(0)`; every group would be empty.
    ZeroMaxDrawings,
    /// `base_url` is empty.
    EmptyBaseUrl,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxDrawings => {
                write!(f, "max_drawings must be at least 1, or None for no bound")
            }
            Self::EmptyBaseUrl => write!(f, "base_url must not be empty"),
        }
    }
}

impl Error for ConfigError {}

impl From<ConfigError> for QuickDrawError {
    fn from(e: ConfigError) -> Self {
        QuickDrawError::InvalidConfig {
            detail: e.to_string(),
        }
    }
}

// ── CatalogConfig ──────────────────────────────────────────────

/// Settings fixed at catalog construction and applied uniformly to every
/// group the catalog creates.
///
/// # Examples
///
/// ```
/// use quickdraw_store::{CatalogConfig, LoadingMode};
///
/// let config = CatalogConfig::default()
///     .with_recognized(Some(true))
///     .with_max_drawings(Some(50))
///     .with_cache_dir("/tmp/qd");
/// assert!(config.validate().is_ok());
/// assert_eq!(config.loading, LoadingMode::JustInTime);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Keep only drawings whose recognized flag matches. `None` keeps all.
    pub recognized: Option<bool>,
    /// Per-group load bound. `None` loads every record in the file.
    pub max_drawings: Option<usize>,
    /// Re-fetch category files even when a cached copy exists.
    pub refresh_data: bool,
    /// When groups are materialized.
    pub loading: LoadingMode,
    /// Log download and load status at `info` rather than `debug`.
    pub print_messages: bool,
    /// Directory holding downloaded category files.
    pub cache_dir: PathBuf,
    /// Prefix the category file names are appended to when fetching.
    pub base_url: String,
    /// Seed for random draws. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            recognized: None,
            max_drawings: Some(DEFAULT_MAX_DRAWINGS),
            refresh_data: false,
            loading: LoadingMode::JustInTime,
            print_messages: true,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            base_url: DEFAULT_BASE_URL.to_string(),
            rng_seed: None,
        }
    }
}

impl CatalogConfig {
    /// Set the recognized filter.
    pub fn with_recognized(mut self, recognized: Option<bool>) -> Self {
        self.recognized = recognized;
        self
    }

    /// Set the per-group load bound.
    pub fn with_max_drawings(mut self, max_drawings: Option<usize>) -> Self {
        self.max_drawings = max_drawings;
        self
    }

    /// Force re-fetching on every group load.
    pub fn with_refresh_data(mut self, refresh: bool) -> Self {
        self.refresh_data = refresh;
        self
    }

    /// Set the loading mode.
    pub fn with_loading(mut self, loading: LoadingMode) -> Self {
        self.loading = loading;
        self
    }

    /// Set status-line verbosity.
    pub fn with_print_messages(mut self, print_messages: bool) -> Self {
        self.print_messages = print_messages;
        self
    }

    /// Set the cache directory.
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Set the remote prefix.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Seed random draws.
    pub fn with_rng_seed(mut self, seed: Option<u64>) -> Self {
        self.rng_seed = seed;
        self
    }

    /// Check the configuration for values no catalog can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_drawings == Some(0) {
            return Err(ConfigError::ZeroMaxDrawings);
        }
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(())
    }

    /// Level status lines are logged at.
    pub fn status_level(&self) -> Level {
        if self.print_messages {
            Level::Info
        } else {
            Level::Debug
        }
    }

    /// Decoder bound and filter for group loads.
    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_records: self.max_drawings,
            recognized: self.recognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.recognized, None);
        assert_eq!(config.max_drawings, Some(1000));
        assert!(!config.refresh_data);
        assert_eq!(config.loading, LoadingMode::JustInTime);
        assert!(config.print_messages);
        assert_eq!(config.cache_dir, PathBuf::from(".quickdrawcache"));
        assert!(config.base_url.ends_with("/full/binary/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_bound_is_rejected() {
        let config = CatalogConfig::default().with_max_drawings(Some(0));
        match config.validate() {
            Err(ConfigError::ZeroMaxDrawings) => {}
            other => panic!("expected ZeroMaxDrawings, got {other:?}"),
        }
        assert!(CatalogConfig::default()
            .with_max_drawings(None)
            .validate()
            .is_ok());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let config = CatalogConfig::default().with_base_url("  ");
        assert_eq!(config.validate(), Err(ConfigError::EmptyBaseUrl));
        let err: QuickDrawError = ConfigError::EmptyBaseUrl.into();
        assert!(matches!(err, QuickDrawError::InvalidConfig { .. }));
    }

    #[test]
    fn print_messages_selects_status_level() {
        assert_eq!(CatalogConfig::default().status_level(), Level::Info);
        assert_eq!(
            CatalogConfig::default()
                .with_print_messages(false)
                .status_level(),
            Level::Debug
        );
    }

    #[test]
    fn decode_options_follow_filter_and_bound() {
        let opts = CatalogConfig::default()
            .with_recognized(Some(false))
            .with_max_drawings(None)
            .decode_options();
        assert_eq!(opts.recognized, Some(false));
        assert_eq!(opts.max_records, None);
    }
}
