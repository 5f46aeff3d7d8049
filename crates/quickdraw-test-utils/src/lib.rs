//! Test utilities and mock collaborators for quickdraw development.
//!
//! Provides record fixtures ([`RecordBuilder`], [`anvil_fixture`],
//! [`mixed_records`]), in-memory [`Fetcher`] implementations
//! ([`CountingFetcher`], [`FailingFetcher`]), and a self-cleaning
//! [`TempCacheDir`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{anvil_fixture, encode_records, mixed_records, RecordBuilder, ANVIL_KEY_ID};

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use quickdraw_source::{Fetcher, SourceError};

/// In-memory object store that counts every fetch.
///
/// Clones share the same objects and counters, so a test can hand one
/// clone to the code under test and inspect another.
#[derive(Clone, Default)]
pub struct CountingFetcher {
    objects: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    fetches: Arc<Mutex<Vec<String>>>,
}

impl CountingFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `bytes` as the content of `remote_name`.
    pub fn with_object(self, remote_name: &str, bytes: Vec<u8>) -> Self {
        self.insert(remote_name, bytes);
        self
    }

    /// Register or replace an object.
    pub fn insert(&self, remote_name: &str, bytes: Vec<u8>) {
        self.objects
            .lock()
            .unwrap()
            .insert(remote_name.to_string(), bytes);
    }

    /// Total number of fetch calls, successful or not.
    pub fn fetch_count(&self) -> usize {
        self.fetches.lock().unwrap().len()
    }

    /// Number of fetch calls for one object.
    pub fn fetch_count_for(&self, remote_name: &str) -> usize {
        self.fetches
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.as_str() == remote_name)
            .count()
    }

    /// Remote names in the order they were fetched.
    pub fn fetched(&self) -> Vec<String> {
        self.fetches.lock().unwrap().clone()
    }
}

impl Fetcher for CountingFetcher {
    fn fetch(&self, remote_name: &str, sink: &mut dyn Write) -> Result<u64, SourceError> {
        self.fetches.lock().unwrap().push(remote_name.to_string());
        let objects = self.objects.lock().unwrap();
        let bytes = objects
            .get(remote_name)
            .ok_or_else(|| SourceError::NotFound {
                remote_name: remote_name.to_string(),
            })?;
        sink.write_all(bytes)?;
        Ok(bytes.len() as u64)
    }

    fn location(&self, remote_name: &str) -> String {
        format!("memory://{remote_name}")
    }
}

/// Fetcher that always fails, optionally after writing some bytes.
pub struct FailingFetcher {
    partial: Vec<u8>,
    calls: AtomicUsize,
}

impl FailingFetcher {
    pub fn new() -> Self {
        Self::with_partial(Vec::new())
    }

    /// Write `partial` to the sink before failing, like a dropped connection.
    pub fn with_partial(partial: Vec<u8>) -> Self {
        Self {
            partial,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for FailingFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetcher for FailingFetcher {
    fn fetch(&self, _remote_name: &str, sink: &mut dyn Write) -> Result<u64, SourceError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        sink.write_all(&self.partial)?;
        Err(SourceError::Transport {
            reason: "connection reset by peer".into(),
        })
    }
}

/// Counter for unique temp directory names within a process.
static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A uniquely named directory under the system temp dir, removed on drop.
///
/// The directory itself is not created, so tests can observe the cache
/// creating it.
pub struct TempCacheDir {
    path: PathBuf,
}

impl TempCacheDir {
    pub fn new(label: &str) -> Self {
        let n = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "quickdraw-test-{label}-{}-{n}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempCacheDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
