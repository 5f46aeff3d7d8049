//! Local file cache for category data files.
//!
//! One file per category, named by the catalog's file name, stored
//! unmodified under a configurable directory. Writes go to a `.part`
//! file that is renamed into place only after the transfer succeeds, so
//! a failed fetch never leaves a half-written file behind.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, log, warn, Level};

use crate::error::SourceError;
use crate::fetch::Fetcher;

/// Default cache directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = ".quickdrawcache";

/// Suffix for in-progress downloads.
const PARTIAL_SUFFIX: &str = ".part";

/// Directory-backed store of downloaded data files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    /// A cache rooted at `dir`. The directory is created on first store.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The cache directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Local path for `file_name`, whether or not it exists.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Whether a complete copy of `file_name` is present.
    pub fn contains(&self, file_name: &str) -> bool {
        self.path_for(file_name).is_file()
    }

    /// Open the cached copy of `file_name`, or `None` on a miss.
    pub fn open(&self, file_name: &str) -> Result<Option<BufReader<File>>, SourceError> {
        let path = self.path_for(file_name);
        if !path.is_file() {
            return Ok(None);
        }
        Ok(Some(BufReader::new(File::open(path)?)))
    }

    /// Store `bytes` as `file_name`, replacing any existing copy.
    pub fn store(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SourceError> {
        self.store_with(file_name, |sink| {
            sink.write_all(bytes)?;
            Ok(bytes.len() as u64)
        })
    }

    /// Store the bytes produced by `produce` as `file_name`.
    ///
    /// The existing copy, if any, is replaced only when `produce`
    /// succeeds; on failure the partial file is removed and the old copy
    /// is left untouched.
    pub fn store_with<F>(&self, file_name: &str, produce: F) -> Result<PathBuf, SourceError>
    where
        F: FnOnce(&mut dyn Write) -> Result<u64, SourceError>,
    {
        fs::create_dir_all(&self.dir)?;
        let final_path = self.path_for(file_name);
        let part_path = self.path_for(&format!("{file_name}{PARTIAL_SUFFIX}"));

        let result = (|| {
            let mut sink = BufWriter::new(File::create(&part_path)?);
            let written = produce(&mut sink)?;
            sink.flush()?;
            Ok::<u64, SourceError>(written)
        })();

        match result {
            Ok(written) => {
                fs::rename(&part_path, &final_path)?;
                debug!("cached {written} bytes at {}", final_path.display());
                Ok(final_path)
            }
            Err(e) => {
                if let Err(cleanup) = fs::remove_file(&part_path) {
                    debug!("could not remove {}: {cleanup}", part_path.display());
                }
                Err(e)
            }
        }
    }

    /// Delete the cached copy of `file_name`. Missing files are not an error.
    pub fn remove(&self, file_name: &str) -> Result<(), SourceError> {
        match fs::remove_file(self.path_for(file_name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// How [`ensure_local`] satisfied a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// The cached copy was used without fetching.
    Cached,
    /// The file was fetched and stored in the cache.
    Fetched,
    /// A refresh was requested, the fetch failed, and the existing cached
    /// copy was used instead.
    StaleFallback,
}

/// Make sure `file_name` is present in `cache`, fetching it if absent or
/// if `refresh` is set.
///
/// Status lines ("downloading ...", "download complete") are logged at
/// `status`. Fails only when the fetch fails and no cached copy exists.
pub fn ensure_local(
    cache: &FileCache,
    fetcher: &dyn Fetcher,
    file_name: &str,
    refresh: bool,
    status: Level,
) -> Result<(PathBuf, Provenance), SourceError> {
    let cached = cache.contains(file_name);
    if cached && !refresh {
        debug!("cache hit for {file_name}");
        return Ok((cache.path_for(file_name), Provenance::Cached));
    }

    log!(status, "downloading {file_name} from {}", fetcher.location(file_name));
    match cache.store_with(file_name, |sink| fetcher.fetch(file_name, sink)) {
        Ok(path) => {
            log!(status, "download complete");
            Ok((path, Provenance::Fetched))
        }
        Err(e) if cached => {
            warn!("refresh of {file_name} failed ({e}); using cached copy");
            Ok((cache.path_for(file_name), Provenance::StaleFallback))
        }
        Err(e) => Err(e),
    }
}
