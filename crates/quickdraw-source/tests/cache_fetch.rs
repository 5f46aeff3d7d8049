//! Cache and fetch integration tests against in-memory fetchers.

use std::fs;

use log::Level;
use quickdraw_source::{ensure_local, FileCache, Provenance, SourceError};
use quickdraw_test_utils::{CountingFetcher, FailingFetcher, TempCacheDir};

const FILE: &str = "anvil.bin";

// ── Helpers ─────────────────────────────────────────────────────

fn fetcher_with_anvil(bytes: &[u8]) -> CountingFetcher {
    CountingFetcher::new().with_object(FILE, bytes.to_vec())
}

// ── ensure_local ────────────────────────────────────────────────

#[test]
fn miss_fetches_and_stores() {
    let tmp = TempCacheDir::new("miss");
    let cache = FileCache::new(tmp.path());
    let fetcher = fetcher_with_anvil(b"abc");

    let (path, provenance) = ensure_local(&cache, &fetcher, FILE, false, Level::Info).unwrap();
    assert_eq!(provenance, Provenance::Fetched);
    assert_eq!(fs::read(&path).unwrap(), b"abc");
    assert_eq!(fetcher.fetch_count(), 1);
}

#[test]
fn hit_does_not_fetch() {
    let tmp = TempCacheDir::new("hit");
    let cache = FileCache::new(tmp.path());
    let fetcher = fetcher_with_anvil(b"abc");

    ensure_local(&cache, &fetcher, FILE, false, Level::Info).unwrap();
    let (_, provenance) = ensure_local(&cache, &fetcher, FILE, false, Level::Info).unwrap();
    assert_eq!(provenance, Provenance::Cached);
    assert_eq!(fetcher.fetch_count(), 1);
}

#[test]
fn refresh_refetches_and_replaces() {
    let tmp = TempCacheDir::new("refresh");
    let cache = FileCache::new(tmp.path());
    cache.store(FILE, b"old").unwrap();
    let fetcher = fetcher_with_anvil(b"new");

    let (path, provenance) = ensure_local(&cache, &fetcher, FILE, true, Level::Debug).unwrap();
    assert_eq!(provenance, Provenance::Fetched);
    assert_eq!(fs::read(path).unwrap(), b"new");
    assert_eq!(fetcher.fetch_count_for(FILE), 1);
}

#[test]
fn failed_refresh_falls_back_to_cached_copy() {
    let tmp = TempCacheDir::new("fallback");
    let cache = FileCache::new(tmp.path());
    cache.store(FILE, b"old").unwrap();
    let fetcher = FailingFetcher::with_partial(b"ne".to_vec());

    let (path, provenance) = ensure_local(&cache, &fetcher, FILE, true, Level::Info).unwrap();
    assert_eq!(provenance, Provenance::StaleFallback);
    assert_eq!(fs::read(path).unwrap(), b"old");
    assert_eq!(fetcher.calls(), 1);
}

#[test]
fn failed_fetch_without_cache_leaves_nothing_behind() {
    let tmp = TempCacheDir::new("fail");
    let cache = FileCache::new(tmp.path());
    let fetcher = FailingFetcher::with_partial(b"partial".to_vec());

    let err = ensure_local(&cache, &fetcher, FILE, false, Level::Info).unwrap_err();
    assert!(matches!(err, SourceError::Transport { .. }));
    assert!(!cache.contains(FILE));
    let leftovers: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
    assert!(leftovers.is_empty(), "partial download left behind");
}

#[test]
fn missing_object_is_not_found() {
    let tmp = TempCacheDir::new("notfound");
    let cache = FileCache::new(tmp.path());
    let fetcher = CountingFetcher::new();

    let err = ensure_local(&cache, &fetcher, FILE, false, Level::Info).unwrap_err();
    assert!(matches!(err, SourceError::NotFound { ref remote_name } if remote_name == FILE));
    let qd = err.unavailable("anvil");
    assert!(qd.to_string().contains("anvil"));
}

// ── FileCache ───────────────────────────────────────────────────

#[test]
fn open_and_remove() {
    let tmp = TempCacheDir::new("open");
    let cache = FileCache::new(tmp.path());
    assert!(cache.open(FILE).unwrap().is_none());

    cache.store(FILE, b"xyz").unwrap();
    assert!(cache.open(FILE).unwrap().is_some());

    cache.remove(FILE).unwrap();
    assert!(!cache.contains(FILE));
    cache.remove(FILE).unwrap();
}

#[test]
fn file_names_with_escaped_spaces_are_stored_verbatim() {
    let tmp = TempCacheDir::new("escaped");
    let cache = FileCache::new(tmp.path());
    let name = "alarm%20clock.bin";
    let fetcher = CountingFetcher::new().with_object(name, vec![1, 2, 3]);

    let (path, _) = ensure_local(&cache, &fetcher, name, false, Level::Info).unwrap();
    assert_eq!(path.file_name().unwrap(), name);
    assert_eq!(fetcher.fetched(), vec![name.to_string()]);
}
