//! Fetch and cache collaborators for Quick, Draw! data files.
//!
//! The drawing store never talks to the network or the file system
//! directly. It asks [`ensure_local`] for a local copy of a category's
//! file; that consults the [`FileCache`] and, on a miss or a forced
//! refresh, streams the object through a [`Fetcher`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod fetch;

pub use cache::{ensure_local, FileCache, Provenance, DEFAULT_CACHE_DIR};
pub use error::SourceError;
pub use fetch::{Fetcher, HttpFetcher, DEFAULT_BASE_URL};
