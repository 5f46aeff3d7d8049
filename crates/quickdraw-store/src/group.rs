//! Per-category drawing groups.
//!
//! A [`DrawingGroup`] decodes its category's file once, at construction,
//! keeping at most the configured number of records that pass the
//! recognized filter. After that it is read-only apart from its random
//! number generator.

use std::io::Read;
use std::sync::Arc;

use log::{debug, log};
use quickdraw_codec::{decode_records, DecodeOptions, StopReason};
use quickdraw_core::{category, QuickDrawError, SearchCriteria};
use quickdraw_source::{ensure_local, FileCache, Fetcher};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::config::CatalogConfig;
use crate::drawing::Drawing;

/// The loaded drawings of one category.
pub struct DrawingGroup {
    name: Arc<str>,
    options: DecodeOptions,
    drawings: Vec<Drawing>,
    rng: ChaCha8Rng,
}

impl DrawingGroup {
    /// Load category `name`: resolve it, make sure its file is cached
    /// (fetching on a miss or when `config.refresh_data` is set), then
    /// decode it with the configured bound and filter.
    pub fn open(
        name: &str,
        config: &CatalogConfig,
        fetcher: &dyn Fetcher,
    ) -> Result<Self, QuickDrawError> {
        let file_name = category::resolve(name)?;
        let status = config.status_level();
        let cache = FileCache::new(&config.cache_dir);

        let (path, provenance) =
            ensure_local(&cache, fetcher, file_name, config.refresh_data, status)
                .map_err(|e| e.unavailable(name))?;
        debug!("{name}: using {} ({provenance:?})", path.display());

        let reader = cache.open(file_name).map_err(|e| e.unavailable(name))?;
        let Some(reader) = reader else {
            return Err(QuickDrawError::SourceUnavailable {
                category: name.to_string(),
                reason: format!("{} vanished from the cache", path.display()),
            });
        };

        log!(status, "loading {name} drawings");
        let group = Self::from_reader(name, reader, config.decode_options())?;
        log!(status, "load complete ({} drawings)", group.count());

        Ok(match config.rng_seed {
            Some(seed) => group.with_rng_seed(seed),
            None => group,
        })
    }

    /// Decode a group from any byte source, without fetching or caching.
    ///
    /// `name` is not checked against the category catalog.
    ///
    /// # Examples
    ///
    /// ```
    /// use quickdraw_codec::DecodeOptions;
    /// use quickdraw_store::DrawingGroup;
    ///
    /// let empty: &[u8] = &[];
    /// let group = DrawingGroup::from_reader("anvil", empty, DecodeOptions::unbounded()).unwrap();
    /// assert_eq!(group.count(), 0);
    /// assert!(group.get(0).is_err());
    /// ```
    pub fn from_reader<R: Read>(
        name: &str,
        mut reader: R,
        options: DecodeOptions,
    ) -> Result<Self, QuickDrawError> {
        let outcome = decode_records(&mut reader, &options)?;
        match outcome.stop {
            StopReason::EndOfStream => debug!(
                "{name}: end of data after {} records ({} filtered out)",
                outcome.scanned, outcome.discarded
            ),
            StopReason::LimitReached => debug!(
                "{name}: stopped at bound of {} records ({} filtered out)",
                outcome.records.len(),
                outcome.discarded
            ),
        }

        let name: Arc<str> = Arc::from(name);
        let drawings = outcome
            .records
            .into_iter()
            .map(|record| Drawing::new(Arc::clone(&name), Arc::new(record)))
            .collect();

        Ok(Self {
            name,
            options,
            drawings,
            rng: ChaCha8Rng::from_os_rng(),
        })
    }

    /// Reseed the generator used by [`get_random`](Self::get_random).
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound and filter the group was loaded with.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Number of loaded drawings.
    pub fn count(&self) -> usize {
        self.drawings.len()
    }

    /// Whether nothing was loaded.
    pub fn is_empty(&self) -> bool {
        self.drawings.is_empty()
    }

    /// The drawing at `index`, in load order.
    pub fn get(&self, index: usize) -> Result<&Drawing, QuickDrawError> {
        self.drawings
            .get(index)
            .ok_or(QuickDrawError::IndexOutOfRange {
                index,
                count: self.drawings.len(),
            })
    }

    /// A uniformly random drawing, drawn with replacement.
    pub fn get_random(&mut self) -> Result<&Drawing, QuickDrawError> {
        if self.drawings.is_empty() {
            return Err(QuickDrawError::EmptyGroup {
                category: self.name.to_string(),
            });
        }
        let index = self.rng.random_range(0..self.drawings.len());
        Ok(&self.drawings[index])
    }

    /// A uniformly random drawing using a caller-supplied generator.
    pub fn get_random_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Result<&Drawing, QuickDrawError> {
        self.drawings
            .choose(rng)
            .ok_or_else(|| QuickDrawError::EmptyGroup {
                category: self.name.to_string(),
            })
    }

    /// Every loaded drawing, in load order.
    ///
    /// Each call starts from the first drawing; iterators are independent.
    pub fn iter(&self) -> DrawingIter<'_> {
        DrawingIter {
            inner: self.drawings.iter(),
        }
    }

    /// Drawings matching every constraint in `criteria`, in load order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Drawing> {
        self.iter().filter(|d| criteria.matches(d.record())).collect()
    }
}

impl std::fmt::Debug for DrawingGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingGroup")
            .field("name", &self.name)
            .field("options", &self.options)
            .field("count", &self.drawings.len())
            .finish_non_exhaustive()
    }
}

/// Iterator over a group's drawings. See [`DrawingGroup::iter`].
#[derive(Clone, Debug)]
pub struct DrawingIter<'a> {
    inner: std::slice::Iter<'a, Drawing>,
}

impl<'a> Iterator for DrawingIter<'a> {
    type Item = &'a Drawing;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for DrawingIter<'_> {}

impl DoubleEndedIterator for DrawingIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<'a> IntoIterator for &'a DrawingGroup {
    type Item = &'a Drawing;
    type IntoIter = DrawingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
