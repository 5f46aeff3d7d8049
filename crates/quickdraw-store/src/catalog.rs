//! The catalog facade: one memoized group per category.

use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{debug, info};
use quickdraw_core::{category, QuickDrawError, SearchCriteria};
use quickdraw_source::{Fetcher, HttpFetcher};

use crate::config::{CatalogConfig, LoadingMode};
use crate::drawing::Drawing;
use crate::group::DrawingGroup;

/// Entry point for Quick, Draw! data.
///
/// Groups are created on first access with the catalog's configuration
/// and kept for the catalog's lifetime; a category is fetched and decoded
/// at most once per catalog.
///
/// # Examples
///
/// ```no_run
/// use quickdraw_store::{CatalogConfig, DrawingCatalog};
///
/// let mut catalog = DrawingCatalog::new(CatalogConfig::default())?;
/// let anvil = catalog.get("anvil", None)?;
/// println!("{anvil} has {} strokes", anvil.stroke_count());
/// # Ok::<(), quickdraw_core::QuickDrawError>(())
/// ```
pub struct DrawingCatalog {
    config: CatalogConfig,
    fetcher: Box<dyn Fetcher>,
    groups: IndexMap<&'static str, DrawingGroup>,
}

impl DrawingCatalog {
    /// A catalog that fetches over HTTP from `config.base_url`.
    ///
    /// With [`LoadingMode::Eager`] every category is loaded before this
    /// returns.
    pub fn new(config: CatalogConfig) -> Result<Self, QuickDrawError> {
        let fetcher = HttpFetcher::new(config.base_url.clone()).map_err(|e| {
            QuickDrawError::InvalidConfig {
                detail: format!("cannot build HTTP client: {e}"),
            }
        })?;
        Self::with_fetcher(config, fetcher)
    }

    /// A catalog that fetches through `fetcher`.
    pub fn with_fetcher(
        config: CatalogConfig,
        fetcher: impl Fetcher + 'static,
    ) -> Result<Self, QuickDrawError> {
        config.validate()?;
        let mut catalog = Self {
            config,
            fetcher: Box::new(fetcher),
            groups: IndexMap::new(),
        };
        if catalog.config.loading == LoadingMode::Eager {
            info!("eager loading: materializing every category");
            catalog.load_all()?;
        }
        Ok(catalog)
    }

    /// The configuration every group is created with.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The group for `name`, loading it on first access.
    pub fn get_group(&mut self, name: &str) -> Result<&mut DrawingGroup, QuickDrawError> {
        let key = category::find(name)
            .ok_or_else(|| QuickDrawError::UnknownCategory {
                name: name.to_string(),
            })?
            .name;
        match self.groups.entry(key) {
            Entry::Occupied(entry) => {
                debug!("{key}: already loaded");
                Ok(entry.into_mut())
            }
            Entry::Vacant(entry) => {
                let group = DrawingGroup::open(key, &self.config, self.fetcher.as_ref())?;
                Ok(entry.insert(group))
            }
        }
    }

    /// An already-loaded group, without loading.
    pub fn group(&self, name: &str) -> Option<&DrawingGroup> {
        self.groups.get(name)
    }

    /// A drawing from `name`: the one at `index`, or a random one when
    /// `index` is `None`.
    pub fn get(&mut self, name: &str, index: Option<usize>) -> Result<&Drawing, QuickDrawError> {
        let group = self.get_group(name)?;
        match index {
            Some(i) => group.get(i),
            None => group.get_random(),
        }
    }

    /// Load every named category. Already-loaded names are skipped.
    ///
    /// Stops at the first failure; groups loaded before it stay loaded.
    pub fn load_many<I, S>(&mut self, names: I) -> Result<(), QuickDrawError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.get_group(name.as_ref())?;
        }
        Ok(())
    }

    /// Load every known category. On a cold cache this downloads every
    /// category file.
    pub fn load_all(&mut self) -> Result<(), QuickDrawError> {
        self.load_many(category::names())
    }

    /// Drawings in `name` matching every constraint in `criteria`.
    pub fn search(
        &mut self,
        name: &str,
        criteria: &SearchCriteria,
    ) -> Result<Vec<&Drawing>, QuickDrawError> {
        Ok(self.get_group(name)?.search(criteria))
    }

    /// Every known category name, in catalog order.
    pub fn known_category_names(&self) -> impl ExactSizeIterator<Item = &'static str> {
        category::names()
    }

    /// Names loaded so far, in first-access order.
    pub fn loaded_category_names(&self) -> impl ExactSizeIterator<Item = &'static str> + '_ {
        self.groups.keys().copied()
    }

    /// Whether `name` has been loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.groups.contains_key(name)
    }
}

impl std::fmt::Debug for DrawingCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawingCatalog")
            .field("config", &self.config)
            .field("loaded", &self.groups.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_invalid_config() {
        let zero = CatalogConfig::default().with_max_drawings(Some(0));
        match DrawingCatalog::new(zero) {
            Err(QuickDrawError::InvalidConfig { detail }) => assert!(detail.contains("max_drawings")),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }

        let no_url = CatalogConfig::default().with_base_url("");
        match DrawingCatalog::new(no_url) {
            Err(QuickDrawError::InvalidConfig { detail }) => assert!(detail.contains("base_url")),
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn new_with_valid_config_loads_nothing_up_front() {
        let catalog = DrawingCatalog::new(CatalogConfig::default()).unwrap();
        assert_eq!(catalog.loaded_category_names().len(), 0);
        assert_eq!(catalog.config(), &CatalogConfig::default());
    }
}
