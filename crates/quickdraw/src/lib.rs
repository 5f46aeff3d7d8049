//! Quickdraw: access to the Quick, Draw! dataset of hand-drawn sketches.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all quickdraw sub-crates. For most users, adding `quickdraw` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```no_run
//! use quickdraw::prelude::*;
//!
//! let config = CatalogConfig::default().with_max_drawings(Some(100));
//! let mut catalog = DrawingCatalog::new(config)?;
//!
//! let anvil = catalog.get("anvil", None)?;
//! println!("{anvil}: drawn in {}", anvil.country_code());
//! anvil.image()?.save_gif("anvil.gif")?;
//! anvil.animation()?.save("anvil-animated.gif", 0.1, Some(0))?;
//!
//! let polish = catalog.search("anvil", &SearchCriteria::new().country_code("PL"))?;
//! println!("{} Polish anvils", polish.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Groups can also be built from any byte source:
//!
//! ```rust
//! use quickdraw::prelude::*;
//! use quickdraw::codec::RecordWriter;
//! use quickdraw::types::{CountryCode, DrawingRecord, Stroke};
//!
//! let record = DrawingRecord {
//!     key_id: 1,
//!     country_code: CountryCode(*b"US"),
//!     recognized: true,
//!     timestamp: 1_488_000_000,
//!     stroke_count: 1,
//!     image_data: vec![Stroke::new(vec![10, 120, 240], vec![10, 200, 10])],
//! };
//! let mut writer = RecordWriter::new(Vec::new());
//! writer.write_record(&record).unwrap();
//! let bytes = writer.into_inner();
//!
//! let group = DrawingGroup::from_reader("mountain", bytes.as_slice(), DecodeOptions::unbounded()).unwrap();
//! let drawing = group.get(0).unwrap();
//! assert_eq!(drawing.strokes().unwrap()[0], vec![(10, 10), (120, 200), (240, 10)]);
//! assert_eq!(drawing.animation().unwrap().frame_count(), 2);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quickdraw-core` | Records, category catalog, search criteria, errors |
//! | [`codec`] | `quickdraw-codec` | Binary record decoder, reader and writer |
//! | [`source`] | `quickdraw-source` | Fetchers and the on-disk file cache |
//! | [`render`] | `quickdraw-render` | Canvas rendering, animation and GIF output |
//! | [`store`] | `quickdraw-store` | Drawing groups, drawings and the catalog |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`quickdraw-core`).
///
/// Contains [`types::DrawingRecord`], the static category list in
/// [`types::category`], [`types::SearchCriteria`] and
/// [`types::QuickDrawError`].
pub use quickdraw_core as types;

/// Binary record codec (`quickdraw-codec`).
pub use quickdraw_codec as codec;

/// Fetching and caching category files (`quickdraw-source`).
///
/// Implement [`source::Fetcher`] to load data from somewhere other than
/// the public object store.
pub use quickdraw_source as source;

/// Rendering (`quickdraw-render`).
pub use quickdraw_render as render;

/// Drawing groups and the catalog facade (`quickdraw-store`).
pub use quickdraw_store as store;

/// Common imports for typical quickdraw usage.
///
/// ```rust
/// use quickdraw::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use quickdraw_core::{QuickDrawError, SearchCriteria};

    // Codec
    pub use quickdraw_codec::DecodeOptions;

    // Source
    pub use quickdraw_source::{Fetcher, HttpFetcher};

    // Render
    pub use quickdraw_render::{Animation, Canvas, Rgb, StrokeStyle};

    // Store
    pub use quickdraw_store::{
        CatalogConfig, Drawing, DrawingCatalog, DrawingGroup, LoadingMode,
    };
}
