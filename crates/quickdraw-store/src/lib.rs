//! Drawing store for Quick, Draw! data.
//!
//! - [`DrawingCatalog`] validates category names and memoizes one
//!   [`DrawingGroup`] per category
//! - [`DrawingGroup`] decodes a category's file once and serves indexed,
//!   random, iterated and filtered access
//! - [`Drawing`] is a read-only view of one record with lazily derived
//!   strokes, image and animation
//!
//! Configuration lives in [`CatalogConfig`]; nothing is read from global
//! state.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod drawing;
pub mod group;

pub use catalog::DrawingCatalog;
pub use config::{CatalogConfig, ConfigError, LoadingMode, DEFAULT_MAX_DRAWINGS};
pub use drawing::Drawing;
pub use group::{DrawingGroup, DrawingIter};
