//! Core types for Quick, Draw! data access.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the decoded record model, the static category catalog, search
//! criteria, and the error taxonomy shared by the rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod category;
pub mod criteria;
pub mod error;
pub mod record;

pub use category::{Category, CATEGORIES, CATEGORY_COUNT};
pub use criteria::SearchCriteria;
pub use error::QuickDrawError;
pub use record::{CountryCode, DrawingRecord, Point, Stroke, CANVAS_SIZE};
