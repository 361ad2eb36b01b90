//! Background and overlay imagery: catalog, ranking, favorites and the
//! active-layer selector.

pub mod catalog;
pub mod favorites;
pub mod grid;
pub mod ranking;
pub mod selector;
pub mod source;

pub use catalog::{CatalogError, SourceCatalog, StaticCatalog};
pub use favorites::FavoriteSet;
pub use grid::{GRID_SPLITS, GridOptions};
pub use ranking::{compare_sources, sort_sources};
pub use selector::{BackgroundRow, BackgroundSelector, ChooseOutcome, CycleDirection, ListFilter};
pub use source::{CUSTOM_SOURCE_ID, NONE_SOURCE_ID, Source, SourceId};
