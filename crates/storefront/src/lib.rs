//! Olivo Storefront engine.
//!
//! This crate holds the browsing logic behind the shop and product detail
//! pages: narrowing and ordering the catalog by user-chosen facets, and the
//! stateful selection workflow on a single product. Rendering, routing, and
//! the catalog fetch itself live outside this crate; it exposes pure
//! functions and immutable state values only.
//!
//! # Modules
//!
//! - [`filter`] - Filter predicate engine (category, price range, size, color)
//! - [`sort`] - Stable sort comparators (featured, price, newest)
//! - [`facets`] - Facet state manager for the shop page
//! - [`selection`] - Per-product selection state machine for the detail page
//! - [`source`] - Fetch boundary shape and catalog load lifecycle

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod facets;
pub mod filter;
pub mod selection;
pub mod sort;
pub mod source;

pub use facets::{FacetDefaults, FacetState, ViewMode};
pub use filter::{FilterState, filter_catalog};
pub use selection::{InfoTab, SelectionDefaults, SelectionState};
pub use sort::{SortKey, sort_catalog};
pub use source::{CatalogLoad, CatalogSnapshot, SourceError};
