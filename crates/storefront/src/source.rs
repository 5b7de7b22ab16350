//! Fetch boundary shape and catalog load lifecycle.
//!
//! The engine does not fetch anything itself. The external data layer
//! retrieves categories and products and hands over a fully materialized
//! [`CatalogSnapshot`]; until that happens (or when it fails) the engine
//! is fed an empty collection, so filter and sort are never invoked on
//! incomplete data.

use olivo_core::{Category, Product};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors surfaced by the external fetch layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The upstream request failed (network, timeout, server error).
    #[error("catalog fetch failed: {0}")]
    Fetch(String),

    /// The upstream response did not match the expected shape.
    #[error("malformed catalog payload: {0}")]
    Malformed(String),
}

/// The single expected shape from the catalog fetch layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CatalogSnapshot {
    /// Ordered category sequence.
    pub categories: Vec<Category>,
    /// Ordered product sequence, each optionally embedding its category,
    /// images, variants, and features.
    pub products: Vec<Product>,
}

/// Catalog load lifecycle as observed by the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogLoad {
    /// Fetch in flight; render the loading placeholder.
    #[default]
    Loading,
    /// Catalog available.
    Ready(CatalogSnapshot),
    /// Fetch failed; render the external error and an empty catalog.
    Failed(SourceError),
}

impl CatalogLoad {
    /// The products to feed the engines. Empty outside [`Self::Ready`].
    #[must_use]
    pub fn products(&self) -> &[Product] {
        match self {
            Self::Ready(snapshot) => &snapshot.products,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// The categories to offer as facets. Empty outside [`Self::Ready`].
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        match self {
            Self::Ready(snapshot) => &snapshot.categories,
            Self::Loading | Self::Failed(_) => &[],
        }
    }

    /// Whether the fetch is still in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The upstream error, if the fetch failed.
    #[must_use]
    pub const fn error(&self) -> Option<&SourceError> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

impl From<Result<CatalogSnapshot, SourceError>> for CatalogLoad {
    fn from(result: Result<CatalogSnapshot, SourceError>) -> Self {
        match result {
            Ok(snapshot) => {
                tracing::debug!(
                    categories = snapshot.categories.len(),
                    products = snapshot.products.len(),
                    "catalog ready"
                );
                Self::Ready(snapshot)
            }
            Err(error) => {
                tracing::warn!(%error, "catalog fetch failed");
                Self::Failed(error)
            }
        }
    }
}
