//! Stable sort comparators for the shop page.
//!
//! Every key uses a stable sort so re-sorting an already-ordered sequence
//! is a no-op and ties keep their relative input order. The input slice is
//! never reordered; callers get a fresh vector.

use olivo_core::Product;
use serde::{Deserialize, Serialize};

/// Sort order options offered by the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Featured products first. A coarse stable partition, not a
    /// multi-key sort: within each half, input order is preserved.
    #[default]
    Featured,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Creation timestamp, newest first.
    Newest,
}

impl SortKey {
    /// The wire name, matching the shop page's sort select values.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Newest => "newest",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "newest" => Ok(Self::Newest),
            _ => Err(format!("invalid sort key: {s}")),
        }
    }
}

/// Produce a new sequence of `products` ordered by `key`.
///
/// Idempotent under repeated application with the same key.
#[must_use]
pub fn sort_catalog(products: &[Product], key: SortKey) -> Vec<Product> {
    let mut ordered: Vec<Product> = products.to_vec();
    match key {
        // sort_by_key is stable, so this only splits featured/unfeatured
        SortKey::Featured => ordered.sort_by_key(|product| !product.featured),
        SortKey::PriceAsc => ordered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => ordered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Newest => ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }
    ordered
}
