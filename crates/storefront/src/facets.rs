//! Facet state manager for the shop page.
//!
//! Holds everything the shopper has chosen on the listing page: filter
//! facets, sort order, view mode, and the mobile filter panel flag. Every
//! operation takes `&self` and returns a new state value, so consumers can
//! detect change with a plain equality comparison and no mutation ever
//! leaks across a render boundary.

use olivo_core::{Price, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::{FilterState, filter_catalog};
use crate::sort::{SortKey, sort_catalog};

/// Product listing layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ViewMode {
    /// Card grid.
    #[default]
    Grid,
    /// Vertical list.
    List,
}

/// Initial values captured when a facet state is created.
///
/// `clear_filters` restores the price range from here, so the defaults
/// travel with the state instead of living as scattered literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetDefaults {
    /// Default lower price bound.
    pub price_min: Price,
    /// Default upper price bound.
    pub price_max: Price,
    /// Initial sort order.
    pub sort: SortKey,
    /// Initial listing layout.
    pub view_mode: ViewMode,
}

impl Default for FacetDefaults {
    fn default() -> Self {
        Self {
            price_min: Price::zero(),
            price_max: Price::new(Decimal::from(200)),
            sort: SortKey::default(),
            view_mode: ViewMode::default(),
        }
    }
}

/// The shop page's complete browsing state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacetState {
    /// Current filter facets.
    pub filters: FilterState,
    /// Current sort order.
    pub sort: SortKey,
    /// Current listing layout.
    pub view_mode: ViewMode,
    /// Whether the mobile filter panel is open.
    pub mobile_filters_open: bool,
    defaults: FacetDefaults,
}

impl FacetState {
    /// Create a facet state with nothing selected.
    #[must_use]
    pub fn new(defaults: FacetDefaults) -> Self {
        Self {
            filters: FilterState::unrestricted(defaults.price_min, defaults.price_max),
            sort: defaults.sort,
            view_mode: defaults.view_mode,
            mobile_filters_open: false,
            defaults,
        }
    }

    /// Toggle a category slug: add if absent, remove if present.
    ///
    /// Applying the same toggle twice restores the original state.
    #[must_use]
    pub fn toggle_category(&self, slug: &str) -> Self {
        let mut next = self.clone();
        toggle_member(&mut next.filters.categories, slug);
        next
    }

    /// Toggle a size label.
    #[must_use]
    pub fn toggle_size(&self, size: &str) -> Self {
        let mut next = self.clone();
        toggle_member(&mut next.filters.sizes, size);
        next
    }

    /// Toggle a color label.
    #[must_use]
    pub fn toggle_color(&self, color: &str) -> Self {
        let mut next = self.clone();
        toggle_member(&mut next.filters.colors, color);
        next
    }

    /// Overwrite the lower price bound.
    ///
    /// No clamping against the upper bound: an inverted range is a valid
    /// state that the downstream "no results" display handles.
    #[must_use]
    pub fn set_price_min(&self, price: Price) -> Self {
        let mut next = self.clone();
        next.filters.price_min = price;
        next
    }

    /// Overwrite the upper price bound.
    #[must_use]
    pub fn set_price_max(&self, price: Price) -> Self {
        let mut next = self.clone();
        next.filters.price_max = price;
        next
    }

    /// Change the sort order.
    #[must_use]
    pub fn set_sort(&self, sort: SortKey) -> Self {
        let mut next = self.clone();
        next.sort = sort;
        next
    }

    /// Change the listing layout.
    #[must_use]
    pub fn set_view_mode(&self, view_mode: ViewMode) -> Self {
        let mut next = self.clone();
        next.view_mode = view_mode;
        next
    }

    /// Open or close the mobile filter panel.
    #[must_use]
    pub fn set_mobile_filters_open(&self, open: bool) -> Self {
        let mut next = self.clone();
        next.mobile_filters_open = open;
        next
    }

    /// Reset all filter facets to the construction defaults.
    ///
    /// Sort order and view mode survive; clearing filters is not a page
    /// reset.
    #[must_use]
    pub fn clear_filters(&self) -> Self {
        let mut next = self.clone();
        next.filters =
            FilterState::unrestricted(self.defaults.price_min, self.defaults.price_max);
        next
    }

    /// Number of active facet selections.
    ///
    /// Counts category, size, and color selections; the price range is
    /// always set to something and is not counted.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.categories.len() + self.filters.sizes.len() + self.filters.colors.len()
    }

    /// Derive the visible product list: filter, then sort.
    #[must_use]
    pub fn visible_products(&self, products: &[Product]) -> Vec<Product> {
        sort_catalog(&filter_catalog(products, &self.filters), self.sort)
    }
}

impl Default for FacetState {
    fn default() -> Self {
        Self::new(FacetDefaults::default())
    }
}

/// Symmetric set toggle over an insertion-ordered unique vector.
fn toggle_member(set: &mut Vec<String>, value: &str) {
    if let Some(index) = set.iter().position(|member| member == value) {
        set.remove(index);
    } else {
        set.push(value.to_string());
    }
}
