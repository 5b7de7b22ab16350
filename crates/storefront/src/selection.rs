//! Per-product selection state machine for the detail page.
//!
//! The fields are orthogonal - image, size, color, quantity, info tab -
//! but each has constrained transitions enforced at the mutation boundary,
//! so a `SelectionState` can never hold an out-of-range image index, a
//! size outside the product's size set, or a quantity beyond stock. Every
//! operation takes `&self` and returns a new state value.
//!
//! The state lives as long as the detail view is shown; navigating away
//! discards it.

use olivo_core::Product;
use serde::{Deserialize, Serialize};

/// Informational tab on the detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InfoTab {
    /// Long description and feature list.
    #[default]
    Description,
    /// Material, SKU, care details.
    Details,
    /// Customer reviews.
    Reviews,
}

/// Initial preferences for a fresh selection state.
///
/// Promoted to an explicit configuration so tests and callers can set up
/// arbitrary starting points instead of relying on hardcoded literals. A
/// preference that the product does not actually offer is ignored in
/// favor of the first available option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SelectionDefaults {
    /// Preferred initial size label, when the product offers it.
    pub preferred_size: Option<String>,
    /// Preferred initial color label, when the product offers it.
    pub preferred_color: Option<String>,
    /// Initially active info tab.
    pub initial_tab: InfoTab,
}

/// In-progress choices on a single product detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    /// Number of images the product carries.
    image_count: usize,
    /// Distinct size labels offered by the product.
    sizes: Vec<String>,
    /// Distinct color labels offered by the product.
    colors: Vec<String>,
    /// Product stock, bounding the quantity.
    stock: u32,
    /// Selected image index. Always in `[0, image_count - 1]`, or 0 when
    /// the product has no images (rendering falls back to the placeholder).
    pub image_index: usize,
    /// Selected size. Always a member of the size set, `None` when the
    /// product offers no sizes.
    pub size: Option<String>,
    /// Selected color. Same validity rule as `size`.
    pub color: Option<String>,
    /// Selected quantity. Always in `[1, max(stock, 1)]`.
    pub quantity: u32,
    /// Active informational tab.
    pub info_tab: InfoTab,
}

impl SelectionState {
    /// Create the initial selection for a product.
    #[must_use]
    pub fn new(product: &Product, defaults: &SelectionDefaults) -> Self {
        let sizes: Vec<String> = product
            .distinct_sizes()
            .into_iter()
            .map(String::from)
            .collect();
        let colors: Vec<String> = product
            .distinct_colors()
            .into_iter()
            .map(|option| option.name.to_string())
            .collect();

        let size = pick_initial(&sizes, defaults.preferred_size.as_deref());
        let color = pick_initial(&colors, defaults.preferred_color.as_deref());

        Self {
            image_count: product.images.len(),
            sizes,
            colors,
            stock: product.stock,
            image_index: 0,
            size,
            color,
            quantity: 1,
            info_tab: defaults.initial_tab,
        }
    }

    /// Select a thumbnail by index.
    ///
    /// Out-of-range requests are ignored; the index invariant holds
    /// unconditionally.
    #[must_use]
    pub fn select_image(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < self.image_count {
            next.image_index = index;
        } else {
            tracing::debug!(index, image_count = self.image_count, "image index rejected");
        }
        next
    }

    /// Select a size from the product's size set.
    ///
    /// A label outside the set is ignored.
    #[must_use]
    pub fn select_size(&self, size: &str) -> Self {
        let mut next = self.clone();
        if self.sizes.iter().any(|member| member == size) {
            next.size = Some(size.to_string());
        } else {
            tracing::debug!(size, "size not offered by product");
        }
        next
    }

    /// Select a color from the product's color set.
    #[must_use]
    pub fn select_color(&self, color: &str) -> Self {
        let mut next = self.clone();
        if self.colors.iter().any(|member| member == color) {
            next.color = Some(color.to_string());
        } else {
            tracing::debug!(color, "color not offered by product");
        }
        next
    }

    /// Increase the quantity by one, clamped at stock.
    #[must_use]
    pub fn increment_quantity(&self) -> Self {
        let mut next = self.clone();
        next.quantity = self.quantity.saturating_add(1).min(self.max_quantity());
        next
    }

    /// Decrease the quantity by one, clamped at 1.
    #[must_use]
    pub fn decrement_quantity(&self) -> Self {
        let mut next = self.clone();
        next.quantity = self.quantity.saturating_sub(1).max(1);
        next
    }

    /// Set the quantity directly, clamped into `[1, max(stock, 1)]`.
    ///
    /// Both bounds clamp here, matching the increment/decrement path.
    #[must_use]
    pub fn set_quantity(&self, quantity: u32) -> Self {
        let mut next = self.clone();
        next.quantity = quantity.clamp(1, self.max_quantity());
        next
    }

    /// Switch the informational tab. All transitions are free.
    #[must_use]
    pub fn select_tab(&self, tab: InfoTab) -> Self {
        let mut next = self.clone();
        next.info_tab = tab;
        next
    }

    /// The size labels this selection can move between.
    #[must_use]
    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    /// The color labels this selection can move between.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Number of images available to `select_image`.
    #[must_use]
    pub const fn image_count(&self) -> usize {
        self.image_count
    }

    /// Upper quantity bound. Stays at 1 for an out-of-stock product so the
    /// quantity field remains well-formed; add-to-cart is gated upstream.
    const fn max_quantity(&self) -> u32 {
        if self.stock == 0 { 1 } else { self.stock }
    }
}

/// First valid initial value: the preference when offered, else the first
/// available option, else nothing.
fn pick_initial(options: &[String], preferred: Option<&str>) -> Option<String> {
    if let Some(preferred) = preferred
        && options.iter().any(|option| option == preferred)
    {
        return Some(preferred.to_string());
    }
    options.first().cloned()
}
