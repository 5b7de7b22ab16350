//! Catalog entities as delivered by the external fetch layer.
//!
//! These types mirror the backing store's row shapes one-to-one. They are
//! created and updated upstream and are strictly read-only inside the
//! engine: filtering, sorting, and selection all derive new values instead
//! of mutating catalog data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    CategoryId, Price, ProductFeatureId, ProductId, ProductImageId, ProductVariantId,
};

/// Fallback image shown when a product has no image rows.
pub const PLACEHOLDER_IMAGE_URL: &str = "/assets/placeholder-product.jpg";

// =============================================================================
// Category
// =============================================================================

/// A product category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL slug (unique, stable).
    pub slug: String,
    /// Category description.
    pub description: String,
    /// Category image URL.
    pub image_url: String,
    /// Number of member products, maintained upstream.
    pub product_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Plain text description.
    pub description: String,
    /// Current price.
    pub price: Price,
    /// Pre-discount price. Meaningful only when `discount_percentage > 0`.
    pub original_price: Option<Price>,
    /// Discount percentage in `[0, 100]`. Zero means no discount.
    pub discount_percentage: u8,
    /// Owning category reference.
    pub category_id: CategoryId,
    /// Material description (e.g., "100% organic cotton").
    pub material: String,
    /// Stock keeping unit code.
    pub sku: String,
    /// Units in stock. Bounds the selectable quantity.
    pub stock: u32,
    /// Average review rating in `[0, 5]`.
    pub rating: f64,
    /// Number of reviews.
    pub review_count: u32,
    /// Whether the product is flagged as a new arrival.
    pub is_new: bool,
    /// Whether the product is featured (prioritized by the default sort).
    pub featured: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Embedded owning category, when the fetch included it.
    #[serde(default)]
    pub category: Option<Category>,
    /// Ordered image sequence. Index 0 is the primary image.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Variant rows. Labels may repeat across rows.
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    /// Ordered feature bullet points.
    #[serde(default)]
    pub features: Vec<ProductFeature>,
}

impl Product {
    /// Whether a discount badge applies.
    ///
    /// `original_price` is meaningful only alongside a positive discount
    /// percentage, so both must be present.
    #[must_use]
    pub const fn has_discount(&self) -> bool {
        self.discount_percentage > 0 && self.original_price.is_some()
    }

    /// Whether any units are available.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// The primary (position 0) image, if any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Resolve an image index to a URL, falling back to the placeholder.
    ///
    /// An out-of-range index resolves like an empty sequence; callers that
    /// maintain the index invariant never hit that branch.
    #[must_use]
    pub fn image_url_or_placeholder(&self, index: usize) -> &str {
        self.images
            .get(index)
            .map_or(PLACEHOLDER_IMAGE_URL, |image| image.url.as_str())
    }

    /// The category slug used for facet matching, when embedded.
    #[must_use]
    pub fn category_slug(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.slug.as_str())
    }

    /// Distinct size labels across variant rows, in first-occurrence order.
    ///
    /// Variant rows repeat labels (the same size exists in several colors);
    /// the UI offers the distinct set, not raw rows.
    #[must_use]
    pub fn distinct_sizes(&self) -> Vec<&str> {
        let mut sizes: Vec<&str> = Vec::new();
        for variant in &self.variants {
            if let Some(size) = variant.size.as_deref()
                && !sizes.contains(&size)
            {
                sizes.push(size);
            }
        }
        sizes
    }

    /// Distinct color labels with swatch values, in first-occurrence order.
    #[must_use]
    pub fn distinct_colors(&self) -> Vec<ColorOption<'_>> {
        let mut colors: Vec<ColorOption<'_>> = Vec::new();
        for variant in &self.variants {
            if let Some(color) = variant.color.as_deref()
                && !colors.iter().any(|option| option.name == color)
            {
                colors.push(ColorOption {
                    name: color,
                    hex: variant.color_hex.as_deref(),
                });
            }
        }
        colors
    }
}

/// A distinct color choice derived from variant rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption<'a> {
    /// Color label (e.g., "Oliva").
    pub name: &'a str,
    /// Swatch value (e.g., "#7a7d45"), when the row carries one.
    pub hex: Option<&'a str>,
}

// =============================================================================
// Product sub-entities
// =============================================================================

/// A product image row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    /// Image ID.
    pub id: ProductImageId,
    /// Owning product.
    pub product_id: ProductId,
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: String,
    /// Display position. Defines the image sequence. Named `order` in the
    /// upstream row shape.
    #[serde(rename = "order")]
    pub position: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A product variant row (a size/color combination with its own stock).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: ProductVariantId,
    /// Owning product.
    pub product_id: ProductId,
    /// Size label (e.g., "M"), when the variant axis applies.
    pub size: Option<String>,
    /// Color label (e.g., "Oliva").
    pub color: Option<String>,
    /// Color swatch value (e.g., "#7a7d45").
    pub color_hex: Option<String>,
    /// Units in stock for this variant.
    pub stock: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A free-text product feature bullet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductFeature {
    /// Feature ID.
    pub id: ProductFeatureId,
    /// Owning product.
    pub product_id: ProductId,
    /// Feature description.
    pub feature: String,
    /// Display position. Named `order` in the upstream row shape.
    #[serde(rename = "order")]
    pub position: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
