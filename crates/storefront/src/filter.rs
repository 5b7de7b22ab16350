//! Filter predicate engine.
//!
//! Pure derivation of the visible subset of the catalog from the current
//! facet selections. The predicate never reorders its input and never
//! fails: an impossible filter (price min above max) is simply a filter
//! that nothing matches.

use olivo_core::{Price, Product};
use serde::{Deserialize, Serialize};

/// User-chosen filter facets for the shop page.
///
/// The category, size, and color sets hold unique values in insertion
/// order. An empty set means "no restriction" for that facet. The price
/// bounds are independently editable and deliberately not clamped to each
/// other; `min > max` is a reachable state that matches nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected category slugs.
    pub categories: Vec<String>,
    /// Inclusive lower price bound.
    pub price_min: Price,
    /// Inclusive upper price bound.
    pub price_max: Price,
    /// Selected size labels.
    pub sizes: Vec<String>,
    /// Selected color labels.
    pub colors: Vec<String>,
}

impl FilterState {
    /// An unrestricted filter over the given price range.
    #[must_use]
    pub const fn unrestricted(price_min: Price, price_max: Price) -> Self {
        Self {
            categories: Vec::new(),
            price_min,
            price_max,
            sizes: Vec::new(),
            colors: Vec::new(),
        }
    }

    /// Whether a single product passes every facet clause.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_price(product)
            && self.matches_size(product)
            && self.matches_color(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        if self.categories.is_empty() {
            return true;
        }
        // A product without its embedded category cannot prove membership.
        product
            .category_slug()
            .is_some_and(|slug| self.categories.iter().any(|selected| selected == slug))
    }

    fn matches_price(&self, product: &Product) -> bool {
        self.price_min <= product.price && product.price <= self.price_max
    }

    fn matches_size(&self, product: &Product) -> bool {
        if self.sizes.is_empty() {
            return true;
        }
        product.variants.iter().any(|variant| {
            variant
                .size
                .as_deref()
                .is_some_and(|size| self.sizes.iter().any(|selected| selected == size))
        })
    }

    fn matches_color(&self, product: &Product) -> bool {
        if self.colors.is_empty() {
            return true;
        }
        product.variants.iter().any(|variant| {
            variant
                .color
                .as_deref()
                .is_some_and(|color| self.colors.iter().any(|selected| selected == color))
        })
    }
}

/// Derive the subset of `products` matching `state`.
///
/// Order-preserving: the result keeps the relative order of the input and
/// introduces no duplicates. An empty catalog or an unsatisfiable filter
/// yields an empty vector, never an error.
#[must_use]
pub fn filter_catalog(products: &[Product], state: &FilterState) -> Vec<Product> {
    let matched: Vec<Product> = products
        .iter()
        .filter(|product| state.matches(product))
        .cloned()
        .collect();

    tracing::debug!(
        total = products.len(),
        matched = matched.len(),
        "filtered catalog"
    );

    matched
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use olivo_core::{Category, CategoryId, ProductId, ProductVariant, ProductVariantId};
    use rust_decimal::{Decimal, dec};

    fn category(slug: &str) -> Category {
        Category {
            id: CategoryId::generate(),
            name: slug.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            image_url: String::new(),
            product_count: 0,
            created_at: Utc::now(),
        }
    }

    fn product(name: &str, price: Decimal, category_slug: &str) -> Product {
        let owning = category(category_slug);
        Product {
            id: ProductId::generate(),
            name: name.to_string(),
            slug: name.to_lowercase().replace(' ', "-"),
            description: String::new(),
            price: Price::new(price),
            original_price: None,
            discount_percentage: 0,
            category_id: owning.id,
            material: String::new(),
            sku: String::new(),
            stock: 10,
            rating: 0.0,
            review_count: 0,
            is_new: false,
            featured: false,
            created_at: Utc::now(),
            category: Some(owning),
            images: Vec::new(),
            variants: Vec::new(),
            features: Vec::new(),
        }
    }

    fn with_variant(mut product: Product, size: Option<&str>, color: Option<&str>) -> Product {
        product.variants.push(ProductVariant {
            id: ProductVariantId::generate(),
            product_id: product.id,
            size: size.map(String::from),
            color: color.map(String::from),
            color_hex: None,
            stock: 3,
            created_at: Utc::now(),
        });
        product
    }

    fn wide_open() -> FilterState {
        FilterState::unrestricted(Price::zero(), Price::new(dec!(200)))
    }

    #[test]
    fn test_empty_filter_passes_everything_in_order() {
        let catalog = vec![
            product("Camiseta", dec!(10), "mujer"),
            product("Vestido", dec!(25), "mujer"),
            product("Bolso", dec!(30), "accesorios"),
        ];
        let result = filter_catalog(&catalog, &wide_open());
        assert_eq!(result, catalog);
    }

    #[test]
    fn test_category_filter_matches_embedded_slug() {
        let catalog = vec![
            product("Camiseta", dec!(10), "mujer"),
            product("Bolso", dec!(30), "accesorios"),
        ];
        let mut state = wide_open();
        state.categories.push("mujer".to_string());

        let result = filter_catalog(&catalog, &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().name, "Camiseta");
    }

    #[test]
    fn test_product_without_embedded_category_fails_category_filter() {
        let mut orphan = product("Camiseta", dec!(10), "mujer");
        orphan.category = None;
        let mut state = wide_open();
        state.categories.push("mujer".to_string());

        assert!(filter_catalog(&[orphan], &state).is_empty());
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let catalog = vec![
            product("A", dec!(10), "mujer"),
            product("B", dec!(25), "mujer"),
            product("C", dec!(30), "mujer"),
            product("D", dec!(45), "mujer"),
            product("E", dec!(60), "mujer"),
        ];
        let mut state = wide_open();
        state.price_min = Price::new(dec!(25));
        state.price_max = Price::new(dec!(45));

        let result = filter_catalog(&catalog, &state);
        let names: Vec<&str> = result.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn test_inverted_price_range_yields_empty_result() {
        let catalog = vec![product("A", dec!(30), "mujer")];
        let mut state = wide_open();
        state.price_min = Price::new(dec!(100));
        state.price_max = Price::new(dec!(50));

        assert!(filter_catalog(&catalog, &state).is_empty());
    }

    #[test]
    fn test_size_filter_requires_variant_membership() {
        let sized = with_variant(product("Camiseta", dec!(10), "mujer"), Some("M"), None);
        let unsized_item = product("Bolso", dec!(30), "accesorios");
        let other = with_variant(product("Vestido", dec!(25), "mujer"), Some("S"), None);

        let mut state = wide_open();
        state.sizes.push("M".to_string());

        let result = filter_catalog(&[sized, unsized_item, other], &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().name, "Camiseta");
    }

    #[test]
    fn test_color_filter_requires_variant_membership() {
        let olive = with_variant(product("Camiseta", dec!(10), "mujer"), Some("M"), Some("Oliva"));
        let black = with_variant(product("Vestido", dec!(25), "mujer"), Some("M"), Some("Negro"));

        let mut state = wide_open();
        state.colors.push("Negro".to_string());

        let result = filter_catalog(&[olive, black], &state);
        assert_eq!(result.len(), 1);
        assert_eq!(result.first().unwrap().name, "Vestido");
    }

    #[test]
    fn test_output_is_subset_of_input() {
        let catalog = vec![
            product("A", dec!(10), "mujer"),
            product("B", dec!(250), "mujer"),
        ];
        let result = filter_catalog(&catalog, &wide_open());
        assert!(result.iter().all(|p| catalog.contains(p)));
        assert!(result.len() <= catalog.len());
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        assert!(filter_catalog(&[], &wide_open()).is_empty());
    }
}
