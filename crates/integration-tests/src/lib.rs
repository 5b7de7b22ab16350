//! Cross-crate scenario tests for Olivo.
//!
//! The library part holds a shared fixture catalog that the scenario
//! tests browse and select against. The fixture deliberately covers the
//! awkward cases: a discounted product, a zero-image product, variant
//! rows with repeated size/color labels, and a near-out-of-stock product.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p olivo-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::{Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use olivo_core::{
    Category, CategoryId, Price, Product, ProductId, ProductImage, ProductImageId, ProductVariant,
    ProductVariantId,
};
use olivo_storefront::CatalogSnapshot;

/// Build a category with a stable slug.
#[must_use]
pub fn category(name: &str, slug: &str, product_count: u32) -> Category {
    Category {
        id: CategoryId::generate(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: format!("Colección {name}"),
        image_url: format!("https://cdn.olivo.shop/categories/{slug}.jpg"),
        product_count,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap_or_default(),
    }
}

/// Options for a fixture product.
pub struct ProductSpec<'a> {
    pub name: &'a str,
    pub price: Decimal,
    pub category: &'a Category,
    pub stock: u32,
    pub featured: bool,
    pub age_days: i64,
    pub image_count: usize,
    /// (size, color, color_hex) variant rows; labels may repeat.
    pub variants: &'a [(Option<&'a str>, Option<&'a str>, Option<&'a str>)],
}

/// Build a product from a [`ProductSpec`].
#[must_use]
pub fn product(spec: &ProductSpec<'_>) -> Product {
    let id = ProductId::generate();
    let slug = spec.name.to_lowercase().replace(' ', "-");

    let images = (0..spec.image_count)
        .map(|position| ProductImage {
            id: ProductImageId::generate(),
            product_id: id,
            url: format!("https://cdn.olivo.shop/products/{slug}-{position}.jpg"),
            alt_text: format!("{} vista {position}", spec.name),
            position: u32::try_from(position).unwrap_or(u32::MAX),
            created_at: Utc::now(),
        })
        .collect();

    let variants = spec
        .variants
        .iter()
        .map(|(size, color, hex)| ProductVariant {
            id: ProductVariantId::generate(),
            product_id: id,
            size: size.map(String::from),
            color: color.map(String::from),
            color_hex: hex.map(String::from),
            stock: spec.stock.min(5),
            created_at: Utc::now(),
        })
        .collect();

    Product {
        id,
        name: spec.name.to_string(),
        slug,
        description: format!("{} de moda sostenible.", spec.name),
        price: Price::new(spec.price),
        original_price: None,
        discount_percentage: 0,
        category_id: spec.category.id,
        material: "100% Algodón Orgánico".to_string(),
        sku: format!("OLV-{}", spec.name.len()),
        stock: spec.stock,
        rating: 4.5,
        review_count: 12,
        is_new: spec.age_days < 14,
        featured: spec.featured,
        created_at: Utc::now() - Duration::days(spec.age_days),
        category: Some(spec.category.clone()),
        images,
        variants,
        features: Vec::new(),
    }
}

/// The shared five-product fixture catalog priced 10/25/30/45/60.
#[must_use]
pub fn fixture_catalog() -> CatalogSnapshot {
    let mujer = category("Mujer", "mujer", 3);
    let hombre = category("Hombre", "hombre", 1);
    let accesorios = category("Accesorios", "accesorios", 1);

    let products = vec![
        product(&ProductSpec {
            name: "Camiseta Esencial",
            price: Decimal::from(10),
            category: &mujer,
            stock: 25,
            featured: false,
            age_days: 40,
            image_count: 4,
            variants: &[
                (Some("M"), Some("Oliva"), Some("#7a7d45")),
                (Some("M"), Some("Negro"), Some("#000000")),
                (Some("L"), Some("Oliva"), Some("#7a7d45")),
            ],
        }),
        product(&ProductSpec {
            name: "Vestido Lino",
            price: Decimal::from(25),
            category: &mujer,
            stock: 3,
            featured: true,
            age_days: 2,
            image_count: 2,
            variants: &[(Some("S"), Some("Beige"), Some("#d4c5b0"))],
        }),
        product(&ProductSpec {
            name: "Pantalon Organico",
            price: Decimal::from(30),
            category: &hombre,
            stock: 12,
            featured: false,
            age_days: 20,
            image_count: 1,
            variants: &[
                (Some("M"), Some("Negro"), Some("#000000")),
                (Some("XL"), Some("Negro"), Some("#000000")),
            ],
        }),
        product(&ProductSpec {
            name: "Bolso Reciclado",
            price: Decimal::from(45),
            category: &accesorios,
            stock: 8,
            featured: true,
            age_days: 7,
            image_count: 0,
            variants: &[(None, Some("Marrón"), Some("#6b4f2a"))],
        }),
        product(&ProductSpec {
            name: "Abrigo Lana",
            price: Decimal::from(60),
            category: &mujer,
            stock: 5,
            featured: false,
            age_days: 90,
            image_count: 3,
            variants: &[
                (Some("S"), Some("Verde"), Some("#3f5c3a")),
                (Some("M"), Some("Verde"), Some("#3f5c3a")),
            ],
        }),
    ];

    CatalogSnapshot {
        categories: vec![mujer, hombre, accesorios],
        products,
    }
}
