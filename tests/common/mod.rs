//! Common test utilities for integration tests.
//!
//! Fixtures for variations, products and configs shared by the selector
//! integration tests.
//!
//! # Example
//!
//! ```ignore
//! use common::{seven_colors, product_context};
//!
//! let session = SelectorSession::new(DisplayConfig::new().with_max_items(5), vec![seven_colors()])?;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use sku_selector::models::{Item, ItemImage, Product, ProductContext, SelectorOption, Seller, Variation};

pub const COLOR_LABELS: [&str; 7] = ["Red", "Blue", "Green", "Black", "White", "Pink", "Gray"];

/// Color axis with seven options, each with a swatch image.
pub fn seven_colors() -> Variation {
    Variation::new(
        "Color",
        COLOR_LABELS
            .iter()
            .map(|label| SelectorOption::new(*label).with_image(format!("https://img.test/{}.png", label), Some(*label)))
            .collect(),
    )
}

/// Size axis with `count` options named S1..Sn.
pub fn sizes(count: usize) -> Variation {
    Variation::new(
        "Size",
        (1..=count).map(|i| SelectorOption::new(format!("S{}", i))).collect(),
    )
}

pub fn item(item_id: &str, images: &[&str], sellers: &[&str]) -> Item {
    let mut item = Item::new(item_id);
    item.images = images
        .iter()
        .map(|url| ItemImage::new(*url))
        .collect();
    item.sellers = sellers
        .iter()
        .enumerate()
        .map(|(i, seller_id)| Seller {
            seller_id: seller_id.to_string(),
            seller_name: None,
            seller_default: i == 0,
            extra: Default::default(),
        })
        .collect();
    item
}

/// Product with `sku123` (two images, one seller) and `sku456` (no images).
pub fn product_context() -> ProductContext {
    let mut product = Product::with_items(vec![
        item("sku123", &["https://img.test/a.png", "https://img.test/b.png"], &["1"]),
        item("sku456", &[], &["1", "2"]),
    ]);
    product.product_id = Some("42".to_string());
    product.product_name = Some("Running Shoe".to_string());
    ProductContext::new(product)
}
