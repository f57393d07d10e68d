//! Product context consumed by the summary selection bridge.
//!
//! Only the fields the bridge reads are typed. Everything else the host sends
//! is kept in `extra` so a patched product carries it back unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Never read by the selector, so a missing url defaults to empty.
    #[serde(default)]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_label: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ItemImage {
    pub fn new(image_url: impl Into<String>) -> Self {
        Self {
            image_id: None,
            image_url: image_url.into(),
            image_label: None,
            extra: Map::new(),
        }
    }

    pub fn with_id(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = Some(image_id.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub seller_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub seller_default: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A sku-like record of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<ItemImage>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            name: None,
            images: Vec::new(),
            sellers: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// The selected item plus its first image and first seller as convenience fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedSku {
    #[serde(flatten)]
    pub item: Item,
    #[serde(default)]
    pub image: Option<ItemImage>,
    #[serde(default)]
    pub seller: Option<Seller>,
}

impl From<&Item> for SelectedSku {
    fn from(item: &Item) -> Self {
        Self {
            image: item.images.first().cloned(),
            seller: item.sellers.first().cloned(),
            item: item.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub product_id: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_item: Option<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<SelectedSku>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.item_id == item_id)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyButton {
    #[serde(default)]
    pub clicked: bool,
}

/// Product plus the buy-button state of the surrounding page or tile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductContext {
    pub product: Product,
    #[serde(default)]
    pub buy_button: BuyButton,
}

impl ProductContext {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            buy_button: BuyButton::default(),
        }
    }
}
