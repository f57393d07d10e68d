//! Translation of raw selections into host intents.

use crate::error::{SelectorError, SelectorResult};
use crate::models::{ProductContext, SelectedSku, Variation};
use crate::traits::SummaryDispatch;

use super::intent::{ProductPatch, QueryPatch, SelectionIntent, SkuChange};

/// Stateless bridge between selector events and the host's selection state.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionBridge;

impl SelectionBridge {
    pub fn new() -> Self {
        Self
    }

    /// A user activated an option chip.
    ///
    /// Impossible options are inert and produce no intent.
    pub fn on_option_activated(&self, variation: &Variation, label: &str) -> Option<SelectionIntent> {
        let Some(option) = variation.option(label) else {
            tracing::warn!("Activated unknown option {} of {}", label, variation.name);
            return None;
        };

        if !option.is_selectable() {
            tracing::debug!("Ignored impossible option {} of {}", label, variation.name);
            return None;
        }

        Some(SelectionIntent {
            variation: variation.name.clone(),
            label: option.label.clone(),
            available: option.available,
        })
    }

    /// The summary tile reported a new selected sku (or none).
    ///
    /// A known sku becomes the product's `selectedItem` and `sku`, the latter
    /// carrying the item's first image and first seller.
    pub fn on_external_sku_change(&self, sku_id: Option<&str>, ctx: &ProductContext) -> SelectorResult<SkuChange> {
        let Some(sku_id) = sku_id else {
            return Ok(SkuChange {
                product_patch: None,
                query_patch: QueryPatch::Reset,
            });
        };

        let Some(item) = ctx.product.find_item(sku_id) else {
            tracing::warn!(
                "Sku {} not found among {} product items",
                sku_id,
                ctx.product.items.len()
            );
            return Err(SelectorError::UnknownSku {
                sku_id: sku_id.to_string(),
                item_count: ctx.product.items.len(),
            });
        };

        let mut product = ctx.product.clone();
        product.sku = Some(SelectedSku::from(item));
        product.selected_item = Some(item.clone());

        Ok(SkuChange {
            product_patch: Some(ProductPatch { product }),
            query_patch: QueryPatch::Sku(sku_id.to_string()),
        })
    }

    /// Bridge an external sku change and dispatch the resulting intents in order.
    pub fn sync_external_sku<D: SummaryDispatch + ?Sized>(
        &self,
        sku_id: Option<&str>,
        ctx: &ProductContext,
        sink: &mut D,
    ) -> SelectorResult<()> {
        let change = self.on_external_sku_change(sku_id, ctx)?;
        change.dispatch(sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::SummaryIntent;
    use crate::models::{Item, ItemImage, Product, SelectorOption, Seller};
    use serde_json::Map;

    fn sizes() -> Variation {
        Variation::new(
            "Size",
            vec![
                SelectorOption::new("S"),
                SelectorOption::new("M").unavailable(),
                SelectorOption::new("L").impossible(),
            ],
        )
    }

    fn context() -> ProductContext {
        let mut item = Item::new("sku123");
        item.images = vec![
            ItemImage::new("https://cdn/1.jpg").with_id("img-1"),
            ItemImage::new("https://cdn/2.jpg").with_id("img-2"),
        ];
        item.sellers = vec![Seller {
            seller_id: "1".to_string(),
            seller_name: Some("Main".to_string()),
            seller_default: true,
            extra: Map::new(),
        }];

        ProductContext::new(Product::with_items(vec![Item::new("sku001"), item]))
    }

    #[test]
    fn test_impossible_option_is_inert() {
        assert_eq!(SelectionBridge::new().on_option_activated(&sizes(), "L"), None);
    }

    #[test]
    fn test_selectable_option_emits_intent() {
        let intent = SelectionBridge::new().on_option_activated(&sizes(), "M").unwrap();
        assert_eq!(intent.variation, "Size");
        assert_eq!(intent.label, "M");
        assert!(!intent.available);
    }

    #[test]
    fn test_unknown_option_emits_nothing() {
        assert_eq!(SelectionBridge::new().on_option_activated(&sizes(), "XXL"), None);
    }

    #[test]
    fn test_null_sku_resets_query() {
        let change = SelectionBridge::new().on_external_sku_change(None, &context()).unwrap();
        assert!(change.product_patch.is_none());
        assert_eq!(change.query_patch, QueryPatch::Reset);
    }

    #[test]
    fn test_known_sku_patches_product() {
        let ctx = context();
        let change = SelectionBridge::new()
            .on_external_sku_change(Some("sku123"), &ctx)
            .unwrap();

        let product = change.product_patch.unwrap().product;
        assert_eq!(product.selected_item.as_ref().unwrap().item_id, "sku123");

        let sku = product.sku.unwrap();
        assert_eq!(sku.image.as_ref(), Some(&ctx.product.items[1].images[0]));
        assert_eq!(sku.seller.unwrap().seller_id, "1");
        assert_eq!(product.items, ctx.product.items);
        assert_eq!(change.query_patch.as_query(), "skuId=sku123");
    }

    #[test]
    fn test_patch_keeps_unknown_image_and_seller_fields() {
        let ctx: ProductContext = serde_json::from_str(
            r#"{"product": {"brand": "Acme", "items": [{
                "itemId": "sku123",
                "images": [{"imageUrl": "u", "imageText": "front", "imageTag": "<img>"}],
                "sellers": [{"sellerId": "1", "commertialOffer": {"Price": 10}}]
            }]}}"#,
        )
        .unwrap();

        let change = SelectionBridge::new()
            .on_external_sku_change(Some("sku123"), &ctx)
            .unwrap();
        let patched = serde_json::to_value(&change.product_patch.unwrap().product).unwrap();

        assert_eq!(patched["brand"], "Acme");
        assert_eq!(patched["items"][0]["images"][0]["imageText"], "front");
        assert_eq!(patched["selectedItem"]["images"][0]["imageTag"], "<img>");
        assert_eq!(patched["sku"]["image"]["imageText"], "front");
        assert!(patched["sku"]["image"].get("imageId").is_none());
        assert_eq!(patched["sku"]["seller"]["commertialOffer"]["Price"], 10);
    }

    #[test]
    fn test_sku_without_images_has_no_image() {
        let change = SelectionBridge::new()
            .on_external_sku_change(Some("sku001"), &context())
            .unwrap();
        let sku = change.product_patch.unwrap().product.sku.unwrap();
        assert!(sku.image.is_none());
        assert!(sku.seller.is_none());
    }

    #[test]
    fn test_unknown_sku_fails() {
        let err = SelectionBridge::new()
            .on_external_sku_change(Some("nope"), &context())
            .unwrap_err();
        assert!(matches!(err, SelectorError::UnknownSku { ref sku_id, item_count: 2 } if sku_id == "nope"));
    }

    #[test]
    fn test_unknown_sku_dispatches_nothing() {
        let mut seen = Vec::new();
        let result = SelectionBridge::new().sync_external_sku(Some("nope"), &context(), &mut |intent: SummaryIntent| {
            seen.push(intent)
        });
        assert!(result.is_err());
        assert!(seen.is_empty());
    }
}
