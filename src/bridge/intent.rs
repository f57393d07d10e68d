//! Intents emitted towards the host's state container.

use serde::Serialize;

use crate::models::Product;
use crate::traits::SummaryDispatch;

/// A user picked an option of a variation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionIntent {
    pub variation: String,
    pub label: String,
    /// False when the option is out of stock; the host may still accept it.
    pub available: bool,
}

/// Change to the product-summary query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QueryPatch {
    /// Clear any sku-scoped query.
    Reset,
    /// Scope the query to one sku.
    Sku(String),
}

impl QueryPatch {
    pub fn as_query(&self) -> String {
        match self {
            QueryPatch::Reset => String::new(),
            QueryPatch::Sku(sku_id) => format!("skuId={}", sku_id),
        }
    }
}

/// Replacement product carrying the new `selectedItem` and `sku`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductPatch {
    pub product: Product,
}

/// Actions the product-summary state container understands.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "args", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SummaryIntent {
    SetProduct { product: Box<Product> },
    SetProductQuery { query: String },
}

/// Result of bridging an external sku change.
#[derive(Debug, Clone, PartialEq)]
pub struct SkuChange {
    pub product_patch: Option<ProductPatch>,
    pub query_patch: QueryPatch,
}

impl SkuChange {
    /// The intents in dispatch order.
    ///
    /// The query is interpreted against the product's item list, so the
    /// product patch always comes first.
    pub fn intents(self) -> Vec<SummaryIntent> {
        let mut intents = Vec::with_capacity(2);
        if let Some(patch) = self.product_patch {
            intents.push(SummaryIntent::SetProduct {
                product: Box::new(patch.product),
            });
        }
        intents.push(SummaryIntent::SetProductQuery {
            query: self.query_patch.as_query(),
        });
        intents
    }

    /// Send the intents to `sink` in dispatch order.
    pub fn dispatch<D: SummaryDispatch + ?Sized>(self, sink: &mut D) {
        for intent in self.intents() {
            sink.dispatch(intent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Item;

    #[test]
    fn test_query_patch_strings() {
        assert_eq!(QueryPatch::Reset.as_query(), "");
        assert_eq!(QueryPatch::Sku("sku123".to_string()).as_query(), "skuId=sku123");
    }

    #[test]
    fn test_product_patch_precedes_query() {
        let change = SkuChange {
            product_patch: Some(ProductPatch {
                product: Product::with_items(vec![Item::new("1")]),
            }),
            query_patch: QueryPatch::Sku("1".to_string()),
        };

        let intents = change.intents();
        assert_eq!(intents.len(), 2);
        assert!(matches!(intents[0], SummaryIntent::SetProduct { .. }));
        assert_eq!(
            intents[1],
            SummaryIntent::SetProductQuery {
                query: "skuId=1".to_string()
            }
        );
    }

    #[test]
    fn test_reset_emits_query_only() {
        let change = SkuChange {
            product_patch: None,
            query_patch: QueryPatch::Reset,
        };
        assert_eq!(
            change.intents(),
            vec![SummaryIntent::SetProductQuery { query: String::new() }]
        );
    }

    #[test]
    fn test_intent_wire_shape() {
        let intent = SummaryIntent::SetProductQuery {
            query: "skuId=9".to_string(),
        };
        let json = serde_json::to_value(&intent).unwrap();
        assert_eq!(json["type"], "SET_PRODUCT_QUERY");
        assert_eq!(json["args"]["query"], "skuId=9");
    }

    #[test]
    fn test_dispatch_into_closure() {
        let mut seen = Vec::new();
        let change = SkuChange {
            product_patch: None,
            query_patch: QueryPatch::Reset,
        };
        change.dispatch(&mut |intent: SummaryIntent| seen.push(intent));
        assert_eq!(seen.len(), 1);
    }
}
