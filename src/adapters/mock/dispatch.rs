//! Recording dispatcher for testing.

use crate::bridge::SummaryIntent;
use crate::models::Product;
use crate::traits::SummaryDispatch;

/// Dispatcher that keeps every intent it receives, in order.
///
/// # Example
///
/// ```ignore
/// use sku_selector::adapters::mock::RecordingDispatch;
///
/// let mut sink = RecordingDispatch::new();
/// bridge.sync_external_sku(Some("sku123"), &ctx, &mut sink)?;
/// assert_eq!(sink.last_query(), Some("skuId=sku123"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingDispatch {
    intents: Vec<SummaryIntent>,
}

impl RecordingDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded intents in dispatch order.
    pub fn intents(&self) -> &[SummaryIntent] {
        &self.intents
    }

    /// Products from `SetProduct` intents.
    pub fn products(&self) -> Vec<&Product> {
        self.intents
            .iter()
            .filter_map(|intent| match intent {
                SummaryIntent::SetProduct { product } => Some(product.as_ref()),
                SummaryIntent::SetProductQuery { .. } => None,
            })
            .collect()
    }

    /// Queries from `SetProductQuery` intents.
    pub fn queries(&self) -> Vec<&str> {
        self.intents
            .iter()
            .filter_map(|intent| match intent {
                SummaryIntent::SetProductQuery { query } => Some(query.as_str()),
                SummaryIntent::SetProduct { .. } => None,
            })
            .collect()
    }

    pub fn last_query(&self) -> Option<&str> {
        self.queries().last().copied()
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    pub fn clear(&mut self) {
        self.intents.clear();
    }
}

impl SummaryDispatch for RecordingDispatch {
    fn dispatch(&mut self, intent: SummaryIntent) {
        self.intents.push(intent);
    }
}
