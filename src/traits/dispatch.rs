//! Host dispatch seam for product-summary intents.

use crate::bridge::SummaryIntent;

/// Receives intents for the product-summary state container.
///
/// Implemented by the host's store adapter. Any `FnMut(SummaryIntent)` closure
/// is a dispatcher as well.
///
/// # Example
///
/// ```ignore
/// use sku_selector::bridge::SelectionBridge;
///
/// let mut log = Vec::new();
/// SelectionBridge::new().sync_external_sku(Some("42"), &ctx, &mut |intent| log.push(intent))?;
/// ```
pub trait SummaryDispatch {
    fn dispatch(&mut self, intent: SummaryIntent);
}

impl<F> SummaryDispatch for F
where
    F: FnMut(SummaryIntent),
{
    fn dispatch(&mut self, intent: SummaryIntent) {
        self(intent)
    }
}
