//! Selection bridge: turns option clicks and external sku changes into host intents.

pub mod intent;
pub mod selection;

pub use intent::{ProductPatch, QueryPatch, SelectionIntent, SkuChange, SummaryIntent};
pub use selection::SelectionBridge;
