//! Variation display controller: decides which options are drawn and how.

pub mod display;
pub mod latch;
pub mod plan;
pub mod summary;

pub use display::{evaluate, VariationDisplayController};
pub use latch::{collapsed_visible_count, ExpansionLatch, COLLAPSED_CHROME_SLOTS};
pub use plan::{resolve_layout, LayoutMode, RenderPlan};
pub use summary::{missing_selection_error, selection_summary, selection_value};
