//! Terminal presentation of the variation selector.
//!
//! Render functions take a `LayoutContext` so responsive settings resolve
//! against the terminal size, and register hit areas as they draw so clicks
//! can be routed back through `interaction::handle_click_action`.

pub mod interaction;
mod layout;
mod selector;
mod theme;

pub use layout::{breakpoints, LayoutContext, SizeCategory};
pub use selector::{render_selector, render_variation, truncate_label, SliderWindow, VariationView, SELECTED_MARKER};
pub use theme::{COLOR_ACCENT, COLOR_AFFORDANCE, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_OPTION, COLOR_SUMMARY};

pub use interaction::{handle_click_action, ClickAction, ClickOutcome, HitArea, HitAreaRegistry};
