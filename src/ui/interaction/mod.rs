//! Pointer interaction: hit areas registered while rendering, and the
//! handler that routes a clicked action into the session.

pub mod click_handler;
pub mod hit_area;

pub use click_handler::{handle_click_action, ClickOutcome};
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
