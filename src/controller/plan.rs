//! Render plan emitted by the display controller.

use serde::Serialize;

use crate::config::DisplayMode;
use crate::models::SelectorOption;

/// Which widget the presentation layer draws for the visible options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    List,
    Dropdown,
    Slider,
}

/// Resolve the layout for a variation.
///
/// Precedence is dropdown > slider > list. Color axes never use the dropdown
/// because swatches cannot be drawn inside it.
pub fn resolve_layout(
    mode: DisplayMode,
    display_image: bool,
    visible_count: usize,
    slider_display_threshold: usize,
) -> LayoutMode {
    match mode {
        DisplayMode::Select if !display_image => LayoutMode::Dropdown,
        DisplayMode::Slider if visible_count > slider_display_threshold => LayoutMode::Slider,
        _ => LayoutMode::List,
    }
}

/// What to draw for one variation in one evaluation.
///
/// Derived on every evaluation and never stored by the core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    /// Prefix of the variation's options, in original order.
    pub visible_options: Vec<SelectorOption>,
    /// Options left out of `visible_options`.
    pub hidden_count: usize,
    /// Options are color swatches.
    pub display_image: bool,
    pub use_slider: bool,
    pub use_select_dropdown: bool,
    pub show_expand_affordance: bool,
    pub show_go_to_product_affordance: bool,
    /// Value printed next to the variation name.
    pub selection_summary: Option<String>,
}

impl RenderPlan {
    /// Plan that renders nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_options.is_empty()
    }

    pub fn layout(&self) -> LayoutMode {
        if self.use_select_dropdown {
            LayoutMode::Dropdown
        } else if self.use_slider {
            LayoutMode::Slider
        } else {
            LayoutMode::List
        }
    }

    pub fn is_visible(&self, label: &str) -> bool {
        self.visible_options.iter().any(|option| option.label == label)
    }
}
