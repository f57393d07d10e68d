//! Text decisions around the variation name: the selected value and the
//! "please select" marker.

use crate::config::DisplayConfig;
use crate::models::{BuyButton, SelectionState};

/// Value shown next to the variation name.
///
/// Color labels look like `<code><sep><display value>`, so swatch variations
/// show the second segment and fall back to the placeholder. Other variations
/// show the selected label verbatim.
pub fn selection_value(selection: &SelectionState, display_image: bool, config: &DisplayConfig) -> Option<String> {
    if !display_image {
        return selection.selected_label().map(str::to_string);
    }

    let segment = selection
        .selected_label()
        .and_then(|label| label.split(config.value_separator.as_str()).nth(1));

    match segment {
        Some("") => None,
        Some(value) => Some(value.to_string()),
        None => Some(config.no_color_placeholder.clone()),
    }
}

/// Selection summary as configured: hidden unless both the label and the value are shown.
pub fn selection_summary(selection: &SelectionState, display_image: bool, config: &DisplayConfig) -> Option<String> {
    if !(config.show_label && config.show_value_for_variation) {
        return None;
    }
    selection_value(selection, display_image, config)
}

/// Whether to flag the variation after a buy attempt without a selection.
pub fn missing_selection_error(config: &DisplayConfig, selection: &SelectionState, buy_button: BuyButton) -> bool {
    config.show_label && config.show_error_message && buy_button.clicked && selection.selected_label().is_none()
}
