//! Color theme constants for the selector preview.

use ratatui::style::Color;

/// Variation name in the header line
pub const COLOR_HEADER: Color = Color::White;

/// Selected option and active affordances
pub const COLOR_ACCENT: Color = Color::White;

/// Unavailable and impossible options, separators
pub const COLOR_DIM: Color = Color::DarkGray;

/// Regular selectable options
pub const COLOR_OPTION: Color = Color::Gray;

/// Selection summary value next to the variation name
pub const COLOR_SUMMARY: Color = Color::LightGreen;

/// Expand / go-to-product affordances
pub const COLOR_AFFORDANCE: Color = Color::Rgb(0, 122, 204); // blue #007ACC

/// Missing-selection marker
pub const COLOR_ERROR: Color = Color::Red;
