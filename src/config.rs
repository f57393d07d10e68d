//! Display configuration for a variation selector.
//!
//! The host builds a `DisplayConfig` from its block props, either in code with
//! the `with_*` builder methods or from the JSON it already has:
//!
//! ```ignore
//! use sku_selector::config::{DisplayConfig, DisplayMode};
//!
//! let config = DisplayConfig::default()
//!     .with_max_items(5)
//!     .with_mode(DisplayMode::Slider);
//! config.validate()?;
//!
//! let summary = DisplayConfig::from_json(r#"{"isSummaryContext": true, "maxItemsWhenSummarized": 4}"#)?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{SelectorError, SelectorResult};

/// Smallest `max_items` that leaves room for the selected-offscreen slot and the expand control.
pub const MIN_MAX_ITEMS: usize = 3;

/// Smallest `max_items_when_summarized` that leaves room for the go-to-product control.
pub const MIN_MAX_ITEMS_WHEN_SUMMARIZED: usize = 2;

/// Color-axis names recognized when no token set is configured.
pub const DEFAULT_COLOR_AXIS_TOKENS: &[&str] = &["color", "colour", "cor", "couleur", "farbe", "colore"];

/// How the options of a variation are laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Plain row of option chips.
    #[default]
    Default,
    /// Dropdown, unless the variation is a color axis.
    Select,
    /// Paged slider once the option count passes the threshold.
    Slider,
}

/// Device class used to resolve responsive settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Device {
    Phone,
    Tablet,
    Desktop,
}

/// A count that varies with the device class.
///
/// Deserializes from either a plain number or `{"desktop": 3, "tablet": 2, "phone": 1}`.
/// Missing device entries fall back to the next larger device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ResponsiveInput")]
pub struct ResponsiveValue {
    pub desktop: usize,
    pub tablet: usize,
    pub phone: usize,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponsiveInput {
    Fixed(usize),
    PerDevice {
        desktop: usize,
        #[serde(default)]
        tablet: Option<usize>,
        #[serde(default)]
        phone: Option<usize>,
    },
}

impl From<ResponsiveInput> for ResponsiveValue {
    fn from(input: ResponsiveInput) -> Self {
        match input {
            ResponsiveInput::Fixed(value) => Self::fixed(value),
            ResponsiveInput::PerDevice {
                desktop,
                tablet,
                phone,
            } => {
                let tablet = tablet.unwrap_or(desktop);
                Self {
                    desktop,
                    tablet,
                    phone: phone.unwrap_or(tablet),
                }
            }
        }
    }
}

impl ResponsiveValue {
    pub fn new(desktop: usize, tablet: usize, phone: usize) -> Self {
        Self {
            desktop,
            tablet,
            phone,
        }
    }

    /// Same value on every device.
    pub fn fixed(value: usize) -> Self {
        Self::new(value, value, value)
    }

    pub fn resolve(&self, device: Device) -> usize {
        match device {
            Device::Phone => self.phone,
            Device::Tablet => self.tablet,
            Device::Desktop => self.desktop,
        }
    }

    fn min(&self) -> usize {
        self.desktop.min(self.tablet).min(self.phone)
    }
}

impl Default for ResponsiveValue {
    fn default() -> Self {
        Self::new(3, 2, 1)
    }
}

/// Display configuration for one selector instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayConfig {
    /// Options shown on a product page before collapsing (default: 10)
    pub max_items: usize,
    /// Rows shown in a product-list tile, go-to-product control included (default: 5)
    pub max_items_when_summarized: usize,
    /// Slider kicks in when more options than this are visible (default: 3)
    pub slider_display_threshold: usize,
    pub slider_items_per_page: ResponsiveValue,
    pub mode: DisplayMode,
    /// The selector is embedded in a product summary tile
    pub is_summary_context: bool,
    /// Disables summary truncation
    pub force_show_all: bool,
    /// Case-insensitive names of color axes
    pub color_axis_tokens: Vec<String>,
    /// Separator splitting a color option label into code and display value (default: "-")
    pub value_separator: String,
    /// Host-supplied text shown when a color label has no display value
    pub no_color_placeholder: String,
    pub show_label: bool,
    pub show_value_for_variation: bool,
    /// Show the "please select" marker after a buy attempt without selection
    pub show_error_message: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_items: 10,
            max_items_when_summarized: 5,
            slider_display_threshold: 3,
            slider_items_per_page: ResponsiveValue::default(),
            mode: DisplayMode::Default,
            is_summary_context: false,
            force_show_all: false,
            color_axis_tokens: DEFAULT_COLOR_AXIS_TOKENS
                .iter()
                .map(|token| token.to_string())
                .collect(),
            value_separator: "-".to_string(),
            no_color_placeholder: "No color".to_string(),
            show_label: true,
            show_value_for_variation: true,
            show_error_message: true,
        }
    }
}

impl DisplayConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a config from the host's camelCase JSON props.
    /// Missing fields take their default values.
    pub fn from_json(raw: &str) -> SelectorResult<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings whose reserved chrome slots would underflow, and an
    /// empty value separator (its length is reported as the value).
    pub fn validate(&self) -> SelectorResult<()> {
        if self.max_items < MIN_MAX_ITEMS {
            return Err(SelectorError::InvalidConfig {
                field: "maxItems",
                value: self.max_items,
                minimum: MIN_MAX_ITEMS,
            });
        }
        if self.max_items_when_summarized < MIN_MAX_ITEMS_WHEN_SUMMARIZED {
            return Err(SelectorError::InvalidConfig {
                field: "maxItemsWhenSummarized",
                value: self.max_items_when_summarized,
                minimum: MIN_MAX_ITEMS_WHEN_SUMMARIZED,
            });
        }
        if self.slider_items_per_page.min() < 1 {
            return Err(SelectorError::InvalidConfig {
                field: "sliderItemsPerPage",
                value: self.slider_items_per_page.min(),
                minimum: 1,
            });
        }
        if self.value_separator.is_empty() {
            return Err(SelectorError::InvalidConfig {
                field: "valueSeparator",
                value: 0,
                minimum: 1,
            });
        }
        Ok(())
    }

    /// Whether `original_name` names a color axis.
    pub fn is_color_axis(&self, original_name: &str) -> bool {
        let name = original_name.trim().to_lowercase();
        self.color_axis_tokens
            .iter()
            .any(|token| token.trim().to_lowercase() == name)
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_max_items_when_summarized(mut self, max_items: usize) -> Self {
        self.max_items_when_summarized = max_items;
        self
    }

    pub fn with_slider_display_threshold(mut self, threshold: usize) -> Self {
        self.slider_display_threshold = threshold;
        self
    }

    pub fn with_slider_items_per_page(mut self, items_per_page: ResponsiveValue) -> Self {
        self.slider_items_per_page = items_per_page;
        self
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    /// Configure for a product-list tile.
    pub fn with_summary_context(mut self, is_summary_context: bool) -> Self {
        self.is_summary_context = is_summary_context;
        self
    }

    pub fn with_force_show_all(mut self, force_show_all: bool) -> Self {
        self.force_show_all = force_show_all;
        self
    }

    pub fn with_color_axis_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.color_axis_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_no_color_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.no_color_placeholder = placeholder.into();
        self
    }

    pub fn with_show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    pub fn with_show_value_for_variation(mut self, show_value: bool) -> Self {
        self.show_value_for_variation = show_value;
        self
    }

    pub fn with_show_error_message(mut self, show_error_message: bool) -> Self {
        self.show_error_message = show_error_message;
        self
    }
}
