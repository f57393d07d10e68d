use serde::{Deserialize, Serialize};

/// Swatch image attached to an option.
///
/// The url is an opaque pass-through value; sizing and delivery belong to the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionImage {
    pub image_url: String,
    #[serde(default)]
    pub image_label: Option<String>,
}

/// One selectable value of a variation (e.g. "Red", "XL").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorOption {
    /// Identity of the option, unique within its variation.
    pub label: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default = "default_available")]
    pub available: bool,
    /// Shown but inert: activating it never changes the selection.
    #[serde(default)]
    pub impossible: bool,
    #[serde(default)]
    pub image: Option<OptionImage>,
}

fn default_available() -> bool {
    true
}

impl SelectorOption {
    /// Create an available, selectable option.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            original_name: label.clone(),
            label,
            available: true,
            impossible: false,
            image: None,
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>, image_label: Option<&str>) -> Self {
        self.image = Some(OptionImage {
            image_url: image_url.into(),
            image_label: image_label.map(str::to_string),
        });
        self
    }

    /// Mark the option as out of stock. It stays selectable.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Mark the option as an impossible combination.
    pub fn impossible(mut self) -> Self {
        self.impossible = true;
        self
    }

    /// Whether activating this option may change the selection.
    pub fn is_selectable(&self) -> bool {
        !self.impossible
    }
}

/// A product attribute axis (Color, Size, ...) with its options in display order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    /// Untranslated axis name, used for color detection.
    pub original_name: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub options: Vec<SelectorOption>,
}

impl Variation {
    pub fn new(name: impl Into<String>, options: Vec<SelectorOption>) -> Self {
        let name = name.into();
        Self {
            original_name: name.clone(),
            name,
            options,
        }
    }

    pub fn with_original_name(mut self, original_name: impl Into<String>) -> Self {
        self.original_name = original_name.into();
        self
    }

    /// Index of the option with the given label.
    pub fn position(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|option| option.label == label)
    }

    pub fn option(&self, label: &str) -> Option<&SelectorOption> {
        self.options.iter().find(|option| option.label == label)
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// The externally owned selection of one variation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    #[serde(default)]
    pub selected_label: Option<String>,
}

impl SelectionState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of(label: impl Into<String>) -> Self {
        Self {
            selected_label: Some(label.into()),
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_label.as_deref()
    }

    pub fn is_selected(&self, label: &str) -> bool {
        self.selected_label() == Some(label)
    }
}
