//! Scenario files for the preview binary.
//!
//! A scenario is the set of props a host would pass to the selector:
//!
//! ```json
//! {
//!   "variations": [{ "originalName": "Color", "name": "Color", "options": [{ "label": "Red" }] }],
//!   "selection": { "Color": "Red" },
//!   "expanded": ["Color"],
//!   "config": { "maxItems": 5 },
//!   "product": { "product": { "items": [] } }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::config::DisplayConfig;
use crate::error::{ErrorContext, ResultExt, SelectorError, SelectorResult};
use crate::models::{ProductContext, Variation};
use crate::state::SelectorSession;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub variations: Vec<Variation>,
    /// Selected label per variation name
    #[serde(default)]
    pub selection: HashMap<String, String>,
    /// Variations whose expand control was already clicked
    #[serde(default)]
    pub expanded: Vec<String>,
    #[serde(default)]
    pub config: DisplayConfig,
    #[serde(default)]
    pub product: Option<ProductContext>,
}

impl Scenario {
    pub fn from_json(raw: &str) -> SelectorResult<Self> {
        serde_json::from_str(raw).context(ErrorContext::new("parse_scenario"))
    }

    /// Read and parse a scenario file.
    pub fn load(path: &Path) -> SelectorResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SelectorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded scenario {} ({} bytes)", path.display(), raw.len());
        Self::from_json(&raw)
    }

    /// Build the session these props describe.
    pub fn into_session(self) -> SelectorResult<SelectorSession> {
        let mut session = SelectorSession::new(self.config, self.variations)?;
        if let Some(product) = self.product {
            session = session.with_product(product);
        }
        for (variation, label) in self.selection {
            session = session.with_selection(&variation, label);
        }
        for variation in &self.expanded {
            session.expand(variation);
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "variations": [
            {
                "originalName": "Size",
                "name": "Size",
                "options": [{ "label": "S" }, { "label": "M", "available": false }, { "label": "L" }]
            }
        ],
        "selection": { "Size": "M" },
        "config": { "maxItems": 3 }
    }"#;

    #[test]
    fn test_from_json() {
        let scenario = Scenario::from_json(SCENARIO).unwrap();

        assert_eq!(scenario.variations.len(), 1);
        assert!(!scenario.variations[0].options[1].available);
        assert_eq!(scenario.config.max_items, 3);
        assert!(scenario.product.is_none());
    }

    #[test]
    fn test_into_session_applies_selection() {
        let session = Scenario::from_json(SCENARIO).unwrap().into_session().unwrap();
        assert!(session.selection("Size").is_selected("M"));
    }

    #[test]
    fn test_into_session_rejects_invalid_config() {
        let raw = r#"{ "variations": [], "config": { "maxItems": 1 } }"#;
        let err = Scenario::from_json(raw).unwrap().into_session().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_parse_error_carries_context() {
        let err = Scenario::from_json("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "PARSE_FAILED");
        assert_eq!(err.context().map(|ctx| ctx.operation.as_str()), Some("parse_scenario"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.json")).unwrap_err();
        assert_eq!(err.error_code(), "IO_FAILED");
    }
}
