//! Error context for enriched error information.
//!
//! Context records where in the selector an error happened (which operation,
//! which sku) so host logs can be traced back to the offending props.

use chrono::{DateTime, Utc};

/// Context information attached to errors for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorContext {
    /// Human-readable description of the operation that failed.
    pub operation: String,

    /// Sku id if the error occurred while bridging an external selection.
    pub sku_id: Option<String>,

    /// Optional component where the error originated.
    pub component: Option<String>,

    /// Timestamp when the error occurred.
    pub timestamp: DateTime<Utc>,
}

impl ErrorContext {
    /// Create a new ErrorContext for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            sku_id: None,
            component: None,
            timestamp: Utc::now(),
        }
    }

    /// Set the sku id for this context.
    pub fn with_sku_id(mut self, sku_id: impl Into<String>) -> Self {
        self.sku_id = Some(sku_id.into());
        self
    }

    /// Set the component for this context.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Get a formatted context string suitable for logging.
    pub fn to_log_string(&self) -> String {
        let mut parts = vec![format!("operation={}", self.operation)];

        if let Some(ref sku_id) = self.sku_id {
            parts.push(format!("sku_id={}", sku_id));
        }

        if let Some(ref component) = self.component {
            parts.push(format!("component={}", component));
        }

        parts.push(format!("timestamp={}", self.timestamp.to_rfc3339()));

        parts.join(" ")
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new("unknown")
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.operation)?;

        if let Some(ref sku_id) = self.sku_id {
            write!(f, " sku={}", sku_id)?;
        }

        Ok(())
    }
}
