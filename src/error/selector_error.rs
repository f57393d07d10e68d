//! Unified error type for the selector.

use std::path::PathBuf;

use thiserror::Error;

use super::category::ErrorCategory;
use super::context::ErrorContext;

/// Errors produced while planning or bridging a variation selector.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// A display setting is below the minimum that its reserved chrome slots need.
    #[error("invalid display config: {field} is {value}, minimum is {minimum}")]
    InvalidConfig {
        field: &'static str,
        value: usize,
        minimum: usize,
    },

    /// The variation has no options to render.
    #[error("variation `{variation}` has no options")]
    EmptyVariation { variation: String },

    /// The external sku id is not one of the product's items.
    #[error("sku `{sku_id}` not found among {item_count} product items")]
    UnknownSku { sku_id: String, item_count: usize },

    /// A JSON payload (config, scenario, product) could not be parsed.
    #[error("failed to parse selector payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// A scenario file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Intents could not be written to the host's output.
    #[error("failed to write {failed} intents: {source}")]
    DispatchFailed {
        failed: usize,
        #[source]
        source: std::io::Error,
    },

    /// Wrapped error with additional context.
    #[error("{error} {context}")]
    WithContext {
        error: Box<SelectorError>,
        context: ErrorContext,
    },
}

impl SelectorError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            SelectorError::InvalidConfig { .. } => ErrorCategory::Configuration,
            SelectorError::EmptyVariation { .. } | SelectorError::Parse(_) => ErrorCategory::Input,
            SelectorError::UnknownSku { .. } => ErrorCategory::Lookup,
            SelectorError::Io { .. } | SelectorError::DispatchFailed { .. } => ErrorCategory::System,
            SelectorError::WithContext { error, .. } => error.category(),
        }
    }

    /// Check if rendering can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        self.category().is_recoverable()
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SelectorError::InvalidConfig { .. } => "INVALID_CONFIG",
            SelectorError::EmptyVariation { .. } => "EMPTY_VARIATION",
            SelectorError::UnknownSku { .. } => "UNKNOWN_SKU",
            SelectorError::Parse(_) => "PARSE_FAILED",
            SelectorError::Io { .. } => "IO_FAILED",
            SelectorError::DispatchFailed { .. } => "DISPATCH_FAILED",
            SelectorError::WithContext { error, .. } => error.error_code(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            SelectorError::InvalidConfig { field, minimum, .. } => {
                format!("The selector setting `{}` must be at least {}.", field, minimum)
            }
            SelectorError::EmptyVariation { variation } => {
                format!("`{}` has no options to choose from.", variation)
            }
            SelectorError::UnknownSku { sku_id, .. } => {
                format!("The selected item `{}` is not available for this product.", sku_id)
            }
            SelectorError::Parse(_) => "The selector data could not be read.".to_string(),
            SelectorError::Io { path, .. } => {
                format!("Could not read {}.", path.display())
            }
            SelectorError::DispatchFailed { failed, .. } => {
                format!("{} selection updates could not be delivered.", failed)
            }
            SelectorError::WithContext { error, context } => {
                format!("{}\n\nContext: {}", error.user_message(), context)
            }
        }
    }

    /// Attach context to this error.
    pub fn with_context(self, ctx: ErrorContext) -> Self {
        SelectorError::WithContext {
            error: Box::new(self),
            context: ctx,
        }
    }

    /// Get the context if this error has one attached.
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            SelectorError::WithContext { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Get the inner error without context.
    pub fn inner(&self) -> &SelectorError {
        match self {
            SelectorError::WithContext { error, .. } => error.inner(),
            _ => self,
        }
    }

    /// Get the recovery hint for this error.
    pub fn recovery_hint(&self) -> &'static str {
        self.category().recovery_hint()
    }
}
