//! Result type alias for selector operations.

use super::context::ErrorContext;
use super::selector_error::SelectorError;

/// Type alias for Results using SelectorError.
pub type SelectorResult<T> = Result<T, SelectorError>;

/// Extension trait for Result types to add context to errors.
pub trait ResultExt<T> {
    /// Add context to an error if the result is Err.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use sku_selector::error::{ErrorContext, ResultExt};
    ///
    /// let config = DisplayConfig::from_json(raw)
    ///     .context(ErrorContext::new("load_config"))?;
    /// ```
    fn context(self, ctx: ErrorContext) -> SelectorResult<T>;

    /// Add context using a closure (only called on error).
    fn with_context<F>(self, f: F) -> SelectorResult<T>
    where
        F: FnOnce() -> ErrorContext;
}

impl<T> ResultExt<T> for SelectorResult<T> {
    fn context(self, ctx: ErrorContext) -> SelectorResult<T> {
        self.map_err(|e| e.with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> SelectorResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for Result<T, serde_json::Error> {
    fn context(self, ctx: ErrorContext) -> SelectorResult<T> {
        self.map_err(|e| SelectorError::from(e).with_context(ctx))
    }

    fn with_context<F>(self, f: F) -> SelectorResult<T>
    where
        F: FnOnce() -> ErrorContext,
    {
        self.map_err(|e| SelectorError::from(e).with_context(f()))
    }
}
