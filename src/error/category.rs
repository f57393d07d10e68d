//! Error category classification.
//!
//! Categories give callers one place to decide how an error is surfaced:
//! fail fast, render nothing, or report and carry on.

use std::fmt;

/// High-level categorization of selector errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Malformed display configuration.
    /// Fatal - the host must fix its props before rendering.
    Configuration,

    /// Degenerate input data (empty variations, unparsable payloads).
    /// Recovered locally by rendering nothing.
    Input,

    /// Lookup misses against the product context.
    /// Reported to the host, which decides whether to ignore them.
    Lookup,

    /// OS errors while loading scenario files.
    System,
}

impl ErrorCategory {
    /// Returns true if the selector can keep rendering after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ErrorCategory::Input | ErrorCategory::Lookup)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::Input => "input",
            ErrorCategory::Lookup => "lookup",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => "Configuration problem",
            ErrorCategory::Input => "Unusable input data",
            ErrorCategory::Lookup => "Selection lookup failed",
            ErrorCategory::System => "System error",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Configuration => {
                "Check the selector display settings"
            }
            ErrorCategory::Input => {
                "Check the variation data supplied to the selector"
            }
            ErrorCategory::Lookup => {
                "The selected item is not part of this product. Refresh the product data"
            }
            ErrorCategory::System => {
                "Check that the file exists and is readable"
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
