//! Error handling for the variation selector.
//!
//! | Error | Category | Handling |
//! |-------|----------|----------|
//! | `InvalidConfig` | Configuration | Fail fast when the controller is built |
//! | `EmptyVariation` | Input | Render nothing |
//! | `UnknownSku` | Lookup | Report a warning, host decides |
//! | `Parse` | Input | Reject the payload |
//! | `Io` | System | Reject the scenario file |

mod category;
mod context;
mod result;
mod selector_error;

pub use category::ErrorCategory;
pub use context::ErrorContext;
pub use result::{ResultExt, SelectorResult};
pub use selector_error::SelectorError;
