//! CLI module for the preview binary.
//!
//! - Argument parsing
//! - Version display
//! - Scenario loading
//!
//! # Usage
//!
//! ```ignore
//! use sku_selector::cli::{parse_args, CliCommand};
//!
//! match parse_args(std::env::args()) {
//!     CliCommand::Preview(args) => run_preview(args)?,
//!     other => handle(other),
//! }
//! ```

pub mod args;
pub mod scenario;
pub mod version;

pub use args::{parse_args, CliCommand, PreviewArgs, USAGE};
pub use scenario::Scenario;
pub use version::{version_line, VERSION};
