//! Implementations of the traits in `crate::traits`.
//!
//! - [`JsonLinesDispatch`] - writes intents to any `io::Write` as JSON lines
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::RecordingDispatch`] - records dispatched intents

pub mod json_lines;
pub mod mock;

pub use json_lines::JsonLinesDispatch;
pub use mock::RecordingDispatch;
