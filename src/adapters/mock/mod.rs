//! Mock implementations for testing.
//!
//! - [`RecordingDispatch`] - records product-summary intents in dispatch order

pub mod dispatch;

pub use dispatch::RecordingDispatch;
