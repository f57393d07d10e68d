//! Trait abstractions at the boundary with the host.
//!
//! - [`SummaryDispatch`] - delivery of product-summary intents

pub mod dispatch;

pub use dispatch::SummaryDispatch;
