//! Variation (SKU) selector for product pages and product-list tiles.
//!
//! - [`controller`] decides which options of a variation are drawn and how
//! - [`bridge`] turns option clicks and external sku changes into host intents
//! - [`state`] keeps per-variation controllers and selections between renders
//! - [`ui`] renders the selector into terminal lines with clickable hit areas

pub mod adapters;
pub mod bridge;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod plan_cache;
pub mod state;
pub mod traits;
pub mod ui;
