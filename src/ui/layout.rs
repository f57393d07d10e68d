//! Responsive layout for the selector preview.
//!
//! `LayoutContext` wraps the terminal dimensions and maps them onto the
//! device classes the display config is written against, so responsive
//! values such as `sliderItemsPerPage` resolve from the terminal width.

use crate::config::{Device, ResponsiveValue};

// ============================================================================
// Screen Size Breakpoints
// ============================================================================

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Extra small terminal (< 60 columns)
    pub const XS_WIDTH: u16 = 60;
    /// Small terminal (< 80 columns)
    pub const SM_WIDTH: u16 = 80;
    /// Medium terminal (< 120 columns)
    pub const MD_WIDTH: u16 = 120;
}

/// Width category for responsive design decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCategory {
    /// < 60 columns
    ExtraSmall,
    /// < 80 columns
    Small,
    /// < 120 columns
    Medium,
    /// >= 120 columns
    Large,
}

// ============================================================================
// Layout Context
// ============================================================================

/// Terminal dimensions used by the selector renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn width_category(&self) -> SizeCategory {
        if self.width < breakpoints::XS_WIDTH {
            SizeCategory::ExtraSmall
        } else if self.width < breakpoints::SM_WIDTH {
            SizeCategory::Small
        } else if self.width < breakpoints::MD_WIDTH {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }

    /// Device class the terminal width stands in for.
    pub fn device(&self) -> Device {
        match self.width_category() {
            SizeCategory::ExtraSmall => Device::Phone,
            SizeCategory::Small => Device::Tablet,
            SizeCategory::Medium | SizeCategory::Large => Device::Desktop,
        }
    }

    /// Resolve a responsive value for this terminal, never below one.
    pub fn resolve(&self, value: &ResponsiveValue) -> usize {
        value.resolve(self.device()).max(1)
    }

    /// Longest label a single option chip may show.
    pub fn max_label_width(&self) -> usize {
        match self.width_category() {
            SizeCategory::ExtraSmall => 12,
            SizeCategory::Small => 18,
            SizeCategory::Medium => 24,
            SizeCategory::Large => 32,
        }
    }
}

impl Default for LayoutContext {
    /// Standard 80x24 terminal.
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}
