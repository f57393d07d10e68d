//! The one-way "show all options" switch.

use crate::config::DisplayConfig;
use crate::models::{SelectionState, Variation};

/// Slots reserved while collapsed: the selected-but-offscreen option and the expand control.
pub const COLLAPSED_CHROME_SLOTS: usize = 2;

/// Options shown while a list is collapsed.
pub fn collapsed_visible_count(max_items: usize) -> usize {
    max_items.saturating_sub(COLLAPSED_CHROME_SLOTS)
}

/// Tracks whether the user asked to reveal a collapsed option list.
///
/// Once expanded it never collapses again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionLatch {
    expanded: bool,
}

impl ExpansionLatch {
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn expanded() -> Self {
        Self { expanded: true }
    }

    /// Initial latch for a variation.
    ///
    /// Starts expanded when the selected option would land in the collapsed tail,
    /// so the selection is visible without an extra click.
    pub fn seeded(variation: &Variation, selection: &SelectionState, config: &DisplayConfig) -> Self {
        let selected_position = selection
            .selected_label()
            .and_then(|label| variation.position(label));

        match selected_position {
            Some(position) if position >= collapsed_visible_count(config.max_items) => Self::expanded(),
            _ => Self::collapsed(),
        }
    }

    /// Expand the list. Returns true if the latch changed.
    pub fn expand(&mut self) -> bool {
        let changed = !self.expanded;
        self.expanded = true;
        changed
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SelectorOption;

    fn seven_colors() -> Variation {
        Variation::new(
            "Color",
            (1..=7).map(|i| SelectorOption::new(format!("{}-Tone{}", i, i))).collect(),
        )
    }

    #[test]
    fn test_collapsed_visible_count() {
        assert_eq!(collapsed_visible_count(5), 3);
        assert_eq!(collapsed_visible_count(3), 1);
        assert_eq!(collapsed_visible_count(1), 0);
    }

    #[test]
    fn test_seed_without_selection_is_collapsed() {
        let config = DisplayConfig::new().with_max_items(5);
        let latch = ExpansionLatch::seeded(&seven_colors(), &SelectionState::none(), &config);
        assert!(!latch.is_expanded());
    }

    #[test]
    fn test_seed_with_visible_selection_is_collapsed() {
        let config = DisplayConfig::new().with_max_items(5);
        let latch = ExpansionLatch::seeded(&seven_colors(), &SelectionState::of("3-Tone3"), &config);
        assert!(!latch.is_expanded());
    }

    #[test]
    fn test_seed_with_tail_selection_is_expanded() {
        let config = DisplayConfig::new().with_max_items(5);
        // Index 3 is the first option past the three collapsed slots
        let latch = ExpansionLatch::seeded(&seven_colors(), &SelectionState::of("4-Tone4"), &config);
        assert!(latch.is_expanded());
    }

    #[test]
    fn test_seed_with_unknown_selection_is_collapsed() {
        let config = DisplayConfig::new().with_max_items(5);
        let latch = ExpansionLatch::seeded(&seven_colors(), &SelectionState::of("9-Nope"), &config);
        assert!(!latch.is_expanded());
    }

    #[test]
    fn test_expand_is_one_way() {
        let mut latch = ExpansionLatch::collapsed();
        assert!(latch.expand());
        assert!(!latch.expand());
        assert!(latch.is_expanded());
    }
}
