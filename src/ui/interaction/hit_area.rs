//! Hit area system for pointer interactions.
//!
//! The renderer registers a hit area for every chip and affordance it draws.
//! The host queries the registry on a click to learn which action to route.

use ratatui::layout::Rect;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Activate one option of a variation
    SelectOption { variation: String, label: String },
    /// Reveal the collapsed options of a variation
    ExpandOptions { variation: String },
    /// Leave the summary and open the product page
    GoToProduct { variation: String },
    /// Move a slider to another page
    SliderPage { variation: String, page: usize },
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Registry for managing hit areas across a render pass.
///
/// Cleared at the start of each render; areas registered later win on overlap.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area. Zero-sized areas are ignored.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        if rect.width == 0 || rect.height == 0 {
            return;
        }
        self.areas.push(HitArea::new(rect, action));
    }

    /// Find the action at the given position (topmost area first).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// All areas whose action matches `predicate`, in registration order.
    pub fn find<P>(&self, predicate: P) -> Vec<&HitArea>
    where
        P: Fn(&ClickAction) -> bool,
    {
        self.areas.iter().filter(|area| predicate(&area.action)).collect()
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(label: &str) -> ClickAction {
        ClickAction::SelectOption {
            variation: "Size".to_string(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 5, 20, 1), select("M"));

        assert!(area.contains(10, 5));
        assert!(area.contains(29, 5));
        assert!(!area.contains(30, 5));
        assert!(!area.contains(9, 5));
        assert!(!area.contains(10, 6));
    }

    #[test]
    fn test_registry_hit_test() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 3, 1), select("S"));
        registry.register(Rect::new(4, 0, 3, 1), select("M"));

        assert_eq!(registry.hit_test(1, 0), Some(select("S")));
        assert_eq!(registry.hit_test(5, 0), Some(select("M")));
        assert_eq!(registry.hit_test(3, 0), None);
    }

    #[test]
    fn test_later_registration_wins_on_overlap() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), select("S"));
        registry.register(
            Rect::new(2, 0, 3, 1),
            ClickAction::ExpandOptions {
                variation: "Size".to_string(),
            },
        );

        assert!(matches!(registry.hit_test(3, 0), Some(ClickAction::ExpandOptions { .. })));
        assert_eq!(registry.hit_test(0, 0), Some(select("S")));
    }

    #[test]
    fn test_zero_sized_area_ignored() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 0, 1), select("S"));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_clear_and_find() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 3, 1), select("S"));
        registry.register(Rect::new(4, 0, 3, 1), select("M"));

        let found = registry.find(|action| matches!(action, ClickAction::SelectOption { label, .. } if label == "M"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].rect.x, 4);

        registry.clear();
        assert_eq!(registry.len(), 0);
    }
}
