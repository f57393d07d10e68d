//! Option-display and truncation policy.
//!
//! Two truncation policies exist and never apply together:
//!
//! - **Summary truncation** (product-list tiles): keep `max_items_when_summarized - 1`
//!   options and offer a go-to-product control in the last slot.
//! - **Collapse** (product page): keep `max_items - 2` options behind an expand
//!   control until the expansion latch flips.

use crate::config::DisplayConfig;
use crate::error::{SelectorError, SelectorResult};
use crate::models::{SelectionState, Variation};

use super::latch::{collapsed_visible_count, ExpansionLatch};
use super::plan::{resolve_layout, LayoutMode, RenderPlan};
use super::summary::selection_summary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Truncation {
    ShowAll,
    GoToProduct { visible: usize },
    Collapsed { visible: usize },
}

impl Truncation {
    fn visible(&self, total: usize) -> usize {
        match self {
            Truncation::ShowAll => total,
            Truncation::GoToProduct { visible } | Truncation::Collapsed { visible } => (*visible).min(total),
        }
    }
}

fn resolve_truncation(total: usize, config: &DisplayConfig, user_expanded: bool) -> Truncation {
    if config.is_summary_context && !config.force_show_all {
        if total <= config.max_items_when_summarized {
            Truncation::ShowAll
        } else {
            Truncation::GoToProduct {
                visible: config.max_items_when_summarized - 1,
            }
        }
    } else if total > config.max_items && !user_expanded {
        Truncation::Collapsed {
            visible: collapsed_visible_count(config.max_items),
        }
    } else {
        Truncation::ShowAll
    }
}

/// Compute the render plan for a variation.
///
/// Deterministic in its inputs. `user_expanded` is the current value of the
/// variation's [`ExpansionLatch`].
pub fn evaluate(
    variation: &Variation,
    selection: &SelectionState,
    config: &DisplayConfig,
    user_expanded: bool,
) -> SelectorResult<RenderPlan> {
    config.validate()?;
    if variation.is_empty() {
        return Err(SelectorError::EmptyVariation {
            variation: variation.name.clone(),
        });
    }

    let total = variation.len();
    let display_image = config.is_color_axis(&variation.original_name);
    let truncation = resolve_truncation(total, config, user_expanded);
    let visible = truncation.visible(total);
    let visible_options = variation.options[..visible].to_vec();

    let layout = resolve_layout(
        config.mode,
        display_image,
        visible_options.len(),
        config.slider_display_threshold,
    );

    Ok(RenderPlan {
        hidden_count: total - visible,
        display_image,
        use_slider: layout == LayoutMode::Slider,
        use_select_dropdown: layout == LayoutMode::Dropdown,
        show_expand_affordance: matches!(truncation, Truncation::Collapsed { .. }),
        show_go_to_product_affordance: matches!(truncation, Truncation::GoToProduct { .. }),
        selection_summary: selection_summary(selection, display_image, config),
        visible_options,
    })
}

/// Owns the display config and expansion latch of one variation selector.
///
/// The latch is seeded from the selection on the first evaluation and only
/// ever moves from collapsed to expanded afterwards.
#[derive(Debug, Clone)]
pub struct VariationDisplayController {
    config: DisplayConfig,
    latch: Option<ExpansionLatch>,
}

impl VariationDisplayController {
    /// Build a controller, failing fast on an invalid config.
    pub fn new(config: DisplayConfig) -> SelectorResult<Self> {
        config.validate()?;
        Ok(Self { config, latch: None })
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn is_expanded(&self) -> bool {
        self.latch.map(|latch| latch.is_expanded()).unwrap_or(false)
    }

    /// Handle a click on the expand control.
    pub fn expand(&mut self) {
        let changed = self.latch.get_or_insert_with(ExpansionLatch::collapsed).expand();
        if changed {
            tracing::debug!("Expansion latch flipped to expanded");
        }
    }

    /// Current latch, seeding it from `selection` on first use.
    pub fn seed(&mut self, variation: &Variation, selection: &SelectionState) -> ExpansionLatch {
        let config = &self.config;
        *self
            .latch
            .get_or_insert_with(|| ExpansionLatch::seeded(variation, selection, config))
    }

    /// Evaluate the plan for the current props.
    ///
    /// An empty variation renders nothing instead of failing the host's render.
    pub fn evaluate(&mut self, variation: &Variation, selection: &SelectionState) -> RenderPlan {
        let latch = self.seed(variation, selection);

        match evaluate(variation, selection, &self.config, latch.is_expanded()) {
            Ok(plan) => {
                tracing::debug!(
                    "Plan for {}: visible={} hidden={} expand={} go_to_product={} layout={:?}",
                    variation.name,
                    plan.visible_options.len(),
                    plan.hidden_count,
                    plan.show_expand_affordance,
                    plan.show_go_to_product_affordance,
                    plan.layout()
                );
                plan
            }
            Err(SelectorError::EmptyVariation { variation }) => {
                tracing::debug!("Variation {} has no options, rendering nothing", variation);
                RenderPlan::empty()
            }
            Err(err) => {
                tracing::warn!("Failed to evaluate {}: {}", variation.name, err);
                RenderPlan::empty()
            }
        }
    }
}
