//! Click action handler.
//!
//! Processes actions found in the hit area registry and routes them into
//! the selector session.

use super::hit_area::ClickAction;
use crate::bridge::SelectionIntent;
use crate::state::SelectorSession;

/// What a click did, for the host to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// An option was activated; the host should store the selection.
    Selected(SelectionIntent),
    /// The collapsed options of a variation were revealed.
    Expanded { variation: String },
    /// The host should navigate to the product page.
    GoToProduct {
        variation: String,
        product_id: Option<String>,
    },
    /// A slider moved to another page.
    SliderMoved { variation: String, page: usize },
    /// The click had no effect (impossible option, unknown variation).
    Ignored,
}

/// Handle a click action by updating session state.
pub fn handle_click_action(session: &mut SelectorSession, action: ClickAction) -> ClickOutcome {
    match action {
        ClickAction::SelectOption { variation, label } => match session.activate(&variation, &label) {
            Some(intent) => {
                tracing::debug!(
                    "Click: SelectOption(variation={}, label={}, available={})",
                    variation,
                    label,
                    intent.available
                );
                ClickOutcome::Selected(intent)
            }
            None => {
                tracing::debug!(
                    "Click: SelectOption(variation={}, label={}) - ignored",
                    variation,
                    label
                );
                ClickOutcome::Ignored
            }
        },
        ClickAction::ExpandOptions { variation } => {
            if session.expand(&variation) {
                tracing::debug!("Click: ExpandOptions(variation={})", variation);
                ClickOutcome::Expanded { variation }
            } else {
                ClickOutcome::Ignored
            }
        }
        ClickAction::GoToProduct { variation } => {
            let product_id = session
                .product()
                .and_then(|ctx| ctx.product.product_id.clone());
            tracing::debug!(
                "Click: GoToProduct(variation={}, product_id={:?})",
                variation,
                product_id
            );
            ClickOutcome::GoToProduct {
                variation,
                product_id,
            }
        }
        ClickAction::SliderPage { variation, page } => {
            if session.variation(&variation).is_none() {
                return ClickOutcome::Ignored;
            }
            session.set_slider_page(&variation, page);
            tracing::debug!("Click: SliderPage(variation={}, page={})", variation, page);
            ClickOutcome::SliderMoved { variation, page }
        }
    }
}
