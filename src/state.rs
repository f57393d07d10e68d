//! Selector session state.
//!
//! A `SelectorSession` holds one display controller per variation, the
//! current selections, and the product context. It is the state a host
//! keeps between renders; every mutation goes through a method here.

use std::collections::HashMap;

use crate::bridge::{SelectionBridge, SelectionIntent};
use crate::config::DisplayConfig;
use crate::controller::{missing_selection_error, RenderPlan, VariationDisplayController};
use crate::error::{ErrorContext, SelectorResult};
use crate::models::{BuyButton, Product, ProductContext, SelectionState, Variation};
use crate::plan_cache::PlanCache;
use crate::traits::SummaryDispatch;

/// State of a selector showing a list of variations.
#[derive(Debug)]
pub struct SelectorSession {
    config: DisplayConfig,
    variations: Vec<Variation>,
    controllers: HashMap<String, VariationDisplayController>,
    selections: HashMap<String, SelectionState>,
    slider_pages: HashMap<String, usize>,
    product: Option<ProductContext>,
    bridge: SelectionBridge,
    cache: PlanCache,
}

impl SelectorSession {
    /// Create a session, failing fast on an invalid config.
    pub fn new(config: DisplayConfig, variations: Vec<Variation>) -> SelectorResult<Self> {
        config.validate()?;
        let mut session = Self {
            config,
            variations: Vec::new(),
            controllers: HashMap::new(),
            selections: HashMap::new(),
            slider_pages: HashMap::new(),
            product: None,
            bridge: SelectionBridge::new(),
            cache: PlanCache::new(),
        };
        session.set_variations(variations)?;
        Ok(session)
    }

    pub fn with_product(mut self, product: ProductContext) -> Self {
        self.product = Some(product);
        self
    }

    /// Initial selection of one variation.
    pub fn with_selection(mut self, variation: &str, label: impl Into<String>) -> Self {
        self.selections
            .insert(variation.to_string(), SelectionState::of(label));
        self
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    pub fn variations(&self) -> &[Variation] {
        &self.variations
    }

    pub fn variation(&self, name: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.name == name)
    }

    pub fn product(&self) -> Option<&ProductContext> {
        self.product.as_ref()
    }

    pub fn selection(&self, variation: &str) -> SelectionState {
        self.selections.get(variation).cloned().unwrap_or_default()
    }

    pub fn plan_cache(&self) -> &PlanCache {
        &self.cache
    }

    /// Replace the variation list.
    ///
    /// Controllers of variations that survive keep their expansion latch;
    /// controllers of removed variations are dropped.
    pub fn set_variations(&mut self, variations: Vec<Variation>) -> SelectorResult<()> {
        for variation in &variations {
            if !self.controllers.contains_key(&variation.name) {
                let controller = VariationDisplayController::new(self.config.clone())?;
                self.controllers.insert(variation.name.clone(), controller);
            }
        }

        self.controllers
            .retain(|name, _| variations.iter().any(|v| &v.name == name));
        self.slider_pages
            .retain(|name, _| variations.iter().any(|v| &v.name == name));
        let cache = &mut self.cache;
        for variation in &self.variations {
            if !variations.iter().any(|v| v.name == variation.name) {
                cache.invalidate(&variation.name);
            }
        }

        self.variations = variations;
        Ok(())
    }

    /// Selection state flowing back from the host.
    pub fn set_selection(&mut self, variation: &str, selection: SelectionState) {
        self.selections.insert(variation.to_string(), selection);
    }

    pub fn set_buy_button_clicked(&mut self, clicked: bool) {
        if let Some(product) = self.product.as_mut() {
            product.buy_button = BuyButton { clicked };
        }
    }

    /// Plan of one variation, from cache when props are unchanged.
    pub fn plan_for(&mut self, variation: &str) -> Option<RenderPlan> {
        let Self {
            variations,
            controllers,
            selections,
            cache,
            ..
        } = self;

        let variation = variations.iter().find(|v| v.name == variation)?;
        let controller = controllers.get_mut(&variation.name)?;
        let selection = selections.get(&variation.name).cloned().unwrap_or_default();
        Some(cache.get_or_evaluate(controller, variation, &selection))
    }

    /// Plans of every variation, in display order.
    pub fn plans(&mut self) -> Vec<RenderPlan> {
        let Self {
            variations,
            controllers,
            selections,
            cache,
            ..
        } = self;

        variations
            .iter()
            .map(|variation| {
                let selection = selections.get(&variation.name).cloned().unwrap_or_default();
                match controllers.get_mut(&variation.name) {
                    Some(controller) => cache.get_or_evaluate(controller, variation, &selection),
                    None => RenderPlan::empty(),
                }
            })
            .collect()
    }

    /// Expand a variation. Returns false for an unknown variation.
    pub fn expand(&mut self, variation: &str) -> bool {
        match self.controllers.get_mut(variation) {
            Some(controller) => {
                controller.expand();
                true
            }
            None => {
                tracing::warn!("Expand requested for unknown variation {}", variation);
                false
            }
        }
    }

    /// Activate an option, recording the selection when an intent results.
    pub fn activate(&mut self, variation: &str, label: &str) -> Option<SelectionIntent> {
        let Some(target) = self.variation(variation) else {
            tracing::warn!("Activation for unknown variation {}", variation);
            return None;
        };

        let intent = self.bridge.on_option_activated(target, label)?;
        self.selections
            .insert(intent.variation.clone(), SelectionState::of(intent.label.clone()));
        Some(intent)
    }

    /// Whether the missing-selection error shows for a variation.
    pub fn missing_selection(&self, variation: &str) -> bool {
        let buy_button = self.product.as_ref().map(|p| p.buy_button).unwrap_or_default();
        missing_selection_error(&self.config, &self.selection(variation), buy_button)
    }

    pub fn slider_page(&self, variation: &str) -> usize {
        self.slider_pages.get(variation).copied().unwrap_or(0)
    }

    pub fn set_slider_page(&mut self, variation: &str, page: usize) {
        self.slider_pages.insert(variation.to_string(), page);
    }

    /// Apply a sku change reported by the summary and dispatch the intents.
    ///
    /// The product patch is also kept locally so later renders see it.
    pub fn sync_external_sku<D: SummaryDispatch + ?Sized>(
        &mut self,
        sku_id: Option<&str>,
        sink: &mut D,
    ) -> SelectorResult<()> {
        let fallback;
        let ctx = match self.product.as_ref() {
            Some(ctx) => ctx,
            None => {
                fallback = ProductContext::new(Product::default());
                &fallback
            }
        };

        let change = self.bridge.on_external_sku_change(sku_id, ctx).map_err(|err| {
            let mut context = ErrorContext::new("sync_external_sku").with_component("SelectorSession");
            if let Some(sku_id) = sku_id {
                context = context.with_sku_id(sku_id);
            }
            tracing::warn!("Sku sync failed: {} {}", err.error_code(), context.to_log_string());
            err.with_context(context)
        })?;

        if let (Some(patch), Some(ctx)) = (change.product_patch.as_ref(), self.product.as_mut()) {
            ctx.product = patch.product.clone();
        }
        change.dispatch(sink);
        Ok(())
    }
}
