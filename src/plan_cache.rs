use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use crate::config::DisplayConfig;
use crate::controller::{RenderPlan, VariationDisplayController};
use crate::models::{SelectionState, Variation};

/// Maximum number of cached plans to keep in memory
const MAX_PLAN_CACHE_SIZE: usize = 64;

/// Key for the plan cache: (variation name, input fingerprint)
pub type PlanCacheKey = (String, u64);

/// Fingerprint of everything a plan is derived from.
pub fn fingerprint(
    variation: &Variation,
    selection: &SelectionState,
    config: &DisplayConfig,
    expanded: bool,
) -> u64 {
    let mut hasher = DefaultHasher::new();
    variation.hash(&mut hasher);
    selection.hash(&mut hasher);
    config.hash(&mut hasher);
    expanded.hash(&mut hasher);
    hasher.finish()
}

/// Cache of evaluated render plans.
/// Avoids re-evaluating a variation when the host re-renders with unchanged props.
///
/// Only the latest fingerprint of each variation is kept; a new fingerprint
/// for the same variation replaces the old entry.
#[derive(Debug, Default)]
pub struct PlanCache {
    cache: HashMap<PlanCacheKey, RenderPlan>,
    access_order: Vec<PlanCacheKey>,
    hits: u64,
    misses: u64,
}

impl PlanCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, variation: &str, fingerprint: u64) -> Option<&RenderPlan> {
        let key = (variation.to_string(), fingerprint);
        if self.cache.contains_key(&key) {
            self.access_order.retain(|k| *k != key);
            self.access_order.push(key.clone());
            self.cache.get(&key)
        } else {
            None
        }
    }

    pub fn insert(&mut self, variation: &str, fingerprint: u64, plan: RenderPlan) {
        let key = (variation.to_string(), fingerprint);
        // Drop stale fingerprints of the same variation
        self.cache.retain(|k, _| k.0 != variation || k.1 == fingerprint);
        self.access_order.retain(|k| k.0 != variation || k.1 == fingerprint);
        while self.cache.len() >= MAX_PLAN_CACHE_SIZE {
            if let Some(oldest_key) = self.access_order.first().cloned() {
                self.cache.remove(&oldest_key);
                self.access_order.remove(0);
            } else {
                break;
            }
        }
        self.access_order.retain(|k| *k != key);
        self.cache.insert(key.clone(), plan);
        self.access_order.push(key);
    }

    /// Return the cached plan for these inputs, evaluating through `controller` on a miss.
    pub fn get_or_evaluate(
        &mut self,
        controller: &mut VariationDisplayController,
        variation: &Variation,
        selection: &SelectionState,
    ) -> RenderPlan {
        let expanded = controller.seed(variation, selection).is_expanded();
        let fingerprint = fingerprint(variation, selection, controller.config(), expanded);

        if let Some(plan) = self.get(&variation.name, fingerprint) {
            let plan = plan.clone();
            self.hits += 1;
            return plan;
        }

        self.misses += 1;
        let plan = controller.evaluate(variation, selection);
        self.insert(&variation.name, fingerprint, plan.clone());
        plan
    }

    pub fn contains(&self, variation: &str, fingerprint: u64) -> bool {
        self.cache.contains_key(&(variation.to_string(), fingerprint))
    }

    /// Forget every plan of one variation.
    pub fn invalidate(&mut self, variation: &str) {
        self.cache.retain(|k, _| k.0 != variation);
        self.access_order.retain(|k| k.0 != variation);
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.access_order.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// (hits, misses) of `get_or_evaluate`
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
