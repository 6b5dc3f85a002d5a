//! Completion ledger for plan items
//!
//! A sparse record of which plan items the user has marked done, keyed by
//! an explicit composite key instead of an ad-hoc string. Absence of a key
//! means "not done". The ledger performs no bounds checking against the
//! plan; callers derive indices from the plan's own structure via the
//! canonical flattening on [`crate::models::WorkoutPlan`] and
//! [`crate::models::MealSlot`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category of a trackable plan item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Exercise,
    Meal,
}

/// Composite key identifying one trackable item within the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionKey {
    pub day_index: usize,
    pub category: ItemCategory,
    pub item_index: usize,
}

impl CompletionKey {
    pub fn new(day_index: usize, category: ItemCategory, item_index: usize) -> Self {
        Self {
            day_index,
            category,
            item_index,
        }
    }
}

/// Sparse per-item completion state
///
/// Lifecycle: cleared whenever a new plan is generated or the session is
/// reset, and replaced wholesale (never merged) on import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionLedger {
    entries: HashMap<CompletionKey, bool>,
}

impl CompletionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag at a key (absent → true, true → false, false → true)
    ///
    /// Total over all integer inputs; toggling twice with the same arguments
    /// restores the prior observable state.
    pub fn toggle(&mut self, day_index: usize, category: ItemCategory, item_index: usize) {
        let key = CompletionKey::new(day_index, category, item_index);
        self.entries
            .entry(key)
            .and_modify(|done| *done = !*done)
            .or_insert(true);
    }

    /// Whether the item at a key is marked done; false for any unknown key
    pub fn is_done(&self, day_index: usize, category: ItemCategory, item_index: usize) -> bool {
        self.entries
            .get(&CompletionKey::new(day_index, category, item_index))
            .copied()
            .unwrap_or(false)
    }

    /// Empty the ledger entirely
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Whether no item is marked done
    pub fn is_empty(&self) -> bool {
        !self.entries.values().any(|done| *done)
    }

    /// Iterate the keys currently marked done
    pub fn completed(&self) -> impl Iterator<Item = CompletionKey> + '_ {
        self.entries
            .iter()
            .filter(|(_, done)| **done)
            .map(|(key, _)| *key)
    }
}
