//! Fitness Planner WASM Module
//!
//! This crate provides WebAssembly bindings so a browser host can run the
//! exact progress computation used by the application: pass the weekly plan
//! and the list of completed ledger keys as JSON, get the aggregated
//! progress back as JSON.

use std::collections::HashSet;

use fitness_planner_shared::{compute_progress, CompletionKey, CompletionLedger, WeeklyPlan};
use wasm_bindgen::prelude::*;

/// Compute weekly progress from a plan and its completed keys
///
/// `plan_json` is a serialized `WeeklyPlan`; `completed_keys_json` is an
/// array of `{dayIndex, category, itemIndex}` keys currently marked done.
#[wasm_bindgen]
pub fn compute_weekly_progress(
    plan_json: &str,
    completed_keys_json: &str,
) -> Result<String, JsValue> {
    progress_json(plan_json, completed_keys_json).map_err(|e| JsValue::from_str(&e))
}

fn progress_json(plan_json: &str, completed_keys_json: &str) -> Result<String, String> {
    let plan: WeeklyPlan =
        serde_json::from_str(plan_json).map_err(|e| format!("invalid plan: {}", e))?;
    let keys: Vec<CompletionKey> = serde_json::from_str(completed_keys_json)
        .map_err(|e| format!("invalid completion keys: {}", e))?;

    // Duplicate keys in the input would otherwise toggle items back off
    let unique: HashSet<CompletionKey> = keys.into_iter().collect();
    let mut ledger = CompletionLedger::new();
    for key in unique {
        ledger.toggle(key.day_index, key.category, key.item_index);
    }

    let progress = compute_progress(&plan, &ledger);
    serde_json::to_string(&progress).map_err(|e| e.to_string())
}
