//! JSON output renderer.
//!
//! Dispatch: `{"operation": ..., "a": ..., "b": ..., "result": ...}`.
//! Filter: `{"results": [{"condition": ..., "count": ..., "elements": [...]}, ...]}`.
//! Demo: `{"dispatches": [...], "results": [...]}`, one document for the whole run.

use crate::models::{DispatchOutcome, FilterOutcome};
use crate::ops::Operation;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

fn pretty(value: &serde_json::Value) -> String {
    let mut s = serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string());
    s.push('\n');
    s
}

fn filter_result(o: &FilterOutcome) -> serde_json::Value {
    serde_json::json!({
        "condition": o.condition,
        "from": o.from,
        "to": o.to,
        "count": o.count(),
        "elements": o.elements,
    })
}

impl JsonRenderer {
    /// Render a whole demo run as a single document.
    pub fn render_demo(&self, dispatches: &[DispatchOutcome], filters: &[FilterOutcome]) -> String {
        let results: Vec<_> = filters.iter().map(filter_result).collect();
        pretty(&serde_json::json!({
            "dispatches": dispatches,
            "results": results,
        }))
    }
}

impl OutputRenderer for JsonRenderer {
    fn render_dispatch(&self, outcome: &DispatchOutcome) -> String {
        pretty(&serde_json::json!(outcome))
    }

    fn render_filter(&self, outcomes: &[FilterOutcome]) -> String {
        let results: Vec<_> = outcomes.iter().map(filter_result).collect();
        pretty(&serde_json::json!({ "results": results }))
    }

    fn render_operations(&self, operations: &[Operation]) -> String {
        let ops: Vec<_> = operations
            .iter()
            .map(|op| {
                serde_json::json!({
                    "name": op,
                    "symbol": op.symbol().to_string(),
                    "description": op.description(),
                })
            })
            .collect();
        pretty(&serde_json::json!({ "operations": ops }))
    }
}
