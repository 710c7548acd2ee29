//! Output renderers: plain text and JSON.

pub mod json;
pub mod plain;

use crate::models::{DispatchOutcome, FilterOutcome, OutputFormat};
use crate::ops::Operation;

/// Trait for rendering command results to an output format.
pub trait OutputRenderer {
    /// Render the result of a single dispatch.
    fn render_dispatch(&self, outcome: &DispatchOutcome) -> String;

    /// Render one or more filter results, in order.
    fn render_filter(&self, outcomes: &[FilterOutcome]) -> String;

    /// Render the list of registered operations.
    fn render_operations(&self, operations: &[Operation]) -> String;
}

/// Pick the renderer for `format`.
pub fn renderer(format: OutputFormat) -> Box<dyn OutputRenderer> {
    match format {
        OutputFormat::Plain => Box::new(plain::PlainRenderer),
        OutputFormat::Json => Box::new(json::JsonRenderer),
    }
}
