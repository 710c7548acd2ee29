//! Outcome records produced by commands and consumed by renderers.

use serde::Serialize;

use super::Number;
use crate::ops::Operation;

/// The result of dispatching one operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchOutcome {
    pub operation: Operation,
    pub a: Number,
    pub b: Number,
    pub result: Number,
}

/// The elements of a range selected by one condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOutcome {
    /// Human-readable condition label, e.g. `greater than 50`.
    pub condition: String,
    pub from: i64,
    pub to: i64,
    pub elements: Vec<i64>,
}

impl FilterOutcome {
    pub fn count(&self) -> usize {
        self.elements.len()
    }
}
