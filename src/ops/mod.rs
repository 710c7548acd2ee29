//! Binary arithmetic operations and the registry that resolves them by name.

pub mod dispatch;

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use strum::{EnumIter, IntoEnumIterator};

use crate::models::number::Promoted;
use crate::models::{DispatchError, Number};

pub use dispatch::{execute, execute_named, execute_operation};

/// Function pointer shape shared by every registered operation.
pub type BinaryFn = fn(Number, Number) -> Result<Number, DispatchError>;

/// `a + b`. Integer overflow is an error rather than a wrap or panic.
pub fn add(a: Number, b: Number) -> Result<Number, DispatchError> {
    match Number::promote(a, b) {
        Promoted::Ints(x, y) => x
            .checked_add(y)
            .map(Number::Int)
            .ok_or(DispatchError::ArithmeticOverflow { op: '+', a, b }),
        Promoted::Floats(x, y) => Ok(Number::Float(x + y)),
    }
}

/// `a - b`, with the same overflow rule as [`add`].
pub fn subtract(a: Number, b: Number) -> Result<Number, DispatchError> {
    match Number::promote(a, b) {
        Promoted::Ints(x, y) => x
            .checked_sub(y)
            .map(Number::Int)
            .ok_or(DispatchError::ArithmeticOverflow { op: '-', a, b }),
        Promoted::Floats(x, y) => Ok(Number::Float(x - y)),
    }
}

/// The named operations selectable at call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ValueEnum, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Addition (`+`).
    #[value(alias = "+")]
    Add,
    /// Subtraction (`-`).
    #[value(alias = "sub")]
    Subtract,
}

impl Operation {
    /// Resolve to the function implementing this operation.
    pub fn function(self) -> BinaryFn {
        match self {
            Operation::Add => add,
            Operation::Subtract => subtract,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Operation::Add => "sum of two numbers",
            Operation::Subtract => "difference of two numbers (a - b)",
        }
    }

    /// All registered operations, in declaration order.
    pub fn all() -> Vec<Operation> {
        Operation::iter().collect()
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
        }
    }
}

impl std::str::FromStr for Operation {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" | "+" => Ok(Operation::Add),
            "subtract" | "sub" | "-" => Ok(Operation::Subtract),
            _ => Err(DispatchError::UnknownOperation(s.to_string())),
        }
    }
}
