//! Error taxonomy for dispatch and filtering.

use thiserror::Error;

use super::Number;

/// Errors raised while resolving or applying an operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("invalid operand {input:?}: {reason}")]
    InvalidOperand { input: String, reason: String },

    #[error("unknown operation {0:?} (expected one of: add, subtract)")]
    UnknownOperation(String),

    #[error("integer overflow evaluating {a} {op} {b}")]
    ArithmeticOverflow { op: char, a: Number, b: Number },

    #[error("invalid range {from}..={to}: start is greater than end")]
    InvalidRange { from: i64, to: i64 },
}

impl DispatchError {
    pub(crate) fn invalid_operand(input: &str, reason: impl Into<String>) -> Self {
        DispatchError::InvalidOperand {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_offending_input() {
        let err = DispatchError::invalid_operand("abc", "not a number");
        assert_eq!(err.to_string(), "invalid operand \"abc\": not a number");

        let err = DispatchError::UnknownOperation("mul".into());
        assert!(err.to_string().contains("\"mul\""));
    }

    #[test]
    fn overflow_message_shows_expression() {
        let err = DispatchError::ArithmeticOverflow {
            op: '+',
            a: Number::Int(i64::MAX),
            b: Number::Int(1),
        };
        assert_eq!(
            err.to_string(),
            format!("integer overflow evaluating {} + 1", i64::MAX)
        );
    }
}
