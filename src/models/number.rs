//! Numeric operand type.
//!
//! Integers stay exact; as soon as either side of a binary operation is
//! floating point both sides are promoted to `f64`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::DispatchError;

/// A numeric operand or result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

/// A pair of operands after promotion to a common representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promoted {
    Ints(i64, i64),
    Floats(f64, f64),
}

impl Number {
    /// Promote two operands to a common representation.
    pub fn promote(a: Number, b: Number) -> Promoted {
        match (a, b) {
            (Number::Int(x), Number::Int(y)) => Promoted::Ints(x, y),
            _ => Promoted::Floats(a.as_f64(), b.as_f64()),
        }
    }

    /// Lossy conversion to `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
        }
    }

    /// Negate, returning `None` when the integer negation overflows.
    pub fn checked_neg(self) -> Option<Number> {
        match self {
            Number::Int(v) => v.checked_neg().map(Number::Int),
            Number::Float(v) => Some(Number::Float(-v)),
        }
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Number::Int(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Number::Int(v.into())
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Number::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            // `{:?}` keeps a trailing `.0` so `3.0` never reads as an integer
            Number::Float(v) => write!(f, "{v:?}"),
        }
    }
}

impl FromStr for Number {
    type Err = DispatchError;

    /// Parse an operand, preferring an exact integer over a float.
    ///
    /// Non-finite values (`inf`, `NaN`) are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DispatchError::invalid_operand(s, "empty input"));
        }

        if let Ok(v) = trimmed.parse::<i64>() {
            return Ok(Number::Int(v));
        }

        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Number::Float(v)),
            Ok(_) => Err(DispatchError::invalid_operand(s, "not a finite number")),
            Err(_) => Err(DispatchError::invalid_operand(s, "not a number")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers_exactly() {
        assert_eq!("42".parse::<Number>().unwrap(), Number::Int(42));
        assert_eq!(" -7 ".parse::<Number>().unwrap(), Number::Int(-7));
        assert_eq!(
            "9223372036854775807".parse::<Number>().unwrap(),
            Number::Int(i64::MAX)
        );
    }

    #[test]
    fn parses_floats() {
        assert_eq!("1.5".parse::<Number>().unwrap(), Number::Float(1.5));
        assert_eq!("-0.25".parse::<Number>().unwrap(), Number::Float(-0.25));
        assert_eq!("1e3".parse::<Number>().unwrap(), Number::Float(1000.0));
    }

    #[test]
    fn integer_too_large_falls_back_to_float() {
        let n = "9223372036854775808".parse::<Number>().unwrap();
        assert!(matches!(n, Number::Float(_)));
    }

    #[test]
    fn rejects_non_numeric_input() {
        let err = "abc".parse::<Number>().unwrap_err();
        assert!(matches!(err, DispatchError::InvalidOperand { ref reason, .. } if reason == "not a number"));
    }

    #[test]
    fn rejects_empty_input() {
        let err = "   ".parse::<Number>().unwrap_err();
        assert!(matches!(err, DispatchError::InvalidOperand { ref reason, .. } if reason == "empty input"));
    }

    #[test]
    fn rejects_non_finite_input() {
        for input in ["inf", "-inf", "NaN"] {
            let err = input.parse::<Number>().unwrap_err();
            assert!(
                matches!(err, DispatchError::InvalidOperand { ref reason, .. } if reason == "not a finite number"),
                "input {input} gave {err:?}"
            );
        }
    }

    #[test]
    fn display_distinguishes_integral_floats() {
        assert_eq!(Number::Int(3).to_string(), "3");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Number::Float(2.25).to_string(), "2.25");
    }

    #[test]
    fn promotion_rules() {
        assert_eq!(
            Number::promote(Number::Int(1), Number::Int(2)),
            Promoted::Ints(1, 2)
        );
        assert_eq!(
            Number::promote(Number::Int(1), Number::Float(2.5)),
            Promoted::Floats(1.0, 2.5)
        );
        assert_eq!(
            Number::promote(Number::Float(0.5), Number::Int(3)),
            Promoted::Floats(0.5, 3.0)
        );
    }

    #[test]
    fn checked_neg_handles_min() {
        assert_eq!(Number::Int(5).checked_neg(), Some(Number::Int(-5)));
        assert_eq!(Number::Int(i64::MIN).checked_neg(), None);
        assert_eq!(Number::Float(1.5).checked_neg(), Some(Number::Float(-1.5)));
    }

    #[test]
    fn serializes_untagged() {
        assert_eq!(serde_json::to_string(&Number::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Number::Float(0.5)).unwrap(), "0.5");
    }
}
