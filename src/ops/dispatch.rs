//! The dispatcher: apply a caller-supplied operation to two operands.

use tracing::debug;

use super::Operation;
use crate::models::{DispatchError, DispatchOutcome, Number};

/// Invoke `operation` with `(a, b)` and return whatever it produces.
///
/// Accepts function pointers and closures alike. Anything that isn't
/// callable with two arguments is rejected at compile time.
pub fn execute<F, A, B, R>(operation: F, a: A, b: B) -> R
where
    F: FnOnce(A, B) -> R,
{
    operation(a, b)
}

/// Dispatch a registered operation and record the full outcome.
pub fn execute_operation(
    operation: Operation,
    a: Number,
    b: Number,
) -> Result<DispatchOutcome, DispatchError> {
    debug!(%operation, %a, %b, "dispatching");
    let result = execute(operation.function(), a, b)?;
    debug!(%operation, %result, "dispatch complete");
    Ok(DispatchOutcome {
        operation,
        a,
        b,
        result,
    })
}

/// Resolve an operation by name, parse both operands and dispatch.
///
/// The operation name is checked before the operands.
pub fn execute_named(name: &str, a: &str, b: &str) -> Result<DispatchOutcome, DispatchError> {
    let operation: Operation = name.parse()?;
    let a: Number = a.parse()?;
    let b: Number = b.parse()?;
    execute_operation(operation, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::{BinaryFn, add, subtract};

    #[test]
    fn execute_add() {
        assert_eq!(execute(add, Number::Int(1), Number::Int(2)), Ok(Number::Int(3)));
    }

    #[test]
    fn execute_subtract() {
        assert_eq!(execute(subtract, Number::Int(1), Number::Int(2)), Ok(Number::Int(-1)));
    }

    #[test]
    fn execute_add_zeroes() {
        assert_eq!(execute(add, Number::Int(0), Number::Int(0)), Ok(Number::Int(0)));
    }

    #[test]
    fn execute_with_reassigned_operation() {
        let mut operation: BinaryFn = add;
        assert_eq!(execute(operation, Number::Int(1), Number::Int(2)), Ok(Number::Int(3)));

        operation = subtract;
        assert_eq!(execute(operation, Number::Int(1), Number::Int(2)), Ok(Number::Int(-1)));
    }

    #[test]
    fn execute_accepts_closures() {
        let offset = 10;
        assert_eq!(execute(|a: i32, b: i32| a * b + offset, 3, 4), 22);
        assert_eq!(execute(|a: f64, b: f64| a / b, 1.0, 4.0), 0.25);
    }

    #[test]
    fn execute_operation_records_outcome() {
        let outcome = execute_operation(Operation::Subtract, Number::Int(5), Number::Int(8)).unwrap();
        assert_eq!(outcome.operation, Operation::Subtract);
        assert_eq!(outcome.a, Number::Int(5));
        assert_eq!(outcome.b, Number::Int(8));
        assert_eq!(outcome.result, Number::Int(-3));
    }

    #[test]
    fn execute_named_parses_everything() {
        let outcome = execute_named("add", "1", "2.5").unwrap();
        assert_eq!(outcome.result, Number::Float(3.5));
    }

    #[test]
    fn execute_named_rejects_invalid_operand() {
        let err = execute_named("add", "1", "two").unwrap_err();
        assert!(matches!(err, DispatchError::InvalidOperand { ref input, .. } if input == "two"));
    }

    #[test]
    fn execute_named_checks_operation_first() {
        let err = execute_named("pow", "x", "y").unwrap_err();
        assert_eq!(err, DispatchError::UnknownOperation("pow".into()));
    }
}
