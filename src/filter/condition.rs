//! Integer predicates used by the filter command.

use std::fmt;

/// A unary predicate over integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    Even,
    Odd,
    /// Strictly greater than the threshold.
    GreaterThan(i64),
    Prime,
}

impl Condition {
    /// Default threshold for [`Condition::GreaterThan`].
    pub const DEFAULT_THRESHOLD: i64 = 50;

    /// Evaluate the predicate for a single value.
    pub fn matches(&self, x: i64) -> bool {
        match *self {
            Condition::Even => x % 2 == 0,
            Condition::Odd => x % 2 != 0,
            Condition::GreaterThan(n) => x > n,
            Condition::Prime => is_prime(x),
        }
    }

    /// Borrow the condition as a closure suitable for `elements_where`.
    pub fn predicate(self) -> impl Fn(&i64) -> bool {
        move |x| self.matches(*x)
    }

    /// The conditions the demo walks through, in order.
    pub fn defaults(threshold: i64) -> [Condition; 4] {
        [
            Condition::Even,
            Condition::Odd,
            Condition::GreaterThan(threshold),
            Condition::Prime,
        ]
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Even => write!(f, "even"),
            Condition::Odd => write!(f, "odd"),
            Condition::GreaterThan(n) => write!(f, "greater than {n}"),
            Condition::Prime => write!(f, "prime"),
        }
    }
}

/// Trial division by odd divisors up to `sqrt(x)`.
///
/// Values below 2 are not prime.
pub fn is_prime(x: i64) -> bool {
    if x < 2 {
        return false;
    }
    if x == 2 {
        return true;
    }
    if x % 2 == 0 {
        return false;
    }
    let mut i: i64 = 3;
    while i.saturating_mul(i) <= x {
        if x % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}
