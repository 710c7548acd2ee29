//! Predicate filtering over integer ranges.
//!
//! The predicate is passed in as a value, the same way the dispatcher
//! receives its operation.

pub mod condition;

use std::ops::RangeInclusive;

use tracing::trace;

pub use condition::{Condition, is_prime};

use crate::models::{DispatchError, FilterOutcome};

/// Lazily yield the items of `items` for which `predicate` holds, in order.
pub fn elements_where<I, P>(items: I, mut predicate: P) -> impl Iterator<Item = I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(move |item| predicate(item))
}

/// Inclusive range `from..=to`, rejecting an inverted range.
pub fn range(from: i64, to: i64) -> Result<RangeInclusive<i64>, DispatchError> {
    if from > to {
        return Err(DispatchError::InvalidRange { from, to });
    }
    Ok(from..=to)
}

/// Lazily select the values of `from..=to` matching `condition`.
///
/// The range is validated up front; nothing is buffered.
pub fn select(
    condition: Condition,
    from: i64,
    to: i64,
) -> Result<impl Iterator<Item = i64>, DispatchError> {
    Ok(elements_where(range(from, to)?, condition.predicate()))
}

/// Apply one condition to `from..=to`, collecting the matches.
pub fn apply(condition: Condition, from: i64, to: i64) -> Result<FilterOutcome, DispatchError> {
    let elements: Vec<i64> = select(condition, from, to)?.collect();
    trace!(%condition, from, to, selected = elements.len(), "filter applied");
    Ok(FilterOutcome {
        condition: condition.to_string(),
        from,
        to,
        elements,
    })
}

/// Apply each condition in turn to the same range.
pub fn apply_all(
    conditions: &[Condition],
    from: i64,
    to: i64,
) -> Result<Vec<FilterOutcome>, DispatchError> {
    conditions
        .iter()
        .map(|&condition| apply(condition, from, to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn elements_where_preserves_order() {
        let picked: Vec<_> = elements_where(vec![5, 2, 8, 3, 6], |x| x % 2 == 0).collect();
        assert_eq!(picked, vec![2, 8, 6]);
    }

    #[test]
    fn elements_where_works_on_non_integers() {
        let words = ["alpha", "be", "gamma"];
        let long: Vec<_> = elements_where(words, |w| w.len() > 2).collect();
        assert_eq!(long, vec!["alpha", "gamma"]);
    }

    #[test]
    fn elements_where_is_lazy() {
        let mut calls = 0;
        let first = elements_where(1..=1_000_000, |x| {
            calls += 1;
            x % 7 == 0
        })
        .next();
        assert_eq!(first, Some(7));
        assert_eq!(calls, 7);
    }

    #[test]
    fn range_rejects_inverted_bounds() {
        assert_eq!(
            range(10, 1).unwrap_err(),
            DispatchError::InvalidRange { from: 10, to: 1 }
        );
        assert_eq!(range(3, 3).unwrap(), 3..=3);
    }

    #[test]
    fn select_over_full_range_is_lazy() {
        let first: Vec<i64> = select(Condition::Even, i64::MIN, i64::MAX)
            .unwrap()
            .take(3)
            .collect();
        assert_eq!(first, vec![i64::MIN, i64::MIN + 2, i64::MIN + 4]);
    }

    #[test]
    fn select_rejects_inverted_range_before_iterating() {
        assert!(select(Condition::Prime, 2, 1).is_err());
    }

    #[test]
    fn apply_even_over_default_range() {
        let outcome = apply(Condition::Even, 1, 100).unwrap();
        assert_eq!(outcome.count(), 50);
        assert_eq!(outcome.elements.first(), Some(&2));
        assert_eq!(outcome.elements.last(), Some(&100));
        assert_eq!(outcome.condition, "even");
    }

    #[test]
    fn apply_greater_than() {
        let outcome = apply(Condition::GreaterThan(50), 1, 100).unwrap();
        assert_eq!(outcome.elements, (51..=100).collect::<Vec<_>>());
    }

    #[test]
    fn apply_prime() {
        let outcome = apply(Condition::Prime, 1, 100).unwrap();
        assert_eq!(outcome.count(), 25);
        assert_eq!(&outcome.elements[..4], &[2, 3, 5, 7]);
        assert_eq!(outcome.elements.last(), Some(&97));
    }

    #[test]
    fn apply_all_runs_each_condition() {
        let outcomes = apply_all(&Condition::defaults(50), 1, 100).unwrap();
        let counts: Vec<_> = outcomes.iter().map(FilterOutcome::count).collect();
        assert_eq!(counts, vec![50, 50, 50, 25]);
    }

    #[test]
    fn apply_all_propagates_range_error() {
        assert!(apply_all(&[Condition::Odd], 5, 4).is_err());
    }
}
