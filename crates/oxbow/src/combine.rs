//! Sequence combination: many outcomes in, one outcome out.

use crate::outcome::Outcome;

/// Collapses an ordered sequence of outcomes into a single outcome.
///
/// Iterates left to right. The first failure wins and is returned as-is;
/// items after it are never pulled from the iterator. If every item
/// succeeds, the success values are collected into a `Vec` preserving input
/// order (empty input gives `Ok` of an empty `Vec`).
///
/// This is strict fail-fast sequencing, not aggregation: there is no partial
/// success and no accumulation of multiple errors.
///
/// ```
/// use oxbow::{Outcome, combine};
///
/// let all: Outcome<Vec<i32>, &str> =
///     combine([Outcome::Ok(1), Outcome::Ok(2), Outcome::Ok(3)]);
/// assert_eq!(all, Outcome::Ok(vec![1, 2, 3]));
///
/// let failed: Outcome<Vec<i32>, &str> =
///     combine([Outcome::Ok(1), Outcome::Err("x"), Outcome::Ok(3)]);
/// assert_eq!(failed, Outcome::Err("x"));
/// ```
pub fn combine<T, E, I>(outcomes: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    outcomes.into_iter().collect()
}

/// Iterator adapter that yields success values and parks the first failure,
/// ending the iteration there.
struct FailFast<'a, I, E> {
    iter: I,
    failure: &'a mut Option<E>,
}

impl<T, E, I> Iterator for FailFast<'_, I, E>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.iter.next() {
            Some(Outcome::Ok(value)) => Some(value),
            Some(Outcome::Err(error)) => {
                *self.failure = Some(error);
                None
            }
            None => None,
        }
    }
}

impl<T, E, V> FromIterator<Outcome<T, E>> for Outcome<V, E>
where
    V: FromIterator<T>,
{
    /// Collects successes into any `FromIterator` target, short-circuiting
    /// on the first failure exactly like [`combine`].
    fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>(iter: I) -> Self {
        let mut failure = None;
        let collected: V = FailFast {
            iter: iter.into_iter(),
            failure: &mut failure,
        }
        .collect();
        match failure {
            Some(error) => Outcome::Err(error),
            None => Outcome::Ok(collected),
        }
    }
}
