//! Success/failure container and its combinators.

use crate::maybe::Maybe;

/// Two-variant container representing success with a value or failure with
/// an error.
///
/// The error type `E` is deliberately unconstrained: anything the caller
/// wants to carry on the failure track is legal, not just `std::error::Error`
/// implementors. Every combinator consumes `self` and returns a fresh value;
/// nothing is ever mutated in place.
///
/// Failures are values here, never panics. The only place a panic is turned
/// into an [`Outcome`] is the async bridge in [`crate::bridge`]; closures
/// handed to the combinators on this type are expected not to panic, and if
/// they do the panic propagates raw.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<T, E> {
    /// Success, carrying exactly one value.
    Ok(T),
    /// Failure, carrying exactly one error value.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if this is the success variant.
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is the failure variant.
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    /// Transforms the success value, passing a failure through untouched.
    ///
    /// `f` runs at most once and never on the failure track.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(f(value)),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Transforms the error value, passing a success through untouched.
    ///
    /// Dual of [`Outcome::map`]: `f` runs at most once and never on the
    /// success track.
    pub fn map_err<F, O>(self, f: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// Chains a fallible step onto a success, passing a failure through.
    ///
    /// `f` returns an [`Outcome`] itself and its result is returned directly,
    /// so fallible steps compose without double-wrapping. The step's error
    /// type must match the outer error type.
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Admits `value` onto the success track if `predicate` accepts it,
    /// otherwise fails with `error`.
    ///
    /// The predicate is called exactly once.
    pub fn validate<P>(value: T, predicate: P, error: E) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Ok(value)
        } else {
            Self::Err(error)
        }
    }

    /// Converts to [`Maybe`], keeping the success value and discarding the
    /// error.
    ///
    /// The error payload is unrecoverable after this conversion.
    pub fn ok(self) -> Maybe<T> {
        match self {
            Self::Ok(value) => Maybe::Some(value),
            Self::Err(_) => Maybe::None,
        }
    }

    /// Converts to [`Maybe`] over the error, discarding the success value.
    pub fn err(self) -> Maybe<E> {
        match self {
            Self::Ok(_) => Maybe::None,
            Self::Err(error) => Maybe::Some(error),
        }
    }

    /// Borrows the payload without consuming the container.
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(error) => Outcome::Err(error),
        }
    }

    /// Returns the success value, or `default` verbatim on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }
}
