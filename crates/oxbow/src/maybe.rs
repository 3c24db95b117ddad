//! Presence/absence container, the optional half of the two-track pair.

use crate::outcome::Outcome;

/// Two-variant container representing a value that may be absent.
///
/// Same contract as [`Outcome`]: immutable, structural equality, combinators
/// consume `self` and return fresh values. Absence carries no payload, so
/// converting an absent value onto the failure track requires the caller to
/// supply the error (see [`Maybe::ok_or`]).
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Maybe<T> {
    /// A value is present.
    Some(T),
    /// No value.
    #[default]
    None,
}

impl<T> Maybe<T> {
    /// Returns `true` if a value is present.
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Transforms the contained value, passing absence through.
    ///
    /// `f` runs at most once and never when absent.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Returns the contained value, or `default` verbatim when absent.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    /// Converts to [`Outcome`], synthesizing `error` for the absent case.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        match self {
            Self::Some(value) => Outcome::Ok(value),
            Self::None => Outcome::Err(error),
        }
    }

    /// Borrows the payload without consuming the container.
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }
}
