//! # Oxbow
//!
//! Two-track value containers for code that treats failure and absence as
//! ordinary values instead of panics or sentinels.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxbow::prelude::*;
//!
//! fn parse_port(raw: &str) -> Outcome<u16, String> {
//!     match raw.parse::<u16>() {
//!         Ok(port) => Outcome::validate(port, |p| *p != 0, "port 0 is reserved".into()),
//!         Err(e) => Outcome::Err(e.to_string()),
//!     }
//! }
//!
//! let ports: Outcome<Vec<u16>, String> =
//!     combine(["80", "443"].iter().map(|raw| parse_port(raw)));
//! assert_eq!(ports, Outcome::Ok(vec![80, 443]));
//! ```
//!
//! ## What's here
//!
//! - [`Outcome`] — success-with-value or failure-with-error, with `map` /
//!   `map_err` / `and_then` / `validate` combinators.
//! - [`Maybe`] — presence or absence, with `map` / `unwrap_or` / `ok_or`.
//! - [`combine`] — fail-fast sequencing of many outcomes into one.
//! - [`try_catch`] / [`from_future`] — the async bridge: the single boundary
//!   where a panicking asynchronous operation becomes an `Err` value.
//!
//! Everything except the bridge is synchronous and pure. The crate never
//! prints, never panics outside tests, and imposes no trait bound on the
//! error type.

pub mod bridge;
pub mod combine;
pub mod maybe;
pub mod outcome;

mod convert;

/// Success/failure container.
pub use outcome::Outcome;

/// Presence/absence container.
pub use maybe::Maybe;

/// Fail-fast sequencing of outcomes.
pub use combine::combine;

/// Async panic-capture bridge.
pub use bridge::{Caught, from_future, try_catch};

/// Convenient prelude with everything you need.
pub mod prelude {
    pub use super::{Caught, Maybe, Outcome, combine, from_future, try_catch};
}
