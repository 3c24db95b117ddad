//! Async boundary where panics become failure values.
//!
//! Everything else in this crate is exception-free by construction: failures
//! travel as values and the combinators never catch anything. These two
//! functions are the single point where a panicking asynchronous operation
//! is observed and converted into an [`Outcome`]. They never block other
//! work; the caller is suspended only while the wrapped future is pending.
//! Cancellation and timeouts are the caller's concern, not the bridge's — a
//! future that never settles leaves the bridge call suspended.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::outcome::Outcome;

/// Raw panic payload captured at the bridge boundary.
///
/// Delivered verbatim, not wrapped or stringified: a panic payload can be
/// any `Any + Send` value, and downcasting is the caller's call to make.
pub type Caught = Box<dyn Any + Send + 'static>;

/// Runs the deferred asynchronous operation `op`, capturing a panic as a
/// failure.
///
/// Normal completion with `v` yields `Outcome::Ok(v)`; a panic while the
/// future runs yields `Outcome::Err(payload)` with the raw payload passed
/// through untouched. The `AssertUnwindSafe` is sound because the future is
/// consumed here and the payload is surrendered to the caller; no state is
/// observed after the unwind.
///
/// ```
/// # futures::executor::block_on(async {
/// use oxbow::{Outcome, try_catch};
///
/// let outcome = try_catch(|| async { "success" }).await;
/// assert_eq!(outcome, Outcome::Ok("success"));
/// # });
/// ```
pub async fn try_catch<F, Fut, T>(op: F) -> Outcome<T, Caught>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    match AssertUnwindSafe(op()).catch_unwind().await {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            tracing::debug!("captured panic from wrapped async operation");
            Outcome::Err(payload)
        }
    }
}

/// Awaits an already-created `future`, capturing a panic and normalizing the
/// payload through `handler` into the caller's error type.
///
/// Counterpart to [`try_catch`] for when the error type must be fixed at the
/// boundary rather than the raw payload passed through. The two styles are
/// both part of the public contract and deliberately not unified.
pub async fn from_future<Fut, T, E, H>(future: Fut, handler: H) -> Outcome<T, E>
where
    Fut: Future<Output = T>,
    H: FnOnce(Caught) -> E,
{
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            tracing::debug!("captured panic from wrapped future");
            Outcome::Err(handler(payload))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn panic_message(payload: &Caught) -> &str {
        payload
            .downcast_ref::<&str>()
            .copied()
            .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
            .unwrap_or("<non-string panic payload>")
    }

    #[tokio::test]
    async fn normal_completion_is_success() {
        let outcome = try_catch(|| async { "success" }).await;
        assert_eq!(outcome, Outcome::Ok("success"));
    }

    #[tokio::test]
    async fn panic_payload_is_captured_verbatim() {
        let outcome: Outcome<i32, Caught> = try_catch(|| async { panic!("error") }).await;
        match outcome {
            Outcome::Err(payload) => assert_eq!(panic_message(&payload), "error"),
            Outcome::Ok(_) => panic!("expected the panic to be captured"),
        }
    }

    #[tokio::test]
    async fn from_future_passes_value_through() {
        let outcome: Outcome<i32, String> = from_future(async { 7 }, |p| {
            panic_message(&p).to_string()
        })
        .await;
        assert_eq!(outcome, Outcome::Ok(7));
    }

    #[tokio::test]
    async fn from_future_normalizes_the_payload() {
        let outcome: Outcome<i32, String> =
            from_future(async { panic!("disk on fire") }, |p| {
                format!("boundary: {}", panic_message(&p))
            })
            .await;
        assert_eq!(outcome, Outcome::Err("boundary: disk on fire".to_string()));
    }

    #[tokio::test]
    async fn handler_sees_non_string_payloads() {
        let outcome: Outcome<(), u64> = from_future(
            async { std::panic::panic_any(404_u64) },
            |p| p.downcast_ref::<u64>().copied().unwrap_or(0),
        )
        .await;
        assert_eq!(outcome, Outcome::Err(404));
    }
}
