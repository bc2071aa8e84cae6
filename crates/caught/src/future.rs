//! Adapters for asynchronous operations.
//!
//! Both adapters only observe an operation until it settles. They add no
//! timeout, retry or cancellation of their own.

use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;
use tokio::task::JoinHandle;

use crate::outcome::Outcome;
use crate::thrown::{BoxError, Thrown};

/// Awaits `operation` and turns its settlement into an [`Outcome`].
///
/// `Ok(v)` becomes a success. `Err(e)` is normalized like a thrown value:
/// native errors keep their message, [`Thrown::Value`] is reported as an
/// unknown error. A panic while polling `operation` is captured the same
/// way as in [`wrap_sync`](crate::wrap_sync).
///
/// Works on any executor.
///
/// ```rust
/// use caught::{Thrown, wrap_async};
/// use std::io;
///
/// # futures::executor::block_on(async {
/// let ok = wrap_async(async { Ok::<_, Thrown>("x") }).await;
/// assert_eq!(ok.into_value(), Some("x"));
///
/// let native = wrap_async(async { Err::<(), _>(io::Error::other("failure")) }).await;
/// assert_eq!(native.into_error().as_deref(), Some("failure"));
///
/// let other = wrap_async(async { Err::<(), _>(Thrown::value("failure")) }).await;
/// assert_eq!(
///     other.into_error().as_deref(),
///     Some("An unknown error occurred: failure")
/// );
/// # });
/// ```
pub async fn wrap_async<Fut, T, E>(operation: Fut) -> Outcome<T>
where
    Fut: Future<Output = Result<T, E>>,
    E: Into<Thrown>,
{
    match AssertUnwindSafe(operation).catch_unwind().await {
        Ok(Ok(value)) => Outcome::success(value),
        Ok(Err(error)) => {
            let thrown: Thrown = error.into();
            thrown.into_failure("async")
        }
        Err(payload) => Thrown::from_panic(payload).into_failure("async"),
    }
}

/// Awaits an already spawned tokio task.
///
/// A task that panicked is reported through its panic payload, exactly as
/// [`wrap_sync`](crate::wrap_sync) reports a panic. A task that was
/// aborted by its owner fails with tokio's cancellation message.
///
/// Dropping the returned future detaches the task; it is never aborted
/// from here.
pub async fn wrap_task<T>(task: JoinHandle<T>) -> Outcome<T> {
    match task.await {
        Ok(value) => Outcome::success(value),
        Err(join_error) => match join_error.try_into_panic() {
            Ok(payload) => Thrown::from_panic(payload).into_failure("task"),
            Err(join_error) => {
                let error: BoxError = join_error.to_string().into();
                Thrown::boxed(error).into_failure("task")
            }
        },
    }
}
