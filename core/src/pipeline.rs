//! Async boundary between route handlers and the error pipeline.

use std::future::Future;

/// Await a handler's result and hand any failure to `next`.
///
/// On success the value is returned untouched and `next` is never called.
/// On failure `next` receives the error exactly once and its output is
/// returned as the `Err` arm; producing a response is left to `next`.
pub async fn route_failure<Fut, T, E, N, R>(handler: Fut, next: N) -> Result<T, R>
where
    Fut: Future<Output = Result<T, E>>,
    N: FnOnce(E) -> R,
{
    match handler.await {
        Ok(value) => Ok(value),
        Err(error) => {
            tracing::debug!("handler failed, forwarding to the error pipeline");
            Err(next(error))
        }
    }
}
