//! Handler adapter that routes failures into the error pipeline.

use actix_web::{Either, Handler, HttpResponse, Responder};
use errpipe_core::pipeline::route_failure;
use futures_util::future::LocalBoxFuture;

use super::error::{error_middleware, ApiError};

/// Wraps a fallible handler so its errors become uniform error responses.
///
/// Success values pass through untouched. A failure is handed to
/// [`error_middleware`] exactly once.
///
/// ```ignore
/// web::get().to(catch_async_error(get_user))
/// ```
#[derive(Clone)]
pub struct CatchAsyncError<F> {
    handler: F,
}

/// Wrap `handler` in a [`CatchAsyncError`]
pub fn catch_async_error<F>(handler: F) -> CatchAsyncError<F> {
    CatchAsyncError { handler }
}

impl<F, Args, R, E> Handler<Args> for CatchAsyncError<F>
where
    F: Handler<Args, Output = Result<R, E>>,
    F::Future: 'static,
    R: Responder + 'static,
    E: Into<ApiError> + 'static,
{
    type Output = Either<R, HttpResponse>;
    type Future = LocalBoxFuture<'static, Self::Output>;

    fn call(&self, args: Args) -> Self::Future {
        let handler = self.handler.call(args);

        Box::pin(async move {
            match route_failure(handler, |err: E| error_middleware(err)).await {
                Ok(responder) => Either::Left(responder),
                Err(response) => Either::Right(response),
            }
        })
    }
}
