use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::{
        header::{HeaderName, HeaderValue},
        Method,
    },
    Error, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::rc::Rc;
use uuid::Uuid;

use crate::config::ErrorConfig;
use crate::handlers::error::{error_middleware, ApiError};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request id stored in the request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestId(pub String);

/// Outer error layer.
///
/// Tags every request with an id, logs failures, and rewrites error
/// responses that did not come through [`error_middleware`] into the
/// uniform JSON body.
#[derive(Debug, Clone, Default)]
pub struct ErrorMiddleware {
    config: Rc<ErrorConfig>,
}

impl ErrorMiddleware {
    pub fn new(config: ErrorConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = ErrorMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorMiddlewareService {
            service: Rc::new(service),
            config: Rc::clone(&self.config),
        }))
    }
}

pub struct ErrorMiddlewareService<S> {
    service: Rc<S>,
    config: Rc<ErrorConfig>,
}

impl<S, B> Service<ServiceRequest> for ErrorMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let config = Rc::clone(&self.config);

        // Generate or extract request ID
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        req.extensions_mut().insert(RequestId(request_id.clone()));

        let method = req.method().clone();
        let path = req.path().to_string();
        // Kept to build a response when the inner service fails outright
        let http_req = req.request().clone();

        Box::pin(async move {
            let res = match service.call(req).await {
                Ok(res) => res,
                Err(err) => {
                    let api_error = ApiError::from_actix(&err);
                    log_failure(&config, &request_id, &method, &path, &api_error);
                    let mut res = ServiceResponse::new(http_req, error_middleware(api_error))
                        .map_into_right_body();
                    echo_request_id(&config, &request_id, &mut res);
                    return Ok(res);
                }
            };

            let rewritten = match res.response().error() {
                None => None,
                Some(err) => {
                    let api_error = ApiError::from_actix(err);
                    log_failure(&config, &request_id, &method, &path, &api_error);
                    err.as_error::<ApiError>().is_none().then_some(api_error)
                }
            };

            let mut res = match rewritten {
                None => res.map_into_left_body(),
                Some(api_error) => {
                    let (req, _) = res.into_parts();
                    ServiceResponse::new(req, error_middleware(api_error)).map_into_right_body()
                }
            };

            echo_request_id(&config, &request_id, &mut res);
            Ok(res)
        })
    }
}

fn echo_request_id<B>(config: &ErrorConfig, request_id: &str, res: &mut ServiceResponse<B>) {
    if config.echo_request_id {
        if let Ok(value) = HeaderValue::from_str(request_id) {
            res.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }
    }
}

fn log_failure(config: &ErrorConfig, request_id: &str, method: &Method, path: &str, error: &ApiError) {
    let status = error.status_code();
    if status.is_server_error() {
        log::error!(
            "Request {} {} {} failed with {}: {:?}",
            request_id,
            method,
            path,
            status.as_u16(),
            error.inner()
        );
    } else if config.log_client_errors {
        log::warn!(
            "Request {} {} {} rejected with {}: {}",
            request_id,
            method,
            path,
            status.as_u16(),
            error
        );
    }
}

/// Extension trait to read the request id set by [`ErrorMiddleware`]
pub trait RequestIdExt {
    fn request_id(&self) -> Option<String>;
}

impl RequestIdExt for ServiceRequest {
    fn request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.0.clone())
    }
}

impl RequestIdExt for HttpRequest {
    fn request_id(&self) -> Option<String> {
        self.extensions().get::<RequestId>().map(|id| id.0.clone())
    }
}
