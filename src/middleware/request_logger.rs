//! Request logging middleware for API request/response logging.

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::StatusCode;
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

use crate::config::{USER_EMAIL_HEADER, USER_ROLES_HEADER};

/// Request logger middleware factory.
pub struct RequestLogger;

impl<S, B> Transform<S, ServiceRequest> for RequestLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggerMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggerMiddleware { service }))
    }
}

/// Request logger middleware service.
pub struct RequestLoggerMiddleware<S> {
    service: S,
}

/// Request line fields carried from request start to completion.
struct RequestLine {
    method: String,
    path: String,
    started: Instant,
}

impl RequestLine {
    fn complete(&self, status: StatusCode) {
        let elapsed: Duration = self.started.elapsed();
        let (method, path, status_code) = (&self.method, &self.path, status.as_u16());

        if status.is_server_error() {
            error!(
                target: "api",
                method = %method,
                path = %path,
                status = %status_code,
                duration_ms = %elapsed.as_millis(),
                "← Server error"
            );
        } else if status.is_client_error() {
            warn!(
                target: "api",
                method = %method,
                path = %path,
                status = %status_code,
                duration_ms = %elapsed.as_millis(),
                "← Client error"
            );
        } else {
            info!(
                target: "api",
                method = %method,
                path = %path,
                status = %status_code,
                duration_ms = %elapsed.as_millis(),
                "← Request completed"
            );
        }
    }
}

impl<S, B> Service<ServiceRequest> for RequestLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let line = RequestLine {
            method: req.method().to_string(),
            path: req.path().to_string(),
            started: Instant::now(),
        };
        let remote_addr = req
            .connection_info()
            .realip_remote_addr()
            .unwrap_or("unknown")
            .to_string();

        // Whether an identity was forwarded is logged, the email is not
        let has_identity = req.headers().contains_key(USER_EMAIL_HEADER);
        let roles = req
            .headers()
            .get(USER_ROLES_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("none")
            .to_string();

        info!(
            target: "api",
            method = %line.method,
            path = %line.path,
            query = %req.query_string(),
            remote_addr = %remote_addr,
            has_identity = has_identity,
            roles = %roles,
            "→ Request started"
        );

        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            line.complete(res.status());
            Ok(res)
        })
    }
}
