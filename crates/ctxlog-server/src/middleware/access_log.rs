//! Middleware de access log sobre el logger del request.

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Request, Response},
};
use std::{
    task::{Context as TaskContext, Poll},
    time::Instant,
};
use tower::{Layer, Service};
use uuid::Uuid;

use ctxlog::{args, from_context, into_context};

use crate::extract::request_context;

/// Header name for request ID.
pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Layer that tags the request logger and logs request start and completion.
///
/// Must run inside [`LoggerLayer`](super::LoggerLayer) to log through the injected
/// logger; otherwise records go to a default logger.
#[derive(Clone, Default)]
pub struct AccessLogLayer;

impl<S> Layer<S> for AccessLogLayer {
    type Service = AccessLogMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AccessLogMiddleware { inner }
    }
}

/// Middleware that binds `request_id`, `method` and `path` to the request logger.
#[derive(Clone)]
pub struct AccessLogMiddleware<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for AccessLogMiddleware<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let start = Instant::now();

        // Get existing request ID or generate new one
        let request_id = request
            .headers()
            .get(&REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let parent = request_context(&request);
        let logger = from_context(&parent).with(args![
            "request_id",
            request_id.as_str(),
            "method",
            request.method().as_str(),
            "path",
            request.uri().path(),
        ]);
        let ctx = into_context(&parent, logger.clone());
        request.extensions_mut().insert(ctx.clone());

        // The clone may not be ready; call the service that was polled.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        Box::pin(async move {
            logger.debug_context(&ctx, "Request started", args![]);

            let mut response = inner.call(request).await?;

            let status = response.status().as_u16();
            let duration_ms = start.elapsed().as_millis() as u64;
            logger.info_context(
                &ctx,
                "Request completed",
                args!["status", status, "duration_ms", duration_ms],
            );

            if let Ok(value) = HeaderValue::from_str(&request_id) {
                response
                    .headers_mut()
                    .insert(REQUEST_ID_HEADER.clone(), value);
            }

            Ok(response)
        })
    }
}

// Unit tests are in tests/middleware_test.rs to avoid complex type bounds
// with tower::service_fn and async functions.
