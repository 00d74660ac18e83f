//! Middleware que inyecta el logger en el contexto de cada request.

use axum::http::Request;
use std::task::{Context as TaskContext, Poll};
use tower::{Layer, Service};

use ctxlog::{Context, Logger, from_context, into_context};

use crate::extract::request_context;

/// Layer that injects a logger into every request's [`Context`].
///
/// The logger is resolved once, when the layer is built, from the ambient context
/// (or a default logger when the ambient context carries none).
#[derive(Clone, Debug)]
pub struct LoggerLayer {
    logger: Logger,
}

impl LoggerLayer {
    /// Captures the logger carried by `ctx`.
    pub fn from_context(ctx: &Context) -> Self {
        Self {
            logger: from_context(ctx),
        }
    }

    /// Uses `logger` directly.
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

/// Shorthand for [`LoggerLayer::from_context`].
pub fn middleware(ctx: &Context) -> LoggerLayer {
    LoggerLayer::from_context(ctx)
}

impl<S> Layer<S> for LoggerLayer {
    type Service = LoggerMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        LoggerMiddleware {
            inner,
            logger: self.logger.clone(),
        }
    }
}

/// Middleware that derives a logger-carrying [`Context`] for each request.
///
/// The derived context is stored in the request extensions, replacing any context
/// an outer layer put there (its other values are kept). The request is otherwise
/// forwarded unchanged.
#[derive(Clone, Debug)]
pub struct LoggerMiddleware<S> {
    inner: S,
    logger: Logger,
}

impl<S, B> Service<Request<B>> for LoggerMiddleware<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        let parent = request_context(&request);

        request
            .extensions_mut()
            .insert(into_context(&parent, self.logger.clone()));

        self.inner.call(request)
    }
}
