//! Extractors for the request-scoped context and logger.

use axum::{
    extract::FromRequestParts,
    http::{Request, request::Parts},
};
use std::convert::Infallible;

use ctxlog::{Context, Logger, from_context};

/// The request's [`Context`], or a background context when no middleware set one.
#[derive(Debug, Clone)]
pub struct RequestContext(pub Context);

/// The logger carried by the request's [`Context`], or a default logger.
#[derive(Debug, Clone)]
pub struct RequestLogger(pub Logger);

/// Returns the context stored in `request`, or a background context.
pub fn request_context<B>(request: &Request<B>) -> Context {
    request
        .extensions()
        .get::<Context>()
        .cloned()
        .unwrap_or_default()
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(
            parts.extensions.get::<Context>().cloned().unwrap_or_default(),
        ))
    }
}

impl<S> FromRequestParts<S> for RequestLogger
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(from_context(parts.extensions.get::<Context>())))
    }
}
