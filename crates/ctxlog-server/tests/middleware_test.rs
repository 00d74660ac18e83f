//! Tests de middleware.

mod helpers;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
    routing::get,
};
use ctxlog::{Context, LogConfig, Logger, Sink, has_logger, into_context};
use ctxlog_server::{AccessLogLayer, LoggerLayer, RequestContext, RequestLogger, middleware};
use std::convert::Infallible;
use std::future::{Ready, ready};
use std::task::{Context as TaskContext, Poll};
use tower::{Layer, Service, ServiceExt};
use helpers::{TestClient, buffered_context, client, records};
use uuid::Uuid;

async fn inspect(RequestContext(ctx): RequestContext) -> String {
    has_logger(&ctx).to_string()
}

// === Logger injection ===

#[tokio::test]
async fn handler_sees_logger_when_upstream_has_one() {
    let (ctx, _) = buffered_context();
    let app = Router::new()
        .route("/inspect", get(inspect))
        .layer(LoggerLayer::from_context(&ctx));

    let response = TestClient::new(app).get("/inspect").await;

    assert_eq!(response.text(), "true");
}

#[tokio::test]
async fn handler_sees_logger_when_upstream_has_none() {
    let app = Router::new()
        .route("/inspect", get(inspect))
        .layer(middleware(&Context::background()));

    let response = TestClient::new(app).get("/inspect").await;

    assert_eq!(response.text(), "true");
}

#[tokio::test]
async fn handler_uses_upstream_logger() {
    let (sink, buffer) = Sink::buffer();
    let logger = Logger::with_handler(LogConfig::from_vars("TEXT", "INFO").handler_with_sink(sink));
    let ctx = into_context(&Context::background(), logger);

    let app = Router::new()
        .route(
            "/hello",
            get(|RequestLogger(log): RequestLogger| async move {
                log.info("hello from handler", ctxlog::args!["user", "ana"]);
                "ok"
            }),
        )
        .layer(middleware(&ctx));

    TestClient::new(app).get("/hello").await;

    assert!(buffer.contents().contains("hello from handler user=ana"));
}

#[tokio::test]
async fn extractors_fall_back_without_middleware() {
    let app = Router::new().route(
        "/bare",
        get(|RequestContext(ctx): RequestContext, RequestLogger(_log): RequestLogger| async move {
            has_logger(&ctx).to_string()
        }),
    );

    let response = TestClient::new(app).get("/bare").await;

    assert_eq!(response.text(), "false");
}

// === Access log / Request ID ===

#[tokio::test]
async fn response_includes_request_id() {
    let (client, _) = client();

    let response = client.get("/health").await;

    response.assert_header_exists("x-request-id");
    let id = response.header("x-request-id").unwrap();
    assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
}

#[tokio::test]
async fn propagates_incoming_request_id() {
    let (client, buffer) = client();
    let custom_id = "my-custom-request-id-12345";

    let response = client
        .get_with_headers("/health", vec![("x-request-id", custom_id)])
        .await;

    assert_eq!(response.header("x-request-id"), Some(custom_id));
    assert!(
        records(&buffer)
            .iter()
            .all(|r| r["request_id"] == custom_id)
    );
}

#[tokio::test]
async fn access_log_records_start_and_completion() {
    let (client, buffer) = client();

    client.get("/health").await;

    let out = records(&buffer);
    let started = out.iter().find(|r| r["msg"] == "Request started").unwrap();
    let completed = out.iter().find(|r| r["msg"] == "Request completed").unwrap();

    assert_eq!(started["level"], "DEBUG");
    assert_eq!(started["method"], "GET");
    assert_eq!(completed["level"], "INFO");
    assert_eq!(completed["status"], 200);
    assert!(completed["duration_ms"].is_u64());
    assert_eq!(started["request_id"], completed["request_id"]);
}

#[tokio::test]
async fn generates_different_ids_for_each_request() {
    let (client, _) = client();

    let first = client.get("/health").await;
    let second = client.get("/health").await;

    assert_ne!(first.header("x-request-id"), second.header("x-request-id"));
}

// === Service readiness ===

/// Answers 200 only when called on the instance that was polled ready.
/// Clones start out not ready.
#[derive(Default)]
struct ReadyOnce {
    ready: bool,
}

impl Clone for ReadyOnce {
    fn clone(&self) -> Self {
        Self { ready: false }
    }
}

impl Service<Request<Body>> for ReadyOnce {
    type Response = Response<Body>;
    type Error = Infallible;
    type Future = Ready<Result<Response<Body>, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.ready = true;
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _request: Request<Body>) -> Self::Future {
        let status = if std::mem::take(&mut self.ready) {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };
        let mut response = Response::new(Body::empty());
        *response.status_mut() = status;
        ready(Ok(response))
    }
}

#[tokio::test]
async fn access_log_calls_the_service_it_polled() {
    let service = AccessLogLayer.layer(ReadyOnce::default());

    let response = service.oneshot(Request::new(Body::empty())).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
