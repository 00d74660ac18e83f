use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use ctxlog::{Context, args, from_context, new_context_with_logger};

use crate::handlers::{emit::emit_record, health::health_check};
use crate::middleware::{AccessLogLayer, LoggerLayer};

/// Creates the router. Every request gets the logger carried by `ctx`.
pub fn create_router(ctx: &Context) -> Router {
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(LoggerLayer::from_context(ctx))
        .layer(AccessLogLayer);

    Router::new()
        .route("/health", get(health_check))
        .route("/log", post(emit_record))
        .layer(middleware_stack)
}

/// Serves on `listener` until Ctrl+C, SIGTERM, or until `ctx` is cancelled.
pub async fn serve(listener: TcpListener, ctx: Context) -> Result<(), std::io::Error> {
    let (root, cancel) = new_context_with_logger(&ctx);
    let log = from_context(&root);
    let app = create_router(&root);

    let addr = listener.local_addr()?;
    log.info("Server listening", args!["addr", addr.to_string()]);

    let result = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(root.clone()))
        .await;

    cancel.cancel();
    log.info("Server stopped", args![]);
    result
}

async fn shutdown_signal(ctx: Context) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
        _ = ctx.done() => {},
    }

    from_context(&ctx).info("Shutdown signal received", args![]);
}
