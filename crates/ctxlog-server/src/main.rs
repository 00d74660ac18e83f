//! ctxlog demo server binary.

use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use ctxlog::{Context, LogConfig, Logger, args, into_context};
use ctxlog_server::{ServerSettings, serve};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Framework diagnostics (tower-http, ctxlog write failures)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = LogConfig::from_env()?;
    let log = Logger::named("ctxlog-server", &config);

    log.infof(format_args!(
        "Starting ctxlog server v{}",
        env!("CARGO_PKG_VERSION")
    ));
    log.debug(
        "Log configuration",
        args!["format", format!("{:?}", config.format), "level", config.level.as_str()],
    );

    let settings = match ServerSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => log.fatal("Invalid server settings", args!["error", e.to_string()]),
    };
    let addr = match settings.addr() {
        Ok(addr) => addr,
        Err(e) => log.fatal("Invalid bind address", args!["error", e.to_string()]),
    };
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => log.fatal(
            "Failed to bind listener",
            args!["addr", addr.to_string(), "error", e.to_string()],
        ),
    };

    let ctx = into_context(&Context::background(), log);
    serve(listener, ctx).await?;

    Ok(())
}
