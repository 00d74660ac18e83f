//! Endpoint that writes a record through the request logger.

use axum::{Json, http::StatusCode};
use serde::Deserialize;

use ctxlog::{Level, Value, from_context};

use crate::error::AppError;
use crate::extract::RequestContext;

/// Body of `POST /log`.
#[derive(Debug, Deserialize)]
pub struct EmitRequest {
    pub level: String,
    pub message: String,
    #[serde(default)]
    pub attrs: serde_json::Map<String, Value>,
}

/// Writes one record at the requested level.
///
/// Unknown levels are rejected with 400. Fatal and Panic are rejected as well: a
/// client must not be able to stop the server.
pub async fn emit_record(
    RequestContext(ctx): RequestContext,
    Json(request): Json<EmitRequest>,
) -> Result<StatusCode, AppError> {
    let level: Level = request.level.parse()?;
    if level >= Level::Fatal {
        return Err(AppError::BadRequest(format!(
            "Level {} cannot be emitted remotely",
            level
        )));
    }

    let args = request
        .attrs
        .into_iter()
        .flat_map(|(key, value)| [Value::String(key), value])
        .collect();

    from_context(&ctx).log(&ctx, level, &request.message, args);

    Ok(StatusCode::ACCEPTED)
}
