use axum::Json;
use serde::Serialize;

use ctxlog::args;

use crate::extract::RequestLogger;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "UP".to_string(),
        }
    }
}

pub async fn health_check(RequestLogger(log): RequestLogger) -> Json<HealthResponse> {
    log.debug("Health check", args![]);
    Json(HealthResponse::default())
}
