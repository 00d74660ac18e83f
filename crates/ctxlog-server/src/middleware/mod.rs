//! Middleware stack para el servidor HTTP.
//!
//! - `LoggerLayer`: pone el logger en el `Context` de cada request
//! - `AccessLogLayer`: asigna X-Request-Id y registra inicio/fin de cada request

mod access_log;
mod inject;

pub use access_log::{AccessLogLayer, AccessLogMiddleware, REQUEST_ID_HEADER};
pub use inject::{LoggerLayer, LoggerMiddleware, middleware};
