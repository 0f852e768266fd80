//! Health check endpoints.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)

use axum::http::StatusCode;

/// GET /livez - Basic liveness probe.
///
/// Content is read per request, so there is nothing to warm up or check.
pub async fn livez() -> StatusCode {
    StatusCode::OK
}
