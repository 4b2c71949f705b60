//! API route handlers
//!
//! - `health`: liveness and records directory status
//! - `files`: document listing and guarded retrieval

pub mod files;
pub mod health;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info (GET /)
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "C-CDA Records Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/files",
            "/api/file/{filename}",
            "/health"
        ]
    })))
}

/// 404 Not Found handler for undefined routes
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
