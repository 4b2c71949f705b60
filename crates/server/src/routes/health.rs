use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use std::time::SystemTime;

/// Global server start time for uptime calculation
static SERVER_START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Health check endpoint (liveness)
///
/// Purely informational, no side effects: reports the configured records
/// location and whether it is currently readable, along with an XML file
/// count when it is.
pub async fn health_check(State(state): State<Arc<ServerState>>) -> impl IntoResponse {
    let uptime = SERVER_START_TIME
        .elapsed()
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let records = match state.store.list() {
        Ok(files) => json!({ "available": true, "xml_files": files.len() }),
        Err(err) => json!({ "available": false, "error": err.to_string() }),
    };

    Json(json!({
        "status": "ok",
        "service": "ccda-server",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "uptime_seconds": uptime,
        "records_path": state.store.root(),
        "records": records,
    }))
}
