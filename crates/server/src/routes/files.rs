use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures::stream::{self, StreamExt};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

/// Per-file extraction fan-out width for the listing endpoint.
const CONCURRENCY: usize = 8;

/// Characters escaped in the retrieval reference path segment. Everything a
/// URI path segment cannot carry raw, so list → retrieve round-trips for
/// names with spaces and the like.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// One entry in the document listing: the document plus its derived display
/// metadata. Recomputed on every request.
#[derive(Debug, Serialize)]
pub struct FileEntry {
    /// Filename within the records directory
    pub name: String,
    /// Retrieval reference for fetching this document
    pub path: String,
    /// Filename with the extension stripped and underscores as spaces
    pub display_name: String,
    /// Patient display name, `"Unknown Patient"` when unresolvable
    pub patient_name: String,
    /// Most recent encounter date, ISO `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encounter_date: Option<String>,
    /// Long-form encounter date, `"Unknown Date"` when unresolvable
    pub date_formatted: String,
}

fn build_entry(state: &ServerState, name: String) -> FileEntry {
    // Metadata failures never remove a document from the listing: an
    // unreadable or malformed file gets the default placeholders.
    let metadata = match state.store.read(&name) {
        Ok(content) => ccda::extract_metadata(&content),
        Err(err) => {
            debug!(file = %name, error = %err, "using default metadata for unreadable file");
            ccda::DocumentMetadata::default()
        }
    };

    FileEntry {
        path: format!("/api/file/{}", utf8_percent_encode(&name, PATH_SEGMENT)),
        display_name: records::display_name(&name),
        patient_name: metadata.patient_name,
        encounter_date: metadata.encounter_date,
        date_formatted: metadata.date_formatted,
        name,
    }
}

/// List C-CDA documents (GET /api/files)
///
/// One [`FileEntry`] per `.xml` file in the records directory. Extraction
/// runs concurrently but the response preserves the lister's enumeration
/// order, and one file's failure never fails the listing. Only a lister
/// failure produces an error response, and that response still carries an
/// empty `files` collection.
pub async fn list_files(State(state): State<Arc<ServerState>>) -> Response {
    let names = match state.store.list() {
        Ok(names) => names,
        Err(err) => {
            error!(error = %err, "Error reading medical records directory");
            let server_err = ServerError::from(err);
            let body = Json(json!({
                "error": {
                    "code": server_err.error_code(),
                    "message": server_err.to_string(),
                },
                "files": [],
            }));
            return (StatusCode::INTERNAL_SERVER_ERROR, body).into_response();
        }
    };

    // buffered() keeps results in input order, so each filename maps to its
    // own entry regardless of completion order.
    let entries: Vec<FileEntry> = stream::iter(names.into_iter().map(|name| {
        let state = state.clone();
        async move { build_entry(&state, name) }
    }))
    .buffered(CONCURRENCY)
    .collect()
    .await;

    Json(entries).into_response()
}

/// Retrieve a document verbatim (GET /api/file/{filename})
///
/// The filename is percent-decoded by the router; the records guard rejects
/// anything resolving outside the directory before any file content is read.
pub async fn get_file(
    State(state): State<Arc<ServerState>>,
    Path(filename): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let content = state.store.read(&filename)?;

    Ok((
        [(header::CONTENT_TYPE, "application/xml")],
        content,
    ))
}
