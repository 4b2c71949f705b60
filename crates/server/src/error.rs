use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use records::RecordsError;
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// Each variant keeps its own HTTP status and machine-readable code so
/// distinct failure kinds are never merged into a generic response body. In
/// particular `AccessDenied` stays distinct from `NotFound`: an out-of-bounds
/// request must not learn whether its target exists.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("unable to read medical records directory: {0}")]
    DirectoryUnavailable(String),

    #[error("access denied")]
    AccessDenied,

    #[error("file not found")]
    NotFound,

    #[error("unable to read file: {0}")]
    ReadFailure(String),

    #[error("internal server error: {0}")]
    Internal(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::AccessDenied => StatusCode::FORBIDDEN,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::DirectoryUnavailable(_)
            | ServerError::ReadFailure(_)
            | ServerError::Internal(_)
            | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::DirectoryUnavailable(_) => "DIRECTORY_UNAVAILABLE",
            ServerError::AccessDenied => "ACCESS_DENIED",
            ServerError::NotFound => "NOT_FOUND",
            ServerError::ReadFailure(_) => "READ_FAILURE",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "error": {
                "code": self.error_code(),
                "message": self.to_string(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<RecordsError> for ServerError {
    fn from(err: RecordsError) -> Self {
        match err {
            RecordsError::DirectoryUnavailable { source } => {
                ServerError::DirectoryUnavailable(source.to_string())
            }
            RecordsError::AccessDenied => ServerError::AccessDenied,
            RecordsError::NotFound => ServerError::NotFound,
            RecordsError::Read { source } => ServerError::ReadFailure(source.to_string()),
            _ => ServerError::Internal(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
