use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lms_resolver::ResolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Not found")]
    NotFound,

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ResolveError> for ApiError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::InvalidPath(msg) => {
                tracing::debug!("serve_upload: rejected path: {}", msg);
                ApiError::InvalidPath(msg)
            }
            ResolveError::Internal { path, source } => {
                tracing::error!("serve_upload: I/O error on '{}': {}", path, source);
                ApiError::InternalError(source.kind().to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidPath(msg) => (StatusCode::BAD_REQUEST, format!("Invalid path: {}", msg)),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "File not found".to_string()),
            ApiError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status, message).into_response()
    }
}
