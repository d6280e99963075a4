use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    /// Empty or malformed request path, or one that left the sandbox
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Filesystem failure other than the file simply being absent
    #[error("I/O error on '{path}': {source}")]
    Internal {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        ResolveError::InvalidPath(message.into())
    }

    pub(crate) fn internal(path: &Path, source: std::io::Error) -> Self {
        ResolveError::Internal {
            path: lms_utils::normalize_path(path),
            source,
        }
    }
}
