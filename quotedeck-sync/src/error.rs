//! Error types for quotedeck-sync.

use std::path::PathBuf;

use thiserror::Error;

use quotedeck_core::StoreError;

/// All errors that can arise from sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the quote store.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// HTTP transport or status failure against the remote endpoint.
    #[error("http error for {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    /// The remote response body could not be decoded.
    #[error("malformed response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error (sync state sidecar).
    #[error("sync state JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}

/// Convenience constructor for [`SyncError::Http`].
pub(crate) fn http_err(url: &str, source: ureq::Error) -> SyncError {
    SyncError::Http {
        url: url.to_string(),
        source: Box::new(source),
    }
}
