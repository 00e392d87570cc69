//! Error types for quotedeck-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from validation, store, and import operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (write/save path).
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON parse error on load — includes the offending file path.
    #[error("failed to parse quote store at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The import document is not valid JSON or not a JSON array.
    #[error("import file {path} is not a JSON array of quote records")]
    MalformedImport { path: PathBuf },

    /// A quote field failed boundary validation.
    #[error("quote {field} must not be empty")]
    EmptyField { field: &'static str },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.quotedeck/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}

/// Convenience constructor for [`StoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.into(),
        source,
    }
}
