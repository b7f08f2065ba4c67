//! Error types for qtremux-core.
//!
//! Fatal conditions (a probe query that cannot be answered, an engine that
//! cannot be launched) surface as `CoreError` values. A remux engine that
//! starts but exits non-zero is not an error here; it is reported through
//! [`crate::RunResult`] and left to the caller to present.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for qtremux
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("required external tool '{0}' not found in PATH")]
    DependencyNotFound(String),

    #[error("failed to start '{tool}': {source}")]
    CommandStart {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("failed waiting for '{tool}': {source}")]
    CommandWait {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("probe query '{query}' failed for '{}': {reason}", path.display())]
    ProbeFailed {
        query: String,
        path: PathBuf,
        reason: String,
    },

    #[error("invalid path: {0}")]
    InvalidPath(String),
}

/// Result type for qtremux operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;

impl CoreError {
    /// Builds a probe error for the given query identity and input path.
    pub(crate) fn probe_failed(
        query: &str,
        path: &std::path::Path,
        reason: impl Into<String>,
    ) -> Self {
        CoreError::ProbeFailed {
            query: query.to_string(),
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
