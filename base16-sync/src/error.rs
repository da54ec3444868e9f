//! Error types for base16-sync.

use std::path::PathBuf;

use thiserror::Error;

use base16_core::CoreError;
use base16_renderer::RenderError;

/// All errors that can arise from mirroring, building or writing.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Source data (manifest, scheme, config) could not be read.
    #[error("{0}")]
    Core(#[from] CoreError),

    /// A (template unit, scheme) pair failed to render.
    #[error("failed to render {family}/{unit} for scheme '{slug}': {source}")]
    Render {
        family: String,
        unit: String,
        slug: String,
        #[source]
        source: RenderError,
    },

    /// A git command exited non-zero. `stderr` is passed through untouched.
    #[error("`{command}` failed ({status}):\n{stderr}")]
    Git {
        command: String,
        status: String,
        stderr: String,
    },

    /// The git binary could not be executed at all.
    #[error("git executable `{program}` not found: {source}; install git or put it on $PATH")]
    GitNotFound {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output directory from a template config would escape the output root.
    #[error("refusing to write outside the output directory: {path}")]
    UnsafeOutputPath { path: PathBuf },

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error (hash store).
    #[error("hash store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
