//! Error types for base16-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while rendering a template unit.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A body or partial failed to compile.
    #[error("template syntax error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Rendering failed, typically an unknown variable or partial.
    #[error("template render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Filesystem error while reading a body or partial.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}
