//! Error types for base16-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while reading source data from disk.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Underlying I/O failure, annotated with the path being accessed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error: includes file path and line context from serde_yaml.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// A required key was absent from a scheme file.
    #[error("{path}: missing required key `{key}`")]
    MissingKey { path: PathBuf, key: String },

    /// A `baseXX` entry was not exactly six hex digits.
    #[error("{path}: `{key}` is not a 6-digit hex color: {value:?}")]
    InvalidColor {
        path: PathBuf,
        key: String,
        value: String,
    },

    /// A family or template unit name is not a single plain path component.
    #[error("{path}: `{name}` is not a plain directory or file name")]
    UnsafeName { path: PathBuf, name: String },

    /// Neither `list.yaml` nor `list.yml` exists in a sources mirror.
    #[error("no list.yaml or list.yml manifest in {dir}")]
    ManifestNotFound { dir: PathBuf },
}

/// Convenience constructor for [`CoreError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CoreError {
    CoreError::Io {
        path: path.into(),
        source,
    }
}

/// Read a file and parse it as YAML, attaching the path to any failure.
pub(crate) fn read_yaml<T>(path: &std::path::Path) -> Result<T, CoreError>
where
    T: serde::de::DeserializeOwned,
{
    let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    serde_yaml::from_str(&contents).map_err(|source| CoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
