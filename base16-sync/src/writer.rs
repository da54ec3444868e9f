//! Atomic, hash-gated writing of build artifacts.
//!
//! Each artifact lands at `<output_dir>/<family>/<dir>/<file>`:
//!
//! 1. Normalise line endings to LF.
//! 2. SHA-256 the content and compare with the hash store → skip if identical.
//! 3. Write `<path>.base16.tmp`, then rename over the final path.
//! 4. Record the new hash; the store is saved once after all artifacts.

use std::path::{Component, Path, PathBuf};

use chrono::Utc;
use serde::Serialize;

use base16_core::BuildResult;

use crate::error::{io_err, SyncError};
use crate::hash_store::{self, HashStore};

/// Outcome of an individual artifact write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written(PathBuf),
    /// Content matches the stored hash; the file was left alone.
    Unchanged(PathBuf),
    /// Dry-run: the file *would* have been written.
    WouldWrite(PathBuf),
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written(p) | WriteResult::Unchanged(p) | WriteResult::WouldWrite(p) => p,
        }
    }

    pub fn changed(&self) -> bool {
        !matches!(self, WriteResult::Unchanged(_))
    }
}

/// `<family>/<dir>/<file>`, rejecting anything that could leave the output root.
pub fn relative_artifact_path(
    family: &str,
    output_dir: &str,
    file_name: &str,
) -> Result<PathBuf, SyncError> {
    let rel = Path::new(family).join(output_dir).join(file_name);
    let escapes = rel
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(SyncError::UnsafeOutputPath { path: rel });
    }
    Ok(rel)
}

/// Write one artifact. The caller saves `store` afterwards.
pub(crate) fn atomic_write(
    output_dir: &Path,
    rel: &Path,
    content: &str,
    store: &mut HashStore,
    dry_run: bool,
) -> Result<WriteResult, SyncError> {
    let path = output_dir.join(rel);
    let content = content.replace("\r\n", "\n");
    let digest = hash_store::digest(&content);

    let key = rel.to_string_lossy().replace('\\', "/");
    if path.exists() && store.get(&key) == Some(&digest) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged(path));
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite(path));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    let tmp = PathBuf::from(format!("{}.base16.tmp", path.display()));
    std::fs::write(&tmp, &content).map_err(|e| io_err(&tmp, e))?;
    if let Err(e) = std::fs::rename(&tmp, &path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(&path, e));
    }

    store.insert(key, digest);
    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written(path))
}

/// Write every artifact of `result` under `output_dir`.
///
/// Different schemes never collide: the file name already carries the slug.
pub fn write_result(
    result: &BuildResult,
    output_dir: &Path,
    dry_run: bool,
) -> Result<Vec<WriteResult>, SyncError> {
    let mut store = hash_store::load_at(output_dir)?;
    let mut writes = Vec::new();

    for artifact in result.artifacts() {
        let rel = relative_artifact_path(artifact.family, artifact.output_dir, artifact.file_name)?;
        writes.push(atomic_write(
            output_dir,
            &rel,
            artifact.text,
            &mut store.files,
            dry_run,
        )?);
    }

    if !dry_run && writes.iter().any(WriteResult::changed) {
        store.written_at = Utc::now();
        hash_store::save_at(output_dir, &store)?;
    }
    Ok(writes)
}
