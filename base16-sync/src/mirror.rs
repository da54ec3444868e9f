//! Local mirrors of remote git repositories.
//!
//! [`GitRepo::ensure_present`] clones when nothing (or a different repository)
//! occupies the path. [`GitRepo::ensure_current`] additionally pulls when the
//! mirror was already there. In dry-run mode neither touches the filesystem,
//! but both still report what they would have done.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{io_err, SyncError};
use crate::git::Git;

/// What a mirror operation did, or would have done in dry-run mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorAction {
    /// The right repository was already checked out; nothing was done.
    Present,
    Cloned,
    /// A different repository was removed and the requested one cloned.
    Replaced,
    Pulled,
    WouldClone,
    WouldReplace,
    WouldPull,
}

impl MirrorAction {
    pub fn is_dry_run(self) -> bool {
        matches!(
            self,
            MirrorAction::WouldClone | MirrorAction::WouldReplace | MirrorAction::WouldPull
        )
    }
}

/// Outcome of one mirror operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MirrorReport {
    pub remote: String,
    pub path: PathBuf,
    /// The parent directory was (or would have been) created.
    pub created_parent: bool,
    pub action: MirrorAction,
}

impl MirrorReport {
    /// Any filesystem mutation happened, or would have.
    pub fn changed(&self) -> bool {
        self.created_parent || self.action != MirrorAction::Present
    }
}

/// A remote repository and the local path it is mirrored to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitRepo {
    remote: String,
    path: PathBuf,
}

impl GitRepo {
    pub fn new(remote: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        GitRepo {
            remote: remote.into(),
            path: path.into(),
        }
    }

    pub fn remote(&self) -> &str {
        &self.remote
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn git_config_path(&self) -> PathBuf {
        self.path.join(".git").join("config")
    }

    /// The `origin` URL recorded in the mirror's `.git/config`, if any.
    pub fn recorded_remote(&self) -> Option<String> {
        let config = std::fs::read_to_string(self.git_config_path()).ok()?;
        origin_url(&config)
    }

    /// A repository with the same `origin` URL is checked out at the path.
    pub fn is_present(&self) -> bool {
        self.recorded_remote().as_deref() == Some(self.remote.as_str())
    }

    /// Clone unless the same repository is already at the path.
    ///
    /// A different repository at the path is removed first, never merged.
    pub fn ensure_present(&self, git: &Git, dry_run: bool) -> Result<MirrorReport, SyncError> {
        let mut report = MirrorReport {
            remote: self.remote.clone(),
            path: self.path.clone(),
            created_parent: false,
            action: MirrorAction::Present,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                report.created_parent = true;
                if dry_run {
                    tracing::info!("[dry-run] would create {}", parent.display());
                } else {
                    std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
                    tracing::info!("created {}", parent.display());
                }
            }
        }

        if self.is_present() {
            tracing::debug!("mirror present: {}", self.path.display());
            return Ok(report);
        }

        let occupied = self.path.join(".git").exists();
        if dry_run {
            report.action = if occupied {
                MirrorAction::WouldReplace
            } else {
                MirrorAction::WouldClone
            };
            tracing::info!("[dry-run] would clone {} into {}", self.remote, self.path.display());
            return Ok(report);
        }

        if occupied {
            tracing::info!("replacing different repository at {}", self.path.display());
            std::fs::remove_dir_all(&self.path).map_err(|e| io_err(&self.path, e))?;
        }
        git.clone_repo(&self.remote, &self.path)?;
        tracing::info!("cloned {} into {}", self.remote, self.path.display());

        report.action = if occupied {
            MirrorAction::Replaced
        } else {
            MirrorAction::Cloned
        };
        Ok(report)
    }

    /// [`ensure_present`](Self::ensure_present), then pull if nothing was cloned.
    pub fn ensure_current(&self, git: &Git, dry_run: bool) -> Result<MirrorReport, SyncError> {
        let mut report = self.ensure_present(git, dry_run)?;
        if report.action != MirrorAction::Present {
            return Ok(report);
        }

        if dry_run {
            tracing::info!("[dry-run] would pull {}", self.path.display());
            report.action = MirrorAction::WouldPull;
        } else {
            git.pull(&self.path)?;
            tracing::info!("pulled {}", self.path.display());
            report.action = MirrorAction::Pulled;
        }
        Ok(report)
    }
}

/// `url` of the `[remote "origin"]` section of a git config file.
fn origin_url(config: &str) -> Option<String> {
    let mut in_origin = false;
    for line in config.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') {
            in_origin = line == r#"[remote "origin"]"#;
            continue;
        }
        if !in_origin {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            if key.trim() == "url" {
                return Some(value.trim().to_owned());
            }
        }
    }
    None
}
