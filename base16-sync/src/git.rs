//! Thin wrapper around the `git` executable.
//!
//! Every call blocks until git exits. There is no timeout: a stalled network
//! fetch stalls the run.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{io_err, SyncError};

/// Handle to a git executable that has been checked to run.
#[derive(Debug, Clone)]
pub struct Git {
    program: PathBuf,
}

impl Git {
    /// Find `git` on `$PATH` and check that it runs.
    pub fn locate() -> Result<Self, SyncError> {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<PathBuf>) -> Result<Self, SyncError> {
        let program = program.into();
        match Command::new(&program).arg("--version").output() {
            Ok(out) if out.status.success() => {
                tracing::debug!("using {}", String::from_utf8_lossy(&out.stdout).trim());
                Ok(Git { program })
            }
            Ok(out) => Err(command_failed(&program, &["--version"][..], &out)),
            Err(source) => Err(SyncError::GitNotFound { program, source }),
        }
    }

    /// `git clone <remote> <dest>`
    pub fn clone_repo(&self, remote: &str, dest: &Path) -> Result<(), SyncError> {
        self.run(None, [OsStr::new("clone"), OsStr::new(remote), dest.as_os_str()])
            .map(drop)
    }

    /// `git pull --ff-only` inside `repo`.
    pub fn pull(&self, repo: &Path) -> Result<(), SyncError> {
        self.run(Some(repo), ["pull", "--ff-only"]).map(drop)
    }

    /// Run git with `args`, returning stdout. Non-zero exit is an error.
    pub fn run<I, S>(&self, cwd: Option<&Path>, args: I) -> Result<String, SyncError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args: Vec<S> = args.into_iter().collect();
        let mut cmd = Command::new(&self.program);
        cmd.args(&args).env("GIT_TERMINAL_PROMPT", "0");
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let out = cmd.output().map_err(|e| io_err(&self.program, e))?;
        if !out.status.success() {
            return Err(command_failed(&self.program, &args, &out));
        }
        Ok(String::from_utf8_lossy(&out.stdout).into_owned())
    }
}

fn command_failed<S: AsRef<OsStr>>(
    program: &Path,
    args: &[S],
    out: &std::process::Output,
) -> SyncError {
    let mut command = program.display().to_string();
    for arg in args {
        command.push(' ');
        command.push_str(&arg.as_ref().to_string_lossy());
    }
    SyncError::Git {
        command,
        status: out.status.to_string(),
        stderr: String::from_utf8_lossy(&out.stderr).trim_end().to_owned(),
    }
}
