//! Subcommands and the options every one of them shares.

pub mod build;
pub mod list;
pub mod update;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Args};

use base16_core::BuildOptions;

/// Options accepted before or after any subcommand.
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// YAML options file; flags override its values.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Parent of the `base16-builder` cache directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Repository listing the scheme families.
    #[arg(long, global = true, value_name = "URL")]
    pub schemes_source: Option<String>,

    /// Repository listing the template families.
    #[arg(long, global = true, value_name = "URL")]
    pub templates_source: Option<String>,

    /// Report what would change without touching the filesystem.
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// More log output on stderr (`-v` info, `-vv` debug).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalArgs {
    /// Options from `--config` (or defaults) with the global flags on top.
    pub fn options(&self) -> Result<BuildOptions> {
        let mut opts = match &self.config {
            Some(path) => BuildOptions::load(path)
                .with_context(|| format!("failed to load options from {}", path.display()))?,
            None => BuildOptions::default(),
        };
        if let Some(dir) = &self.cache_dir {
            opts.cache_dir = dir.clone();
        }
        if let Some(url) = &self.schemes_source {
            opts.schemes_source = url.clone();
        }
        if let Some(url) = &self.templates_source {
            opts.templates_source = url.clone();
        }
        opts.dry_run |= self.dry_run;
        Ok(opts)
    }
}

/// `"[dry-run] "` when nothing was really touched.
pub(crate) fn prefix(dry_run: bool) -> &'static str {
    if dry_run {
        "[dry-run] "
    } else {
        ""
    }
}
