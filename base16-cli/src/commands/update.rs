//! `base16-builder update`: refresh every mirror without building.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde_json::json;

use base16_sync::{pipeline, MirrorAction};

use super::{prefix, GlobalArgs};

/// Arguments for `base16-builder update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Print `{"changed": bool}` instead of a summary.
    #[arg(long)]
    pub json: bool,
}

impl UpdateArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let mut opts = global.options()?;
        opts.update = true;
        opts.build = false;

        let report = pipeline::run(&opts).context("update failed")?;

        if self.json {
            println!("{}", json!({ "changed": report.changed }));
            return Ok(());
        }

        let prefix = prefix(opts.dry_run);
        for mirror in report.mirrors.iter().filter(|m| m.changed()) {
            println!(
                "{prefix}{:<13} {}",
                action_label(mirror.action),
                mirror.path.display()
            );
        }
        if report.changed {
            println!("{prefix}{} mirrors updated", "✓".green().bold());
        } else {
            println!("{prefix}{} mirrors already up to date", "✓".green().bold());
        }
        Ok(())
    }
}

fn action_label(action: MirrorAction) -> &'static str {
    match action {
        MirrorAction::Present => "present",
        MirrorAction::Cloned => "cloned",
        MirrorAction::Replaced => "replaced",
        MirrorAction::Pulled => "pulled",
        MirrorAction::WouldClone => "would clone",
        MirrorAction::WouldReplace => "would replace",
        MirrorAction::WouldPull => "would pull",
    }
}
