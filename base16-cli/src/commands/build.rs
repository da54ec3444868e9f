//! `base16-builder build`: render schemes × templates.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use base16_sync::{pipeline, RunReport, WriteResult};

use super::{prefix, GlobalArgs};

/// Arguments for `base16-builder build`.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Pull every mirror before building.
    #[arg(long)]
    pub update: bool,

    /// Only schemes whose slug contains this fragment.
    #[arg(long, value_name = "FRAGMENT")]
    pub scheme: Option<String>,

    /// Only the template family with exactly this name.
    #[arg(long, value_name = "FAMILY")]
    pub template: Option<String>,

    /// Print the full nested result as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write every artifact under this directory.
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Tabled)]
struct ArtifactRow {
    #[tabled(rename = "scheme")]
    scheme: String,
    #[tabled(rename = "template")]
    template: String,
    #[tabled(rename = "output dir")]
    output_dir: String,
    #[tabled(rename = "file")]
    file: String,
}

impl BuildArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let mut opts = global.options()?;
        opts.build = true;
        opts.update |= self.update;
        if self.scheme.is_some() {
            opts.scheme = self.scheme;
        }
        if self.template.is_some() {
            opts.template = self.template;
        }
        if self.output_dir.is_some() {
            opts.output_dir = self.output_dir;
        }

        let report = pipeline::run(&opts).context("build failed")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("failed to serialize build result")?
            );
        } else {
            print_table(&report, opts.dry_run);
        }
        Ok(())
    }
}

fn print_table(report: &RunReport, dry_run: bool) {
    let prefix = prefix(dry_run);
    let rows: Vec<ArtifactRow> = report
        .schemes
        .artifacts()
        .map(|a| ArtifactRow {
            scheme: a.slug.to_owned(),
            template: a.family.to_owned(),
            output_dir: a.output_dir.to_owned(),
            file: a.file_name.to_owned(),
        })
        .collect();

    if rows.is_empty() {
        println!("{prefix}No scheme matched; nothing was rendered.");
    } else {
        let schemes = report.schemes.schemes().count();
        println!(
            "{prefix}{} rendered {} artifacts for {} schemes",
            "✓".green().bold(),
            rows.len(),
            schemes
        );
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
    }

    if !report.writes.is_empty() {
        print_writes(&report.writes, prefix);
    }

    let status = if report.changed {
        "changed".yellow().bold()
    } else {
        "unchanged".bright_black().bold()
    };
    println!("{prefix}{status}");
}

fn print_writes(writes: &[WriteResult], prefix: &str) {
    let written = writes.iter().filter(|w| w.changed()).count();
    let unchanged = writes.len() - written;
    println!("{prefix}{written} written, {unchanged} unchanged");
    for write in writes.iter().filter(|w| w.changed()) {
        println!("  {} {}", "+".green(), write.path().display());
    }
}
