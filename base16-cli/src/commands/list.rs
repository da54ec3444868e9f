//! `base16-builder list`: show the schemes and template units on disk.
//!
//! Missing mirrors are cloned; existing ones are never pulled.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use base16_core::BuildOptions;
use base16_sync::{Catalog, Git, Palettes, Selection, Session, SyncError, Templates};

use super::{prefix, GlobalArgs};

/// Arguments for `base16-builder list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only schemes whose slug contains this fragment.
    #[arg(long, value_name = "FRAGMENT")]
    pub scheme: Option<String>,

    /// Only the template family with exactly this name.
    #[arg(long, value_name = "FAMILY")]
    pub template: Option<String>,

    /// Print machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct SchemeRow {
    #[tabled(rename = "slug")]
    slug: String,
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "author")]
    author: String,
    #[tabled(rename = "family")]
    family: String,
}

#[derive(Debug, Serialize, Tabled)]
struct UnitRow {
    #[tabled(rename = "family")]
    family: String,
    #[tabled(rename = "unit")]
    unit: String,
    #[tabled(rename = "output dir")]
    output_dir: String,
    #[tabled(rename = "extension")]
    extension: String,
}

#[derive(Debug, Serialize)]
struct Listing {
    schemes: Vec<SchemeRow>,
    templates: Vec<UnitRow>,
}

impl ListArgs {
    pub fn run(self, global: &GlobalArgs) -> Result<()> {
        let mut opts = global.options()?;
        if self.scheme.is_some() {
            opts.scheme = self.scheme;
        }
        if self.template.is_some() {
            opts.template = self.template;
        }

        let listing = collect(&opts).context("list failed")?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&listing).context("failed to serialize listing")?
            );
        } else {
            print_tables(listing, opts.dry_run);
        }
        Ok(())
    }
}

fn collect(opts: &BuildOptions) -> Result<Listing, SyncError> {
    let root = opts.root();
    let mut session = Session::new(Git::locate()?, opts.dry_run, Selection::from_options(opts));

    let mut schemes = Vec::new();
    for family in Catalog::<Palettes>::new(&root, &opts.schemes_source).discover(&mut session)? {
        for palette in family.items(&mut session)? {
            schemes.push(SchemeRow {
                slug: palette.slug().to_owned(),
                name: palette.name().to_owned(),
                author: palette.author().to_owned(),
                family: family.name().to_string(),
            });
        }
    }

    let mut templates = Vec::new();
    for family in Catalog::<Templates>::new(&root, &opts.templates_source).discover(&mut session)? {
        for unit in family.items(&mut session)? {
            templates.push(UnitRow {
                family: unit.family.to_string(),
                unit: unit.name,
                output_dir: unit.output_dir,
                extension: unit.extension,
            });
        }
    }

    Ok(Listing { schemes, templates })
}

fn print_tables(listing: Listing, dry_run: bool) {
    let prefix = prefix(dry_run);

    println!("{}", "SCHEMES".bold());
    if listing.schemes.is_empty() {
        println!("{prefix}No schemes found.");
    } else {
        let mut table = Table::new(listing.schemes);
        table.with(Style::rounded());
        println!("{table}");
    }

    println!("{}", "TEMPLATES".bold());
    if listing.templates.is_empty() {
        println!("{prefix}No template units found.");
    } else {
        let mut table = Table::new(listing.templates);
        table.with(Style::rounded());
        println!("{table}");
    }
}
