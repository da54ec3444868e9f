//! Build pipeline entrypoint used by the CLI.
//!
//! ```text
//! update?  → Catalog<Palettes>::update, Catalog<Templates>::update
//! build?   → for palette in schemes
//!              for family in template families
//!                for unit in family (read once per run)
//!                  result[slug][family][dir][file] = render(unit, palette)
//! output?  → write_result
//! ```

use serde::Serialize;

use base16_core::{BuildOptions, BuildResult, FamilyName, Palette, TemplateUnit};
use base16_renderer::Renderer;

use crate::catalog::{Catalog, Palettes, Selection, Session, Templates};
use crate::error::SyncError;
use crate::git::Git;
use crate::mirror::MirrorReport;
use crate::writer::{self, WriteResult};

/// Outcome of a pipeline run.
///
/// Serializes as `{ "changed": bool, "schemes": { … } }`.
#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    /// Any mirror or artifact was (or in dry-run would have been) modified.
    pub changed: bool,
    /// Empty when building was not requested.
    pub schemes: BuildResult,
    #[serde(skip)]
    pub mirrors: Vec<MirrorReport>,
    #[serde(skip)]
    pub writes: Vec<WriteResult>,
}

/// Run the pipeline with the `git` found on `$PATH`.
///
/// Fails before touching anything if git cannot be executed.
pub fn run(opts: &BuildOptions) -> Result<RunReport, SyncError> {
    run_with(opts, Git::locate()?)
}

/// Run the pipeline with an explicit git handle.
pub fn run_with(opts: &BuildOptions, git: Git) -> Result<RunReport, SyncError> {
    let root = opts.root();
    let mut session = Session::new(git, opts.dry_run, Selection::from_options(opts));
    let palettes = Catalog::<Palettes>::new(&root, &opts.schemes_source);
    let templates = Catalog::<Templates>::new(&root, &opts.templates_source);

    if opts.update {
        palettes.update(&mut session)?;
        templates.update(&mut session)?;
    }

    let schemes = if opts.build {
        build(&palettes, &templates, &mut session)?
    } else {
        BuildResult::new()
    };

    let writes = match (&opts.output_dir, opts.build) {
        (Some(dir), true) => writer::write_result(&schemes, dir, opts.dry_run)?,
        _ => Vec::new(),
    };

    let changed = session.changed() || writes.iter().any(WriteResult::changed);
    Ok(RunReport {
        changed,
        schemes,
        mirrors: session.into_reports(),
        writes,
    })
}

/// Render every selected scheme through every selected template unit.
pub fn build(
    palettes: &Catalog<Palettes>,
    templates: &Catalog<Templates>,
    session: &mut Session,
) -> Result<BuildResult, SyncError> {
    let renderer = Renderer::new();
    let mut result = BuildResult::new();
    // Read on the first scheme, so an empty scheme set never touches templates.
    let mut units: Option<Vec<(FamilyName, Vec<TemplateUnit>)>> = None;

    for scheme_family in palettes.discover(session)? {
        for palette in scheme_family.items(session)? {
            if result.begin_scheme(palette.slug()) {
                tracing::warn!(
                    "scheme '{}' from family '{}' replaces an earlier scheme with the same slug",
                    palette.slug(),
                    scheme_family.name()
                );
            }
            if units.is_none() {
                units = Some(template_units(templates, session)?);
            }
            for (family, family_units) in units.as_deref().unwrap_or_default() {
                for unit in family_units {
                    render_into(&mut result, &renderer, family, unit, &palette)?;
                }
            }
        }
    }
    Ok(result)
}

/// Every selected template family with its units, each family mirrored once.
fn template_units(
    templates: &Catalog<Templates>,
    session: &mut Session,
) -> Result<Vec<(FamilyName, Vec<TemplateUnit>)>, SyncError> {
    let mut out = Vec::new();
    for family in templates.discover(session)? {
        let family_units = family.items(session)?;
        out.push((family.name().clone(), family_units));
    }
    Ok(out)
}

fn render_into(
    result: &mut BuildResult,
    renderer: &Renderer,
    family: &FamilyName,
    unit: &TemplateUnit,
    palette: &Palette,
) -> Result<(), SyncError> {
    let out = renderer
        .render(unit, palette)
        .map_err(|source| SyncError::Render {
            family: family.0.clone(),
            unit: unit.name.clone(),
            slug: palette.slug().to_owned(),
            source,
        })?;
    tracing::debug!(
        "rendered {}/{} for {} → {}/{}",
        family,
        unit.name,
        palette.slug(),
        out.output_dir,
        out.file_name
    );
    result.insert(
        palette.slug(),
        &family.0,
        &out.output_dir,
        &out.file_name,
        out.text,
    );
    Ok(())
}
