//! Source catalogs: a manifest mirror plus one mirror per listed family.
//!
//! ```text
//! Catalog<Palettes>                       Catalog<Templates>
//!   sources/palettes  (list.yaml)           sources/templates (list.yaml)
//!   palettes/<family> (scheme files)        templates/<family>/templates/…
//! ```
//!
//! The two kinds share all mirroring logic; [`SourceKind`] supplies only the
//! directory name, the selection pre-check and the item reader.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use base16_core::{
    manifest, palette, paths, template, BuildOptions, FamilyName, Palette, TemplateUnit,
};

use crate::error::{io_err, SyncError};
use crate::git::Git;
use crate::mirror::{GitRepo, MirrorReport};

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Which schemes and templates a run asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Fragment that a scheme slug must contain.
    pub scheme: Option<String>,
    /// Exact template family name.
    pub template: Option<String>,
}

impl Selection {
    pub fn from_options(opts: &BuildOptions) -> Self {
        Selection {
            scheme: opts.scheme.clone(),
            template: opts.template.clone(),
        }
    }

    /// Exact per-scheme filter.
    pub fn wants_slug(&self, slug: &str) -> bool {
        self.scheme.as_deref().map_or(true, |s| slug.contains(s))
    }
}

/// Shared state of one run: git handle, dry-run flag, selection, and every
/// mirror report produced so far.
#[derive(Debug)]
pub struct Session {
    git: Git,
    dry_run: bool,
    selection: Selection,
    reports: Vec<MirrorReport>,
}

impl Session {
    pub fn new(git: Git, dry_run: bool, selection: Selection) -> Self {
        Session {
            git,
            dry_run,
            selection,
            reports: Vec::new(),
        }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether any recorded mirror operation changed (or would change) anything.
    pub fn changed(&self) -> bool {
        self.reports.iter().any(MirrorReport::changed)
    }

    pub fn into_reports(self) -> Vec<MirrorReport> {
        self.reports
    }

    fn ensure_present(&mut self, repo: &GitRepo) -> Result<(), SyncError> {
        let report = repo.ensure_present(&self.git, self.dry_run)?;
        self.reports.push(report);
        Ok(())
    }

    fn ensure_current(&mut self, repo: &GitRepo) -> Result<(), SyncError> {
        let report = repo.ensure_current(&self.git, self.dry_run)?;
        self.reports.push(report);
        Ok(())
    }

    /// In dry-run mode a mirror that was never cloned has nothing to read.
    fn readable(&self, repo: &GitRepo) -> bool {
        if repo.path().is_dir() {
            return true;
        }
        tracing::info!(
            "[dry-run] {} not cloned yet; nothing to read",
            repo.path().display()
        );
        false
    }
}

// ---------------------------------------------------------------------------
// Source kinds
// ---------------------------------------------------------------------------

/// What differs between scheme and template catalogs.
pub trait SourceKind {
    /// Directory name under the cache root and under `sources/`.
    const KIND: &'static str;

    /// What one family yields.
    type Item;

    /// Cheap check run before a family is mirrored.
    fn selects(family: &FamilyName, selection: &Selection) -> bool;

    /// Read the items of a mirrored family.
    fn read_items(
        family: &FamilyName,
        mirror: &Path,
        selection: &Selection,
    ) -> Result<Vec<Self::Item>, SyncError>;
}

/// Scheme catalogs: each family mirror holds scheme files at its root.
#[derive(Debug, Clone, Copy)]
pub struct Palettes;

/// Template catalogs: each family mirror holds `templates/config.yaml`.
#[derive(Debug, Clone, Copy)]
pub struct Templates;

impl SourceKind for Palettes {
    const KIND: &'static str = paths::PALETTES;
    type Item = Palette;

    /// Families whose name overlaps the fragment either way round.
    ///
    /// This only avoids cloning families that are unlikely to hold the
    /// requested scheme; the slug filter in `read_items` is what decides.
    fn selects(family: &FamilyName, selection: &Selection) -> bool {
        match selection.scheme.as_deref() {
            None => true,
            Some(fragment) => family.0.contains(fragment) || fragment.contains(family.0.as_str()),
        }
    }

    fn read_items(
        _family: &FamilyName,
        mirror: &Path,
        selection: &Selection,
    ) -> Result<Vec<Palette>, SyncError> {
        let mut palettes = Vec::new();
        for path in scheme_files(mirror)? {
            if !selection.wants_slug(&palette::slug_from_path(&path)) {
                continue;
            }
            palettes.push(Palette::from_path(&path)?);
        }
        Ok(palettes)
    }
}

impl SourceKind for Templates {
    const KIND: &'static str = paths::TEMPLATES;
    type Item = TemplateUnit;

    fn selects(family: &FamilyName, selection: &Selection) -> bool {
        selection
            .template
            .as_deref()
            .map_or(true, |t| t == family.0)
    }

    fn read_items(
        family: &FamilyName,
        mirror: &Path,
        _selection: &Selection,
    ) -> Result<Vec<TemplateUnit>, SyncError> {
        Ok(template::load_units(family, mirror)?)
    }
}

/// Scheme files directly inside `dir`, sorted. Hidden files are skipped.
fn scheme_files(dir: &Path) -> Result<Vec<PathBuf>, SyncError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if !hidden && path.is_file() && palette::is_scheme_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// Family
// ---------------------------------------------------------------------------

/// One family listed in a manifest. Not mirrored until [`Family::items`].
#[derive(Debug, Clone)]
pub struct Family<K> {
    name: FamilyName,
    repo: GitRepo,
    kind: PhantomData<K>,
}

impl<K: SourceKind> Family<K> {
    pub fn new(name: FamilyName, repo: GitRepo) -> Self {
        Family {
            name,
            repo,
            kind: PhantomData,
        }
    }

    pub fn name(&self) -> &FamilyName {
        &self.name
    }

    /// Mirror the family if missing and read its items.
    ///
    /// Families rejected by the selection are not mirrored and yield nothing.
    pub fn items(&self, session: &mut Session) -> Result<Vec<K::Item>, SyncError> {
        if !K::selects(&self.name, session.selection()) {
            tracing::debug!("skipping {} family '{}'", K::KIND, self.name);
            return Ok(Vec::new());
        }
        session.ensure_present(&self.repo)?;
        if session.dry_run() && !session.readable(&self.repo) {
            return Ok(Vec::new());
        }
        K::read_items(&self.name, self.repo.path(), session.selection())
    }

    /// Bring the family mirror up to date.
    pub fn update(&self, session: &mut Session) -> Result<(), SyncError> {
        session.ensure_current(&self.repo)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A manifest mirror and the families it lists.
#[derive(Debug, Clone)]
pub struct Catalog<K> {
    root: PathBuf,
    sources: GitRepo,
    kind: PhantomData<K>,
}

impl<K: SourceKind> Catalog<K> {
    /// `root` is the `base16-builder` cache directory.
    pub fn new(root: &Path, source_url: &str) -> Self {
        Catalog {
            root: root.to_path_buf(),
            sources: GitRepo::new(source_url, paths::sources_dir(root, K::KIND)),
            kind: PhantomData,
        }
    }

    pub fn sources(&self) -> &GitRepo {
        &self.sources
    }

    fn families(&self) -> Result<Vec<Family<K>>, SyncError> {
        Ok(manifest::load(self.sources.path())?
            .into_iter()
            .map(|entry| {
                let path = paths::family_dir(&self.root, K::KIND, &entry.family);
                Family::new(entry.family, GitRepo::new(entry.url, path))
            })
            .collect())
    }

    /// Update the manifest mirror, then every listed family.
    ///
    /// Stops at the first family that fails.
    pub fn update(&self, session: &mut Session) -> Result<(), SyncError> {
        session.ensure_current(&self.sources)?;
        if session.dry_run() && !session.readable(&self.sources) {
            return Ok(());
        }
        for family in self.families()? {
            family.update(session)?;
        }
        Ok(())
    }

    /// Families listed in the manifest. Only the manifest mirror is touched.
    pub fn discover(&self, session: &mut Session) -> Result<Vec<Family<K>>, SyncError> {
        session.ensure_present(&self.sources)?;
        if session.dry_run() && !session.readable(&self.sources) {
            return Ok(Vec::new());
        }
        self.families()
    }
}
