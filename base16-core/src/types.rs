//! Domain types shared by the catalog, renderer and build pipeline.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Name of a scheme or template family, as listed in a `list.yaml` manifest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FamilyName(pub String);

impl fmt::Display for FamilyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for FamilyName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FamilyName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl AsRef<str> for FamilyName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ---------------------------------------------------------------------------
// Template units
// ---------------------------------------------------------------------------

/// One renderable template inside a template family.
///
/// Built from a single entry of a family's `templates/config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUnit {
    /// Family that owns this unit (e.g. `i3`).
    pub family: FamilyName,
    /// Entry name in `config.yaml`; also the body file stem.
    pub name: String,
    /// `<mirror>/templates/<name>.mustache`
    pub body_path: PathBuf,
    /// Output subdirectory, carried verbatim from config.
    pub output_dir: String,
    /// Output file extension, carried verbatim (includes its own leading `.`).
    pub extension: String,
}

// ---------------------------------------------------------------------------
// Build result
// ---------------------------------------------------------------------------

/// `output file name → rendered text`
pub type FileMap = BTreeMap<String, String>;
/// `output dir → files`
pub type DirMap = BTreeMap<String, FileMap>;
/// `template family → output dirs`
pub type FamilyMap = BTreeMap<String, DirMap>;

/// Nested build output: `slug → template family → output dir → file name → text`.
///
/// Keys are unique per level. Iteration is sorted, which keeps JSON output
/// stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildResult(pub BTreeMap<String, FamilyMap>);

impl BuildResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one rendered artifact, creating intermediate levels as needed.
    ///
    /// Returns the previous text when the same four-part key was already present.
    pub fn insert(
        &mut self,
        slug: &str,
        family: &str,
        output_dir: &str,
        file_name: &str,
        text: String,
    ) -> Option<String> {
        self.0
            .entry(slug.to_owned())
            .or_default()
            .entry(family.to_owned())
            .or_default()
            .entry(output_dir.to_owned())
            .or_default()
            .insert(file_name.to_owned(), text)
    }

    /// Start a fresh entry for `slug`, even if no template produces output for it.
    ///
    /// An existing entry for the same slug is discarded; returns true if one was.
    pub fn begin_scheme(&mut self, slug: &str) -> bool {
        self.0.insert(slug.to_owned(), FamilyMap::new()).is_some()
    }

    pub fn get(
        &self,
        slug: &str,
        family: &str,
        output_dir: &str,
        file_name: &str,
    ) -> Option<&str> {
        self.0
            .get(slug)?
            .get(family)?
            .get(output_dir)?
            .get(file_name)
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Scheme slugs present in the result, sorted.
    pub fn schemes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Flatten into `(slug, family, output_dir, file_name, text)` rows.
    pub fn artifacts(&self) -> impl Iterator<Item = Artifact<'_>> {
        self.0.iter().flat_map(|(slug, families)| {
            families.iter().flat_map(move |(family, dirs)| {
                dirs.iter().flat_map(move |(dir, files)| {
                    files.iter().map(move |(file, text)| Artifact {
                        slug,
                        family,
                        output_dir: dir,
                        file_name: file,
                        text,
                    })
                })
            })
        })
    }
}

/// A single leaf of a [`BuildResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Artifact<'a> {
    pub slug: &'a str,
    pub family: &'a str,
    pub output_dir: &'a str,
    pub file_name: &'a str,
    pub text: &'a str,
}
