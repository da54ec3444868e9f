//! Run options.
//!
//! Options may be loaded from a YAML file; any field left out takes its
//! default. The CLI layers its flags on top of whatever the file provides.
//!
//! ```yaml
//! update: true
//! scheme: solarflare
//! template: i3
//! cache_dir: /var/cache
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{read_yaml, CoreError};
use crate::paths;

pub const DEFAULT_SCHEMES_SOURCE: &str = "https://github.com/chriskempson/base16-schemes-source";
pub const DEFAULT_TEMPLATES_SOURCE: &str =
    "https://github.com/chriskempson/base16-templates-source";

/// Everything a single run needs to know.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildOptions {
    /// Refresh every mirror before building.
    pub update: bool,
    /// Render schemes × templates. When false only the update runs.
    pub build: bool,
    /// Only schemes whose slug contains this fragment.
    pub scheme: Option<String>,
    /// Only the template family with exactly this name.
    pub template: Option<String>,
    /// Parent of the `base16-builder` cache directory.
    pub cache_dir: PathBuf,
    /// Repository holding the scheme family manifest.
    pub schemes_source: String,
    /// Repository holding the template family manifest.
    pub templates_source: String,
    /// Report what would change without touching the filesystem.
    pub dry_run: bool,
    /// Also write every rendered artifact under this directory.
    pub output_dir: Option<PathBuf>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        BuildOptions {
            update: false,
            build: true,
            scheme: None,
            template: None,
            cache_dir: paths::default_cache_dir(),
            schemes_source: DEFAULT_SCHEMES_SOURCE.to_owned(),
            templates_source: DEFAULT_TEMPLATES_SOURCE.to_owned(),
            dry_run: false,
            output_dir: None,
        }
    }
}

impl BuildOptions {
    /// Load options from a YAML file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        read_yaml(path)
    }

    /// `<cache_dir>/base16-builder`
    pub fn root(&self) -> PathBuf {
        paths::root(&self.cache_dir)
    }
}
