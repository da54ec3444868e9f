//! On-disk cache layout.
//!
//! ```text
//! <cache_dir>/base16-builder/
//!   sources/
//!     palettes/          (mirror of the schemes source, holds list.yaml)
//!     templates/         (mirror of the templates source, holds list.yaml)
//!   palettes/<family>/   (one mirror per scheme family)
//!   templates/<family>/  (one mirror per template family)
//! ```

use std::path::{Component, Path, PathBuf};

use crate::types::FamilyName;

/// Directory created under the cache dir.
pub const APP_DIR: &str = "base16-builder";

/// Kind directory name for scheme sources.
pub const PALETTES: &str = "palettes";

/// Kind directory name for template sources.
pub const TEMPLATES: &str = "templates";

/// `<cache_dir>/base16-builder`
pub fn root(cache_dir: &Path) -> PathBuf {
    cache_dir.join(APP_DIR)
}

/// `<root>/sources/<kind>`: the manifest-owning mirror.
pub fn sources_dir(root: &Path, kind: &str) -> PathBuf {
    root.join("sources").join(kind)
}

/// True if `name` joins onto a directory as exactly one child entry.
///
/// Rejects empty names, `.`, `..`, absolute paths and anything with a separator.
pub fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

/// `<root>/<kind>/<family>`: one family's mirror.
///
/// Family names are checked with [`is_plain_name`] when the manifest is read.
pub fn family_dir(root: &Path, kind: &str, family: &FamilyName) -> PathBuf {
    root.join(kind).join(&family.0)
}

/// Default cache dir: the platform cache directory, else the system temp dir.
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir().unwrap_or_else(std::env::temp_dir)
}
