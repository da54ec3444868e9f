//! `list.yaml` manifests: family name → remote repository URL.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{read_yaml, CoreError};
use crate::paths;
use crate::types::FamilyName;

/// Manifest file names, in lookup order.
pub const MANIFEST_FILES: &[&str] = &["list.yaml", "list.yml"];

/// One family listed in a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub family: FamilyName,
    pub url: String,
}

/// Locate the manifest at the root of a sources mirror.
pub fn manifest_path(dir: &Path) -> Result<PathBuf, CoreError> {
    MANIFEST_FILES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .ok_or_else(|| CoreError::ManifestNotFound {
            dir: dir.to_path_buf(),
        })
}

/// Read the manifest in `dir`. Entries are sorted by family name.
///
/// Family names become mirror directory names, so each must be a single
/// plain path component.
pub fn load(dir: &Path) -> Result<Vec<ManifestEntry>, CoreError> {
    let path = manifest_path(dir)?;
    let map: BTreeMap<String, String> = read_yaml(&path)?;
    map.into_iter()
        .map(|(family, url)| {
            if !paths::is_plain_name(&family) {
                return Err(CoreError::UnsafeName {
                    path: path.clone(),
                    name: family,
                });
            }
            Ok(ManifestEntry {
                family: FamilyName::from(family),
                url,
            })
        })
        .collect()
}
