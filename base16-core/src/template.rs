//! Template family layout and `templates/config.yaml` parsing.
//!
//! ```text
//! <family mirror>/
//!   templates/
//!     config.yaml        # unit name → { output, extension }
//!     default.mustache   # body for unit `default`
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{io_err, read_yaml, CoreError};
use crate::paths;
use crate::types::{FamilyName, TemplateUnit};

/// Subdirectory of a family mirror holding configs and bodies.
pub const TEMPLATES_DIR: &str = "templates";

/// File stem of a family config.
pub const CONFIG_STEM: &str = "config";

/// Extensions accepted for config files.
pub const CONFIG_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Extension of every template body.
pub const BODY_EXTENSION: &str = "mustache";

/// One entry of a family config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfigEntry {
    /// Output subdirectory.
    pub output: String,
    /// Output extension, e.g. `.config`.
    pub extension: String,
}

/// Parsed config file: unit name → entry.
pub type TemplateConfig = BTreeMap<String, TemplateConfigEntry>;

/// `<mirror>/templates/`
pub fn templates_dir(mirror: &Path) -> PathBuf {
    mirror.join(TEMPLATES_DIR)
}

/// `<templates_dir>/<unit>.mustache`
pub fn body_path(templates_dir: &Path, unit: &str) -> PathBuf {
    templates_dir.join(format!("{unit}.{BODY_EXTENSION}"))
}

/// True if `path` is named exactly `config.yaml` or `config.yml`.
pub fn is_config_file(path: &Path) -> bool {
    let stem = path.file_stem().and_then(|s| s.to_str());
    let ext = path.extension().and_then(|s| s.to_str());
    matches!((stem, ext), (Some(CONFIG_STEM), Some(e)) if CONFIG_EXTENSIONS.contains(&e))
}

/// Parse a single config file.
pub fn read_config(path: &Path) -> Result<TemplateConfig, CoreError> {
    read_yaml(path)
}

/// All config files directly inside `templates_dir`, sorted by name.
pub fn config_files(templates_dir: &Path) -> Result<Vec<PathBuf>, CoreError> {
    let entries = std::fs::read_dir(templates_dir).map_err(|e| io_err(templates_dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(templates_dir, e))?;
        let path = entry.path();
        if path.is_file() && is_config_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read every config in a family mirror and expand it into [`TemplateUnit`]s.
///
/// Unit names name the body file, so each must be a plain file stem.
pub fn load_units(family: &FamilyName, mirror: &Path) -> Result<Vec<TemplateUnit>, CoreError> {
    let dir = templates_dir(mirror);
    let mut units = Vec::new();
    for config_path in config_files(&dir)? {
        for (name, entry) in read_config(&config_path)? {
            if !paths::is_plain_name(&name) {
                return Err(CoreError::UnsafeName {
                    path: config_path,
                    name,
                });
            }
            units.push(TemplateUnit {
                family: family.clone(),
                body_path: body_path(&dir, &name),
                name,
                output_dir: entry.output,
                extension: entry.extension,
            });
        }
    }
    Ok(units)
}
