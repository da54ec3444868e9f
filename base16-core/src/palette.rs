//! Scheme files and the template variables derived from them.
//!
//! A scheme file is a flat YAML mapping:
//!
//! ```yaml
//! scheme: "Solar Flare"
//! author: "Chuck Harmston (https://chuckharmston.com)"
//! base00: "18262F"
//! # … base01 through base0F
//! ```
//!
//! Every [`Palette`] computes its full variable set once, at construction.
//! For each base (`00`..`0F`) it exposes:
//!
//! | Key                      | Example               |
//! |--------------------------|-----------------------|
//! | `base0A-hex`             | `ffcc66`              |
//! | `base0A-hex-r`           | `ff`                  |
//! | `base0A-hex-rgb-r`       | `255`                 |
//! | `base0A-hex-dec-r`       | `1.0`                 |
//!
//! plus `scheme-name`, `scheme-author` and `scheme-slug`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{read_yaml, CoreError};

/// Number of base colors in a scheme.
pub const BASE_COUNT: usize = 16;

/// File extensions recognised as scheme files.
pub const SCHEME_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// `base00` .. `base0F`, in order.
pub fn base_keys() -> impl Iterator<Item = String> {
    (0..BASE_COUNT).map(|i| format!("base{i:02X}"))
}

/// Scheme slug for a file: its lowercased file stem.
///
/// Spaces are kept as-is, so `Solar Flare.yaml` becomes `solar flare`.
pub fn slug_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// True if `path` has one of [`SCHEME_EXTENSIONS`].
pub fn is_scheme_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SCHEME_EXTENSIONS.contains(&e))
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// A six-hex-digit RGB color, kept verbatim as written in the scheme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    hex: String,
}

impl Color {
    /// Parse `rrggbb`. No leading `#`, exactly six ASCII hex digits.
    pub fn parse(hex: &str) -> Option<Self> {
        if hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self {
                hex: hex.to_owned(),
            })
        } else {
            None
        }
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Two-digit hex substrings for red, green and blue.
    pub fn channels_hex(&self) -> [&str; 3] {
        [&self.hex[0..2], &self.hex[2..4], &self.hex[4..6]]
    }

    /// Integer value of each channel, 0–255.
    pub fn channels_rgb(&self) -> [u8; 3] {
        // Always valid hex after parse().
        self.channels_hex()
            .map(|c| u8::from_str_radix(c, 16).unwrap_or_default())
    }

    /// Each channel divided by 255, without rounding.
    pub fn channels_dec(&self) -> [f64; 3] {
        self.channels_rgb().map(|c| f64::from(c) / 255.0)
    }
}

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// A parsed scheme file.
#[derive(Debug, Clone)]
pub struct Palette {
    path: PathBuf,
    name: String,
    author: String,
    slug: String,
    bases: Vec<Color>,
    variables: BTreeMap<String, String>,
}

impl Palette {
    /// Read and validate a scheme file.
    ///
    /// `scheme`, `author` and all sixteen `baseXX` keys are required.
    ///
    /// Values are read as strings so an unquoted color keeps its literal
    /// text: `base00: 2e3440` is a color, not the float `2e3440`.
    pub fn from_path(path: &Path) -> Result<Self, CoreError> {
        let data: BTreeMap<String, String> = read_yaml(path)?;
        Self::from_mapping(path, &data)
    }

    fn from_mapping(path: &Path, data: &BTreeMap<String, String>) -> Result<Self, CoreError> {
        let name = required(path, data, "scheme")?;
        let author = required(path, data, "author")?;

        let mut bases = Vec::with_capacity(BASE_COUNT);
        for key in base_keys() {
            let raw = required(path, data, &key)?;
            let color = Color::parse(&raw).ok_or_else(|| CoreError::InvalidColor {
                path: path.to_path_buf(),
                key: key.clone(),
                value: raw.clone(),
            })?;
            bases.push(color);
        }

        let slug = slug_from_path(path);
        let variables = derive_variables(&name, &author, &slug, &bases);

        Ok(Palette {
            path: path.to_path_buf(),
            name,
            author,
            slug,
            bases,
            variables,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name (`scheme:` key).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// `base00` .. `base0F`, in order.
    pub fn bases(&self) -> &[Color] {
        &self.bases
    }

    /// The complete template variable set.
    pub fn variables(&self) -> &BTreeMap<String, String> {
        &self.variables
    }
}

fn required(
    path: &Path,
    data: &BTreeMap<String, String>,
    key: &str,
) -> Result<String, CoreError> {
    data.get(key).cloned().ok_or_else(|| CoreError::MissingKey {
        path: path.to_path_buf(),
        key: key.to_owned(),
    })
}

/// Render a channel fraction the way a float literal reads: always with a
/// fractional part, otherwise the shortest round-trip digits.
fn format_dec(value: f64) -> String {
    format!("{value:?}")
}

fn derive_variables(
    name: &str,
    author: &str,
    slug: &str,
    bases: &[Color],
) -> BTreeMap<String, String> {
    let mut vars = BTreeMap::new();
    vars.insert("scheme-name".to_owned(), name.to_owned());
    vars.insert("scheme-author".to_owned(), author.to_owned());
    vars.insert("scheme-slug".to_owned(), slug.to_owned());

    for (key, color) in base_keys().zip(bases) {
        let hex_key = format!("{key}-hex");
        vars.insert(hex_key.clone(), color.hex().to_owned());

        let hex = color.channels_hex();
        let rgb = color.channels_rgb();
        let dec = color.channels_dec();
        for (i, channel) in ["r", "g", "b"].iter().enumerate() {
            vars.insert(format!("{hex_key}-{channel}"), hex[i].to_owned());
            vars.insert(format!("{hex_key}-rgb-{channel}"), rgb[i].to_string());
            vars.insert(format!("{hex_key}-dec-{channel}"), format_dec(dec[i]));
        }
    }
    vars
}
