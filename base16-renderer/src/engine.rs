//! Handlebars rendering engine: [`Renderer`] and [`RenderedOutput`].
//!
//! Template bodies are Mustache files (`templates/<unit>.mustache`). The
//! subset they use (`{{var}}`, `{{{var}}}`, `{{> partial}}`) is shared with
//! Handlebars, which also accepts the `-` in names such as `base00-hex`.
//!
//! Rendering is strict: a placeholder that is not in the palette's variable
//! set fails the render instead of producing an empty string.

use std::path::{Path, PathBuf};

use handlebars::Handlebars;

use base16_core::{template::BODY_EXTENSION, Palette, TemplateUnit};

use crate::context::TemplateContext;
use crate::error::{io_err, RenderError};

// ---------------------------------------------------------------------------
// Output naming
// ---------------------------------------------------------------------------

/// `base16-<slug><extension>`; the extension carries its own leading `.`.
pub fn output_file_name(slug: &str, extension: &str) -> String {
    format!("base16-{slug}{extension}")
}

/// One rendered (template unit, palette) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOutput {
    pub output_dir: String,
    pub file_name: String,
    pub text: String,
}

// ---------------------------------------------------------------------------
// Partial loading
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, RenderError> {
    std::fs::read_to_string(path).map_err(|e| io_err(path, e))
}

/// Every `*.mustache` file directly inside `dir`, as `(stem, path)`.
fn partial_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    let mut out = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let is_body = path.extension().and_then(|e| e.to_str()) == Some(BODY_EXTENSION);
        if !is_body || !path.is_file() {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            out.push((stem.to_owned(), path));
        }
    }
    out.sort();
    Ok(out)
}

/// HTML escaping as Mustache does it: `& < > " '` only.
///
/// Handlebars' default escaper also rewrites `=` and `` ` ``, which would
/// mangle URLs in scheme names and authors.
pub fn mustache_escape(data: &str) -> String {
    let mut out = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn build_registry(search_dir: Option<&Path>) -> Result<Handlebars<'static>, RenderError> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_escape_fn(mustache_escape);
    if let Some(dir) = search_dir {
        for (name, path) in partial_files(dir)? {
            hbs.register_partial(&name, read_file(&path)?)?;
        }
    }
    Ok(hbs)
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Renders template units against palettes.
///
/// Strict: a placeholder missing from the palette fails the render. Holds no
/// compiled state; every call reads the body and its sibling partials from
/// disk, so each (unit, palette) pair renders independently.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Renderer
    }

    /// Render `unit` with the variables of `palette`.
    ///
    /// Partials resolve against the directory holding the unit's body.
    pub fn render(
        &self,
        unit: &TemplateUnit,
        palette: &Palette,
    ) -> Result<RenderedOutput, RenderError> {
        let body = read_file(&unit.body_path)?;
        let ctx = TemplateContext::from_palette(palette);
        let text = self.render_str(&body, unit.body_path.parent(), ctx)?;
        Ok(RenderedOutput {
            output_dir: unit.output_dir.clone(),
            file_name: output_file_name(palette.slug(), &unit.extension),
            text,
        })
    }

    /// Render a raw body. `search_dir` is where `{{> partial}}` looks.
    pub fn render_str(
        &self,
        body: &str,
        search_dir: Option<&Path>,
        ctx: TemplateContext<'_>,
    ) -> Result<String, RenderError> {
        let hbs = build_registry(search_dir)?;
        Ok(hbs.render_template(body, &ctx)?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
