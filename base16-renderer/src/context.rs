//! Template context: the serializable rendering payload built from a [`Palette`].

use std::collections::BTreeMap;

use serde::Serialize;

use base16_core::Palette;

/// Flat `variable → value` mapping handed to the template engine.
///
/// Borrowed from the palette: the variable set is computed once when the
/// palette is parsed and reused for every template it is rendered through.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct TemplateContext<'a> {
    vars: &'a BTreeMap<String, String>,
}

impl<'a> TemplateContext<'a> {
    pub fn from_palette(palette: &'a Palette) -> Self {
        TemplateContext {
            vars: palette.variables(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
