//! base16 core library: domain types, source-file parsing, options, errors.
//!
//! - [`types`]: newtypes, [`TemplateUnit`], the nested [`BuildResult`]
//! - [`palette`]: scheme files and their derived template variables
//! - [`template`]: template family `config.yaml` parsing
//! - [`manifest`]: `list.yaml` family manifests
//! - [`options`]: run options and their defaults
//! - [`paths`]: on-disk cache layout

pub mod error;
pub mod manifest;
pub mod options;
pub mod palette;
pub mod paths;
pub mod template;
pub mod types;

pub use error::CoreError;
pub use options::BuildOptions;
pub use palette::{Color, Palette};
pub use types::{BuildResult, FamilyName, TemplateUnit};
