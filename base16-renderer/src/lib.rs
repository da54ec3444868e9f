//! # base16-renderer
//!
//! Mustache-style rendering of base16 template units.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use base16_core::{Palette, TemplateUnit};
//! use base16_renderer::Renderer;
//!
//! fn render_one(unit: &TemplateUnit, palette: &Palette) {
//!     if let Ok(output) = Renderer::new().render(unit, palette) {
//!         println!("{}/{}: {} bytes", output.output_dir, output.file_name, output.text.len());
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{mustache_escape, output_file_name, RenderedOutput, Renderer};
pub use error::RenderError;
