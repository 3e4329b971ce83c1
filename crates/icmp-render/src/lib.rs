//! Rendering of compiled ICMP registries.
//!
//! Two outputs are supported: a Handlebars template (a built-in Haskell
//! module by default) and a JSON dump of the compiled registry.

pub mod error;
pub mod options;
pub mod output;
pub mod payload;
pub mod renderer;

pub use error::{RenderError, Result};
pub use options::{OutputFormat, RenderOptions, render};
pub use output::{render_json, write_output};
pub use payload::{GENERATOR, RenderPayload, module_name, version_suffix};
pub use renderer::{BUILTIN_TEMPLATE, TemplateRenderer, haskell_string_literal};
