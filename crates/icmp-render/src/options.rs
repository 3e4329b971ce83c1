//! Output selection for a compiled registry.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use icmp_model::CompiledRegistry;

use crate::error::Result;
use crate::output::render_json;
use crate::renderer::TemplateRenderer;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Handlebars template output, the Haskell module unless overridden.
    #[default]
    Haskell,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: OutputFormat,
    /// Replaces the built-in template. Ignored for JSON output.
    pub template: Option<PathBuf>,
}

impl RenderOptions {
    #[must_use]
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        self.template = template;
        self
    }
}

/// Render `compiled` as selected by `options`.
pub fn render(compiled: &CompiledRegistry, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Json => render_json(compiled),
        OutputFormat::Haskell => {
            let renderer = match &options.template {
                Some(path) => TemplateRenderer::from_template_file(path)?,
                None => TemplateRenderer::builtin()?,
            };
            renderer.render_compiled(compiled)
        }
    }
}
