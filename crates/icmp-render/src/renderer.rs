//! Handlebars rendering of compiled registries.
//!
//! Output is source code, so HTML escaping is disabled and strict mode is
//! on: a template that references a missing field fails instead of
//! silently rendering nothing. Helpers:
//! - `hs_string`: quote a value as a Haskell string literal
//! - `pad`: right-align a value to a width (default 3)

use std::fs;
use std::path::Path;

use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderErrorReason,
};
use tracing::debug;

use icmp_model::CompiledRegistry;

use crate::error::{RenderError, Result};
use crate::payload::RenderPayload;

/// Haskell module template used when no template file is given.
pub const BUILTIN_TEMPLATE: &str = include_str!("../templates/haskell.hbs");

const TEMPLATE_NAME: &str = "module";
const DEFAULT_PAD_WIDTH: usize = 3;

pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Renderer for the built-in Haskell template.
    pub fn builtin() -> Result<Self> {
        Self::from_template_str("<built-in>", BUILTIN_TEMPLATE)
    }

    /// Renderer for a user-supplied template file.
    pub fn from_template_file(path: &Path) -> Result<Self> {
        let template = fs::read_to_string(path).map_err(|source| RenderError::TemplateIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_template_str(&path.display().to_string(), &template)
    }

    /// `origin` names the template in error messages.
    pub fn from_template_str(origin: &str, template: &str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.register_helper("hs_string", Box::new(hs_string_helper));
        handlebars.register_helper("pad", Box::new(pad_helper));
        handlebars
            .register_template_string(TEMPLATE_NAME, template)
            .map_err(|source| RenderError::Template {
                origin: origin.to_string(),
                source: Box::new(source),
            })?;
        debug!(origin, "template registered");
        Ok(Self { handlebars })
    }

    pub fn render(&self, payload: &RenderPayload<'_>) -> Result<String> {
        self.handlebars
            .render(TEMPLATE_NAME, payload)
            .map_err(|err| RenderError::Render(Box::new(err)))
    }

    pub fn render_compiled(&self, compiled: &CompiledRegistry) -> Result<String> {
        self.render(&RenderPayload::new(compiled))
    }
}

/// Quote `text` as a Haskell string literal.
///
/// Characters outside printable ASCII become decimal escapes terminated by
/// `\&`, so a following digit is never read as part of the escape.
pub fn haskell_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            ' '..='~' => out.push(ch),
            _ => out.push_str(&format!("\\{}\\&", u32::from(ch))),
        }
    }
    out.push('"');
    out
}

fn param_text(h: &Helper, helper: &'static str) -> std::result::Result<String, RenderErrorReason> {
    let value = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(helper, 0))?
        .value();
    match value {
        serde_json::Value::String(text) => Ok(text.clone()),
        serde_json::Value::Number(number) => Ok(number.to_string()),
        serde_json::Value::Bool(flag) => Ok(flag.to_string()),
        _ => Err(RenderErrorReason::InvalidParamType("string or number")),
    }
}

fn hs_string_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = param_text(h, "hs_string")?;
    out.write(&haskell_string_literal(&text))?;
    Ok(())
}

fn pad_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let text = param_text(h, "pad")?;
    let width = h
        .param(1)
        .and_then(|v| v.value().as_u64())
        .and_then(|w| usize::try_from(w).ok())
        .unwrap_or(DEFAULT_PAD_WIDTH);
    out.write(&format!("{text:>width$}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_plain_text() {
        assert_eq!(haskell_string_literal("Echo Reply"), "\"Echo Reply\"");
    }

    #[test]
    fn escapes_quotes_and_backslashes() {
        assert_eq!(
            haskell_string_literal(r#"say "hi" \ bye"#),
            r#""say \"hi\" \\ bye""#
        );
    }

    #[test]
    fn escapes_non_ascii_with_terminator() {
        assert_eq!(
            haskell_string_literal("Type 3 \u{2014} 4"),
            "\"Type 3 \\8212\\& 4\""
        );
    }

    #[test]
    fn builtin_template_parses() {
        assert!(TemplateRenderer::builtin().is_ok());
    }
}
